//! Fetch-once todo list adapter.
//!
//! # Overview
//! `TodoListAdapter` is built with an injected `HttpTransport`, issues a
//! single `GET /todos` on construction and publishes whatever array the
//! server returns. Renderers read it with `all()` or subscribe to changes.
//!
//! # Design
//! - `TodoClient` builds the request and parses the response without doing
//!   I/O; the transport does the round-trip.
//! - Records are opaque JSON (`TodoRecord`); the server owns the schema.
//! - Failures leave the list empty and are only reported through
//!   `TodoListAdapter::join`.

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use adapter::{ListState, TodoListAdapter};
pub use client::TodoClient;
pub use config::{AdapterConfig, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, ReqwestTransport};
pub use types::TodoRecord;

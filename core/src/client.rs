//! Stateless request builder and response parser for the todo list endpoint.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. `build_list_todos` produces an
//! `HttpRequest`, `parse_list_todos` consumes an `HttpResponse`, and the
//! round-trip in between belongs to the injected `HttpTransport`. Keeping
//! the status and body interpretation here leaves the transport a dumb pipe.

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::TodoRecord;

#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}/todos` with no headers and no body.
    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Accepts any 2xx whose body is a JSON array. Records are returned in
    /// the order the server sent them.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<TodoRecord>, FetchError> {
        check_status(&response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| FetchError::DeserializationError(e.to_string()))
    }
}

fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    Err(FetchError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

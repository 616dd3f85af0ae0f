//! End-to-end fetch against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port inside the test runtime, then
//! points a `TodoListAdapter` backed by `ReqwestTransport` at it.

use std::net::SocketAddr;
use std::sync::Arc;

use mock_server::Todo;
use todo_adapter::{
    AdapterConfig, FetchError, HttpMethod, HttpRequest, HttpTransport, ReqwestTransport,
    TodoListAdapter,
};
use tokio::net::TcpListener;

async fn start_server(seed: Vec<Todo>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::serve(listener, mock_server::app_with(seed)));
    addr
}

fn reqwest_adapter(base_url: String) -> TodoListAdapter {
    TodoListAdapter::new(Arc::new(ReqwestTransport::new()), AdapterConfig::with_base_url(base_url))
}

fn todo(id: u64, title: &str, completed: bool) -> Todo {
    Todo {
        id,
        title: title.to_string(),
        completed,
    }
}

#[tokio::test]
async fn fetches_seeded_todos_over_http() {
    let seed = vec![todo(2, "Write docs", false), todo(1, "Ship it", true)];
    let addr = start_server(seed.clone()).await;

    let adapter = reqwest_adapter(format!("http://{addr}"));
    let mut updates = adapter.subscribe();
    updates.changed().await.unwrap();

    let fetched: Vec<serde_json::Value> =
        adapter.all().into_iter().map(|r| r.into_value()).collect();
    let expected: Vec<serde_json::Value> =
        seed.iter().map(|t| serde_json::to_value(t).unwrap()).collect();
    assert_eq!(fetched, expected);
}

#[tokio::test]
async fn empty_server_publishes_empty_list() {
    let addr = start_server(Vec::new()).await;

    let adapter = reqwest_adapter(format!("http://{addr}/"));
    adapter.subscribe().changed().await.unwrap();

    assert!(adapter.is_fetched());
    assert!(adapter.all().is_empty());
}

#[tokio::test]
async fn unreachable_server_leaves_list_empty() {
    // Grab a free port, then release it so nothing is listening there.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let adapter = reqwest_adapter(format!("http://{addr}"));
    let mut updates = adapter.subscribe();
    assert!(updates.changed().await.is_err());
    assert!(adapter.all().is_empty());

    let err = adapter.join().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}

#[tokio::test]
async fn missing_route_is_an_http_error() {
    let addr = start_server(vec![todo(1, "unreachable", false)]).await;

    let adapter = reqwest_adapter(format!("http://{addr}/missing"));
    let err = adapter.join().await.unwrap_err();
    assert!(matches!(err, FetchError::HttpError { status: 404, .. }));
}

#[tokio::test]
async fn reqwest_transport_returns_error_statuses_as_data() {
    let addr = start_server(Vec::new()).await;

    let response = ReqwestTransport::new()
        .execute(HttpRequest {
            method: HttpMethod::Get,
            path: format!("http://{addr}/nope"),
            headers: vec![("accept".to_string(), "application/json".to_string())],
            body: None,
        })
        .await
        .unwrap();
    assert_eq!(response.status, 404);
    assert!(!response.is_success());
}

//! `TodoListAdapter`: fetch the todo list once and publish it.
//!
//! # Design
//! Construction spawns the one and only fetch onto the current Tokio
//! runtime and returns immediately. The list lives in a `watch` channel: the
//! adapter keeps a receiver for `all()`, renderers can take their own with
//! `subscribe()`, and the fetch task owns the sender. A failed fetch never
//! sends, so the list stays at `NotYetFetched` for good.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::client::TodoClient;
use crate::config::AdapterConfig;
use crate::error::FetchError;
use crate::transport::HttpTransport;
use crate::types::TodoRecord;

/// What a renderer sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    NotYetFetched,
    /// The list exactly as the server returned it.
    Fetched(Arc<Vec<TodoRecord>>),
}

impl ListState {
    /// Empty until the fetch lands.
    pub fn records(&self) -> &[TodoRecord] {
        match self {
            ListState::NotYetFetched => &[],
            ListState::Fetched(records) => records.as_slice(),
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, ListState::Fetched(_))
    }
}

type FetchHandle = JoinHandle<Result<Arc<Vec<TodoRecord>>, FetchError>>;

#[derive(Debug)]
pub struct TodoListAdapter {
    state: watch::Receiver<ListState>,
    fetch: Option<FetchHandle>,
}

impl TodoListAdapter {
    /// Builds the adapter and starts the fetch of `{base_url}/todos`.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn new(transport: Arc<dyn HttpTransport>, config: AdapterConfig) -> Self {
        let (sender, state) = watch::channel(ListState::NotYetFetched);
        let client = TodoClient::new(&config.base_url);
        let fetch = tokio::spawn(fetch_todos(transport, client, sender));
        Self {
            state,
            fetch: Some(fetch),
        }
    }

    /// Snapshot of the current list.
    pub fn all(&self) -> Vec<TodoRecord> {
        self.state.borrow().records().to_vec()
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    pub fn is_fetched(&self) -> bool {
        self.state.borrow().is_fetched()
    }

    /// A receiver that is notified when the list is published. If the fetch
    /// fails, `changed()` returns `Err` once the fetch task has finished.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.state.clone()
    }

    /// Waits for the fetch and reports how it went. The published list is
    /// unaffected either way; this only surfaces the outcome to a caller that
    /// wants it.
    pub async fn join(mut self) -> Result<Vec<TodoRecord>, FetchError> {
        let Some(fetch) = self.fetch.take() else {
            return Ok(self.all());
        };
        match fetch.await {
            Ok(result) => result.map(|records| records.as_ref().clone()),
            Err(err) => Err(FetchError::Aborted(err.to_string())),
        }
    }
}

impl Drop for TodoListAdapter {
    fn drop(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
    }
}

async fn fetch_todos(
    transport: Arc<dyn HttpTransport>,
    client: TodoClient,
    state: watch::Sender<ListState>,
) -> Result<Arc<Vec<TodoRecord>>, FetchError> {
    match request_todos(transport.as_ref(), &client).await {
        Ok(records) => {
            let records = Arc::new(records);
            state.send_replace(ListState::Fetched(Arc::clone(&records)));
            Ok(records)
        }
        Err(err) => {
            debug!(error = %err, "todo list fetch failed, list left unchanged");
            Err(err)
        }
    }
}

async fn request_todos(
    transport: &dyn HttpTransport,
    client: &TodoClient,
) -> Result<Vec<TodoRecord>, FetchError> {
    let request = client.build_list_todos();
    debug!(method = request.method.as_str(), url = %request.path, "requesting todo list");

    let response = transport.execute(request).await?;
    if response.is_success() {
        info!(status = response.status, body = %response.body, "todo list response");
    }
    client.parse_list_todos(response)
}

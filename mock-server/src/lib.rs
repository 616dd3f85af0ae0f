//! Stand-in for the todo REST backend.
//!
//! Serves `GET /todos` in insertion order and `POST /todos` for seeding.
//! Ids are sequential integers starting at 1, the way the real backend
//! hands them out.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug)]
pub struct Store {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Store {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { todos, next_id }
    }

    fn insert(&mut self, input: CreateTodo) -> Todo {
        let todo = Todo {
            id: self.next_id,
            title: input.title,
            completed: input.completed,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::with_todos(Vec::new())
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Router with an empty store.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router whose store starts out holding `seed`, in order.
pub fn app_with(seed: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::with_todos(seed)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock todo server listening");
    }
    axum::serve(listener, app).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    tracing::debug!(count = store.todos.len(), "listing todos");
    Json(store.todos.clone())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input);
    tracing::debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

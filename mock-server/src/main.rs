use mock_server::Todo;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(true))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;

    let seed = vec![
        Todo {
            id: 1,
            title: "Set up the API".to_string(),
            completed: true,
        },
        Todo {
            id: 2,
            title: "Render the todo list".to_string(),
            completed: false,
        },
    ];
    mock_server::serve(listener, mock_server::app_with(seed)).await
}

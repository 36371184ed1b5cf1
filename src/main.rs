use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quizcast::{api, config::ServerConfig, state::AppState, trivia::OpenTdbClient};

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quizcast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting quizcast...");

    let config = ServerConfig::from_env();
    tracing::info!(
        "Questions: {} per game from {} (timeout {:?})",
        config.trivia.amount,
        config.trivia.api_url,
        config.trivia.timeout
    );

    let source = match OpenTdbClient::new(config.trivia.clone()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to set up trivia client: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(Arc::new(source)));
    let app = api::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("Trivia server listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

#![recursion_limit = "256"]

mod config;
mod error;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid server config");

    // Initialize LLM client (non-fatal: clients fall back to the built-in cards).
    let llm: Option<Arc<dyn llm::LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(provider = client.provider(), model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, concept generation disabled");
            None
        }
    };

    let port = config.port;
    let state = state::AppState::new(llm, config);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "sintonia listening");
    axum::serve(listener, app).await.expect("server failed");
}

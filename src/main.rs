use tracing_subscriber::EnvFilter;

use medleaf::api::router::app;
use medleaf::api::AppState;
use medleaf::config::{self, Config};
use medleaf::gateway::OpenRouterClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!("OPENROUTER_API_KEY is not set; analysis endpoints will fail");
    }

    let client = OpenRouterClient::new(&config.base_url, config.api_key.clone());
    let port = config.port;
    let state = AppState::new(client, config);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(
        version = config::APP_VERSION,
        port,
        "{} API listening",
        config::APP_NAME
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install shutdown handler: {e}");
    }
}

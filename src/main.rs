use anyhow::Context;
use bookstore_oauth::bookstore_oauth_config::ServerConfig;
use bookstore_oauth::logging::init_tracing;
use bookstore_oauth::router::init_router;
use bookstore_oauth::state::init_app_state;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let state = init_app_state()?;
    info!(oauth_base_url = %state.oauth.base_url(), "OAuth client configured");

    let app = init_router(state);

    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "Server running");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(
        "Using model {} (temperature={}, max_tokens={}, timeout={:?}, prompt={})",
        config.completion.model,
        config.completion.temperature,
        config.completion.max_tokens,
        config.completion.timeout,
        config.completion.prompt_style
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    let app_state = api::build_state(config.completion, config.password_hash_cost)
        .context("Failed to build HTTP client")?;
    let app = api::create_app(app_state);

    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

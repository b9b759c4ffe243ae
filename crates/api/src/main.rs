use anyhow::Context;

use stockpo_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockpo_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let app = stockpo_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

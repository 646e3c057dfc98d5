use tracing_subscriber::{EnvFilter, fmt};

use hello_host::shell::config::ServerConfig;
use hello_host::shell::http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ServerConfig::from_env()?;
    let app = http::app(&config.environment);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

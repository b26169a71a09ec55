use std::net::SocketAddr;

use todo_backend::{config::AppConfig, create_router, initialize_backend};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state);

    let addr: SocketAddr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Backend running at: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

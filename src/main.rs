use clap::Parser;
use flood_proxy::utils::SystemClock;
use flood_proxy::{build_app, Config};
use std::error::Error;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::parse();
    config.validate()?;

    info!(
        base_url = %config.base_url,
        cache_ttl = config.cache_ttl,
        "Starting flood-monitoring proxy"
    );

    let app = build_app(&config, Arc::new(SystemClock))?;
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    info!("Shutting down");
    Ok(())
}

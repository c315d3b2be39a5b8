//! Real-Estate Price Dashboard - Main Entry Point

use api::{init_logging, run_server, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_logging(&config.logging)?;

    info!("=== Análisis Inmobiliario v{} ===", env!("CARGO_PKG_VERSION"));

    run_server(config)
        .await
        .inspect_err(|e| error!("Startup failed: {:#}", e))
}

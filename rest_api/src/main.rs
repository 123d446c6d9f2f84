// rest_api/src/main.rs

// Entry point for the risk-stratification API server.

use anyhow::Result;
use tokio::sync::oneshot;

use rest_api::config::load_risk_api_config;
use rest_api::start_server;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = load_risk_api_config(None)?;

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(());
        }
    });

    start_server(config, shutdown_rx).await
}

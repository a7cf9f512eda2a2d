mod config;
mod error;
mod routes;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ctamap_core::load_route_table;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{Args, ServerConfig};
use error::ServerError;
use routes::{AppState, router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), ServerError> {
    let config = ServerConfig::from_args(&args)?;

    let sources = config.sources.clone();
    let table = tokio::task::spawn_blocking(move || load_route_table(&sources)).await??;
    info!("Loaded {} routes", table.len());

    let app = router(
        AppState {
            table: Arc::new(table),
        },
        config.max_concurrent_requests,
    );

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("Listening on {}", config.bind);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
}

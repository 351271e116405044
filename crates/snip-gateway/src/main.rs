mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use crate::app::App;
use crate::cli::CLI;
use crate::state::AppState;
use clap::Parser;
use snip_storage::FileRepository;
use std::sync::Arc;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    // Replays the durable log before any request is served. A corrupt
    // log aborts startup: serving from a partially reconstructed index
    // could hand out an identifier that overwrites an existing mapping.
    let repository = FileRepository::open(&config.storage_path)?;
    info!(
        storage_path = %config.storage_path.display(),
        current_max = repository.current_max().await,
        entries = repository.len().await,
        "repository opened"
    );

    let state = AppState::new(Arc::new(repository), config.base_url);
    let router = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    let mut sigterm = signal(SignalKind::terminate())?;
    let shutdown = async move {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
        info!("shutdown signal received");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("server exited properly");
    Ok(())
}

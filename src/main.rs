use std::net::SocketAddr;

use clap::Parser;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info};

use rusty_inbox::logging::init_tracing;
use rusty_inbox::prelude::*;

#[tokio::main]
async fn main() {
    // .env values feed the env-backed flags
    dotenv().ok();
    let config = AppConfig::from_cli(Cli::parse());
    init_tracing(config.log_json);

    if let Err(err) = run(config).await {
        error!(error = %err, "rusty-inbox failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    let storage = JsonStorage::new(&config.contacts_file);
    storage.initialize()?;

    let manager = ContactManager::new(Box::new(storage), Box::new(TimestampIds::new()));
    info!(
        medium = manager.medium(),
        path = %config.contacts_file.display(),
        "contact form submissions will be saved to the store file"
    );

    let state = AppState::new(manager, &config.index_file);
    let app = create_router(state);

    let listener = TcpListener::bind(config.addr).await?;
    info!(
        addr = %config.addr,
        "Server running on http://localhost:{}",
        config.addr.port()
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

// img-alt-api - Image alt text generator backed by OpenAI vision models
// Author: kelexine (https://github.com/kelexine)

use anyhow::Result;
use clap::Parser;
use img_alt_api::cli::Args;
use img_alt_api::config::AppConfig;
use img_alt_api::openai::OpenAiClient;
use img_alt_api::server::create_router;
use img_alt_api::utils::logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Phase 1: Pick up a local .env before reading the environment
    let dotenv = dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Phase 2: Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    // Phase 3: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting img-alt-api v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }
    debug!("Configuration: {:?}", config);

    // Phase 4: Build the upstream client
    let vision_client = OpenAiClient::new(&config.openai)?;
    info!(
        "Using model {} via {} (upload limit {} bytes)",
        config.openai.model,
        vision_client.base_url(),
        config.vision.upload_limit
    );

    // Phase 5: Build and start HTTP server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let app = create_router(config, Arc::new(vision_client))?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}

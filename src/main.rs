//! CLP Attendance server - Main entry point
//!
//! Loads configuration, opens the attendance document, optionally starts a
//! card scanner, and serves the REST API.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clp_attendance::adapters::http::{build_router, AttendanceAppState};
use clp_attendance::adapters::{DeviceCardReader, DocumentAttendanceStore, FileDocumentStorage};
use clp_attendance::application::{CheckInHandler, ScanCardsHandler, ScanTermination};
use clp_attendance::config::{AppConfig, ScannerConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("Invalid configuration")?;

    let storage = Arc::new(FileDocumentStorage::new(&config.storage.path));
    let store = Arc::new(
        DocumentAttendanceStore::load(storage)
            .await
            .with_context(|| format!("Failed to load {}", config.storage.path.display()))?,
    );

    if let Some(scanner) = config.scanner.clone() {
        spawn_scanner(scanner, CheckInHandler::new(store.clone()));
    }

    let state = AttendanceAppState::new(store.clone(), store);
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("server shutdown complete");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn spawn_scanner(config: ScannerConfig, check_in: CheckInHandler) {
    tokio::spawn(async move {
        let reader = DeviceCardReader::new(&config.device).with_chunk_size(config.chunk_size);
        let handler = ScanCardsHandler::new(Arc::new(reader), check_in);

        match handler.handle(config.command()).await {
            Ok(report) => match report.termination {
                ScanTermination::Closed => {
                    tracing::info!(checked_in = report.checked_in, "card reader closed")
                }
                ScanTermination::ReadError(err) => {
                    tracing::error!(error = %err, checked_in = report.checked_in, "card reader stopped")
                }
            },
            Err(err) => tracing::error!(error = %err, "card scanner could not start"),
        }
    });
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

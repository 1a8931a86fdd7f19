//! Claims Gateway - API Server Binary
//!
//! This binary hosts the claim ledger contract over an in-memory world state
//! and serves it over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-gateway
//!
//! # Run with environment variables
//! GATEWAY_PORT=9000 GATEWAY_SCAN_SCOPE=claim_namespace cargo run --bin claims-gateway
//! ```
//!
//! # Environment Variables
//!
//! * `GATEWAY_HOST` - Server host (default: 0.0.0.0)
//! * `GATEWAY_PORT` - Server port (default: 8081)
//! * `GATEWAY_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `GATEWAY_SCAN_SCOPE` - `full_keyspace` or `claim_namespace` (default: full_keyspace)
//! * `GATEWAY_STRICT_STORE_ERRORS` - Propagate ignored store errors (default: false)
//! * `GATEWAY_SEED_ON_START` - Run `initLedger` at startup (default: true)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use domain_claims::ClaimContract;
use infra_state::MemoryWorldState;
use interface_api::{config::GatewayConfig, create_router, Peer};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the gateway.
///
/// Initializes logging, loads configuration, instantiates the contract,
/// optionally seeds the ledger, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = GatewayConfig::from_env().context("invalid GATEWAY_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        scan_scope = ?config.scan_scope,
        strict_store_errors = config.strict_store_errors,
        "Starting claims gateway"
    );

    let peer = Arc::new(Peer::new(
        ClaimContract::new(config.contract_config()),
        MemoryWorldState::new(),
    ));

    let init = peer.instantiate(&[]).await;
    anyhow::ensure!(init.response.is_ok(), "contract init failed: {}", init.response.message);

    if config.seed_on_start {
        let seeded = peer.submit("initLedger", &[]).await;
        anyhow::ensure!(
            seeded.response.is_ok(),
            "initLedger failed: {}",
            seeded.response.message
        );
        tracing::info!(tx_id = %seeded.tx_id, "Ledger seeded");
    }

    let app = create_router(Arc::clone(&peer));

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::error!(%error, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

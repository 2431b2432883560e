//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `kernel::error::app_error::AppError`.

use anyhow::Context;
use axum::Router;
use hanoi::{HanoiConfig, InMemorySessionRepository, LockPolicy, hanoi_router};
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND_ADDR: &str = "[::]:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,hanoi=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    tracing::info!(lock_policy = ?config.lock_policy, "Loaded configuration");

    let app = Router::new()
        .nest(
            "/v1",
            hanoi_router(InMemorySessionRepository::new(), config),
        )
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = env::var("HANOI_BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .context("HANOI_BIND_ADDR must be a socket address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the application config from the environment
///
/// `HANOI_LOCK_TIMEOUT_MS`: unset or negative blocks, `0` fails fast,
/// positive waits that many milliseconds.
fn load_config() -> anyhow::Result<HanoiConfig> {
    let lock_policy = match env::var("HANOI_LOCK_TIMEOUT_MS") {
        Ok(raw) => {
            let ms: i64 = raw
                .trim()
                .parse()
                .context("HANOI_LOCK_TIMEOUT_MS must be an integer")?;
            LockPolicy::from_timeout_ms(ms)
        }
        Err(_) => LockPolicy::Blocking,
    };

    Ok(HanoiConfig {
        lock_policy,
        ..HanoiConfig::default()
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

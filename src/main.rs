#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

use pricelist_api::{AppError, Result, app, config::AppConfig};
use tokio::{net::TcpListener, signal};
use tracing::Level;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

/// connect → sync schema → seed → listen, then close the pool once the
/// listener has drained.
async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    tracing::info!("Starting in {:?} mode", config.environment);

    let state = app::init(&config).await?;
    let db = state.db.clone();
    let router = app::build(state, &config)?;

    let addr = config.server_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(wait_for_shutdown())
        .await;

    db.close().await;
    tracing::info!("Database connection closed");

    served.map_err(|e| AppError::InternalError(format!("Server error: {}", e)))
}

async fn wait_for_shutdown() {
    let sigint = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    let signal_name = tokio::select! {
        _ = sigint => "SIGINT",
        _ = sigterm => "SIGTERM",
    };

    tracing::info!("Received {}, shutting down server...", signal_name);
}

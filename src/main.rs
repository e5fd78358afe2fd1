use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greenhouse_dashboard::config::Config;
use greenhouse_dashboard::error::DashboardError;
use greenhouse_dashboard::routes;
use greenhouse_dashboard::startup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,greenhouse_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting greenhouse-dashboard...");

    // Load configuration (fail-fast)
    let config = Config::from_env().map_err(DashboardError::from)?;
    tracing::info!(
        channel_id = %config.thingspeak_channel_id,
        host = %config.api_host,
        port = config.api_port,
        "Configuration loaded"
    );

    // Fetch everything up front; the page never changes afterwards
    let state = startup::load_dashboard(&config).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to load dashboard data");
    })?;

    let app = routes::build_router(state);

    let addr = config.bind_address();
    let listener = startup::bind(&addr).await?;
    tracing::info!(address = %addr, "Serving dashboard");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        },
    }
}

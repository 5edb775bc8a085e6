use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig};

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub state: AppStateConfig,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let settings = &config.state.settings;
    if settings.uses_default_secret() {
        warn!("FLASK_SECRET_KEY is not set; using the insecure development placeholder");
    }
    if settings.anthropic_api_key().is_err() {
        warn!("ANTHROPIC_API_KEY is not set; image suggestions are disabled");
    }
    if settings.pexels_api_key().is_err() {
        warn!("PEXELS_API_KEY is not set; stock photo search is disabled");
    }

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let state = AppState::new(config.state);
    let model = state.anthropic_model.clone();
    let app = app_router(state);

    info!(
        address = %config.bind_address,
        model = %model,
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

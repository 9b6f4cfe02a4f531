use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, AppConfig};
use crate::router::{create_router, create_router_with_metrics};
use crate::store::ScenarioStore;

pub async fn serve(config: AppConfig) -> Result<()> {
    trace!("Entering serve function");
    info!("ROI calculator starting up");
    debug!("Configuration: {:?}", config);

    let state = initialize_app_state(&config).await.map_err(|e| {
        error!("Failed to initialize application state: {}", e);
        e
    })?;
    let store = state.store.clone();

    let app = if config.metrics_enabled {
        create_router_with_metrics(state)
    } else {
        create_router(state)
    };
    debug!("Router created successfully");

    run_server(app, &config.bind_address, store).await
}

/// Serve `app` until a shutdown signal arrives, then close the store.
pub(crate) async fn run_server(app: Router, bind_address: &str, store: ScenarioStore) -> Result<()> {
    info!("Starting server on {}", bind_address);
    let listener = TcpListener::bind(bind_address).await.map_err(|e| {
        error!("Failed to bind to address {}: {}", bind_address, e);
        e
    })?;

    info!("ROI calculator API running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    store.close().await?;
    info!("Server shutdown gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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
    info!("Shutdown signal received");
}

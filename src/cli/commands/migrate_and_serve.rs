use anyhow::Result;
use tracing::{debug, error, info, trace};

use crate::cli::commands::initdb::run_migrations;
use crate::config::{initialize_app_state, AppConfig};
use crate::router::{create_router, create_router_with_metrics};

use super::serve::run_server;

pub async fn migrate_and_serve(config: AppConfig) -> Result<()> {
    trace!("Entering migrate_and_serve function");
    info!("Applying database migrations and starting server");

    let state = initialize_app_state(&config).await.map_err(|e| {
        error!("Failed to initialize application state: {}", e);
        e
    })?;

    // Same pool as the server so in-memory databases keep their schema.
    run_migrations(state.store.connection()).await?;
    debug!("Migrations applied");

    let store = state.store.clone();
    let app = if config.metrics_enabled {
        create_router_with_metrics(state)
    } else {
        create_router(state)
    };

    run_server(app, &config.bind_address, store).await
}

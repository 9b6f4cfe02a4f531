use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use tracing::{debug, error, info, trace};

/// Apply all pending migrations to `database_url`.
pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    let db: DatabaseConnection = Database::connect(database_url).await.map_err(|e| {
        error!("Failed to connect to database '{}': {}", database_url, e);
        e
    })?;

    run_migrations(&db).await?;
    db.close().await?;

    info!("Database initialization completed successfully!");
    Ok(())
}

pub(crate) async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    info!("Running database migrations");
    Migrator::up(db, None).await.map_err(|e| {
        error!("Failed to run database migrations: {}", e);
        e
    })?;
    debug!("All pending migrations have been applied");
    Ok(())
}

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, info};

use crate::report::{PdfReportRenderer, ReportService};
use crate::schemas::AppState;
use crate::store::ScenarioStore;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://roicalc.db?mode=rwc";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Runtime settings.
///
/// Read from defaults, then an optional `roicalc.{toml,yaml,json}` in the
/// working directory, then the environment (`DATABASE_URL`, `BIND_ADDRESS`,
/// `REPORT_DIR`, `REQUEST_TIMEOUT_SECS`, `METRICS_ENABLED`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub report_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub metrics_enabled: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    fn from_environment(env: Environment) -> Result<Self> {
        let default_report_dir = std::env::temp_dir().to_string_lossy().into_owned();

        let settings = Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("report_dir", default_report_dir)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            .set_default("metrics_enabled", true)?
            .add_source(File::with_name("roicalc").required(false))
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read configuration")?;

        let config: AppConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Initialize application state from configuration
pub async fn initialize_app_state(config: &AppConfig) -> Result<AppState> {
    std::fs::create_dir_all(&config.report_dir).with_context(|| {
        format!(
            "Failed to create report directory {}",
            config.report_dir.display()
        )
    })?;

    let store = ScenarioStore::connect(&config.database_url).await?;
    let reports = ReportService::new(Arc::new(PdfReportRenderer), config.report_dir.clone());
    info!("Report scratch directory: {}", reports.scratch_dir().display());

    Ok(AppState {
        store,
        reports,
        request_timeout: config.request_timeout(),
    })
}

//! Report generation for saved scenarios.
//!
//! A report is rendered into a scratch file inside the configured report
//! directory, read back into memory and the scratch file removed before the
//! bytes are handed to the caller. The scratch file is removed on failure too.

use std::fmt::Debug;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::ScenarioDto;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tokio::task::JoinError;
use tracing::{debug, info, instrument, trace};
use uuid::Uuid;

mod pdf;

pub use pdf::PdfReportRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("Render task failed: {0}")]
    Task(#[from] JoinError),
}

/// Text of a report, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContent {
    pub title: String,
    pub lines: Vec<String>,
}

fn money(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

impl ReportContent {
    pub fn new(scenario: &ScenarioDto, recipient: &str) -> Self {
        let p = &scenario.parameters;
        let r = &scenario.simulation_results;

        let mut lines = vec![
            format!("Scenario: {}", scenario.scenario_name),
            format!("Generated for: {}", recipient.trim()),
            String::new(),
            "Inputs:".to_string(),
            format!("scenario_name: {}", scenario.scenario_name),
        ];
        let inputs = [
            ("monthly_invoice_volume", p.monthly_invoice_volume),
            ("num_ap_staff", p.num_ap_staff),
            ("avg_hours_per_invoice", p.avg_hours_per_invoice),
            ("hourly_wage", p.hourly_wage),
            ("error_rate_manual", p.error_rate_manual),
            ("error_cost", p.error_cost),
            ("time_horizon_months", Decimal::from(p.time_horizon_months)),
            ("one_time_implementation_cost", p.one_time_implementation_cost),
        ];
        lines.extend(
            inputs
                .iter()
                .map(|(name, value)| format!("{name}: {}", value.normalize())),
        );

        lines.push(String::new());
        lines.push("Results:".to_string());
        let results = [
            ("manualLaborCost", r.manual_labor_cost),
            ("automationCost", r.automation_cost),
            ("errorSavings", r.error_savings),
            ("monthlySavings", r.monthly_savings),
            ("cumulativeSavings", r.cumulative_savings),
            ("roi", r.roi),
            ("paybackMonths", r.payback_months),
        ];
        lines.extend(
            results
                .iter()
                .map(|(name, value)| format!("{name}: {}", money(*value))),
        );

        Self {
            title: "ROI Calculator Report".to_string(),
            lines,
        }
    }
}

/// Turns report content into document bytes.
pub trait ReportRenderer: Send + Sync + Debug {
    fn render(&self, content: &ReportContent, out: &mut dyn Write) -> Result<(), RenderError>;
}

#[derive(Clone, Debug)]
pub struct ReportService {
    renderer: Arc<dyn ReportRenderer>,
    scratch_dir: PathBuf,
}

impl ReportService {
    pub fn new(renderer: Arc<dyn ReportRenderer>, scratch_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            scratch_dir: scratch_dir.into(),
        }
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    /// Download name of the report for a scenario.
    pub fn file_name(id: Uuid) -> String {
        format!("report_{id}.pdf")
    }

    /// Render `content` and return the document bytes.
    ///
    /// Dropping the returned future does not cancel the blocking render. It
    /// runs to completion and its guard removes the scratch file.
    #[instrument(skip(self, content), fields(title = %content.title))]
    pub async fn generate(&self, content: ReportContent) -> Result<Vec<u8>, RenderError> {
        trace!("Entering generate");
        let renderer = Arc::clone(&self.renderer);
        let dir = self.scratch_dir.clone();

        let bytes = tokio::task::spawn_blocking(move || -> Result<Vec<u8>, RenderError> {
            let mut scratch = tempfile::Builder::new()
                .prefix("report_")
                .suffix(".pdf")
                .tempfile_in(&dir)?;
            debug!("Rendering into {}", scratch.path().display());

            renderer.render(&content, scratch.as_file_mut())?;
            scratch.as_file_mut().flush()?;
            let bytes = std::fs::read(scratch.path())?;
            scratch.close()?;
            Ok(bytes)
        })
        .await??;

        info!("Report rendered: {} bytes", bytes.len());
        Ok(bytes)
    }
}

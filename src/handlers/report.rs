use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use common::GenerateReportRequest;
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::report::{ReportContent, ReportService};
use crate::schemas::AppState;
use crate::store::ScenarioStore;

/// Download a scenario report
///
/// Renders the saved scenario as a PDF attachment.
#[utoipa::path(
    post,
    path = "/report/generate",
    request_body = GenerateReportRequest,
    responses(
        (status = 200, description = "PDF report", content_type = "application/pdf", body = Vec<u8>),
        (status = 400, description = "Missing email or malformed scenario ID", body = ErrorResponse),
        (status = 404, description = "Scenario not found", body = ErrorResponse),
        (status = 500, description = "Report could not be produced", body = ErrorResponse)
    ),
    tag = "reports"
)]
#[instrument(skip(state, request))]
pub async fn generate_report(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateReportRequest>,
) -> Result<Response, ApiError> {
    trace!("Entering generate_report function");

    let (Some(email), Some(raw_id)) = (request.email, request.scenario_id) else {
        return Err(ApiError::Validation("Email and scenarioId required".to_string()));
    };
    let id = ScenarioStore::parse_id(&raw_id)?;
    debug!("Generating report for scenario {}", id);

    let scenario = state.store.get_by_id(id).await?;
    let content = ReportContent::new(&scenario, &email);
    let bytes = state.reports.generate(content).await?;

    info!("Report generated for scenario {}", id);
    let disposition = format!(
        "attachment; filename=\"{}\"",
        ReportService::file_name(id)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

use axum::{extract::Query, response::Json};
use common::{ScenarioParameters, SimulationResponse};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::schemas::SimulateQuery;

/// Preview a projection
///
/// Runs the projection for the submitted inputs without saving anything.
#[utoipa::path(
    post,
    path = "/simulate",
    params(SimulateQuery),
    request_body = ScenarioParameters,
    responses(
        (status = 200, description = "Projection result", body = SimulationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse)
    ),
    tag = "simulation"
)]
#[instrument(skip(params))]
pub async fn simulate(
    Query(query): Query<SimulateQuery>,
    ValidatedJson(params): ValidatedJson<ScenarioParameters>,
) -> Result<Json<SimulationResponse>, ApiError> {
    trace!("Entering simulate function");
    debug!("Simulating: {:?}", params);

    let projection = compute::project(&params)?;

    let monthly_cumulative = if query.series.unwrap_or(false) {
        let series = projection
            .monthly_cumulative
            .into_iter()
            .map(f64::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ApiError::Validation(format!("Series not representable: {e}")))?;
        Some(series)
    } else {
        None
    };

    info!(
        "Simulation complete: monthly_savings={}",
        projection.result.monthly_savings
    );
    Ok(Json(SimulationResponse {
        result: projection.result,
        monthly_cumulative,
    }))
}

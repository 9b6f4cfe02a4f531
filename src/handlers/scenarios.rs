use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use common::{CreateScenarioRequest, MessageResponse, ScenarioDto, ScenarioSummary};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::schemas::AppState;
use crate::store::ScenarioStore;

/// Save a scenario
///
/// Computes the projection for the inputs and stores both.
#[utoipa::path(
    post,
    path = "/scenarios",
    request_body = CreateScenarioRequest,
    responses(
        (status = 201, description = "Scenario saved", body = ScenarioDto),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "scenarios"
)]
#[instrument(skip(state, request))]
pub async fn create_scenario(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateScenarioRequest>,
) -> Result<(StatusCode, Json<ScenarioDto>), ApiError> {
    trace!("Entering create_scenario function");
    debug!("Creating scenario: {:?}", request);

    let scenario = state.store.create(request).await?;

    info!("Scenario created successfully: id={}", scenario.id);
    Ok((StatusCode::CREATED, Json(scenario)))
}

/// List saved scenarios
///
/// Newest first. Entries carry no inputs or results.
#[utoipa::path(
    get,
    path = "/scenarios",
    responses(
        (status = 200, description = "List of scenarios", body = Vec<ScenarioSummary>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "scenarios"
)]
#[instrument(skip(state))]
pub async fn get_scenarios(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScenarioSummary>>, ApiError> {
    trace!("Entering get_scenarios function");

    let scenarios = state.store.list().await?;

    info!("Retrieved {} scenarios", scenarios.len());
    Ok(Json(scenarios))
}

/// Get a saved scenario
#[utoipa::path(
    get,
    path = "/scenarios/{id}",
    params(
        ("id" = String, Path, description = "Scenario ID")
    ),
    responses(
        (status = 200, description = "Scenario details", body = ScenarioDto),
        (status = 400, description = "Malformed scenario ID", body = ErrorResponse),
        (status = 404, description = "Scenario not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "scenarios"
)]
#[instrument(skip(state))]
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScenarioDto>, ApiError> {
    trace!("Entering get_scenario function");

    let id = ScenarioStore::parse_id(&id)?;
    let scenario = state.store.get_by_id(id).await?;

    info!("Retrieved scenario: id={}", id);
    Ok(Json(scenario))
}

/// Delete a saved scenario
///
/// Deleting an unknown ID succeeds as well.
#[utoipa::path(
    delete,
    path = "/scenarios/{id}",
    params(
        ("id" = String, Path, description = "Scenario ID")
    ),
    responses(
        (status = 200, description = "Scenario deleted", body = MessageResponse),
        (status = 400, description = "Malformed scenario ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "scenarios"
)]
#[instrument(skip(state))]
pub async fn delete_scenario(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    trace!("Entering delete_scenario function");

    let id = ScenarioStore::parse_id(&id)?;
    let existed = state.store.delete_by_id(id).await?;

    if existed {
        info!("Scenario deleted: id={}", id);
    } else {
        debug!("No scenario to delete: id={}", id);
    }
    Ok(Json(MessageResponse {
        message: "Scenario deleted".to_string(),
    }))
}

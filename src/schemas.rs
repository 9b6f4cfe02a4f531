use std::time::Duration;

use common::{
    CreateScenarioRequest, GenerateReportRequest, MessageResponse, ProjectionResult, ScenarioDto,
    ScenarioParameters, ScenarioSummary, SimulationResponse,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::report::ReportService;
use crate::store::ScenarioStore;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Scenario persistence
    pub store: ScenarioStore,
    /// Report rendering
    pub reports: ReportService,
    /// Upper bound on a single request
    pub request_timeout: Duration,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Query parameters for the preview endpoint
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SimulateQuery {
    /// Include the month-by-month cumulative savings
    pub series: Option<bool>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::simulate::simulate,
        crate::handlers::scenarios::create_scenario,
        crate::handlers::scenarios::get_scenarios,
        crate::handlers::scenarios::get_scenario,
        crate::handlers::scenarios::delete_scenario,
        crate::handlers::report::generate_report,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            SimulateQuery,
            ScenarioParameters,
            ProjectionResult,
            SimulationResponse,
            CreateScenarioRequest,
            ScenarioDto,
            ScenarioSummary,
            GenerateReportRequest,
            MessageResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "simulation", description = "Stateless ROI projection"),
        (name = "scenarios", description = "Saved scenario endpoints"),
        (name = "reports", description = "Scenario report downloads"),
    ),
    info(
        title = "ROI Calculator API",
        description = "Projects the return of automating invoice processing and keeps named scenarios",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;

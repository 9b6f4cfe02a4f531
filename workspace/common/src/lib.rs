//! Common transport-layer types shared by the projection engine and the API.
//! These structs are the request/response payloads of the HTTP surface, so
//! every crate agrees on field names and wire formats without duplicating shapes.

mod numbers;
mod projection;
mod scenario;
pub mod validation;

pub use projection::{ProjectionResult, SimulationResponse};
pub use scenario::{
    CreateScenarioRequest, GenerateReportRequest, MessageResponse, ScenarioDto,
    ScenarioParameters, ScenarioSummary,
};

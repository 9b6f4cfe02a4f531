use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::ProjectionResult;

/// The eight numeric inputs of a projection.
///
/// `num_ap_staff` is collected and stored but does not enter any metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct ScenarioParameters {
    /// Invoices processed per month
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1000)]
    #[validate(custom(function = "crate::validation::non_negative"))]
    pub monthly_invoice_volume: Decimal,
    /// Accounts-payable headcount
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 2)]
    #[validate(custom(function = "crate::validation::non_negative"))]
    pub num_ap_staff: Decimal,
    /// Manual handling time per invoice, in hours
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.1)]
    #[validate(custom(function = "crate::validation::non_negative"))]
    pub avg_hours_per_invoice: Decimal,
    /// Fully loaded hourly wage of AP staff
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 20)]
    #[validate(custom(function = "crate::validation::non_negative"))]
    pub hourly_wage: Decimal,
    /// Manual error rate in percentage points (5 means 5%)
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 5)]
    #[validate(custom(function = "crate::validation::percentage"))]
    pub error_rate_manual: Decimal,
    /// Cost of correcting a single error
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 100)]
    #[validate(custom(function = "crate::validation::non_negative"))]
    pub error_cost: Decimal,
    /// Projection horizon in months. Integral numbers and numeric strings are accepted.
    #[serde(deserialize_with = "crate::numbers::whole_number")]
    #[schema(example = 12)]
    #[validate(range(min = 1, max = 1200, message = "must be between 1 and 1200 months"))]
    pub time_horizon_months: u32,
    /// One-time cost of rolling out automation
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 5000)]
    #[validate(custom(function = "crate::validation::non_negative"))]
    pub one_time_implementation_cost: Decimal,
}

/// Request body for saving a scenario
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateScenarioRequest {
    /// User-defined label, not required to be unique
    #[validate(custom(function = "crate::validation::non_blank"))]
    pub scenario_name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub parameters: ScenarioParameters,
}

/// A persisted scenario with its projection snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScenarioDto {
    pub id: Uuid,
    pub scenario_name: String,
    #[serde(flatten)]
    pub parameters: ScenarioParameters,
    /// Engine output captured when the scenario was saved
    pub simulation_results: ProjectionResult,
    pub created_at: DateTime<Utc>,
}

/// Listing entry; carries neither inputs nor results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScenarioSummary {
    pub id: Uuid,
    pub scenario_name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for rendering a scenario report
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateReportRequest {
    /// Recipient the report is generated for
    #[validate(
        required(message = "Email required"),
        custom(function = "crate::validation::non_blank", message = "Email required")
    )]
    pub email: Option<String>,
    /// Identifier of a saved scenario
    #[serde(rename = "scenarioId")]
    #[validate(required(message = "scenarioId required"))]
    pub scenario_id: Option<String>,
}

/// Plain confirmation body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

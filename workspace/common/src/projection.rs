use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Financial outcome of a projection.
///
/// Per-invoice and per-month figures are currency amounts, `roi` is a
/// percentage and `paybackMonths` a number of months. Both of the latter are
/// floored at zero. Values are serialized as JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    /// Manual processing cost per invoice
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub manual_labor_cost: Decimal,
    /// Automated processing cost per invoice
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub automation_cost: Decimal,
    /// Savings per invoice from the lower automated error rate
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub error_savings: Decimal,
    /// Savings per month across the whole invoice volume
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub monthly_savings: Decimal,
    /// Savings at the end of the horizon, net of the implementation cost
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub cumulative_savings: Decimal,
    /// Return on investment over the horizon, in percent
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub roi: Decimal,
    /// Months until savings cover the implementation cost
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub payback_months: Decimal,
}

/// Response of the preview endpoint.
///
/// The monthly series is only present when explicitly requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    #[serde(flatten)]
    pub result: ProjectionResult,
    /// Net cumulative savings after each month of the horizon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_cumulative: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectionResult {
        ProjectionResult {
            manual_labor_cost: Decimal::new(20, 1),
            automation_cost: Decimal::new(20, 2),
            error_savings: Decimal::new(49, 1),
            monthly_savings: Decimal::new(6700, 0),
            cumulative_savings: Decimal::new(75400, 0),
            roi: Decimal::new(1508, 0),
            payback_months: Decimal::new(75, 2),
        }
    }

    #[test]
    fn test_projection_result_serializes_camel_case_numbers() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["manualLaborCost"], 2.0);
        assert_eq!(json["automationCost"], 0.2);
        assert_eq!(json["monthlySavings"], 6700.0);
        assert_eq!(json["paybackMonths"], 0.75);
        assert!(json.get("manual_labor_cost").is_none());
    }

    #[test]
    fn test_simulation_response_omits_series_unless_present() {
        let response = SimulationResponse {
            result: sample(),
            monthly_cumulative: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("monthlyCumulative").is_none());
        assert_eq!(json["roi"], 1508.0);

        let response = SimulationResponse {
            result: sample(),
            monthly_cumulative: Some(vec![1700.0, 8400.0]),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["monthlyCumulative"][1], 8400.0);
    }
}

//! ROI projection for manual versus automated invoice processing.
//!
//! The projection is a pure function of a scenario's numeric inputs. Every
//! point of the monthly series is evaluated as `monthly_savings * month - cost`
//! rather than by repeated addition, so the last point is the reported
//! cumulative savings even when `monthly_savings` uses all 28 significant
//! digits of a decimal.

use common::{ProjectionResult, ScenarioParameters};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::{ComputeError, Result};

/// Cost of processing one invoice once automated.
pub const AUTOMATED_COST_PER_INVOICE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// Error rate under automation, as a fraction (0.1%).
pub const ERROR_RATE_AUTO: Decimal = Decimal::from_parts(1, 0, 0, false, 3);

/// Minutes saved per invoice. Reserved: not folded into any metric yet.
pub const TIME_SAVED_PER_INVOICE: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Multiplicative bias on monthly savings. Neutral.
pub const MIN_ROI_BOOST_FACTOR: Decimal = Decimal::ONE;

/// Output of [`project`]: the summary metrics plus the net cumulative
/// savings recorded after every month of the horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub result: ProjectionResult,
    /// `monthly_cumulative[i]` is the savings accumulated after month `i + 1`
    /// minus the one-time implementation cost.
    pub monthly_cumulative: Vec<Decimal>,
}

/// Run the projection for one set of inputs.
///
/// `roi` and `payback_months` are clamped at zero. A zero implementation cost
/// reports an ROI of zero, and zero monthly savings report a payback of zero,
/// the same sentinel used for the negative clamp. The only failure is leaving
/// the decimal range.
pub fn project(params: &ScenarioParameters) -> Result<Projection> {
    trace!("Entering project function");

    let manual_labor_cost = params
        .avg_hours_per_invoice
        .checked_mul(params.hourly_wage)
        .ok_or(ComputeError::Overflow("manual labor cost"))?;

    let automation_cost = AUTOMATED_COST_PER_INVOICE;

    let error_savings = (params.error_rate_manual / Decimal::ONE_HUNDRED - ERROR_RATE_AUTO)
        .checked_mul(params.error_cost)
        .ok_or(ComputeError::Overflow("error savings"))?;

    let monthly_savings = manual_labor_cost
        .checked_sub(automation_cost)
        .and_then(|per_invoice| per_invoice.checked_add(error_savings))
        .and_then(|per_invoice| per_invoice.checked_mul(params.monthly_invoice_volume))
        .and_then(|monthly| monthly.checked_mul(MIN_ROI_BOOST_FACTOR))
        .ok_or(ComputeError::Overflow("monthly savings"))?;

    let cost = params.one_time_implementation_cost;
    let months = params.time_horizon_months;

    let net_after = |month: u32| {
        monthly_savings
            .checked_mul(Decimal::from(month))
            .and_then(|saved| saved.checked_sub(cost))
            .ok_or(ComputeError::Overflow("cumulative savings"))
    };

    let monthly_cumulative = (1..=months).map(&net_after).collect::<Result<Vec<_>>>()?;
    let cumulative_savings = net_after(months)?;

    let roi = if cost.is_zero() {
        Decimal::ZERO
    } else {
        cumulative_savings
            .checked_div(cost)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(ComputeError::Overflow("return on investment"))?
    };

    let payback_months = if monthly_savings.is_zero() {
        Decimal::ZERO
    } else {
        cost.checked_div(monthly_savings)
            .ok_or(ComputeError::Overflow("payback period"))?
    };

    let result = ProjectionResult {
        manual_labor_cost,
        automation_cost,
        error_savings,
        monthly_savings,
        cumulative_savings,
        roi: roi.max(Decimal::ZERO),
        payback_months: payback_months.max(Decimal::ZERO),
    };
    debug!(
        "Projected monthly_savings={}, cumulative_savings={}, roi={}, payback_months={}",
        result.monthly_savings, result.cumulative_savings, result.roi, result.payback_months
    );

    Ok(Projection {
        result,
        monthly_cumulative,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    /// Inputs of the reference scenario used throughout these tests.
    fn reference_params() -> ScenarioParameters {
        ScenarioParameters {
            monthly_invoice_volume: dec("1000"),
            num_ap_staff: dec("2"),
            avg_hours_per_invoice: dec("0.1"),
            hourly_wage: dec("20"),
            error_rate_manual: dec("5"),
            error_cost: dec("100"),
            time_horizon_months: 12,
            one_time_implementation_cost: dec("5000"),
        }
    }

    #[test]
    fn test_reference_scenario() {
        let projection = project(&reference_params()).unwrap();
        let result = projection.result;

        assert_eq!(result.manual_labor_cost, dec("2.0"));
        assert_eq!(result.automation_cost, dec("0.20"));
        assert_eq!(result.error_savings, dec("4.9"));
        assert_eq!(result.monthly_savings, dec("6700"));
        assert_eq!(result.cumulative_savings, dec("75400"));
        assert_eq!(result.roi, dec("1508"));
        assert_eq!(result.payback_months.round_dp(3), dec("0.746"));
    }

    #[test]
    fn test_monthly_series_ends_at_cumulative_savings() {
        let projection = project(&reference_params()).unwrap();

        assert_eq!(projection.monthly_cumulative.len(), 12);
        assert_eq!(projection.monthly_cumulative[0], dec("1700"));
        assert_eq!(
            projection.monthly_cumulative.last().copied(),
            Some(projection.result.cumulative_savings)
        );
    }

    #[test]
    fn test_cumulative_matches_closed_form() {
        let mut params = reference_params();
        params.avg_hours_per_invoice = dec("0.137");
        params.hourly_wage = dec("23.45");
        params.error_rate_manual = dec("3.3");
        params.error_cost = dec("41.7");
        params.time_horizon_months = 37;
        params.one_time_implementation_cost = dec("12345.67");

        let result = project(&params).unwrap().result;
        let closed_form = result.monthly_savings * Decimal::from(params.time_horizon_months)
            - params.one_time_implementation_cost;

        assert_eq!(result.cumulative_savings, closed_form);
    }

    #[test]
    fn test_cumulative_matches_closed_form_at_full_precision() {
        let params = ScenarioParameters {
            monthly_invoice_volume: dec("99999.99999999999"),
            num_ap_staff: dec("3"),
            avg_hours_per_invoice: dec("0.1234567890123456"),
            hourly_wage: dec("98765.43210987654"),
            error_rate_manual: dec("3.333333333333333"),
            error_cost: dec("77777.77777777777"),
            time_horizon_months: 1200,
            one_time_implementation_cost: dec("12345.67890123456"),
        };

        let projection = project(&params).unwrap();
        let result = projection.result;
        let closed_form = result
            .monthly_savings
            .checked_mul(Decimal::from(params.time_horizon_months))
            .and_then(|saved| saved.checked_sub(params.one_time_implementation_cost))
            .unwrap();

        assert_eq!(result.cumulative_savings, closed_form);
        assert_eq!(projection.monthly_cumulative.last().copied(), Some(closed_form));
        assert_eq!(projection.monthly_cumulative.len(), 1200);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let params = reference_params();
        assert_eq!(project(&params).unwrap(), project(&params).unwrap());
    }

    #[test]
    fn test_zero_implementation_cost_reports_zero_sentinels() {
        let mut params = reference_params();
        params.one_time_implementation_cost = Decimal::ZERO;

        let result = project(&params).unwrap().result;

        assert_eq!(result.roi, Decimal::ZERO);
        assert_eq!(result.payback_months, Decimal::ZERO);
        assert_eq!(result.cumulative_savings, dec("80400"));
    }

    #[test]
    fn test_negative_savings_clamp_roi_and_payback() {
        let mut params = reference_params();
        params.error_rate_manual = Decimal::ZERO;
        params.error_cost = dec("10000");

        let result = project(&params).unwrap().result;

        assert_eq!(result.error_savings, dec("-10"));
        assert!(result.monthly_savings < Decimal::ZERO);
        assert_eq!(result.roi, Decimal::ZERO);
        assert_eq!(result.payback_months, Decimal::ZERO);
        assert!(result.cumulative_savings < Decimal::ZERO);
    }

    #[test]
    fn test_zero_monthly_savings_payback_is_zero() {
        let mut params = reference_params();
        params.monthly_invoice_volume = Decimal::ZERO;

        let result = project(&params).unwrap().result;

        assert_eq!(result.monthly_savings, Decimal::ZERO);
        assert_eq!(result.payback_months, Decimal::ZERO);
        assert_eq!(result.cumulative_savings, dec("-5000"));
        assert_eq!(result.roi, Decimal::ZERO);
    }

    #[test]
    fn test_zero_month_horizon_uses_closed_form() {
        let mut params = reference_params();
        params.time_horizon_months = 0;

        let projection = project(&params).unwrap();

        assert!(projection.monthly_cumulative.is_empty());
        assert_eq!(projection.result.cumulative_savings, dec("-5000"));
    }

    #[test]
    fn test_clamp_invariant_over_input_grid() {
        for volume in ["1", "250", "10000"] {
            for wage in ["0", "12.5", "80"] {
                for rate in ["0", "0.1", "7.5"] {
                    let mut params = reference_params();
                    params.monthly_invoice_volume = dec(volume);
                    params.hourly_wage = dec(wage);
                    params.error_rate_manual = dec(rate);

                    let result = project(&params).unwrap().result;
                    assert!(result.roi >= Decimal::ZERO);
                    assert!(result.payback_months >= Decimal::ZERO);
                }
            }
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut params = reference_params();
        params.monthly_invoice_volume = Decimal::MAX;
        params.hourly_wage = Decimal::MAX;

        assert!(matches!(project(&params), Err(ComputeError::Overflow(_))));
    }

    #[test]
    fn test_unused_constants_are_retained() {
        assert_eq!(TIME_SAVED_PER_INVOICE, dec("8"));
        assert_eq!(MIN_ROI_BOOST_FACTOR, Decimal::ONE);
        assert_eq!(ERROR_RATE_AUTO, dec("0.001"));
    }
}

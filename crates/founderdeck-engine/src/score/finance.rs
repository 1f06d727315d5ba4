//! Financial derivatives: gross margin and runway.
//!
//! Zero denominators are defined outputs, not errors: a venture with no
//! revenue has a 0% margin and one with no burn reports 0 months of
//! runway rather than infinity. Both policies are deliberate and keep
//! the derived fields plottable.

use founderdeck_core::records::{FinancialDerivatives, FinancialInputs};

use super::round2;

/// Gross margin as a percentage of revenue, 2-decimal rounded.
///
/// Returns 0 when revenue is not positive. A cost structure above
/// revenue yields a negative margin, which is valid output.
pub fn compute_gross_margin(revenue: f64, cost_structure: f64) -> f64 {
    if revenue <= 0.0 {
        return 0.0;
    }
    round2(((revenue - cost_structure) / revenue) * 100.0)
}

/// Months of runway at the current burn rate, 2-decimal rounded.
///
/// Returns 0 when burn is not positive (no burn collapses to 0 rather
/// than infinity).
pub fn compute_runway_months(cash_reserve: f64, burn_rate: f64) -> f64 {
    if burn_rate <= 0.0 {
        return 0.0;
    }
    round2(cash_reserve / burn_rate)
}

/// Derive both financial fields from one input record.
pub fn derive_financials(inputs: &FinancialInputs) -> FinancialDerivatives {
    FinancialDerivatives {
        gross_margin_percent: compute_gross_margin(
            inputs.revenue.value(),
            inputs.cost_structure.value(),
        ),
        runway_months: compute_runway_months(
            inputs.cash_reserve.value(),
            inputs.burn_rate.value(),
        ),
    }
}

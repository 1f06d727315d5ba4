//! Composite founder leverage score.

use founderdeck_core::records::LeverageInputs;

use super::round2;

/// Compute the composite leverage score, rounded to 2 decimals.
///
/// `time_saved * revenue_impact * automation_depth` captures compounding
/// automation value; recurring revenue and delegation add to it and
/// founder dependency subtracts. The result is deliberately unclamped:
/// a negative score is the founder-dependency warning signal, not an
/// error.
pub fn compute_leverage_score(inputs: &LeverageInputs) -> f64 {
    let raw = inputs.time_saved.value()
        * inputs.revenue_impact.value()
        * inputs.automation_depth.value()
        + inputs.recurring_revenue_percent.value()
        + inputs.delegation_score.value()
        - inputs.founder_dependency_percent.value();
    round2(raw)
}

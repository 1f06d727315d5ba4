//! Engine input/output records.
//!
//! All of these are plain immutable values. Identity, timestamps, and
//! persistence belong to the caller's store; the engine only derives
//! fields from what is here.

use serde::{Deserialize, Serialize};

use crate::types::{FailureScenarioType, NonNegative, Percent};

/// The five-item automation worthiness checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationChecklist {
    pub done_three_plus_per_week: bool,
    pub predictable_workflow: bool,
    pub clear_inputs_outputs: bool,
    pub error_tolerance_acceptable: bool,
    pub time_saved_meaningful: bool,
}

impl AutomationChecklist {
    /// The flags in declaration order.
    pub fn flags(&self) -> [bool; 5] {
        [
            self.done_three_plus_per_week,
            self.predictable_workflow,
            self.clear_inputs_outputs,
            self.error_tolerance_acceptable,
            self.time_saved_meaningful,
        ]
    }
}

/// Founder operating metrics feeding the composite leverage score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeverageInputs {
    pub time_saved: NonNegative,
    pub revenue_impact: NonNegative,
    pub automation_depth: NonNegative,
    pub recurring_revenue_percent: Percent,
    pub delegation_score: NonNegative,
    pub founder_dependency_percent: Percent,
}

/// Raw financial inputs for one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    pub revenue: NonNegative,
    pub cost_structure: NonNegative,
    pub cash_reserve: NonNegative,
    pub burn_rate: NonNegative,
}

/// Fields derived from [`FinancialInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDerivatives {
    pub gross_margin_percent: f64,
    pub runway_months: f64,
}

/// One failure scenario attached to an agent, with its guardrail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureMode {
    pub scenario_type: FailureScenarioType,
    pub scenario_description: String,
    pub likely_cause: String,
    pub guardrail: String,
    pub manual_confirmation_required: bool,
}

/// A debugging sample captured from one agent run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugSample {
    pub expected_behavior: String,
    pub actual_behavior: String,
    pub agent_prompt: String,
    pub sample_input: String,
    pub sample_output: String,
}

/// Heuristic judgment of a [`DebugSample`], one field per check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticReport {
    pub ambiguity: String,
    pub guardrails: String,
    pub tool_risk: String,
    pub context_risk: String,
    pub schema_gap: String,
    pub suggested_fixes: Vec<String>,
}

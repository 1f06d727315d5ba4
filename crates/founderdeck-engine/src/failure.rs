//! Standard failure-mode generation for newly created agents.
//!
//! The catalog is closed: five scenarios, fixed order, fixed wording.
//! Callers may supply per-position guardrail overrides (usually parsed
//! from the agent form's guardrail textarea); everything else is
//! constant. The generator returns a full replacement set and leaves
//! upsert-by-(agent, scenario) semantics to the caller's store.

use founderdeck_core::records::FailureMode;
use founderdeck_core::types::FailureScenarioType;

/// Guardrail applied wherever the caller supplies no override.
pub const DEFAULT_GUARDRAIL: &str =
    "Define explicit validation checks, retries, and manual approval before external actions.";

/// One fixed catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioTemplate {
    pub scenario_type: FailureScenarioType,
    pub description: &'static str,
    pub likely_cause: &'static str,
}

/// The full catalog, in the order generated sets come back.
pub const SCENARIO_CATALOG: [ScenarioTemplate; 5] = [
    ScenarioTemplate {
        scenario_type: FailureScenarioType::WrongOutputFormat,
        description: "Agent returns wrong output shape or missing fields.",
        likely_cause: "Output contract not explicit or validator missing.",
    },
    ScenarioTemplate {
        scenario_type: FailureScenarioType::ToolFailure,
        description: "Agent cannot complete due to dependency/API failure.",
        likely_cause: "Missing retries, timeout handling, and tool health checks.",
    },
    ScenarioTemplate {
        scenario_type: FailureScenarioType::Hallucination,
        description: "Agent invents unsupported facts.",
        likely_cause: "No citation requirement and weak grounding.",
    },
    ScenarioTemplate {
        scenario_type: FailureScenarioType::ContextMisinterpretation,
        description: "Agent misunderstands user context or intent.",
        likely_cause: "Ambiguous prompt and context overflow.",
    },
    ScenarioTemplate {
        scenario_type: FailureScenarioType::IrreversibleActionRisk,
        description: "Agent attempts irreversible action without confirmation.",
        likely_cause: "Approval gate missing before destructive actions.",
    },
];

/// Generate the standard five failure modes for an agent.
///
/// `guardrail_overrides[i]` replaces the default guardrail at position
/// `i` when present and non-empty after trim; extra overrides beyond
/// the catalog are ignored. The manual-confirmation gate is restricted
/// to the irreversible-action scenario, and only opens when the caller
/// enabled destructive-action confirmation for the agent.
pub fn generate_standard_failure_modes(
    destructive_action_confirmation: bool,
    guardrail_overrides: &[String],
) -> Vec<FailureMode> {
    SCENARIO_CATALOG
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let guardrail = guardrail_overrides
                .get(index)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .unwrap_or(DEFAULT_GUARDRAIL);

            FailureMode {
                scenario_type: template.scenario_type,
                scenario_description: template.description.to_string(),
                likely_cause: template.likely_cause.to_string(),
                guardrail: guardrail.to_string(),
                manual_confirmation_required: template.scenario_type
                    == FailureScenarioType::IrreversibleActionRisk
                    && destructive_action_confirmation,
            }
        })
        .collect()
}

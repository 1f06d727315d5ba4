//! Built-in guidance catalog per agent type.

use serde::Serialize;

use crate::types::AgentType;

/// Fixed guidance for one agent type: when to reach for it and what
/// usually goes wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentTypeGuidance {
    pub agent_type: AgentType,
    pub label: &'static str,
    pub complexity: &'static str,
    pub when_to_use: &'static str,
    pub mistakes: &'static str,
}

pub fn guidance_for(agent_type: AgentType) -> AgentTypeGuidance {
    match agent_type {
        AgentType::SingleTask => AgentTypeGuidance {
            agent_type,
            label: "Single-task Agent",
            complexity: "Low",
            when_to_use:
                "For high-frequency, repeatable tasks with narrow scope and clear schema outputs.",
            mistakes:
                "Trying to handle end-to-end workflows in one prompt without control checkpoints.",
        },
        AgentType::MultiStep => AgentTypeGuidance {
            agent_type,
            label: "Multi-step Agent",
            complexity: "Medium",
            when_to_use:
                "For deterministic workflow chains requiring handoffs, validations, and checkpoints.",
            mistakes:
                "Skipping explicit step contracts and failing to define fallback behavior per step.",
        },
        AgentType::MultiAgent => AgentTypeGuidance {
            agent_type,
            label: "Multi-agent System",
            complexity: "High",
            when_to_use:
                "For complex operations where specialist agents need orchestration and conflict resolution.",
            mistakes:
                "No coordinator policy, overlapping responsibilities, and missing shared memory protocol.",
        },
    }
}

/// Guidance for every agent type, in declaration order.
pub fn all_guidance() -> Vec<AgentTypeGuidance> {
    AgentType::ALL.into_iter().map(guidance_for).collect()
}

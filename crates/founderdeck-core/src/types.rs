use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A floating-point value constrained to [0.0, 100.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    pub fn new(v: f64) -> Option<Self> {
        if (0.0..=100.0).contains(&v) {
            Some(Self(v))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = f64::deserialize(deserializer)?;
        Percent::new(v).ok_or_else(|| serde::de::Error::custom(format!("{v} not in [0.0, 100.0]")))
    }
}

/// A floating-point value constrained to [0.0, +inf).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NonNegative(f64);

impl NonNegative {
    pub fn new(v: f64) -> Option<Self> {
        if v.is_finite() && v >= 0.0 {
            Some(Self(v))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for NonNegative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for NonNegative {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for NonNegative {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let v = f64::deserialize(deserializer)?;
        NonNegative::new(v)
            .ok_or_else(|| serde::de::Error::custom(format!("{v} is negative or not finite")))
    }
}

/// Recommendation tiers for an automation candidate, ordered from
/// least to most automation-worthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutomationRecommendation {
    DoNotAutomate,
    BuildSimpleScript,
    BuildSingleTaskAgent,
    BuildMultiStepAgent,
}

impl AutomationRecommendation {
    /// Human-readable label for tables and summaries.
    pub fn label(self) -> &'static str {
        match self {
            AutomationRecommendation::DoNotAutomate => "Do not automate",
            AutomationRecommendation::BuildSimpleScript => "Build simple script",
            AutomationRecommendation::BuildSingleTaskAgent => "Build single-task agent",
            AutomationRecommendation::BuildMultiStepAgent => "Build multi-step agent",
        }
    }
}

impl fmt::Display for AutomationRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five standard ways an autonomous agent fails in production.
///
/// Variant order is the catalog order; generated failure-mode sets
/// always come back in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureScenarioType {
    WrongOutputFormat,
    ToolFailure,
    Hallucination,
    ContextMisinterpretation,
    IrreversibleActionRisk,
}

impl FailureScenarioType {
    /// All scenario kinds in catalog order.
    pub const ALL: [FailureScenarioType; 5] = [
        FailureScenarioType::WrongOutputFormat,
        FailureScenarioType::ToolFailure,
        FailureScenarioType::Hallucination,
        FailureScenarioType::ContextMisinterpretation,
        FailureScenarioType::IrreversibleActionRisk,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentType {
    SingleTask,
    MultiStep,
    MultiAgent,
}

impl AgentType {
    pub const ALL: [AgentType; 3] = [
        AgentType::SingleTask,
        AgentType::MultiStep,
        AgentType::MultiAgent,
    ];
}

impl FromStr for AgentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "single_task" => Ok(AgentType::SingleTask),
            "multi_step" => Ok(AgentType::MultiStep),
            "multi_agent" => Ok(AgentType::MultiAgent),
            other => Err(format!(
                "unknown agent type \"{other}\". available: single_task, multi_step, multi_agent"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rejects_out_of_range() {
        assert!(Percent::new(0.0).is_some());
        assert!(Percent::new(100.0).is_some());
        assert!(Percent::new(-0.01).is_none());
        assert!(Percent::new(100.01).is_none());
    }

    #[test]
    fn percent_deserialize_names_value() {
        let err = serde_json::from_str::<Percent>("120.5").unwrap_err();
        assert!(err.to_string().contains("120.5"));
    }

    #[test]
    fn non_negative_rejects_negative_and_nan() {
        assert!(NonNegative::new(0.0).is_some());
        assert!(NonNegative::new(-1.0).is_none());
        assert!(NonNegative::new(f64::NAN).is_none());
    }

    #[test]
    fn recommendation_wire_form_is_screaming_snake() {
        let json = serde_json::to_string(&AutomationRecommendation::BuildSingleTaskAgent).unwrap();
        assert_eq!(json, "\"BUILD_SINGLE_TASK_AGENT\"");
        let back: AutomationRecommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AutomationRecommendation::BuildSingleTaskAgent);
    }

    #[test]
    fn recommendation_order_is_monotonic() {
        use AutomationRecommendation::*;
        assert!(DoNotAutomate < BuildSimpleScript);
        assert!(BuildSimpleScript < BuildSingleTaskAgent);
        assert!(BuildSingleTaskAgent < BuildMultiStepAgent);
    }

    #[test]
    fn scenario_catalog_order_is_fixed() {
        assert_eq!(
            FailureScenarioType::ALL[4],
            FailureScenarioType::IrreversibleActionRisk
        );
        let json = serde_json::to_string(&FailureScenarioType::WrongOutputFormat).unwrap();
        assert_eq!(json, "\"WRONG_OUTPUT_FORMAT\"");
    }

    #[test]
    fn agent_type_parses_kebab_and_snake() {
        assert_eq!("single-task".parse::<AgentType>(), Ok(AgentType::SingleTask));
        assert_eq!("MULTI_AGENT".parse::<AgentType>(), Ok(AgentType::MultiAgent));
        assert!("swarm".parse::<AgentType>().is_err());
    }
}

//! Upstream input validation.
//!
//! Engine functions are total over their documented domain, so every
//! malformed document must be rejected here, before the engine runs.
//! Numeric range rules live in the [`crate::types`] newtypes and fail
//! during deserialization; this module adds the field-level rules that
//! types alone cannot express and packages both for `fdk check`.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::records::{
    AutomationChecklist, DebugSample, FinancialInputs, LeverageInputs,
};

/// A validation failure naming the offending field.
#[derive(Debug, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

fn min_len(field: &'static str, value: &str, min: usize) -> Result<(), ValidationError> {
    let len = value.trim().chars().count();
    if len < min {
        return Err(ValidationError {
            field,
            reason: format!("must be at least {min} characters, got {len}"),
        });
    }
    Ok(())
}

/// Field rules for a debug sample, mirroring the intake form.
///
/// The diagnostics heuristic itself accepts any strings; these minimums
/// keep junk submissions out of the stored diagnostic history.
pub fn validate_debug_sample(sample: &DebugSample) -> Result<(), ValidationError> {
    min_len("expectedBehavior", &sample.expected_behavior, 8)?;
    min_len("actualBehavior", &sample.actual_behavior, 8)?;
    min_len("agentPrompt", &sample.agent_prompt, 10)?;
    min_len("sampleInput", &sample.sample_input, 2)?;
    min_len("sampleOutput", &sample.sample_output, 2)?;
    Ok(())
}

/// Kinds of input document `fdk check` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Automation,
    Leverage,
    Finance,
    Debug,
}

impl fmt::Display for DocKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocKind::Automation => "automation",
            DocKind::Leverage => "leverage",
            DocKind::Finance => "finance",
            DocKind::Debug => "debug",
        };
        f.write_str(name)
    }
}

impl FromStr for DocKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "automation" => Ok(DocKind::Automation),
            "leverage" => Ok(DocKind::Leverage),
            "finance" => Ok(DocKind::Finance),
            "debug" => Ok(DocKind::Debug),
            other => Err(format!(
                "unknown document kind \"{other}\". available: automation, leverage, finance, debug"
            )),
        }
    }
}

/// Structured check result for `fdk check --json`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub file: String,
    pub kind: DocKind,
    pub pass: bool,
    pub errors: Vec<CheckIssue>,
    pub warnings: Vec<CheckIssue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckIssue {
    pub code: String,
    pub check: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn decode_issue(kind: DocKind, err: &serde_json::Error) -> CheckIssue {
    CheckIssue {
        code: "E_SCHEMA".to_string(),
        check: format!("{kind}.decode"),
        message: err.to_string(),
        path: None,
    }
}

/// Check one JSON document against the rules for `kind`.
pub fn check_document(kind: DocKind, data: &serde_json::Value, file: &str) -> CheckReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match kind {
        DocKind::Automation => {
            if let Err(e) = serde_json::from_value::<AutomationChecklist>(data.clone()) {
                errors.push(decode_issue(kind, &e));
            }
        }
        DocKind::Leverage => {
            if let Err(e) = serde_json::from_value::<LeverageInputs>(data.clone()) {
                errors.push(decode_issue(kind, &e));
            }
        }
        DocKind::Finance => match serde_json::from_value::<FinancialInputs>(data.clone()) {
            Err(e) => errors.push(decode_issue(kind, &e)),
            Ok(inputs) => {
                // Zero denominators are valid input; the engine collapses
                // them to 0 by policy. Flag them so the caller knows the
                // derived fields will read as zero.
                if inputs.burn_rate.value() <= 0.0 {
                    warnings.push(CheckIssue {
                        code: "W_NO_BURN".to_string(),
                        check: "finance.burn_rate".to_string(),
                        message: "burn rate is zero; runway will be reported as 0".to_string(),
                        path: Some("burnRate".to_string()),
                    });
                }
                if inputs.revenue.value() <= 0.0 {
                    warnings.push(CheckIssue {
                        code: "W_NO_REVENUE".to_string(),
                        check: "finance.revenue".to_string(),
                        message: "revenue is zero; gross margin will be reported as 0".to_string(),
                        path: Some("revenue".to_string()),
                    });
                }
            }
        },
        DocKind::Debug => match serde_json::from_value::<DebugSample>(data.clone()) {
            Err(e) => errors.push(decode_issue(kind, &e)),
            Ok(sample) => {
                if let Err(e) = validate_debug_sample(&sample) {
                    errors.push(CheckIssue {
                        code: "E_MIN_LEN".to_string(),
                        check: format!("{kind}.{}", e.field),
                        message: e.reason.clone(),
                        path: Some(e.field.to_string()),
                    });
                }
            }
        },
    }

    CheckReport {
        file: file.to_string(),
        kind,
        pass: errors.is_empty(),
        errors,
        warnings,
    }
}

//! Rule-based diagnostics over a debugging sample.
//!
//! Five independent text-pattern checks, each a binary classification
//! with a canned judgment string per outcome. All thresholds and
//! keyword lists are named constants so the heuristic stays auditable.
//! Lengths are character counts, not tokens.

use std::sync::LazyLock;

use regex::Regex;

use founderdeck_core::records::{DebugSample, DiagnosticReport};

/// Prompts shorter than this (trimmed) are flagged as ambiguous.
pub const AMBIGUITY_PROMPT_MIN_LEN: usize = 120;

/// Combined prompt + sample-input length above which context overload
/// is likely. Exactly this length is still manageable.
pub const CONTEXT_OVERLOAD_THRESHOLD: usize = 3500;

static SCHEMA_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)json|schema|format|fields|required").expect("valid pattern"));

static GUARDRAIL_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)guardrail|do not|never|must not|approval|validate").expect("valid pattern")
});

static TOOL_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)api|database|web search|crm|tool").expect("valid pattern"));

static TOOL_FAILURE_KEYWORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)error|timeout|failed|unavailable").expect("valid pattern"));

const AMBIGUITY_FLAGGED: &str = "Prompt is ambiguous: add explicit success criteria, schema contract, and deterministic decision rules.";
const AMBIGUITY_CLEAR: &str =
    "Prompt clarity is acceptable but can still be improved with stricter output contracts.";

const GUARDRAILS_PRESENT: &str = "Guardrails exist, but validate they are enforced in post-processing.";
const GUARDRAILS_MISSING: &str = "Missing guardrails: add irreversible-action confirmation and validation checks before tool execution.";

const TOOL_RISK_DETECTED: &str =
    "Tool dependency risk detected: add timeout retries, fallback queue, and tool health checks.";
const TOOL_RISK_CLEAR: &str = "No immediate tool failure detected, keep dependency checks in place.";

const CONTEXT_OVERLOADED: &str =
    "Context overload likely: summarize context and split long workflows into staged prompts.";
const CONTEXT_MANAGEABLE: &str = "Context size appears manageable for current test case.";

const SCHEMA_PRESENT: &str =
    "Output schema instruction exists. Add schema validator to guarantee consistency.";
const SCHEMA_MISMATCH: &str =
    "Output schema mismatch: enforce explicit JSON format and reject non-compliant outputs.";

const SUGGESTED_FIXES: [&str; 4] = [
    "Define exact input and output schema in prompt header.",
    "Add numbered workflow steps with explicit fallback behavior.",
    "Introduce confidence threshold and manual review trigger.",
    "Run output validator before writing to external tools.",
];

fn has_schema_instruction(text: &str) -> bool {
    SCHEMA_KEYWORDS.is_match(text)
}

fn has_guardrails(prompt: &str) -> bool {
    GUARDRAIL_KEYWORDS.is_match(prompt)
}

fn detect_tool_dependency_risk(prompt: &str, actual_behavior: &str) -> bool {
    TOOL_KEYWORDS.is_match(prompt) && TOOL_FAILURE_KEYWORDS.is_match(actual_behavior)
}

fn detect_context_overload(input: &str, prompt: &str) -> bool {
    input.chars().count() + prompt.chars().count() > CONTEXT_OVERLOAD_THRESHOLD
}

fn has_structured_output(output: &str) -> bool {
    output.contains('{') || output.contains('[')
}

/// Run all five checks over a sample and assemble the report.
///
/// Every string input, including empty, is valid: the checks are total
/// and run unconditionally. The schema-keyword test feeds both the
/// ambiguity and schema-gap checks, so it is evaluated once; the checks
/// still classify independently.
pub fn build_diagnostics(sample: &DebugSample) -> DiagnosticReport {
    let schema_instruction = has_schema_instruction(&sample.agent_prompt);

    let ambiguous = sample.agent_prompt.trim().chars().count() < AMBIGUITY_PROMPT_MIN_LEN
        || !schema_instruction;

    let ambiguity = if ambiguous {
        AMBIGUITY_FLAGGED
    } else {
        AMBIGUITY_CLEAR
    };

    let guardrails = if has_guardrails(&sample.agent_prompt) {
        GUARDRAILS_PRESENT
    } else {
        GUARDRAILS_MISSING
    };

    let tool_risk = if detect_tool_dependency_risk(&sample.agent_prompt, &sample.actual_behavior) {
        TOOL_RISK_DETECTED
    } else {
        TOOL_RISK_CLEAR
    };

    let context_risk = if detect_context_overload(&sample.sample_input, &sample.agent_prompt) {
        CONTEXT_OVERLOADED
    } else {
        CONTEXT_MANAGEABLE
    };

    let schema_gap = if schema_instruction && has_structured_output(&sample.sample_output) {
        SCHEMA_PRESENT
    } else {
        SCHEMA_MISMATCH
    };

    DiagnosticReport {
        ambiguity: ambiguity.to_string(),
        guardrails: guardrails.to_string(),
        tool_risk: tool_risk.to_string(),
        context_risk: context_risk.to_string(),
        schema_gap: schema_gap.to_string(),
        suggested_fixes: SUGGESTED_FIXES.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DebugSample {
        DebugSample {
            expected_behavior: "Returns a valid summary".to_string(),
            actual_behavior: "Returned a summary".to_string(),
            agent_prompt: "Summarize the meeting notes.".to_string(),
            sample_input: "notes".to_string(),
            sample_output: "summary text".to_string(),
        }
    }

    /// A prompt long enough to clear the 120-char ambiguity floor, with
    /// a schema keyword.
    fn clear_prompt() -> String {
        "You must respond with a JSON object matching the output schema. \
         Include the fields summary, owner, and due_date, and validate \
         every entry before returning."
            .to_string()
    }

    #[test]
    fn short_prompt_is_ambiguous() {
        let report = build_diagnostics(&sample());
        assert_eq!(report.ambiguity, AMBIGUITY_FLAGGED);
    }

    #[test]
    fn long_prompt_without_schema_keywords_is_still_ambiguous() {
        let mut s = sample();
        s.agent_prompt = "Please write a thorough and considered summary of the meeting, \
                          covering every decision taken and every action item raised by any \
                          attendee during the call."
            .to_string();
        assert!(s.agent_prompt.chars().count() >= AMBIGUITY_PROMPT_MIN_LEN);
        let report = build_diagnostics(&s);
        assert_eq!(report.ambiguity, AMBIGUITY_FLAGGED);
    }

    #[test]
    fn long_schema_prompt_is_clear() {
        let mut s = sample();
        s.agent_prompt = clear_prompt();
        assert!(s.agent_prompt.chars().count() >= AMBIGUITY_PROMPT_MIN_LEN);
        let report = build_diagnostics(&s);
        assert_eq!(report.ambiguity, AMBIGUITY_CLEAR);
    }

    #[test]
    fn guardrail_keywords_are_case_insensitive() {
        let mut s = sample();
        s.agent_prompt = "NEVER delete records without checking.".to_string();
        assert_eq!(build_diagnostics(&s).guardrails, GUARDRAILS_PRESENT);

        s.agent_prompt = "Summarize the notes quickly.".to_string();
        assert_eq!(build_diagnostics(&s).guardrails, GUARDRAILS_MISSING);
    }

    #[test]
    fn tool_risk_requires_both_clauses() {
        let mut s = sample();
        // Tool keyword in prompt, no failure keyword in behavior.
        s.agent_prompt = "Query the CRM and update the pipeline.".to_string();
        s.actual_behavior = "Updated three records".to_string();
        assert_eq!(build_diagnostics(&s).tool_risk, TOOL_RISK_CLEAR);

        // Failure keyword in behavior, no tool keyword in prompt.
        s.agent_prompt = "Summarize the notes.".to_string();
        s.actual_behavior = "Run failed after two minutes".to_string();
        assert_eq!(build_diagnostics(&s).tool_risk, TOOL_RISK_CLEAR);

        // Both: flagged.
        s.agent_prompt = "Query the CRM and update the pipeline.".to_string();
        s.actual_behavior = "Request timeout while updating".to_string();
        assert_eq!(build_diagnostics(&s).tool_risk, TOOL_RISK_DETECTED);
    }

    #[test]
    fn context_overload_boundary_is_exclusive() {
        let mut s = sample();
        s.agent_prompt = "p".repeat(1500);

        // Exactly at the threshold: manageable.
        s.sample_input = "i".repeat(CONTEXT_OVERLOAD_THRESHOLD - 1500);
        assert_eq!(build_diagnostics(&s).context_risk, CONTEXT_MANAGEABLE);

        // One past: overloaded.
        s.sample_input.push('i');
        assert_eq!(build_diagnostics(&s).context_risk, CONTEXT_OVERLOADED);
    }

    #[test]
    fn context_length_counts_chars_not_bytes() {
        let mut s = sample();
        // Multibyte chars: byte length far exceeds the threshold while
        // the char count stays at it.
        s.agent_prompt = "\u{00e9}".repeat(CONTEXT_OVERLOAD_THRESHOLD);
        s.sample_input = String::new();
        assert_eq!(build_diagnostics(&s).context_risk, CONTEXT_MANAGEABLE);
    }

    #[test]
    fn schema_gap_needs_keyword_and_structured_output() {
        let mut s = sample();
        s.agent_prompt = clear_prompt();
        s.sample_output = "{\"summary\": \"done\"}".to_string();
        assert_eq!(build_diagnostics(&s).schema_gap, SCHEMA_PRESENT);

        // Keyword present, output unstructured.
        s.sample_output = "plain prose".to_string();
        assert_eq!(build_diagnostics(&s).schema_gap, SCHEMA_MISMATCH);

        // Structured output, no keyword in prompt.
        s.agent_prompt = "Summarize the notes.".to_string();
        s.sample_output = "[1, 2, 3]".to_string();
        assert_eq!(build_diagnostics(&s).schema_gap, SCHEMA_MISMATCH);
    }

    #[test]
    fn schema_gap_accepts_array_output() {
        let mut s = sample();
        s.agent_prompt = clear_prompt();
        s.sample_output = "[{\"id\": 1}]".to_string();
        assert_eq!(build_diagnostics(&s).schema_gap, SCHEMA_PRESENT);
    }

    #[test]
    fn suggested_fixes_are_fixed_regardless_of_outcomes() {
        let a = build_diagnostics(&sample());
        let mut s = sample();
        s.agent_prompt = clear_prompt();
        let b = build_diagnostics(&s);
        assert_eq!(a.suggested_fixes, b.suggested_fixes);
        assert_eq!(a.suggested_fixes.len(), 4);
        assert_eq!(
            a.suggested_fixes[0],
            "Define exact input and output schema in prompt header."
        );
    }

    #[test]
    fn empty_sample_is_valid_input() {
        let empty = DebugSample {
            expected_behavior: String::new(),
            actual_behavior: String::new(),
            agent_prompt: String::new(),
            sample_input: String::new(),
            sample_output: String::new(),
        };
        let report = build_diagnostics(&empty);
        assert_eq!(report.ambiguity, AMBIGUITY_FLAGGED);
        assert_eq!(report.guardrails, GUARDRAILS_MISSING);
        assert_eq!(report.tool_risk, TOOL_RISK_CLEAR);
        assert_eq!(report.context_risk, CONTEXT_MANAGEABLE);
        assert_eq!(report.schema_gap, SCHEMA_MISMATCH);
    }

    #[test]
    fn report_is_deterministic() {
        assert_eq!(build_diagnostics(&sample()), build_diagnostics(&sample()));
    }
}

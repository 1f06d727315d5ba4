#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::json;

use founderdeck_core::records::{AutomationChecklist, DebugSample, FinancialInputs, LeverageInputs};
use founderdeck_core::text::parse_line_list;
use founderdeck_core::types::AgentType;
use founderdeck_core::validate::{check_document, validate_debug_sample, CheckReport, DocKind};
use founderdeck_engine::diagnostics::build_diagnostics;
use founderdeck_engine::failure::generate_standard_failure_modes;
use founderdeck_engine::score::automation::{compute_automation_score, recommendation_for_score};
use founderdeck_engine::score::finance::derive_financials;
use founderdeck_engine::score::leverage::compute_leverage_score;

#[derive(Parser)]
#[command(
    name = "fdk",
    version,
    about = "Founder-ops scoring and diagnostics. Unix-friendly."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Score an automation checklist and recommend a build tier.
    Automation {
        /// Path to checklist .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,
    },

    /// Compute the composite leverage score from operating metrics.
    Leverage {
        /// Path to leverage inputs .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,
    },

    /// Derive gross margin and runway from financial inputs.
    Finance {
        /// Path to financial inputs .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,
    },

    /// Generate the standard five failure modes for an agent.
    FailureModes {
        /// Require manual confirmation for irreversible actions.
        #[arg(long)]
        confirm_destructive: bool,

        /// Guardrail overrides, textarea-style (newline/comma separated,
        /// applied by position).
        #[arg(long, default_value = "")]
        guardrails: String,
    },

    /// Run rule-based diagnostics over a debug sample.
    Diagnose {
        /// Path to debug sample .json (or "-" / omit for stdin).
        #[arg(default_value = "-")]
        file: String,
    },

    /// Show agent-type guidance (all types, or one).
    Guidance {
        /// Agent type: single_task, multi_step, multi_agent.
        agent_type: Option<String>,
    },

    /// Validate input documents against their field rules.
    Check {
        /// One or more .json file paths.
        #[arg(required = true)]
        files: Vec<String>,

        /// Document kind: automation, leverage, finance, debug.
        #[arg(long)]
        kind: DocKind,

        /// Output structured JSON reports.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.cmd {
        Cmd::Automation { file } => cmd_automation(&file),
        Cmd::Leverage { file } => cmd_leverage(&file),
        Cmd::Finance { file } => cmd_finance(&file),
        Cmd::FailureModes {
            confirm_destructive,
            guardrails,
        } => cmd_failure_modes(confirm_destructive, &guardrails),
        Cmd::Diagnose { file } => cmd_diagnose(&file),
        Cmd::Guidance { agent_type } => cmd_guidance(agent_type.as_deref()),
        Cmd::Check { files, kind, json } => return cmd_check(&files, kind, json),
    };

    match result {
        Ok(data) => {
            emit(json!({
                "success": true,
                "data": data,
                "generatedAt": Utc::now().to_rfc3339(),
            }));
            ExitCode::SUCCESS
        }
        Err(err) => {
            emit(json!({
                "success": false,
                "error": format!("{err:#}"),
            }));
            ExitCode::FAILURE
        }
    }
}

fn emit(envelope: serde_json::Value) {
    match serde_json::to_string_pretty(&envelope) {
        Ok(text) => println!("{text}"),
        Err(err) => eprintln!("cannot serialize output: {err}"),
    }
}

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file).with_context(|| format!("cannot read {file}"))
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(file: &str) -> Result<T> {
    let content = read_input(file)?;
    serde_json::from_str(&content).map_err(|e| anyhow::anyhow!("invalid input: {e}"))
}

fn cmd_automation(file: &str) -> Result<serde_json::Value> {
    let checklist: AutomationChecklist = parse_json(file)?;
    let score = compute_automation_score(&checklist);
    let recommendation = recommendation_for_score(score);
    Ok(json!({
        "score": score,
        "recommendation": recommendation,
        "recommendationLabel": recommendation.label(),
    }))
}

fn cmd_leverage(file: &str) -> Result<serde_json::Value> {
    let inputs: LeverageInputs = parse_json(file)?;
    Ok(json!({
        "leverageScore": compute_leverage_score(&inputs),
    }))
}

fn cmd_finance(file: &str) -> Result<serde_json::Value> {
    let inputs: FinancialInputs = parse_json(file)?;
    let derived = derive_financials(&inputs);
    Ok(serde_json::to_value(derived)?)
}

fn cmd_failure_modes(confirm_destructive: bool, guardrails: &str) -> Result<serde_json::Value> {
    let overrides = parse_line_list(guardrails);
    let modes = generate_standard_failure_modes(confirm_destructive, &overrides);
    Ok(serde_json::to_value(modes)?)
}

fn cmd_diagnose(file: &str) -> Result<serde_json::Value> {
    let sample: DebugSample = parse_json(file)?;
    validate_debug_sample(&sample)?;
    let report = build_diagnostics(&sample);
    Ok(serde_json::to_value(report)?)
}

fn cmd_guidance(agent_type: Option<&str>) -> Result<serde_json::Value> {
    match agent_type {
        Some(raw) => {
            let parsed: AgentType = raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            Ok(serde_json::to_value(founderdeck_core::guidance::guidance_for(parsed))?)
        }
        None => Ok(serde_json::to_value(founderdeck_core::guidance::all_guidance())?),
    }
}

fn cmd_check(files: &[String], kind: DocKind, json_out: bool) -> ExitCode {
    match run_check(files, kind, json_out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_check(files: &[String], kind: DocKind, json_out: bool) -> Result<()> {
    let mut reports: Vec<CheckReport> = Vec::new();

    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("cannot read {file}: {e}"))?;
        let data: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("{file}: invalid JSON: {e}"))?;
        reports.push(check_document(kind, &data, file));
    }

    if json_out {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            if report.pass {
                eprintln!("  ok  {} ({})", report.file, report.kind);
            } else {
                eprintln!("  FAIL {} ({})", report.file, report.kind);
            }
            for e in &report.errors {
                eprintln!(
                    "  error {}: {} {}",
                    e.code,
                    e.message,
                    e.path.as_deref().unwrap_or("")
                );
            }
            for w in &report.warnings {
                eprintln!(
                    "  warn  {}: {} {}",
                    w.code,
                    w.message,
                    w.path.as_deref().unwrap_or("")
                );
            }
        }
    }

    let failed = reports.iter().filter(|r| !r.pass).count();
    if failed > 0 {
        bail!("{failed} file(s) failed validation");
    }
    Ok(())
}

//! Report rendering and exit codes

use crate::args::OutputFormat;
use anyhow::Result;
use application::{ExecutionReport, OutcomeStatus, RunStatus};
use colored::Colorize;

pub const EXIT_OK: u8 = 0;
pub const EXIT_POLICY_FAILED: u8 = 1;
pub const EXIT_FATAL: u8 = 2;

pub fn render(report: &ExecutionReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &ExecutionReport) -> String {
    let mut out = String::new();
    let mode = if report.dry_run { " (dry run)" } else { "" };
    out.push_str(&format!(
        "Rule group {} in scope {}{}\n",
        report.rule_group_name.bold(),
        report.scope,
        mode
    ));

    if report.status == RunStatus::NothingToDo {
        out.push_str("No Web ACLs found, nothing to do\n");
        return out;
    }

    for outcome in &report.outcomes {
        let status = match &outcome.status {
            OutcomeStatus::Added { priority } => format!("added at priority {priority}").green(),
            OutcomeStatus::WouldAdd { priority } => {
                format!("would add at priority {priority}").cyan()
            }
            OutcomeStatus::AlreadyPresent => "already present".normal(),
            OutcomeStatus::Failed { kind } => format!("failed ({kind:?})").red(),
        };
        out.push_str(&format!("  {:<40} {}", outcome.policy_name, status));
        if let Some(detail) = &outcome.detail {
            out.push_str(&format!(": {detail}"));
        }
        out.push('\n');
    }

    let summary = report.summary();
    out.push_str(&format!(
        "{} Web ACLs: {} added, {} would add, {} already present, {} failed\n",
        summary.total,
        summary.added,
        summary.would_add,
        summary.already_present,
        summary.failed
    ));
    out
}

pub fn exit_code(report: &ExecutionReport) -> u8 {
    if report.has_failures() {
        EXIT_POLICY_FAILED
    } else {
        EXIT_OK
    }
}

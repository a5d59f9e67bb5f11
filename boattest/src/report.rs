//! Human- and machine-readable rendering of a [`GradeReport`].

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::core::grader::Verdict;
use crate::grade::GradeReport;

const IGNORED_MESSAGE: &str = "IMPORTANT: These lines (with line numbers) were ignored. \
                               Make sure they were not mistakenly ignored.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Render a report; the first line always states the verdict.
pub fn render(report: &GradeReport, format: Format, list_ignored: bool) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(report, list_ignored)),
        Format::Json => {
            let mut payload =
                serde_json::to_string_pretty(report).context("serialize grade report")?;
            payload.push('\n');
            Ok(payload)
        }
    }
}

pub fn render_text(report: &GradeReport, list_ignored: bool) -> String {
    let mut lines = Vec::new();
    match &report.verdict {
        Verdict::Success { total } => lines.push(format!(
            "Success! All {total} people have been successfully moved to Molokai."
        )),
        Verdict::Failed(failure) => {
            lines.push(match &failure.line {
                Some(line) => format!("Failure at line {}, which is: {}", line.number, line.text),
                None => {
                    "Failure: [constraint 0] Simulation ended without everyone on Molokai."
                        .to_string()
                }
            });
            lines.push(failure.violation.to_string());
        }
        Verdict::Unusable { reason } => lines.push(format!("Unusable log file: {reason}")),
    }

    if list_ignored && !report.ignored.is_empty() {
        lines.push(String::new());
        lines.push(IGNORED_MESSAGE.to_string());
        lines.extend(
            report
                .ignored
                .iter()
                .map(|line| format!("{:>4} {}", line.number, line.text)),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

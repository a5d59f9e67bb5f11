//! Grading orchestration for `boattest <LOGFILE>`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::classifier::{LineKind, classify_line};
use crate::core::grader::{Grader, Verdict};
use crate::core::successors::SuccessorTable;
use crate::io::config::BoatConfig;

/// A non-blank line that matched neither a declaration nor a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgnoredLine {
    pub number: usize,
    pub text: String,
}

/// Verdict plus the lines the grader never looked at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeReport {
    pub verdict: Verdict,
    pub ignored: Vec<IgnoredLine>,
}

/// Grade log text line by line, stopping at the first halt.
pub fn grade_lines(text: &str, table: &SuccessorTable) -> GradeReport {
    let mut grader = Grader::new(table);
    let mut ignored = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let number = idx + 1;
        let step = match classify_line(line) {
            LineKind::Declaration => grader.declare(line, number),
            LineKind::Move(mv) => grader.apply_move(mv, line, number),
            LineKind::Blank => Ok(()),
            LineKind::Ignored => {
                debug!(line = number, "ignoring unrecognized line");
                ignored.push(IgnoredLine {
                    number,
                    text: line.to_string(),
                });
                Ok(())
            }
        };
        if let Err(halt) = step {
            debug!(line = number, "stopped reading log");
            return finish_report(halt.into(), ignored);
        }
    }

    finish_report(grader.finish(), ignored)
}

/// Read a log file and grade it with the configured rules.
pub fn grade_file(path: &Path, config: &BoatConfig) -> Result<GradeReport> {
    let table = config.successor_table()?;
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    // Simulator console output may carry stray non-UTF-8 bytes.
    let text = String::from_utf8_lossy(&bytes);
    debug!(path = %path.display(), rules = table.len(), "grading log");
    Ok(grade_lines(&text, &table))
}

fn finish_report(verdict: Verdict, ignored: Vec<IgnoredLine>) -> GradeReport {
    match &verdict {
        Verdict::Success { total } => info!(total, "all people reached Molokai"),
        Verdict::Failed(failure) => info!(
            line = failure.line.as_ref().map(|line| line.number),
            violation = %failure.violation,
            "log failed"
        ),
        Verdict::Unusable { reason } => info!(%reason, "log unusable"),
    }
    if !ignored.is_empty() {
        warn!(count = ignored.len(), "some log lines were ignored");
    }
    GradeReport { verdict, ignored }
}

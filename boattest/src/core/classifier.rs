//! Deterministic classification of boat log lines.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::{Age, Island, Mode, Move};

static DECLARATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^ *\**Testing Boats with (only \d+ (child(ren)?|adult(s)?)|\d+ child(ren)?, \d+ adult(s)?)",
    )
    .expect("declaration pattern compiles")
});

static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^ *\**(?<age>Adult|Child) (rowing to (?<rowed>Molokai|Oahu)|arrived on (?<rode>Molokai|Oahu) as a passenger)",
    )
    .expect("move pattern compiles")
});

/// What a single log line means to the grader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `Testing Boats with ...` announcement.
    Declaration,
    /// Someone crossed.
    Move(Move),
    /// Empty or whitespace only.
    Blank,
    /// Anything else; reported after the run for manual audit.
    Ignored,
}

/// Classify one line (without its trailing newline).
///
/// Patterns anchor at the start of the line; trailing text is allowed.
pub fn classify_line(line: &str) -> LineKind {
    if DECLARATION_RE.is_match(line) {
        return LineKind::Declaration;
    }
    if let Some(mv) = parse_move(line) {
        return LineKind::Move(mv);
    }
    if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Ignored
    }
}

fn parse_move(line: &str) -> Option<Move> {
    let caps = MOVE_RE.captures(line)?;
    let age = match &caps["age"] {
        "Child" => Age::Child,
        _ => Age::Adult,
    };
    let (mode, island) = match (caps.name("rowed"), caps.name("rode")) {
        (Some(island), _) => (Mode::Row, island.as_str()),
        (None, Some(island)) => (Mode::Ride, island.as_str()),
        (None, None) => return None,
    };
    let destination = match island {
        "Oahu" => Island::Oahu,
        _ => Island::Molokai,
    };
    Some(Move::new(age, mode, destination))
}

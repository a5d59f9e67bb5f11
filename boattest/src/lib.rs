//! Grader for boat-crossing simulation logs.
//!
//! A log announces how many children and adults start on Oahu, then lists
//! every crossing of the single boat. The grader replays the crossings and
//! stops at the first one that breaks a rule.
//!
//! - **[`core`]**: Pure, deterministic logic (line classification, successor
//!   rules, head counts, the grading state machine). No I/O.
//! - **[`io`]**: Configuration loading.
//!
//! Orchestration modules ([`grade`], [`report`]) tie core logic to files and
//! output for the CLI.

pub mod core;
pub mod exit_codes;
pub mod grade;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

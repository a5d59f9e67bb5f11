//! Stable exit codes for the `boattest` CLI.

/// Everyone reached Molokai.
pub const OK: i32 = 0;
/// The log or config could not be read, or the successor rules are malformed.
pub const INVALID: i32 = 1;
/// The log breaks a puzzle rule. (2 is left to clap usage errors.)
pub const FAILURE: i32 = 3;
/// The file does not look like a boat log.
pub const UNUSABLE: i32 = 4;

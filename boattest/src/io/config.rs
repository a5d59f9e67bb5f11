//! Grader configuration stored in an optional TOML file.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::successors::{DEFAULT_RULES, SuccessorTable};

/// Grader configuration (TOML).
///
/// Missing fields fall back to the built-in rules and report settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoatConfig {
    /// Successor rules in shorthand, keyed by `start` or a move abbreviation.
    /// When present, replaces the built-in rules entirely.
    pub successors: BTreeMap<String, String>,

    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the ignored-lines audit after the verdict.
    pub list_ignored: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { list_ignored: true }
    }
}

impl Default for BoatConfig {
    fn default() -> Self {
        Self {
            successors: DEFAULT_RULES
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            report: ReportConfig::default(),
        }
    }
}

impl BoatConfig {
    /// Expand the configured successor rules.
    pub fn successor_table(&self) -> Result<SuccessorTable> {
        SuccessorTable::from_shorthand(
            self.successors
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )
        .context("expand configured successor rules")
    }
}

/// Load config from a TOML file the user named.
///
/// A missing file is an error; only an absent `--config` falls back to
/// `BoatConfig::default()`. Successor rules are expanded later, once, by
/// [`BoatConfig::successor_table`].
pub fn load_config(path: &Path) -> Result<BoatConfig> {
    if !path.exists() {
        return Err(anyhow!("config file {} does not exist", path.display()));
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

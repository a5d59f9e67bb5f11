//! Test-only helpers for writing boat logs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// A complete, legal run with three children.
pub const THREE_CHILDREN_LOG: &str = "\
***Testing Boats with only 3 children
Child rowing to Molokai.
Child rowing to Oahu.
Child rowing to Molokai.
Child arrived on Molokai as a passenger.
Child rowing to Oahu.
Child rowing to Molokai.
Child arrived on Molokai as a passenger.
";

/// A legal run with two children and one adult.
pub const MIXED_LOG: &str = "\
Testing Boats with 2 children, 1 adults
Child rowing to Molokai.
Child arrived on Molokai as a passenger.
Child rowing to Oahu.
Adult rowing to Molokai.
Child rowing to Oahu.
Child rowing to Molokai.
Child arrived on Molokai as a passenger.
";

/// Write `contents` to `dir/name` and return the path.
pub fn write_log(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

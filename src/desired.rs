//! Desired-state input
//!
//! The desired environment list arrives either as a YAML file (a sequence
//! of strings) or as an inline comma-separated list. Duplicates collapse
//! via set semantics; blank names are rejected at the boundary.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::{EnvsyncError, EnvsyncResult};

/// Build the desired set from an inline list of names
pub fn from_list(names: &[String]) -> EnvsyncResult<BTreeSet<String>> {
    into_set(names.to_vec())
}

/// Load the desired set from a YAML file containing a sequence of strings
pub fn from_file(path: &Path) -> EnvsyncResult<BTreeSet<String>> {
    if !path.exists() {
        return Err(EnvsyncError::InvalidInput(format!(
            "the file {} does not exist",
            path.display()
        )));
    }
    let text = fs::read_to_string(path)?;
    let names: Vec<String> = serde_yaml_ng::from_str(&text)?;
    into_set(names)
}

fn into_set(names: Vec<String>) -> EnvsyncResult<BTreeSet<String>> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(EnvsyncError::InvalidInput(
            "environment names must be non-empty".to_string(),
        ));
    }
    Ok(names.into_iter().collect())
}

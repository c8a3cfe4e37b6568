//! Input-list resolution.
//!
//! The query files come either from positional arguments or from a
//! line-delimited list file, which takes precedence when given. Paths are
//! used verbatim after trimming surrounding whitespace; nothing is
//! deduplicated and nothing is checked for existence.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Resolve the ordered input file list.
pub fn resolve_inputs(positional: Vec<String>, list_file: Option<&Path>) -> Result<Vec<String>> {
    match list_file {
        Some(path) => read_list_file(path),
        None => Ok(positional),
    }
}

/// Read one path per line, trimming whitespace and skipping blank lines.
pub fn read_list_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

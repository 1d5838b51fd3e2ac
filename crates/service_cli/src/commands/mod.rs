//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod demo;
pub mod shuffle;
pub mod sort;

use crate::{CliError, Result};

/// Parse a comma-separated list of integers such as `5,2,8`.
///
/// Whitespace around items is ignored. An empty or blank string yields an
/// empty list.
pub fn parse_values(raw: &str) -> Result<Vec<i64>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(str::trim)
        .map(|item| {
            item.parse::<i64>().map_err(|_| {
                CliError::invalid_argument(format!("'{}' is not a 64-bit integer", item))
            })
        })
        .collect()
}

/// Render integers the way the table output shows them: `[1, 2, 3]`.
pub fn format_list(values: &[i64]) -> String {
    format!("{:?}", values)
}

//! Sort command implementation
//!
//! Bubble-sorts a list of integers and reports the work done.

use serde::Serialize;
use shuffle_sort::{bubble_sort_in_place, compare_ints, reversed, SortStats};
use tracing::info;

use super::{format_list, parse_values};
use crate::config::OutputFormat;
use crate::Result;

/// Result of one sort, also the JSON output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOutcome {
    /// Values as parsed
    pub original: Vec<i64>,
    /// Values after sorting
    pub sorted: Vec<i64>,
    /// Whether the order was largest first
    pub descending: bool,
    /// Passes, comparisons and swaps made
    pub stats: SortStats,
}

/// Parses `values` and bubble-sorts them.
pub fn execute(values: &str, descending: bool) -> Result<SortOutcome> {
    let original = parse_values(values)?;
    info!(
        "Sorting {} values ({})",
        original.len(),
        if descending { "descending" } else { "ascending" }
    );

    let mut sorted = original.clone();
    let stats = if descending {
        bubble_sort_in_place(&mut sorted, reversed(compare_ints::<i64>))
    } else {
        bubble_sort_in_place(&mut sorted, compare_ints)
    };
    info!(
        "Sort complete: {} passes, {} comparisons, {} swaps",
        stats.passes, stats.comparisons, stats.swaps
    );

    Ok(SortOutcome {
        original,
        sorted,
        descending,
        stats,
    })
}

/// Run the sort command
pub fn run(values: &str, descending: bool, format: OutputFormat) -> Result<()> {
    let outcome = execute(values, descending)?;

    match format {
        OutputFormat::Table => {
            let stats = outcome.stats;
            println!("Original: {}", format_list(&outcome.original));
            println!("Sorted:   {}", format_list(&outcome.sorted));
            println!(
                "Passes: {}  Comparisons: {}  Swaps: {}",
                stats.passes, stats.comparisons, stats.swaps
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

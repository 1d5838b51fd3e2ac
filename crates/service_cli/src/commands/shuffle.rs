//! Shuffle command implementation
//!
//! Shuffles a list of integers with a seeded `SimpleRandom`.

use serde::Serialize;
use shuffle_sort::{shuffle, RandomGenerator, SimpleRandom};
use tracing::{debug, info};

use super::{format_list, parse_values};
use crate::config::OutputFormat;
use crate::Result;

/// Result of one shuffle, also the JSON output shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShuffleOutcome {
    /// Seed the generator started from
    pub seed: i64,
    /// Values as parsed
    pub original: Vec<i64>,
    /// Values after shuffling
    pub shuffled: Vec<i64>,
}

/// Parses `values` and shuffles them with a generator seeded from `seed`.
pub fn execute(values: &str, seed: i64) -> Result<ShuffleOutcome> {
    let original = parse_values(values)?;
    info!("Shuffling {} values with seed {}", original.len(), seed);

    let shuffled = shuffle(
        original.clone(),
        RandomGenerator::new(SimpleRandom::new(seed)),
    )?;
    debug!("Draws consumed: {}", original.len().saturating_sub(1));

    Ok(ShuffleOutcome {
        seed,
        original,
        shuffled,
    })
}

/// Run the shuffle command
pub fn run(values: &str, seed: i64, format: OutputFormat) -> Result<()> {
    let outcome = execute(values, seed)?;

    match format {
        OutputFormat::Table => {
            println!("Original: {}", format_list(&outcome.original));
            println!("Shuffled: {}", format_list(&outcome.shuffled));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
    }

    Ok(())
}

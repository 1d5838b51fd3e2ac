//! Demo command: shuffle and sort integers and people.
//!
//! Walks through the two standard scenarios:
//! - Ten integers shuffled with `seed` and bubble-sorted back
//! - Four `Person` records shuffled with `people_seed` and sorted by age
//!
//! # Expected Output (defaults)
//!
//! ```text
//! === Shuffle & Sort Demo ===
//!
//! Original numbers: [5, 2, 8, 1, 9, 3, 7, 4, 6, 10]
//! Shuffled numbers: [2, 6, 4, 10, 5, 7, 9, 1, 8, 3]
//! Sorted numbers:   [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
//! ```
//!
//! Both sorted results are checked before printing; an unsorted result is
//! reported as a verification error.

use serde_json::json;
use shuffle_sort::{
    bubble_sort, compare_ints, compare_persons_by_age, is_sorted_by, shuffle, Person,
    SimpleRandom,
};
use tracing::info;

use super::format_list;
use crate::config::OutputFormat;
use crate::{CliError, Result};

/// Integers used by the numbers scenario.
pub const DEMO_NUMBERS: [i64; 10] = [5, 2, 8, 1, 9, 3, 7, 4, 6, 10];

/// People used by the people scenario.
pub fn demo_people() -> Vec<Person> {
    vec![
        Person::new("Alice", 30),
        Person::new("Bob", 25),
        Person::new("Charlie", 35),
        Person::new("Diana", 28),
    ]
}

/// Results of both scenarios.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    /// Numbers after shuffling
    pub shuffled_numbers: Vec<i64>,
    /// Numbers after sorting
    pub sorted_numbers: Vec<i64>,
    /// People after shuffling
    pub shuffled_people: Vec<Person>,
    /// People after sorting by age
    pub sorted_people: Vec<Person>,
}

/// Executes both scenarios and verifies the sorted results.
pub fn execute(seed: i64, people_seed: i64) -> Result<DemoOutcome> {
    info!("[Demo] Shuffling numbers with seed {}", seed);
    let mut rng = SimpleRandom::new(seed);
    let shuffled_numbers = shuffle(DEMO_NUMBERS.to_vec(), &mut rng)?;
    let sorted_numbers = bubble_sort(shuffled_numbers.clone(), compare_ints);

    if !is_sorted_by(&sorted_numbers, compare_ints) {
        return Err(CliError::verification(format!(
            "numbers not sorted: {}",
            format_list(&sorted_numbers)
        )));
    }

    info!("[Demo] Shuffling people with seed {}", people_seed);
    let mut people_rng = SimpleRandom::new(people_seed);
    let shuffled_people = shuffle(demo_people(), &mut people_rng)?;
    let sorted_people = bubble_sort(shuffled_people.clone(), compare_persons_by_age);

    if !is_sorted_by(&sorted_people, compare_persons_by_age) {
        return Err(CliError::verification("people not sorted by age"));
    }

    Ok(DemoOutcome {
        shuffled_numbers,
        sorted_numbers,
        shuffled_people,
        sorted_people,
    })
}

/// Runs the demo and prints the outcome.
pub fn run(seed: i64, people_seed: i64, format: OutputFormat) -> Result<()> {
    let outcome = execute(seed, people_seed)?;

    match format {
        OutputFormat::Table => print_table(&outcome),
        OutputFormat::Json => {
            let output = json!({
                "seed": seed,
                "people_seed": people_seed,
                "numbers": {
                    "original": DEMO_NUMBERS,
                    "shuffled": outcome.shuffled_numbers,
                    "sorted": outcome.sorted_numbers,
                },
                "people": {
                    "original": demo_people(),
                    "shuffled": outcome.shuffled_people,
                    "sorted_by_age": outcome.sorted_people,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    info!("[Demo] Complete");
    Ok(())
}

fn print_table(outcome: &DemoOutcome) {
    println!("=== Shuffle & Sort Demo ===");
    println!();
    println!("Original numbers: {}", format_list(&DEMO_NUMBERS));
    println!("Shuffled numbers: {}", format_list(&outcome.shuffled_numbers));
    println!("Sorted numbers:   {}", format_list(&outcome.sorted_numbers));

    print_people("Original people:", &demo_people());
    print_people("Shuffled people:", &outcome.shuffled_people);
    print_people("Sorted by age:", &outcome.sorted_people);
}

fn print_people(title: &str, people: &[Person]) {
    println!();
    println!("{}", title);
    for person in people {
        println!("  {}", person);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds() {
        let outcome = execute(42, 123).unwrap();
        assert_eq!(outcome.shuffled_numbers, vec![2, 6, 4, 10, 5, 7, 9, 1, 8, 3]);
        assert_eq!(outcome.sorted_numbers, (1..=10).collect::<Vec<i64>>());

        let names: Vec<&str> = outcome
            .shuffled_people
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Diana", "Bob", "Alice", "Charlie"]);

        let ages: Vec<u32> = outcome.sorted_people.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![25, 28, 30, 35]);
    }

    #[test]
    fn test_any_seed_sorts() {
        for seed in [-1, 0, 1, i64::MAX, i64::MIN] {
            let outcome = execute(seed, seed).unwrap();
            assert_eq!(outcome.sorted_numbers, (1..=10).collect::<Vec<i64>>());
            assert_eq!(outcome.sorted_people[0].name, "Bob");
        }
    }
}

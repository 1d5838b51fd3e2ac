//! Person record used by the demonstration workflows.

use std::fmt;

/// A named person with an age in whole years.
///
/// Ordering is deliberately not derived: callers pick a comparator such as
/// [`compare_persons_by_age`](crate::compare_persons_by_age) or
/// [`compare_persons_by_name`](crate::compare_persons_by_name).
///
/// # Examples
/// ```
/// use shuffle_sort::Person;
///
/// let alice = Person::new("Alice", 30);
/// assert_eq!(alice.to_string(), "Alice (age 30)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl Person {
    /// Creates a new person.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {})", self.name, self.age)
    }
}

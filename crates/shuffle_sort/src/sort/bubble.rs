//! Stable bubble sort.
//!
//! Repeated passes swap adjacent pairs that compare `Greater`. `Equal`
//! never swaps, which makes the sort stable. Each pass ends where the
//! previous pass made its last swap, and sorting stops after a pass
//! without swaps.
//!
//! # Comparator Contract
//!
//! The comparator must be a total order. An inconsistent comparator is a
//! caller error: the result is then some permutation of the input in
//! unspecified order. Because the active range shrinks on every pass, at
//! most `len - 1` passes run and no index leaves the slice.
//!
//! # Complexity
//!
//! O(n^2) comparisons and swaps in the worst case, O(n) on sorted input.

use std::cmp::Ordering;

/// Work counters from one [`bubble_sort_in_place`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStats {
    /// Number of passes over the active range
    pub passes: usize,
    /// Number of comparator calls
    pub comparisons: usize,
    /// Number of adjacent swaps
    pub swaps: usize,
}

/// Sorts `items` in place and reports the work done.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{bubble_sort_in_place, compare_ints};
///
/// let mut items = [3, 1, 2];
/// let stats = bubble_sort_in_place(&mut items, compare_ints);
/// assert_eq!(items, [1, 2, 3]);
/// assert_eq!(stats.swaps, 2);
/// ```
pub fn bubble_sort_in_place<T, F>(items: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut stats = SortStats::default();
    let mut end = items.len();

    while end > 1 {
        stats.passes += 1;
        let mut last_swap = 0;

        for i in 1..end {
            stats.comparisons += 1;
            if compare(&items[i - 1], &items[i]) == Ordering::Greater {
                items.swap(i - 1, i);
                stats.swaps += 1;
                last_swap = i;
            }
        }

        // Everything from last_swap onwards is in final position
        end = last_swap;
    }

    stats
}

/// Consumes `items` and returns them sorted by `compare`.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{bubble_sort, compare_ints};
///
/// let sorted = bubble_sort(vec![2, 6, 4, 10, 5, 7, 9, 1, 8, 3], compare_ints);
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
/// ```
pub fn bubble_sort<T, F>(mut items: Vec<T>, compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort_in_place(&mut items, compare);
    items
}

/// Returns a sorted copy of `items`, leaving the input untouched.
pub fn bubble_sorted<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(items.to_vec(), compare)
}

/// Returns `true` when no adjacent pair compares `Greater`.
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::compare::{by_key, compare_ints, compare_persons_by_age, reversed};
    use crate::types::Person;

    #[test]
    fn test_sorts_integers() {
        let sorted = bubble_sort(vec![5, 2, 8, 1, 9, 3, 7, 4, 6, 10], compare_ints);
        assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        assert_eq!(
            bubble_sort_in_place(&mut empty, compare_ints),
            SortStats::default()
        );

        let mut single = [42];
        let stats = bubble_sort_in_place(&mut single, compare_ints);
        assert_eq!(single, [42]);
        assert_eq!(stats.swaps, 0);
        assert_eq!(stats.comparisons, 0);
    }

    #[test]
    fn test_sorted_input_takes_one_pass() {
        let mut items = [1, 2, 3, 4, 5];
        let stats = bubble_sort_in_place(&mut items, compare_ints);
        assert_eq!(
            stats,
            SortStats {
                passes: 1,
                comparisons: 4,
                swaps: 0
            }
        );
    }

    #[test]
    fn test_reversed_input_worst_case() {
        let mut items = [5, 4, 3, 2, 1];
        let stats = bubble_sort_in_place(&mut items, compare_ints);
        assert_eq!(items, [1, 2, 3, 4, 5]);
        assert_eq!(stats.swaps, 10);
        assert_eq!(stats.comparisons, 10);
        assert_eq!(stats.passes, 4);
    }

    #[test]
    fn test_stability() {
        let items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')];
        let sorted = bubble_sort(items, by_key(|pair: &(i32, char)| pair.0));
        assert_eq!(sorted, vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_people_by_age() {
        let people = vec![
            Person::new("Alice", 30),
            Person::new("Bob", 25),
            Person::new("Charlie", 35),
            Person::new("Diana", 28),
        ];
        let sorted = bubble_sort(people, compare_persons_by_age);
        let ages: Vec<u32> = sorted.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![25, 28, 30, 35]);
    }

    #[test]
    fn test_descending_via_reversed() {
        let sorted = bubble_sort(vec![3, 1, 2], reversed(compare_ints::<i32>));
        assert_eq!(sorted, vec![3, 2, 1]);
    }

    #[test]
    fn test_bubble_sorted_leaves_input() {
        let input = [3, 2, 1];
        let output = bubble_sorted(&input, compare_ints);
        assert_eq!(input, [3, 2, 1]);
        assert_eq!(output, vec![1, 2, 3]);
    }

    #[test]
    fn test_is_sorted_by() {
        assert!(is_sorted_by::<i32, _>(&[], compare_ints));
        assert!(is_sorted_by(&[1, 1, 2], compare_ints));
        assert!(!is_sorted_by(&[2, 1], compare_ints));
    }

    /// A comparator that always answers Greater still terminates within
    /// len - 1 passes and yields a permutation.
    #[test]
    fn test_inconsistent_comparator_terminates() {
        let mut items = [4, 1, 3, 2, 5];
        let stats = bubble_sort_in_place(&mut items, |_, _| Ordering::Greater);
        assert!(stats.passes <= 4);

        let mut check = items;
        check.sort();
        assert_eq!(check, [1, 2, 3, 4, 5]);
    }
}

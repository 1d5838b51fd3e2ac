//! Comparators for use with the bubble sort.
//!
//! Any `FnMut(&T, &T) -> Ordering` works as a comparator; the functions here
//! cover the common cases and compose with [`by_key`] and [`reversed`].

use std::cmp::Ordering;

use num_traits::PrimInt;

use crate::types::Person;

/// Ascending order for any primitive integer type.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use shuffle_sort::compare_ints;
///
/// assert_eq!(compare_ints(&1u8, &2u8), Ordering::Less);
/// assert_eq!(compare_ints(&-3i64, &-3i64), Ordering::Equal);
/// ```
#[inline]
pub fn compare_ints<T: PrimInt>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Ascending by age. People of equal age compare `Equal`.
#[inline]
pub fn compare_persons_by_age(a: &Person, b: &Person) -> Ordering {
    a.age.cmp(&b.age)
}

/// Ascending by name, byte-wise.
#[inline]
pub fn compare_persons_by_name(a: &Person, b: &Person) -> Ordering {
    a.name.cmp(&b.name)
}

/// Builds a comparator that orders by the key `key` extracts.
///
/// # Examples
///
/// ```rust
/// use shuffle_sort::{bubble_sort, by_key};
///
/// let words = bubble_sort(vec!["ccc", "a", "bb"], by_key(|w: &&str| w.len()));
/// assert_eq!(words, vec!["a", "bb", "ccc"]);
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}

/// Inverts a comparator. Equal elements stay `Equal`, so stability holds.
pub fn reversed<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a: &T, b: &T| compare(a, b).reverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_ints() {
        assert_eq!(compare_ints(&1, &2), Ordering::Less);
        assert_eq!(compare_ints(&2, &2), Ordering::Equal);
        assert_eq!(compare_ints(&i64::MAX, &i64::MIN), Ordering::Greater);
    }

    #[test]
    fn test_person_comparators() {
        let alice = Person::new("Alice", 30);
        let bob = Person::new("Bob", 25);
        assert_eq!(compare_persons_by_age(&alice, &bob), Ordering::Greater);
        assert_eq!(compare_persons_by_name(&alice, &bob), Ordering::Less);
        assert_eq!(
            compare_persons_by_age(&alice, &Person::new("Zed", 30)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_reversed_keeps_equal() {
        let mut desc = reversed(compare_ints::<i32>);
        assert_eq!(desc(&1, &2), Ordering::Greater);
        assert_eq!(desc(&2, &2), Ordering::Equal);
    }

    #[test]
    fn test_by_key() {
        let by_age = by_key(|p: &Person| p.age);
        assert_eq!(
            by_age(&Person::new("A", 1), &Person::new("B", 2)),
            Ordering::Less
        );
    }
}

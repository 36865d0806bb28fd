//! # List Averages
//!
//! A thin consumer of [`StringList`]'s iteration contract: compute the
//! arithmetic mean of a list's values, reading each stored string as a
//! number. The list is never mutated; one forward traversal, a running
//! sum, nothing else.
//!
//! ## Numeric coercion
//!
//! Values are coerced leniently, in the spirit of JavaScript's `Number`:
//! a string that parses as a float (after trimming whitespace) contributes
//! its value, everything else — including the empty string — contributes 0.
//! This is a deliberate averaging choice, not a general parsing contract;
//! callers who need strict parsing should validate before averaging.
//!
//! ## Example
//!
//! ```
//! use strlist::StringList;
//! use strlist_average::average;
//!
//! let list: StringList = ["1", "2", "3"].into_iter().collect();
//! assert_eq!(average(&list), 2.0);
//! ```

use strlist::StringList;

/// Returns the arithmetic mean of the list's values, or 0 for an empty
/// list.
///
/// Each value is coerced to a number as described in the
/// [module docs](self); the result is the sum divided by the list length.
/// O(n) time, O(1) space beyond the traversal cursor.
///
/// # Example
///
/// ```
/// use strlist::StringList;
/// use strlist_average::average;
///
/// let empty = StringList::new();
/// assert_eq!(average(&empty), 0.0);
///
/// let mixed: StringList = ["a", "5"].into_iter().collect();
/// assert_eq!(average(&mixed), 2.5); // "a" coerces to 0
/// ```
#[must_use]
pub fn average(list: &StringList) -> f64 {
    if list.is_empty() {
        return 0.0;
    }

    let total: f64 = list.iter().map(|val| coerce(&val)).sum();
    total / list.len() as f64
}

/// Lenient string-to-number coercion: trimmed parse, 0 on failure.
fn coerce(val: &str) -> f64 {
    val.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(vals: &[&str]) -> StringList {
        vals.iter().copied().collect()
    }

    #[test]
    fn test_empty_list_averages_to_zero() {
        assert_eq!(average(&StringList::new()), 0.0);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(average(&list_of(&["10"])), 10.0);
    }

    #[test]
    fn test_mean_of_integers() {
        assert_eq!(average(&list_of(&["1", "2", "3"])), 2.0);
    }

    #[test]
    fn test_fractional_mean() {
        assert_eq!(average(&list_of(&["1", "2"])), 1.5);
    }

    #[test]
    fn test_non_numeric_values_coerce_to_zero() {
        // "a" counts as 0 but still counts toward the length.
        assert_eq!(average(&list_of(&["a", "5"])), 2.5);
        assert_eq!(average(&list_of(&["", "4"])), 2.0);
        assert_eq!(average(&list_of(&["nope"])), 0.0);
    }

    #[test]
    fn test_whitespace_and_floats_parse() {
        assert_eq!(average(&list_of(&[" 2 ", "4.5"])), 3.25);
        assert_eq!(average(&list_of(&["-3", "3"])), 0.0);
    }

    #[test]
    fn test_average_does_not_mutate_the_list() {
        let list = list_of(&["7", "9"]);
        let before = list.to_vec();
        assert_eq!(average(&list), 8.0);
        assert_eq!(list.to_vec(), before);
        assert_eq!(list.len(), 2);
    }
}

//! # Index Errors
//!
//! Every fallible list operation fails the same way: the requested position
//! does not exist in the current list. [`IndexError`] is that single kind,
//! tagged with a descriptive message so callers can report what was asked
//! for. Errors are raised synchronously and never retried or suppressed;
//! recovery is entirely the caller's decision.

use thiserror::Error;

/// Signals that a requested position does not exist in the current list.
///
/// Raised by `pop`/`shift` on an empty list and by the `*_at` operations
/// when the index is out of range. No operation mutates the list before
/// its range check fails.
///
/// # Example
///
/// ```
/// use strlist::StringList;
///
/// let mut list = StringList::new();
/// let err = list.pop().unwrap_err();
/// assert_eq!(err.message(), "List is empty.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct IndexError {
    message: &'static str,
}

impl IndexError {
    pub(crate) fn empty() -> Self {
        IndexError {
            message: "List is empty.",
        }
    }

    pub(crate) fn no_item() -> Self {
        IndexError {
            message: "No item at index.",
        }
    }

    pub(crate) fn not_found() -> Self {
        IndexError {
            message: "Index not found.",
        }
    }

    /// The human-readable description of the failed access.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_message() {
        assert_eq!(IndexError::empty().to_string(), "List is empty.");
        assert_eq!(IndexError::no_item().to_string(), "No item at index.");
        assert_eq!(IndexError::not_found().to_string(), "Index not found.");
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<IndexError>();
    }
}

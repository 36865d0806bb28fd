//! # StringList
//!
//! A singly-linked list of owned string values with positional operations.
//!
//! ## Design
//!
//! The chain is owned through `head`: every node is held by exactly one
//! predecessor (or by the list itself for the first node). The `tail` field
//! is a non-owning cache that makes appends O(1); it must be maintained by
//! hand on every mutation, which is where all the interesting invariants
//! live. Removal from the tail is the one asymmetric operation: links only
//! point forward, so finding the new tail costs a traversal from `head`.
//!
//! ## Modules
//!
//! - [`list`]: the [`StringList`] container, its node type, and its iterator
//! - [`error`]: [`IndexError`], the single failure kind for missing positions
//!
//! ## Example
//!
//! ```
//! use strlist::StringList;
//!
//! let mut list: StringList = ["apple", "banana"].into_iter().collect();
//! list.push("cherry");
//! list.unshift("fig");
//!
//! assert_eq!(list.to_vec(), vec!["fig", "apple", "banana", "cherry"]);
//! assert_eq!(list.pop().unwrap(), "cherry");
//! assert_eq!(list.shift().unwrap(), "fig");
//! assert_eq!(list.len(), 2);
//! ```

pub mod error;
pub mod list;

// Re-export main types for convenience
pub use error::IndexError;
pub use list::{Iter, StringList};

//! # The StringList Container
//!
//! A singly-linked sequence of owned string nodes with a head/tail pair and
//! a maintained length counter. The representation follows the classic
//! front/rear queue shape: the chain is owned through `head` (each node's
//! `Rc` is held only by its predecessor's `next`, or by `head` for the
//! first node), while `tail` is a [`Weak`] back-reference — a non-owning
//! cache that buys O(1) appends at the cost of manual upkeep on every
//! mutation.
//!
//! ## Invariants
//!
//! - `length == 0` exactly when `head` is `None` and `tail` upgrades to
//!   `None`.
//! - Following `next` from `head` exactly `length` times reaches the node
//!   `tail` points at, whose `next` is `None`.
//! - The chain is acyclic; traversal always terminates after `length` steps.
//!
//! Every operation moves the list atomically from one valid state to
//! another: range checks happen before any link is touched, so a failed
//! call leaves the list exactly as it was.
//!
//! ## Example
//!
//! ```
//! use strlist::StringList;
//!
//! let mut list = StringList::new();
//! list.push("10");
//! list.push("20");
//! list.insert_at(1, "15")?;
//!
//! assert_eq!(list.to_vec(), vec!["10", "15", "20"]);
//! assert_eq!(list.remove_at(1)?, "15");
//! # Ok::<(), strlist::IndexError>(())
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::IndexError;

/// A link in the chain: `None` marks the end.
type Link = Option<Rc<RefCell<Node>>>;

/// A single list element: one owned string value and the link to its
/// successor.
#[derive(Debug)]
struct Node {
    val: String,
    next: Link,
}

impl Node {
    fn new(val: String) -> Rc<RefCell<Node>> {
        Rc::new(RefCell::new(Node { val, next: None }))
    }
}

/// A singly-linked list of owned string values, indexed from 0.
///
/// Appends and prepends are O(1). Positional access is a linear walk from
/// `head`, and so is `pop`: links only point forward, so locating the new
/// tail costs a full traversal.
///
/// # Example
///
/// ```
/// use strlist::StringList;
///
/// let mut list: StringList = ["a", "b", "c"].into_iter().collect();
/// assert_eq!(list.get_at(1)?, "b");
///
/// list.set_at(1, "B")?;
/// assert_eq!(list.to_vec(), vec!["a", "B", "c"]);
/// # Ok::<(), strlist::IndexError>(())
/// ```
#[derive(Debug)]
pub struct StringList {
    head: Link,
    tail: Weak<RefCell<Node>>,
    length: usize,
}

impl StringList {
    /// Creates a new empty list.
    #[must_use]
    pub fn new() -> Self {
        StringList {
            head: None,
            tail: Weak::new(),
            length: 0,
        }
    }

    /// Returns the number of values in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns true if the list holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Appends a value at the tail. O(1) via the tail cache.
    ///
    /// # Example
    ///
    /// ```
    /// use strlist::StringList;
    ///
    /// let mut list = StringList::new();
    /// list.push("first");
    /// list.push("second");
    /// assert_eq!(list.to_vec(), vec!["first", "second"]);
    /// ```
    pub fn push(&mut self, val: impl Into<String>) {
        let node = Node::new(val.into());

        if let Some(tail) = self.tail.upgrade() {
            tail.borrow_mut().next = Some(Rc::clone(&node));
        } else {
            self.head = Some(Rc::clone(&node));
        }
        self.tail = Rc::downgrade(&node);
        self.length += 1;
    }

    /// Prepends a value at the head. O(1).
    ///
    /// # Example
    ///
    /// ```
    /// use strlist::StringList;
    ///
    /// let mut list = StringList::new();
    /// list.unshift("second");
    /// list.unshift("first");
    /// assert_eq!(list.to_vec(), vec!["first", "second"]);
    /// ```
    pub fn unshift(&mut self, val: impl Into<String>) {
        let node = Node::new(val.into());

        match self.head.take() {
            Some(old_head) => node.borrow_mut().next = Some(old_head),
            None => self.tail = Rc::downgrade(&node),
        }
        self.head = Some(node);
        self.length += 1;
    }

    /// Removes and returns the last value.
    ///
    /// O(n): the node before the old tail becomes the new tail, and it can
    /// only be found by walking from `head`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the list is empty.
    pub fn pop(&mut self) -> Result<String, IndexError> {
        let Some(tail) = self.tail.upgrade() else {
            return Err(IndexError::empty());
        };
        let val = tail.borrow().val.clone();

        if self.length == 1 {
            self.head = None;
            self.tail = Weak::new();
            self.length = 0;
            return Ok(val);
        }

        if let Some(prev) = self.node_at(self.length - 2) {
            prev.borrow_mut().next = None;
            self.tail = Rc::downgrade(&prev);
        }
        self.length -= 1;
        Ok(val)
    }

    /// Removes and returns the first value. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if the list is empty.
    pub fn shift(&mut self) -> Result<String, IndexError> {
        let Some(node) = self.head.take() else {
            return Err(IndexError::empty());
        };
        let val = node.borrow().val.clone();

        self.head = node.borrow_mut().next.take();
        if self.head.is_none() {
            self.tail = Weak::new();
        }
        self.length -= 1;
        Ok(val)
    }

    /// Returns the value at `idx`. O(idx) forward walk.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx` is outside `0..len()`.
    pub fn get_at(&self, idx: usize) -> Result<String, IndexError> {
        let Some(node) = self.node_at(idx) else {
            return Err(IndexError::no_item());
        };
        let val = node.borrow().val.clone();
        Ok(val)
    }

    /// Overwrites the value at `idx` in place.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx` is outside `0..len()`; in particular
    /// every index is out of range on an empty list.
    pub fn set_at(&mut self, idx: usize, val: impl Into<String>) -> Result<(), IndexError> {
        let Some(node) = self.node_at(idx) else {
            return Err(IndexError::no_item());
        };
        node.borrow_mut().val = val.into();
        Ok(())
    }

    /// Inserts a value so it becomes the element at `idx`, shifting later
    /// elements back. `idx == len()` appends.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx > len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use strlist::StringList;
    ///
    /// let mut list: StringList = ["a", "c"].into_iter().collect();
    /// list.insert_at(1, "b")?;
    /// list.insert_at(3, "d")?;
    /// assert_eq!(list.to_vec(), vec!["a", "b", "c", "d"]);
    /// # Ok::<(), strlist::IndexError>(())
    /// ```
    pub fn insert_at(&mut self, idx: usize, val: impl Into<String>) -> Result<(), IndexError> {
        if idx > self.length {
            return Err(IndexError::not_found());
        }

        if idx == 0 {
            self.unshift(val);
            return Ok(());
        }

        // Appending goes through push so the old tail's link is rewired
        // along with the tail cache.
        if idx == self.length {
            self.push(val);
            return Ok(());
        }

        let Some(prev) = self.node_at(idx - 1) else {
            return Err(IndexError::not_found());
        };
        let node = Node::new(val.into());
        let mut prev_ref = prev.borrow_mut();
        node.borrow_mut().next = prev_ref.next.take();
        prev_ref.next = Some(node);
        self.length += 1;
        Ok(())
    }

    /// Removes and returns the value at `idx`, relinking its neighbors.
    ///
    /// Removal at the last index delegates to [`pop`](Self::pop) and removal
    /// at 0 delegates to [`shift`](Self::shift).
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx` is outside `0..len()`.
    pub fn remove_at(&mut self, idx: usize) -> Result<String, IndexError> {
        if idx >= self.length {
            return Err(IndexError::not_found());
        }

        if idx == self.length - 1 {
            return self.pop();
        }
        if idx == 0 {
            return self.shift();
        }

        let Some(prev) = self.node_at(idx - 1) else {
            return Err(IndexError::not_found());
        };
        let mut prev_ref = prev.borrow_mut();
        let Some(removed) = prev_ref.next.take() else {
            return Err(IndexError::not_found());
        };
        prev_ref.next = removed.borrow_mut().next.take();
        self.length -= 1;
        let val = removed.borrow().val.clone();
        Ok(val)
    }

    /// Returns a head-to-tail snapshot of all values. Read-only.
    ///
    /// # Example
    ///
    /// ```
    /// use strlist::StringList;
    ///
    /// let list: StringList = ["x", "y"].into_iter().collect();
    /// assert_eq!(list.to_vec(), vec!["x", "y"]);
    /// assert_eq!(list.len(), 2); // unchanged
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().collect()
    }

    /// Returns an iterator over the values, head to tail.
    ///
    /// The iterator walks the chain with a cursor and clones each value out;
    /// it never mutates the list.
    pub fn iter(&self) -> Iter {
        Iter {
            current: self.head.clone(),
        }
    }

    /// Walks `idx` links from `head`; `None` when the chain ends first.
    fn node_at(&self, idx: usize) -> Link {
        let mut current = self.head.clone();
        for _ in 0..idx {
            let next = match &current {
                Some(node) => node.borrow().next.clone(),
                None => None,
            };
            current = next;
        }
        current
    }
}

impl Default for StringList {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<S> for StringList {
    /// Builds a list by appending each value in order.
    ///
    /// # Example
    ///
    /// ```
    /// use strlist::StringList;
    ///
    /// let list: StringList = ["1", "2", "3"].into_iter().collect();
    /// assert_eq!(list.to_vec(), vec!["1", "2", "3"]);
    /// ```
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = StringList::new();
        for val in iter {
            list.push(val);
        }
        list
    }
}

impl<'a> IntoIterator for &'a StringList {
    type Item = String;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl Drop for StringList {
    fn drop(&mut self) {
        // Unlink iteratively so dropping a long chain cannot overflow the
        // stack through nested node drops.
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.borrow_mut().next.take();
        }
    }
}

/// Iterator over a [`StringList`], yielding owned values head to tail.
#[derive(Debug)]
pub struct Iter {
    current: Link,
}

impl Iterator for Iter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let node = self.current.take()?;
        let val = node.borrow().val.clone();
        self.current = node.borrow().next.clone();
        Some(val)
    }
}

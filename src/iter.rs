// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iteration over [`GrowList`](crate::GrowList).
//!
//! - [`Cursor`] is the fail-fast form: a detached `(position, list id, revision)`
//!   triple that is advanced against the list explicitly and reports
//!   [`Error::ConcurrentMutation`] once the list has been structurally
//!   modified behind its back.
//! - [`Iter`] borrows the list and yields `&T`; the borrow checker rules out
//!   mutation while it is alive.
//! - [`IntoIter`] yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.

// Crate imports
use crate::{error::Error, vec::GrowList};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::iter::FusedIterator;

// External imports
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Invalidated,
}

/// Fail-fast cursor created by [`GrowList::cursor`].
///
/// The cursor holds no borrow of the list, only the next position to yield
/// and the list's revision at creation time. Every [`next`](Cursor::next)
/// compares that snapshot against the live revision first:
///
/// - on divergence it fails with [`Error::ConcurrentMutation`] and stays
///   failed for good;
/// - otherwise it yields the element at the current position, or
///   [`Error::NoMoreElements`] past the end.
///
/// In-place replacement ([`GrowList::set`]) does not bump the revision and is
/// therefore not detected.
///
/// Passing a list other than the one that created the cursor (including a
/// clone of it) is treated like a structural mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    list_id: usize,
    expected_revision: u64,
    state: State,
}

impl Cursor {
    /// Returns `true` if `position < len`.
    ///
    /// Pure query: does not check the revision and does not move the cursor.
    #[inline]
    pub fn has_next<T>(&self, list: &GrowList<T>) -> bool {
        self.position < list.len()
    }

    /// Yields the element at the current position and advances by one.
    #[allow(clippy::should_implement_trait)]
    pub fn next<'a, T>(&mut self, list: &'a GrowList<T>) -> Result<&'a T, Error> {
        if self.state == State::Invalidated {
            return Err(Error::ConcurrentMutation);
        }
        if list.id != self.list_id {
            debug!(
                "grow-list: cursor at {} advanced against a different list",
                self.position
            );
            self.state = State::Invalidated;
            return Err(Error::ConcurrentMutation);
        }
        if list.revision() != self.expected_revision {
            debug!(
                "grow-list: cursor at {} saw revision {} (expected {})",
                self.position,
                list.revision(),
                self.expected_revision
            );
            self.state = State::Invalidated;
            return Err(Error::ConcurrentMutation);
        }
        let item = list
            .get(self.position)
            .map_err(|_| Error::NoMoreElements)?;
        self.position += 1;
        Ok(item)
    }

    /// Index of the next element to be yielded.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once a structural mutation has been observed.
    #[inline]
    pub fn is_invalidated(&self) -> bool {
        self.state == State::Invalidated
    }
}

impl<T> GrowList<T> {
    /// Creates a fail-fast cursor positioned at the first element.
    #[inline]
    pub fn cursor(&self) -> Cursor {
        Cursor {
            position: 0,
            list_id: self.id,
            expected_revision: self.revision(),
            state: State::Active,
        }
    }
}

/// Borrowing iterator returned by [`GrowList::iter`].
pub struct Iter<'a, T> {
    pub(crate) inner: core::slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        // Live slots are always occupied.
        self.inner.next().and_then(Option::as_ref)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Owned iterator returned by `GrowList::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`].
pub struct IntoIter<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    back: usize, // exclusive
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            self.slots[i].take()
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            self.slots[self.back].take()
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a GrowList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl<T> IntoIterator for GrowList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            front: 0,
            back: self.len,
            slots: self.slots,
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, GrowList};
    use alloc::vec::Vec;

    #[test]
    fn test_cursor_usual_usage() {
        let v = GrowList::from(["Hector", "Gustavo", "Walter"]);
        let mut it = v.cursor();
        assert!(it.has_next(&v));
        assert_eq!(it.next(&v), Ok(&"Hector"));
        assert!(it.has_next(&v));
        assert_eq!(it.next(&v), Ok(&"Gustavo"));
        assert!(it.has_next(&v));
        assert_eq!(it.next(&v), Ok(&"Walter"));
        assert!(!it.has_next(&v));
        assert_eq!(it.position(), 3);
    }

    #[test]
    fn test_cursor_next_on_empty() {
        let v: GrowList<&str> = GrowList::new();
        let mut it = v.cursor();
        assert!(!it.has_next(&v));
        assert_eq!(it.next(&v), Err(Error::NoMoreElements));
    }

    #[test]
    fn test_cursor_past_the_end() {
        let v = GrowList::from(["Hector", "Gustavo", "Walter"]);
        let mut it = v.cursor();
        it.next(&v).unwrap();
        it.next(&v).unwrap();
        assert_eq!(it.next(&v), Ok(&"Walter"));
        assert_eq!(it.next(&v), Err(Error::NoMoreElements));
        assert_eq!(it.next(&v), Err(Error::NoMoreElements));
        assert_eq!(it.position(), 3);
    }

    #[test]
    fn test_has_next_is_idempotent() {
        let v = GrowList::from(["Hector", "Gustavo"]);
        let mut it = v.cursor();
        assert!(it.has_next(&v));
        assert!(it.has_next(&v));
        assert!(it.has_next(&v));
        assert_eq!(it.next(&v), Ok(&"Hector"));
    }

    #[test]
    fn test_cursor_detects_structural_mutation() {
        let mut v = GrowList::from(["Hector", "Gustavo"]);
        let mut it = v.cursor();
        v.add("Walter");
        // has_next does not check the revision.
        assert!(it.has_next(&v));
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));
        assert!(it.is_invalidated());
        // Stays failed.
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));
        assert_eq!(it.position(), 0);
    }

    #[test]
    fn test_cursor_detects_sort_and_clear() {
        let mut v = GrowList::from([3, 1, 2]);
        let mut it = v.cursor();
        v.sort();
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));

        let mut it = v.cursor();
        v.clear();
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));
    }

    #[test]
    fn test_cursor_detects_insert_and_remove() {
        let mut v = GrowList::from([1, 2, 3]);
        let mut it = v.cursor();
        v.insert(1, 9).unwrap();
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));

        let mut it = v.cursor();
        assert_eq!(it.next(&v), Ok(&1));
        assert_eq!(v.remove(0), Ok(1));
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));

        let mut it = v.cursor();
        assert_eq!(v.pop(), Some(3));
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));
    }

    #[test]
    fn test_cursor_detects_remove_item() {
        let mut v = GrowList::from(["Hector", "Gustavo", "Walter"]);
        let mut it = v.cursor();
        assert_eq!(it.next(&v), Ok(&"Hector"));
        assert!(v.remove_item(&"Walter"));
        // Same length left to walk, still detected.
        assert!(it.has_next(&v));
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));
    }

    #[test]
    fn test_cursor_detects_bulk_mutations() {
        let mut v = GrowList::from([1, 2, 3]);
        let mut it = v.cursor();
        assert_eq!(v.insert_all(3, &[4, 5]), Ok(true));
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));

        let mut it = v.cursor();
        assert!(v.remove_all(&[2, 5]));
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));

        let mut it = v.cursor();
        assert!(v.add_all(&[6]));
        assert_eq!(it.next(&v), Err(Error::ConcurrentMutation));
    }

    #[test]
    fn test_cursor_rejects_other_list_at_same_revision() {
        let a = GrowList::from([1, 2, 3]);
        let b = GrowList::from([7, 8, 9]);
        let c = a.clone();
        assert_eq!(a.revision(), b.revision());
        assert_eq!(a.revision(), c.revision());

        let mut it = a.cursor();
        assert_eq!(it.next(&b), Err(Error::ConcurrentMutation));
        assert!(it.is_invalidated());
        // The latch holds even when handed back the right list.
        assert_eq!(it.next(&a), Err(Error::ConcurrentMutation));

        let mut it = a.cursor();
        assert_eq!(it.next(&c), Err(Error::ConcurrentMutation));
    }

    #[test]
    fn test_cursor_ignores_set() {
        let mut v = GrowList::from([1, 2, 3]);
        let mut it = v.cursor();
        assert_eq!(it.next(&v), Ok(&1));
        v.set(1, 20).unwrap();
        v[2] = 30;
        assert_eq!(it.next(&v), Ok(&20));
        assert_eq!(it.next(&v), Ok(&30));
        assert_eq!(it.next(&v), Err(Error::NoMoreElements));
    }

    #[test]
    fn test_cursor_ignores_failed_mutations() {
        let mut v = GrowList::from([1, 2]);
        let mut it = v.cursor();
        assert!(v.insert(9, 0).is_err());
        assert!(!v.remove_item(&7));
        assert!(!v.add_all(&[0; 0]));
        assert_eq!(it.next(&v), Ok(&1));
    }

    #[test]
    fn test_borrowing_iter_and_double_ended() {
        let v = GrowList::from([10, 20, 30, 40]);
        let mut it = v.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(&10));
        assert_eq!(it.next_back(), Some(&40));
        assert_eq!(it.size_hint(), (2, Some(2)));
        let rest: Vec<_> = it.copied().collect();
        assert_eq!(rest, [20, 30]);

        let mut sum = 0;
        for x in &v {
            sum += x;
        }
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_into_iter_by_value() {
        let v = GrowList::from([alloc::string::String::from("a"), "b".into(), "c".into()]);
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next().as_deref(), Some("a"));
        assert_eq!(it.next_back().as_deref(), Some("c"));
        assert_eq!(it.next().as_deref(), Some("b"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_skips_unused_capacity() {
        let mut v: GrowList<u8> = GrowList::with_capacity(16);
        v.add(1);
        assert_eq!(v.into_iter().count(), 1);
    }
}

// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowList` type and its inherent API.
//!
//! `GrowList<T>` owns a boxed slice of slots and a logical length. Slots in
//! `[0..len)` are always `Some`, slots in `[len..capacity)` are always `None`.
//! Methods are split across the submodules by operation family.

mod extend;
mod grow;
mod insert;
mod new;
mod remove;
mod retain;
mod search;
mod unsupported;

// Crate imports
use crate::{error::Error, iter::Iter};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// Capacity of a list created with [`GrowList::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// A growable, index-addressed list.
///
/// `GrowList<T>` stores its elements in a single contiguous, exclusively owned
/// backing store and tracks:
///
/// - a logical length `len` with `0 <= len <= capacity`;
/// - a revision counter bumped on every structural mutation.
///
/// # Structural vs in-place mutation
///
/// Adding, inserting, removing, clearing, retaining and sorting are
/// structural: they bump the revision, which invalidates every outstanding
/// [`Cursor`](crate::Cursor). Replacing a value at a fixed position with
/// [`set`](GrowList::set) or `IndexMut` is not structural.
///
/// # Growth
///
/// When an insertion would exceed the capacity, the backing store is replaced
/// by one of exactly double the capacity and the live elements are moved over
/// in order. The store never shrinks on its own.
///
/// # Complexity
///
/// - `get`, `set`, `add`: `O(1)` (amortized for `add`).
/// - `insert`, `remove`: `O(len - index)`.
/// - `contains`, `index_of`, `last_index_of`: `O(len)`.
/// - `sort_by`: `O(n log n)` on average, `O(n²)` in the worst case.
pub struct GrowList<T> {
    pub(crate) slots: Box<[Option<T>]>,
    pub(crate) len: usize,
    pub(crate) revision: u64,
    // Process-unique; lets a cursor tell its own list from another one.
    pub(crate) id: usize,
}

impl<T> GrowList<T> {
    /// Returns the number of slots in the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the structural revision counter.
    ///
    /// Strictly increases with every structural mutation; never decreases.
    #[inline]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the element at `index`, or [`Error::IndexOutOfRange`] unless
    /// `index < len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(Error::out_of_range(index, self.len))
    }

    /// Mutable counterpart of [`get`](GrowList::get). Not structural.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.live_mut()
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(Error::out_of_range(index, len))
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// Same bounds as [`get`](GrowList::get). Does **not** bump the revision.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        self.get_mut(index)
            .map(|slot| core::mem::replace(slot, value))
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Borrowing iterator over the live elements, front to back.
    ///
    /// The list cannot be mutated while this iterator is alive. Use
    /// [`cursor`](GrowList::cursor) for the fail-fast, detached form.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.live().iter(),
        }
    }

    /// Removes every element and releases the slot contents.
    ///
    /// Bumps the revision only if the list was non-empty. Capacity is kept.
    pub fn clear(&mut self) {
        if self.len == 0 {
            return;
        }
        for slot in self.live_mut() {
            *slot = None;
        }
        self.len = 0;
        self.bump();
    }

    // The live prefix of the backing store.
    #[inline]
    pub(crate) fn live(&self) -> &[Option<T>] {
        &self.slots[..self.len]
    }

    #[inline]
    pub(crate) fn live_mut(&mut self) -> &mut [Option<T>] {
        let len = self.len;
        &mut self.slots[..len]
    }

    #[inline]
    pub(crate) fn bump(&mut self) {
        self.revision += 1;
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowList")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a GrowList<T>);

impl<T: fmt::Debug> fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders as `[A, B, C]` using each element's `Display` form, `[]` when empty.
impl<T: fmt::Display> fmt::Display for GrowList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(x, f)?;
        }
        f.write_str("]")
    }
}

// Equality, ordering and hashing look at the live elements only; capacity,
// revision and id are bookkeeping.
impl<T: PartialEq> PartialEq for GrowList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for GrowList<T> {}
impl<T: PartialOrd> PartialOrd for GrowList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Ord> Ord for GrowList<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}
impl<T: Hash> Hash for GrowList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for x in self.iter() {
            x.hash(state);
        }
    }
}

/// Clones the live elements into a store of the same capacity. The clone
/// starts at revision `0`.
impl<T: Clone> Clone for GrowList<T> {
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        out.extend(self.iter().cloned());
        out.revision = 0;
        out
    }
}

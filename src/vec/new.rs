// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{DEFAULT_CAPACITY, GrowList};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

impl<T> GrowList<T> {
    /// Constructs an empty list with [`DEFAULT_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty list with room for `capacity` elements.
    ///
    /// A hint of `0` is raised to `1` so that doubling always makes progress.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: empty_slots(capacity.max(1)),
            len: 0,
            revision: 0,
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl<T> Default for GrowList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for GrowList<T> {
    /// Takes ownership of the elements; capacity is `max(len, DEFAULT_CAPACITY)`.
    fn from(src: Vec<T>) -> Self {
        let mut v = Self::with_capacity(src.len().max(DEFAULT_CAPACITY));
        v.extend(src);
        v.revision = 0;
        v
    }
}

impl<T, const N: usize> From<[T; N]> for GrowList<T> {
    /// Capacity is `max(N, DEFAULT_CAPACITY)`.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N.max(DEFAULT_CAPACITY));
        v.extend(src);
        v.revision = 0;
        v
    }
}

/// Allocates `capacity` unused slots.
#[inline]
pub(crate) fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}

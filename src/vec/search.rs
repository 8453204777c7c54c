// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{collection::Collection, vec::GrowList};

impl<T: PartialEq> GrowList<T> {
    /// Returns `true` if some element in `[0..len)` equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Index of the first element equal to `value`, or `None`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|x| x == value)
    }

    /// Index of the last element equal to `value`, or `None`.
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.iter().rposition(|x| x == value)
    }

    /// Returns `true` if every element of `other` is present in this list.
    ///
    /// Presence is tested per element; duplicates in `other` are not counted
    /// against duplicates here. An empty `other` is always contained.
    pub fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        other.elements().all(|x| self.contains(x))
    }
}

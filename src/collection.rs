// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`Collection`] capability consumed by the bulk operations of
//! [`GrowList`](crate::GrowList).
//!
//! Bulk operations (`add_all`, `insert_all`, `remove_all`, `retain_all`,
//! `contains_all`) only need three things from their argument: a size, a
//! membership test, and the elements in order. Anything that can provide those
//! can be passed in, including another `GrowList`.

// Crate imports
use crate::vec::GrowList;

// Alloc imports
use alloc::{
    collections::{BTreeSet, VecDeque},
    vec::Vec,
};

/// A sized, ordered, membership-testable group of elements.
pub trait Collection<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &T) -> bool;

    /// Yields every element, in order.
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

impl<T: PartialEq> Collection<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        <[T]>::contains(self, value)
    }

    #[inline]
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: PartialEq, const N: usize> Collection<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    #[inline]
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: PartialEq> Collection<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        self.as_slice().contains(value)
    }

    #[inline]
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: PartialEq> Collection<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        VecDeque::contains(self, value)
    }

    #[inline]
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

/// Membership is a tree lookup; elements are yielded in ascending order.
impl<T: Ord> Collection<T> for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        BTreeSet::contains(self, value)
    }

    #[inline]
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T: PartialEq> Collection<T> for GrowList<T> {
    #[inline]
    fn len(&self) -> usize {
        GrowList::len(self)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        GrowList::contains(self, value)
    }

    #[inline]
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

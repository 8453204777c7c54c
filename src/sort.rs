// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-place quicksort with a caller-supplied ordering.
//!
//! Partitioning is Lomuto-style: the last element of each range is the pivot,
//! elements comparing `<=` the pivot are swapped to the front, and the pivot
//! is then swapped into its final position. Equal elements go to the left
//! partition, so the sort is **not stable**.
//!
//! Average cost is `O(n log n)` comparisons; already-sorted and all-equal
//! inputs hit the `O(n²)` worst case because the pivot is never randomized.
//! Recursion always descends into the smaller partition, which bounds the
//! stack depth by `O(log n)` without changing which swaps are made.
//!
//! The free functions work on any slice; [`GrowList::sort_by`] runs the same
//! algorithm over the list's live slots.

// Crate imports
use crate::vec::GrowList;

// Core imports
use core::cmp::Ordering;

// External imports
use log::trace;

/// Sorts `v` in place by the natural order of `T`. Not stable.
#[inline]
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// Sorts `v` in place using `compare`. Not stable.
///
/// `compare` must be a total order; with an inconsistent comparator the
/// result is some permutation of the input, but no order is guaranteed.
#[inline]
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(v, &mut compare);
}

fn sort_range<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Ranges of length 0 or 1 are already sorted.
    while v.len() > 1 {
        let p = partition(v, compare);
        let (left, rest) = core::mem::take(&mut v).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_range(left, compare);
            v = right;
        } else {
            sort_range(right, compare);
            v = left;
        }
    }
}

/// Partitions around the last element and returns the pivot's final index.
///
/// Afterwards everything in `[..p]` compares `<=` the pivot and everything in
/// `[p + 1..]` compares `>` it.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let end = v.len() - 1;
    // Number of elements known to be <= pivot; they occupy [..store].
    let mut store = 0;
    for j in 0..end {
        if compare(&v[j], &v[end]) != Ordering::Greater {
            if store != j {
                v.swap(store, j);
            }
            store += 1;
        }
    }
    v.swap(store, end);
    store
}

impl<T> GrowList<T> {
    /// Sorts the live elements in place using `compare`. Not stable.
    ///
    /// Slots outside `[0..len)` are left untouched. Structural: bumps the
    /// revision once, even for an empty list.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace!("grow-list: sorting {} elements", self.len);
        sort_range(self.live_mut(), &mut |a: &Option<T>, b: &Option<T>| {
            match (a, b) {
                (Some(a), Some(b)) => compare(a, b),
                // Live slots are always occupied.
                _ => Ordering::Equal,
            }
        });
        self.bump();
    }

    /// Sorts the live elements in place by their natural order. Not stable.
    #[inline]
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{quick_sort, quick_sort_by};
    use crate::GrowList;
    use alloc::{string::ToString, vec, vec::Vec};

    fn items<T: Clone>(v: &GrowList<T>) -> Vec<T> {
        v.iter().cloned().collect()
    }

    #[test]
    fn test_natural_order_animals() {
        let mut v = GrowList::new();
        v.add_all(&["Eagle", "Pig", "Boar", "Wolf", "Tiger"]);
        v.sort();
        assert_eq!(items(&v), ["Boar", "Eagle", "Pig", "Tiger", "Wolf"]);
        assert_eq!(v.to_string(), "[Boar, Eagle, Pig, Tiger, Wolf]");
    }

    #[test]
    fn test_reverse_order() {
        let mut v = GrowList::from(["Eagle", "Pig", "Boar", "Wolf", "Tiger"]);
        v.sort_by(|a, b| b.cmp(a));
        assert_eq!(items(&v), ["Wolf", "Tiger", "Pig", "Eagle", "Boar"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut v: GrowList<i32> = GrowList::new();
        v.sort();
        assert_eq!(v.len(), 0);
        assert_eq!(v.revision(), 1);

        let mut one = GrowList::from([7]);
        one.sort();
        assert_eq!(items(&one), [7]);
    }

    #[test]
    fn test_sort_leaves_unused_slots_alone() {
        let mut v: GrowList<i32> = GrowList::with_capacity(16);
        v.add_all(&[3, 1, 2]);
        v.sort();
        assert_eq!(items(&v), [1, 2, 3]);
        assert_eq!(v.capacity(), 16);
        assert!(v.slots[3..].iter().all(Option::is_none));
    }

    #[test]
    fn test_quick_sort_int_slice() {
        let mut data = [1, 2, 7, 2, 10, 6];
        quick_sort(&mut data);
        assert_eq!(data, [1, 2, 2, 6, 7, 10]);
    }

    #[test]
    fn test_quick_sort_degenerate_inputs() {
        let mut sorted: Vec<u32> = (0..2_000).collect();
        quick_sort(&mut sorted);
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let mut reversed: Vec<u32> = (0..2_000).rev().collect();
        quick_sort(&mut reversed);
        assert_eq!(reversed, (0..2_000).collect::<Vec<_>>());

        let mut equal = vec![5u8; 1_000];
        quick_sort(&mut equal);
        assert!(equal.iter().all(|&x| x == 5));
    }

    #[test]
    fn test_quick_sort_by_key() {
        let mut pairs = [(3, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        quick_sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
        let keys: Vec<_> = pairs.iter().map(|p| p.0).collect();
        assert_eq!(keys, [1, 1, 2, 3]);
    }

    #[test]
    fn test_sort_large_sorted_list_does_not_overflow_stack() {
        let mut v: GrowList<u32> = (0..5_000).collect();
        v.sort();
        assert_eq!(v.first(), Some(&0));
        assert_eq!(v.last(), Some(&4_999));
    }
}

// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowList`](crate::GrowList).
//!
//! `Index` and `IndexMut` mirror slice behavior and **panic** when
//! `index >= len`. Use [`GrowList::get`](crate::GrowList::get) /
//! [`GrowList::set`](crate::GrowList::set) for the fallible forms.
//! Writing through `IndexMut` is an in-place replacement and does not bump the
//! revision.

// Crate imports
use crate::vec::GrowList;

// Core imports
use core::ops::{Index, IndexMut};

impl<T> Index<usize> for GrowList<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        match self.get(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for GrowList<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        match self.get_mut(i) {
            Ok(x) => x,
            Err(e) => panic!("{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::GrowList;

    #[test]
    fn test_index_and_index_mut() {
        let mut v = GrowList::from([1, 2, 3, 4]);
        assert_eq!(v[0], 1);
        assert_eq!(v[3], 4);

        let rev = v.revision();
        v[1] = 10;
        v[3] = 40;
        assert_eq!(v.to_string(), "[1, 10, 3, 40]");
        assert_eq!(v.revision(), rev);
    }

    #[test]
    #[should_panic(expected = "index 0 out of range for length 0")]
    fn test_oob_panics() {
        let v: GrowList<i32> = GrowList::new();
        let _ = v[0];
    }

    #[test]
    #[should_panic]
    fn test_index_into_spare_capacity_panics() {
        let mut v: GrowList<i32> = GrowList::with_capacity(8);
        v.add(1);
        v[1] = 2;
    }
}

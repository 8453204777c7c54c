// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{collection::Collection, error::Error, vec::GrowList};

impl<T> Extend<T> for GrowList<T> {
    /// Appends every item, growing as needed. One revision bump for the whole
    /// batch, and none if the iterator is empty.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve_for(iter.size_hint().0);
        let before = self.len;
        for item in iter {
            self.reserve_for(1);
            self.slots[self.len] = Some(item);
            self.len += 1;
        }
        if self.len != before {
            self.bump();
        }
    }
}

impl<T> FromIterator<T> for GrowList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v.revision = 0;
        v
    }
}

impl<T: Clone> GrowList<T> {
    /// Appends clones of all elements of `items`, preserving their order.
    ///
    /// Returns `false` (and does nothing) if `items` is empty. Grows at most
    /// once per doubling and bumps the revision once.
    pub fn add_all<C>(&mut self, items: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        let count = items.len();
        if count == 0 {
            return false;
        }
        self.reserve_for(count);
        let len = self.len;
        for (slot, item) in self.slots[len..len + count].iter_mut().zip(items.elements()) {
            *slot = Some(item.clone());
        }
        self.len = len + count;
        self.bump();
        true
    }

    /// Inserts clones of all elements of `items` starting at `index`,
    /// preserving their relative order and shifting the existing tail right
    /// by `items.len()`.
    ///
    /// - Valid range is `index <= len`; otherwise returns
    ///   [`Error::IndexOutOfRange`] and leaves the list unchanged.
    /// - Returns `Ok(false)` (and does nothing) if `items` is empty.
    pub fn insert_all<C>(&mut self, index: usize, items: &C) -> Result<bool, Error>
    where
        C: Collection<T> + ?Sized,
    {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        let count = items.len();
        if count == 0 {
            return Ok(false);
        }
        self.reserve_for(count);
        let len = self.len;

        // Shift right: [index..len) -> [index+count..len+count)
        self.slots[index..len + count].rotate_right(count);
        for (slot, item) in self.slots[index..index + count].iter_mut().zip(items.elements()) {
            *slot = Some(item.clone());
        }

        self.len = len + count;
        self.bump();
        Ok(true)
    }
}

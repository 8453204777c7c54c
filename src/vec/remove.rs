// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowList};

impl<T> GrowList<T> {
    /// Removes and returns the element at `index`, shifting `[index+1..len)`
    /// left by one and clearing the vacated trailing slot.
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`. Structural.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        let len = self.len;

        // Shift left: [index+1..len) -> [index..len-1), removed value lands at len-1
        self.slots[index..len].rotate_left(1);
        let removed = self.slots[len - 1].take();

        self.len = len - 1;
        self.bump();
        removed.ok_or(Error::out_of_range(index, len))
    }

    /// Removes and returns the last element, if any. Structural when it
    /// removes something.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.remove(last).ok()
    }
}

impl<T: PartialEq> GrowList<T> {
    /// Removes the first (lowest-index) element equal to `value`.
    ///
    /// Returns whether a removal happened; the revision is bumped only then.
    pub fn remove_item(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }
}

// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowList};

impl<T> GrowList<T> {
    /// Appends `value`, growing the backing store first if it is full.
    ///
    /// Always returns `true`. Structural.
    #[inline]
    pub fn add(&mut self, value: T) -> bool {
        self.reserve_for(1);
        self.slots[self.len] = Some(value);
        self.len += 1;
        self.bump();
        true
    }

    /// Inserts `value` at `index`, shifting `[index..len)` right by one.
    ///
    /// - Valid range is `index <= len`; inserting at `len` appends.
    /// - Returns [`Error::IndexOutOfRange`] otherwise and leaves the list
    ///   unchanged.
    ///
    /// Structural.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::out_of_range(index, self.len));
        }
        self.reserve_for(1);
        let len = self.len;

        // Shift right: [index..len) -> [index+1..len+1)
        self.slots[index..=len].rotate_right(1);
        self.slots[index] = Some(value);

        self.len = len + 1;
        self.bump();
        Ok(())
    }
}

// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{collection::Collection, error::Error, vec::GrowList};

impl<T> GrowList<T> {
    /// Retains only the elements for which `f` returns `true`, preserving
    /// order. Compacts the live range in place and clears the freed slots.
    ///
    /// Always bumps the revision, even if nothing was removed. Returns whether
    /// the length changed.
    ///
    /// If `f` panics, every element is still live (possibly reordered) and the
    /// revision is unchanged.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) -> bool {
        let len = self.len;
        let mut write = 0;
        // Rejected elements are swapped past `write` but stay in the live
        // range until the scan is done.
        for read in 0..len {
            let keep = self.slots[read].as_ref().is_some_and(&mut f);
            if keep {
                if write != read {
                    self.slots.swap(write, read);
                }
                write += 1;
            }
        }
        for slot in &mut self.slots[write..len] {
            *slot = None;
        }
        self.len = write;
        self.bump();
        write != len
    }
}

impl<T: PartialEq> GrowList<T> {
    /// For each element of `items`, removes the first remaining equal element
    /// of this list (if any).
    ///
    /// Returns `true` if at least one removal happened; `false` without
    /// touching the list if `items` is empty.
    pub fn remove_all<C>(&mut self, items: &C) -> bool
    where
        C: Collection<T> + ?Sized,
    {
        if items.is_empty() {
            return false;
        }
        let mut removed = false;
        for item in items.elements() {
            removed |= self.remove_item(item);
        }
        removed
    }

    /// Keeps only the elements that are contained in `keep`, preserving their
    /// relative order.
    ///
    /// - Returns [`Error::NullInput`] if `keep` is `None`.
    /// - Returns `Ok(true)` if the length changed.
    /// - Rebuilds the live range on every call, so the revision is bumped
    ///   even when nothing is removed.
    pub fn retain_all<C>(&mut self, keep: Option<&C>) -> Result<bool, Error>
    where
        C: Collection<T> + ?Sized,
    {
        let keep = keep.ok_or(Error::NullInput)?;
        Ok(self.retain(|x| keep.contains(x)))
    }
}

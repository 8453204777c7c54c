// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{GrowList, new::empty_slots};

// External imports
use log::trace;

impl<T> GrowList<T> {
    /// Makes sure `additional` more elements fit, doubling the capacity as
    /// many times as needed. Each doubling moves the live elements in order.
    pub(crate) fn reserve_for(&mut self, additional: usize) {
        while self.capacity() - self.len < additional {
            self.grow();
        }
    }

    /// Replaces the backing store with one of exactly double the capacity.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(2)
            .unwrap_or_else(|| capacity_overflow(old_capacity));
        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.live_mut()) {
            *dst = src.take();
        }
        self.slots = slots;
        trace!(
            "grow-list: grew backing store {old_capacity} -> {new_capacity} (len {})",
            self.len
        );
    }
}

#[cold]
fn capacity_overflow(capacity: usize) -> ! {
    panic!("grow-list: capacity overflow doubling {capacity}")
}

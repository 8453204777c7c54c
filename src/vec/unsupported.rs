// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operations that are deliberately outside the list contract.
//!
//! They exist so callers written against a fuller list interface get an
//! explicit [`Error::NotSupported`] instead of a silent fallback.

// Crate imports
use crate::{error::Error, vec::GrowList};

// Alloc imports
use alloc::boxed::Box;

impl<T> GrowList<T> {
    /// Sub-range views are not supported.
    pub fn sub_list(&self, _from: usize, _to: usize) -> Result<&[T], Error> {
        Err(Error::NotSupported("sub_list"))
    }

    /// Positional cursors that allow mutation during iteration are not
    /// supported; use [`cursor`](GrowList::cursor).
    pub fn list_cursor(&mut self, _index: usize) -> Result<core::convert::Infallible, Error> {
        Err(Error::NotSupported("list_cursor"))
    }

    /// Materializing the elements into a boxed array is not supported; use
    /// [`iter`](GrowList::iter) and collect instead.
    pub fn to_array(&self) -> Result<Box<[T]>, Error> {
        Err(Error::NotSupported("to_array"))
    }
}

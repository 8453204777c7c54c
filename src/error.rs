// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowList`.
//!
//! Every failure is reported synchronously to the immediate caller; nothing is
//! retried or recovered internally. The type is `Copy` and implements
//! `core::error::Error`.

// External imports
use thiserror::Error;

/// Errors returned by operations on [`GrowList`](crate::GrowList) and
/// [`Cursor`](crate::Cursor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// An index was outside the valid bound for the operation.
    ///
    /// Reads, replacements and removals accept `index < len`; insertions
    /// accept `index <= len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// A cursor was advanced past the last element.
    #[error("no more elements")]
    NoMoreElements,
    /// The list was structurally modified after the cursor was created.
    ///
    /// Once a cursor reports this, it keeps reporting it on every call.
    #[error("list was structurally modified during iteration")]
    ConcurrentMutation,
    /// A required collection argument was absent.
    #[error("required collection argument is absent")]
    NullInput,
    /// The operation is deliberately outside this list's contract.
    #[error("operation not supported: {0}")]
    NotSupported(&'static str),
}

impl Error {
    #[inline]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::out_of_range(3, 2));
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::out_of_range(5, 1).to_string(),
            "index 5 out of range for length 1"
        );
        assert_eq!(Error::NoMoreElements.to_string(), "no more elements");
        assert_eq!(
            Error::ConcurrentMutation.to_string(),
            "list was structurally modified during iteration"
        );
        assert_eq!(
            Error::NullInput.to_string(),
            "required collection argument is absent"
        );
        assert_eq!(
            Error::NotSupported("sub_list").to_string(),
            "operation not supported: sub_list"
        );
    }
}

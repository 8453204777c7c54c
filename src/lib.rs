// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `grow-list`
//!
//! A `no_std` (+ `alloc`), growable, index-addressed list with fail-fast
//! cursors and an in-place quicksort, **with no `unsafe`**.
//!
//! The core type, [`GrowList<T>`], owns a contiguous backing store of slots
//! and tracks a logical length `len ∈ 0..=capacity`. Only the prefix
//! `[0..len)` is ever observable through the public API.
//!
//! ## High-level semantics
//!
//! - Appending is amortized `O(1)`: when the backing store is full its
//!   capacity is doubled and the live elements are moved over in order.
//!   The store never shrinks on its own.
//! - Positional operations ([`GrowList::insert`], [`GrowList::remove`],
//!   [`GrowList::insert_all`]) shift the tail with index arithmetic.
//! - Every **structural** mutation (anything that changes the element count
//!   or order, including sorting) bumps a revision counter.
//!   Replacing a value in place ([`GrowList::set`], `IndexMut`) does not.
//! - A [`Cursor`] snapshots the revision when it is created and fails with
//!   [`Error::ConcurrentMutation`] on the first read after the list has been
//!   structurally modified.
//! - [`GrowList::sort_by`] sorts the live range in place with a Lomuto-style
//!   quicksort. The sort is **not stable**.
//!
//! ## Error handling
//!
//! Out-of-range positions, cursor exhaustion, concurrent mutation, absent
//! arguments and deliberately unsupported operations are all reported as
//! [`Error`] values. Only the `Index`/`IndexMut` operators panic, exactly
//! like slice indexing.
//!
//! ## Features
//!
//! - `serde`: enables `Serialize` / `Deserialize` for `GrowList<T>`
//!   (as a plain sequence).
//!
//! ## Example
//!
//! ```rust
//! use grow_list::GrowList;
//!
//! let mut v: GrowList<&str> = GrowList::new();
//! v.add_all(&["Eagle", "Pig", "Boar", "Wolf", "Tiger"]);
//! v.sort();
//! assert_eq!(v.to_string(), "[Boar, Eagle, Pig, Tiger, Wolf]");
//!
//! let mut cursor = v.cursor();
//! assert_eq!(cursor.next(&v), Ok(&"Boar"));
//! v.add("Lynx");
//! assert_eq!(cursor.next(&v), Err(grow_list::Error::ConcurrentMutation));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod collection;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
pub mod sort;
mod vec;

// Public exports (crate API surface)
pub use collection::Collection;
pub use error::Error;
pub use iter::{Cursor, IntoIter, Iter};
pub use vec::{DEFAULT_CAPACITY, GrowList};

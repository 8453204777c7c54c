// This file is part of grow-list.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`GrowList`](crate::GrowList).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence, growing as needed. The result starts
//!   at revision `0`; capacity and revision are never serialized.

// Crate imports
use crate::vec::{DEFAULT_CAPACITY, GrowList};

// Core imports
use core::fmt;

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

// Upper bound on how much a size hint may pre-allocate.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for GrowList<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let mut seq = s.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct ListVisitor<T>(core::marker::PhantomData<T>);

impl<'de, T> de::Visitor<'de> for ListVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = GrowList<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("array or sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).clamp(DEFAULT_CAPACITY, MAX_PREALLOC);
        let mut out = GrowList::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.add(elem);
        }
        out.revision = 0;
        Ok(out)
    }
}

impl<'de, T> Deserialize<'de> for GrowList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(ListVisitor::<T>(core::marker::PhantomData))
    }
}

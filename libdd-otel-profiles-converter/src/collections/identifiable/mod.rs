// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{ConvertError, Table};
use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hash};

pub type FxIndexSet<K> = indexmap::IndexSet<K, BuildHasherDefault<rustc_hash::FxHasher>>;
pub type FxHashMap<K, V> = HashMap<K, V, BuildHasherDefault<rustc_hash::FxHasher>>;

pub trait Id: Copy + Eq + Hash {
    /// Convert from a usize offset into an Id. Returns `None` if the offset cannot be expressed
    /// as a non-negative `int32`, which is the index type of the dictionary schema.
    fn from_offset(offset: usize) -> Option<Self>;
}

pub trait Item: Eq + Hash {
    /// The Id associated with this Item, e.g. Function -> FunctionIndex.
    type Id: Id;

    /// The dictionary table that holds items of this kind.
    const TABLE: Table;
}

/// Returns the `int32` index for an offset, if there is one.
#[inline]
pub fn small_index(offset: usize) -> Option<i32> {
    i32::try_from(offset).ok()
}

pub trait Dedup<T: Item> {
    /// Deduplicate the Item and return its associated Id, along with whether the item was new
    /// to the collection.
    fn checked_dedup_full(&mut self, item: T) -> Result<(T::Id, bool), ConvertError>;

    /// Deduplicate the Item, and check if the generated Id is valid.
    fn checked_dedup(&mut self, item: T) -> Result<T::Id, ConvertError> {
        Ok(self.checked_dedup_full(item)?.0)
    }

    /// Returns the Id of an equal item without inserting it.
    fn find(&self, item: &T) -> Option<T::Id>;
}

impl<T: Item> Dedup<T> for FxIndexSet<T> {
    fn checked_dedup_full(&mut self, item: T) -> Result<(T::Id, bool), ConvertError> {
        let (offset, inserted) = self.insert_full(item);
        let full = ConvertError::StorageFull { table: T::TABLE };
        if offset >= self.len() {
            return Err(full);
        }
        let id = T::Id::from_offset(offset).ok_or(full)?;
        Ok((id, inserted))
    }

    fn find(&self, item: &T) -> Option<T::Id> {
        self.get_index_of(item).and_then(T::Id::from_offset)
    }
}

/// Looks up `item` by reference and clones it into the set only when it is new.
pub fn dedup_ref<T: Item + Clone>(set: &mut FxIndexSet<T>, item: &T) -> Result<T::Id, ConvertError> {
    match set.get_index_of(item) {
        Some(offset) => {
            T::Id::from_offset(offset).ok_or(ConvertError::StorageFull { table: T::TABLE })
        }
        None => set.checked_dedup(item.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
    struct TestId(i32);

    impl Id for TestId {
        fn from_offset(offset: usize) -> Option<Self> {
            small_index(offset).map(Self)
        }
    }

    #[derive(Clone, Debug, Eq, PartialEq, Hash)]
    struct Word(&'static str);

    impl Item for Word {
        type Id = TestId;
        const TABLE: Table = Table::Strings;
    }

    #[test]
    fn test_small_index() {
        assert_eq!(Some(0), small_index(0));
        assert_eq!(Some(i32::MAX), small_index(i32::MAX as usize));
        assert_eq!(None, small_index(i32::MAX as usize + 1));
    }

    #[test]
    fn dedup_returns_first_offset() {
        let mut set = FxIndexSet::<Word>::default();
        assert_eq!((TestId(0), true), set.checked_dedup_full(Word("a")).unwrap());
        assert_eq!((TestId(1), true), set.checked_dedup_full(Word("b")).unwrap());
        assert_eq!((TestId(0), false), set.checked_dedup_full(Word("a")).unwrap());
        assert_eq!(2, set.len());

        assert_eq!(Some(TestId(1)), set.find(&Word("b")));
        assert_eq!(None, set.find(&Word("c")));
    }

    #[test]
    fn dedup_ref_only_clones_new_items() {
        let mut set = FxIndexSet::<Word>::default();
        assert_eq!(TestId(0), dedup_ref(&mut set, &Word("a")).unwrap());
        assert_eq!(TestId(0), dedup_ref(&mut set, &Word("a")).unwrap());
        assert_eq!(TestId(1), dedup_ref(&mut set, &Word("b")).unwrap());
        assert_eq!(2, set.len());
    }
}

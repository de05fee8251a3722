//! Resident-set index: hash lookup plus recency order, kept bijective.
//!
//! Pairs an `FxHashMap` from key to list node with a [`RecencyList`] holding
//! the eviction order. Every mutating operation updates both sides before
//! returning, so the key set of the map and the key set of the list are
//! identical at every observable point.
//!
//! ## Architecture
//!
//! ```text
//!   index: FxHashMap<K, SlotId>        list: RecencyList<K>
//!   ┌─────────┬─────────┐             front ─► [A] ◄──► [B] ◄──► [C] ◄── back
//!   │  key A  │  id_1   │               LRU                          MRU
//!   │  key B  │  id_2   │
//!   │  key C  │  id_3   │
//!   └─────────┴─────────┘
//! ```
//!
//! ## Behavior
//! - `contains(k)`: membership probe, no reordering
//! - `touch(k)`: promote a resident key to the MRU end
//! - `insert(k)`: append a new key at the MRU end
//! - `evict_front()`: remove and return the LRU key
//! - `remove(k)`: delete from list and index
//!
//! All of the above are O(1) average.
//!
//! `touch` of an absent key, `insert` of a present key, and `evict_front` of
//! an empty index are precondition violations. They are unreachable from
//! correct simulator use and panic immediately: a simulation that continued
//! past one would report wrong hit ratios and eviction sequences.

use rustc_hash::FxHashMap;

use crate::ds::recency_list::RecencyList;
use crate::ds::slot_arena::SlotId;
use crate::error::InvariantError;
use crate::traits::SimKey;

/// Resident key set ordered by recency of use.
#[derive(Debug)]
pub struct RecencyIndex<K> {
    list: RecencyList<K>,
    index: FxHashMap<K, SlotId>,
}

impl<K: SimKey> RecencyIndex<K> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            list: RecencyList::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates an empty index with storage reserved for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: RecencyList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of resident keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if no keys are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if `key` is resident. Never reorders.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Promotes a resident key to the MRU end.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not resident.
    #[inline]
    pub fn touch(&mut self, key: &K) {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => panic!("recency index: touch of absent key"),
        };
        let moved = self.list.move_to_back(id);
        debug_assert!(moved, "index maps key to a node the list does not hold");
    }

    /// Appends an absent key at the MRU end.
    ///
    /// # Panics
    ///
    /// Panics if `key` is already resident.
    #[inline]
    pub fn insert(&mut self, key: K) {
        if self.index.contains_key(&key) {
            panic!("recency index: insert of resident key");
        }
        let id = self.list.push_back(key.clone());
        self.index.insert(key, id);
    }

    /// Removes and returns the key at the LRU end.
    ///
    /// # Panics
    ///
    /// Panics if the index is empty.
    #[inline]
    pub fn evict_front(&mut self) -> K {
        let key = match self.list.pop_front() {
            Some(key) => key,
            None => panic!("recency index: evict_front of empty index"),
        };
        let unmapped = self.index.remove(&key);
        debug_assert!(unmapped.is_some(), "evicted key missing from index");
        key
    }

    /// Removes `key` from the index; returns `true` if it was resident.
    pub fn remove(&mut self, key: &K) -> bool {
        let id = match self.index.remove(key) {
            Some(id) => id,
            None => return false,
        };
        let removed = self.list.remove(id);
        debug_assert!(removed.is_some(), "index maps key to a node the list does not hold");
        true
    }

    /// Iterates over resident keys from the LRU end to the MRU end.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.list.iter()
    }

    /// Validates the index/list bijection and link structure.
    ///
    /// Intended for tests and debugging sweeps; the hot path relies on the
    /// per-operation precondition panics instead.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index/list length mismatch: {} != {}",
                self.index.len(),
                self.list.len()
            )));
        }
        let mut walked = 0usize;
        for key in self.list.iter() {
            let id = match self.index.get(key) {
                Some(&id) => id,
                None => return Err(InvariantError::new("list key missing from index")),
            };
            if self.list.get(id) != Some(key) {
                return Err(InvariantError::new("index id does not resolve to its key"));
            }
            walked += 1;
            if walked > self.index.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
        }
        if walked != self.index.len() {
            return Err(InvariantError::new("list walk did not cover the index"));
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("recency index invariant violated: {}", err);
        }
    }
}

impl<K: SimKey> Default for RecencyIndex<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(index: &RecencyIndex<u64>) -> Vec<u64> {
        index.iter().copied().collect()
    }

    #[test]
    fn insert_appends_in_recency_order() {
        let mut index = RecencyIndex::new();
        index.insert(1);
        index.insert(2);
        index.insert(3);
        assert_eq!(order(&index), vec![1, 2, 3]);
        assert_eq!(index.len(), 3);
        index.debug_validate_invariants();
    }

    #[test]
    fn contains_does_not_reorder() {
        let mut index = RecencyIndex::new();
        index.insert(1);
        index.insert(2);
        assert!(index.contains(&1));
        assert!(!index.contains(&9));
        assert_eq!(order(&index), vec![1, 2]);
    }

    #[test]
    fn touch_moves_key_to_mru_end() {
        let mut index = RecencyIndex::new();
        index.insert(1);
        index.insert(2);
        index.insert(3);
        index.touch(&1);
        assert_eq!(order(&index), vec![2, 3, 1]);
        index.debug_validate_invariants();
    }

    #[test]
    fn evict_front_returns_lru_key() {
        let mut index = RecencyIndex::new();
        index.insert(1);
        index.insert(2);
        index.touch(&1);
        assert_eq!(index.evict_front(), 2);
        assert_eq!(index.evict_front(), 1);
        assert!(index.is_empty());
        index.debug_validate_invariants();
    }

    #[test]
    fn remove_deletes_from_both_sides() {
        let mut index = RecencyIndex::new();
        index.insert(1);
        index.insert(2);
        index.insert(3);

        assert!(index.remove(&2));
        assert!(!index.contains(&2));
        assert_eq!(order(&index), vec![1, 3]);
        assert!(!index.remove(&2));
        index.debug_validate_invariants();
    }

    #[test]
    fn removed_key_can_be_reinserted() {
        let mut index = RecencyIndex::new();
        index.insert(1);
        index.insert(2);
        assert!(index.remove(&1));
        index.insert(1);
        assert_eq!(order(&index), vec![2, 1]);
        index.debug_validate_invariants();
    }

    #[test]
    fn string_keys_are_supported() {
        let mut index: RecencyIndex<String> = RecencyIndex::new();
        index.insert("alpha".to_string());
        index.insert("beta".to_string());
        index.touch(&"alpha".to_string());
        assert_eq!(index.evict_front(), "beta");
        index.debug_validate_invariants();
    }

    #[test]
    #[should_panic(expected = "touch of absent key")]
    fn touch_of_absent_key_panics() {
        let mut index: RecencyIndex<u64> = RecencyIndex::new();
        index.touch(&1);
    }

    #[test]
    #[should_panic(expected = "insert of resident key")]
    fn insert_of_resident_key_panics() {
        let mut index = RecencyIndex::new();
        index.insert(1u64);
        index.insert(1u64);
    }

    #[test]
    #[should_panic(expected = "evict_front of empty index")]
    fn evict_front_of_empty_panics() {
        let mut index: RecencyIndex<u64> = RecencyIndex::new();
        index.evict_front();
    }

    #[test]
    fn check_invariants_passes_after_churn() {
        let mut index = RecencyIndex::with_capacity(8);
        for k in 0..8u64 {
            index.insert(k);
        }
        index.touch(&0);
        index.touch(&4);
        index.remove(&2);
        index.evict_front();
        assert!(index.check_invariants().is_ok());
    }
}

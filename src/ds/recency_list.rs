//! Recency-ordered key list backed by `SlotArena`.
//!
//! Stores list nodes in a `SlotArena` and links them by `SlotId`, enabling
//! stable handles and O(1) promote/evict without pointer chasing.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<K>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { key, prev, next }                    │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { key: A, prev: None, next: Some(id_2) }    │
//!   │ id_2   │ { key: B, prev: Some(id_1), next: id_3 }    │
//!   │ id_3   │ { key: C, prev: Some(id_2), next: None }    │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   front ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── back
//!     LRU                                 MRU
//! ```
//!
//! ## Operations
//! - `push_back(key)`: append at the MRU end
//! - `pop_front()`: remove from the LRU end
//! - `move_to_back(id)`: detach + re-attach at the MRU end (a "touch")
//! - `remove(id)`: detach + free slot in arena
//!
//! All of the above are O(1); `iter` is O(n).
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<K> {
    key: K,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked recency list: front = least recently used, back = most
/// recently used.
#[derive(Debug)]
pub struct RecencyList<K> {
    arena: SlotArena<Node<K>>,
    front: Option<SlotId>,
    back: Option<SlotId>,
}

impl<K> RecencyList<K> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            front: None,
            back: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            front: None,
            back: None,
        }
    }

    /// Returns the number of keys in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the key at the LRU end.
    pub fn front(&self) -> Option<&K> {
        self.front
            .and_then(|id| self.arena.get(id).map(|node| &node.key))
    }

    /// Returns the key at the MRU end.
    pub fn back(&self) -> Option<&K> {
        self.back
            .and_then(|id| self.arena.get(id).map(|node| &node.key))
    }

    /// Returns the key for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&K> {
        self.arena.get(id).map(|node| &node.key)
    }

    /// Appends a new key at the MRU end and returns its `SlotId`.
    pub fn push_back(&mut self, key: K) -> SlotId {
        let id = self.arena.insert(Node {
            key,
            prev: self.back,
            next: None,
        });
        match self.back {
            Some(back) => {
                if let Some(node) = self.arena.get_mut(back) {
                    node.next = Some(id);
                }
            },
            None => self.front = Some(id),
        }
        self.back = Some(id);
        id
    }

    /// Removes and returns the key at the LRU end.
    pub fn pop_front(&mut self) -> Option<K> {
        let id = self.front?;
        self.detach(id);
        self.arena.remove(id).map(|node| node.key)
    }

    /// Moves an existing node to the MRU end; returns `false` if `id` is not
    /// present.
    pub fn move_to_back(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if Some(id) == self.back {
            return true;
        }
        self.detach(id);
        self.attach_back(id);
        true
    }

    /// Removes the node `id` from the list and returns its key.
    pub fn remove(&mut self, id: SlotId) -> Option<K> {
        if !self.arena.contains(id) {
            return None;
        }
        self.detach(id);
        self.arena.remove(id).map(|node| node.key)
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = None;
        self.back = None;
    }

    /// Returns an iterator from the LRU end to the MRU end.
    pub fn iter(&self) -> RecencyListIter<'_, K> {
        RecencyListIter {
            list: self,
            current: self.front,
        }
    }

    fn detach(&mut self, id: SlotId) {
        let (prev, next) = match self.arena.get(id) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.front = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.back = prev,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.prev = None;
            node.next = None;
        }
    }

    fn attach_back(&mut self, id: SlotId) {
        let old_back = self.back;
        if let Some(node) = self.arena.get_mut(id) {
            node.next = None;
            node.prev = old_back;
        } else {
            return;
        }
        match old_back {
            Some(old_back) => {
                if let Some(back_node) = self.arena.get_mut(old_back) {
                    back_node.next = Some(id);
                }
            },
            None => self.front = Some(id),
        }
        self.back = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.front.is_none() || self.back.is_none() {
            assert!(self.front.is_none());
            assert!(self.back.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut count = 0usize;
        let mut current = self.front;
        let mut prev = None;

        while let Some(id) = current {
            let node = self.arena.get(id).expect("linked node missing from arena");
            assert_eq!(node.prev, prev);
            if node.next.is_none() {
                assert_eq!(self.back, Some(id));
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            assert!(count <= self.len(), "cycle detected in recency list");
        }

        assert_eq!(count, self.len());
    }
}

impl<K> Default for RecencyList<K> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RecencyListIter<'a, K> {
    list: &'a RecencyList<K>,
    current: Option<SlotId>,
}

impl<'a, K> Iterator for RecencyListIter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.key)
    }
}

// Copyright 2025 the Groundcover Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recency list: arena slots, index links, and the public operations.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

/// A fixed-capacity key→value store ordered by most-recent touch.
///
/// The chain runs from the most-recently-touched entry (head) to the least
/// (tail). [`get`](RecencyList::get) and [`update`](RecencyList::update)
/// promote their entry to the head; when an upsert pushes the list over
/// capacity, the tail entry is evicted and returned. All operations are
/// O(1) amortized.
pub struct RecencyList<K, V> {
    slots: Vec<Option<Slot<K, V>>>,
    free: Vec<usize>,
    map: HashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

struct Slot<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

impl<K: Hash + Eq + Clone, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V> RecencyList<K, V> {
    /// Create a list with the default capacity of a single entry.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create a list holding at most `capacity` entries.
    ///
    /// A zero capacity silently collapses to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            map: HashMap::new(),
            head: None,
            tail: None,
            capacity: capacity.max(1),
        }
    }

    /// The maximum number of entries this list holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Whether `key` is present, without touching its recency.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.map.clear();
        self.head = None;
        self.tail = None;
    }

    /// Look up `key`, promoting a hit to most-recently-touched.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.unlink(idx);
        self.push_front(idx);
        self.slots[idx].as_ref().map(|s| &s.value)
    }

    /// Insert or overwrite the value for `key` and promote it.
    ///
    /// When the write pushes the list over capacity, the tail entry is
    /// evicted and returned. Size grows by at most one per call, so at most
    /// one entry is ever evicted.
    pub fn update(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            self.slots[idx]
                .as_mut()
                .expect("mapped slot is occupied")
                .value = value;
            self.unlink(idx);
            self.push_front(idx);
            return None;
        }

        let idx = self.alloc(key.clone(), value);
        self.map.insert(key, idx);
        self.push_front(idx);

        if self.map.len() > self.capacity {
            let tail = self.tail.expect("non-empty list has a tail");
            self.unlink(tail);
            let slot = self.slots[tail].take().expect("tail slot is occupied");
            self.free.push(tail);
            self.map.remove(&slot.key);
            return Some((slot.key, slot.value));
        }
        None
    }

    /// Insert `key` only if it is absent.
    ///
    /// A present key is left exactly as it was: value kept, recency
    /// untouched, nothing evicted.
    pub fn add(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.map.contains_key(&key) {
            return None;
        }
        self.update(key, value)
    }

    /// Unconditionally remove the entry for `key`, returning its value.
    pub fn pluck(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.unlink(idx);
        let slot = self.slots[idx].take().expect("mapped slot is occupied");
        self.free.push(idx);
        Some(slot.value)
    }

    /// Entries from most- to least-recently-touched.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    fn alloc(&mut self, key: K, value: V) -> usize {
        let slot = Slot {
            key,
            value,
            prev: None,
            next: None,
        };
        if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(slot);
            idx
        } else {
            self.slots.push(Some(slot));
            self.slots.len() - 1
        }
    }

    /// Detach `idx` from the chain, fixing head/tail and neighbor links.
    /// The slot itself stays allocated.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let s = self.slots[idx].as_ref().expect("linked slot is occupied");
            (s.prev, s.next)
        };
        match prev {
            Some(p) => self.slots[p].as_mut().expect("prev slot is occupied").next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].as_mut().expect("next slot is occupied").prev = prev,
            None => self.tail = prev,
        }
        let s = self.slots[idx].as_mut().expect("linked slot is occupied");
        s.prev = None;
        s.next = None;
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let s = self.slots[idx].as_mut().expect("pushed slot is occupied");
            s.prev = None;
            s.next = old_head;
        }
        if let Some(h) = old_head {
            self.slots[h].as_mut().expect("head slot is occupied").prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}

impl<K, V> Debug for RecencyList<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecencyList")
            .field("len", &self.map.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

/// Iterator over entries from most- to least-recently-touched.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    next: Option<usize>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.next?;
        let slot = self.list.slots[idx].as_ref()?;
        self.next = slot.next;
        Some((&slot.key, &slot.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn keys<'a>(list: &'a RecencyList<&'a str, u32>) -> Vec<&'a str> {
        list.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn update_evicts_exactly_the_tail() {
        let mut list = RecencyList::with_capacity(2);
        assert_eq!(list.update("a", 1), None);
        assert_eq!(list.update("b", 2), None);
        assert_eq!(list.update("c", 3), Some(("a", 1)));
        assert_eq!(list.len(), 2);
        assert_eq!(keys(&list), ["c", "b"]);
    }

    #[test]
    fn get_promotes_to_head() {
        let mut list = RecencyList::with_capacity(2);
        list.update("a", 1);
        list.update("b", 2);
        assert_eq!(list.get(&"a"), Some(&1));
        assert_eq!(keys(&list), ["a", "b"]);
        // "b" is now coldest and goes first.
        assert_eq!(list.update("c", 3), Some(("b", 2)));
    }

    #[test]
    fn get_absent_returns_none() {
        let mut list: RecencyList<&str, u32> = RecencyList::with_capacity(2);
        assert_eq!(list.get(&"missing"), None);
    }

    #[test]
    fn update_existing_overwrites_and_promotes() {
        let mut list = RecencyList::with_capacity(2);
        list.update("a", 1);
        list.update("b", 2);
        assert_eq!(list.update("a", 10), None);
        assert_eq!(list.get(&"a"), Some(&10));
        assert_eq!(list.update("c", 3), Some(("b", 2)));
    }

    #[test]
    fn add_leaves_present_key_untouched() {
        let mut list = RecencyList::with_capacity(2);
        list.add("a", 1);
        list.add("b", 2);
        // Present key: value kept, recency NOT refreshed.
        assert_eq!(list.add("a", 99), None);
        assert_eq!(keys(&list), ["b", "a"]);
        // "a" is still coldest, so it is the one evicted.
        assert_eq!(list.update("c", 3), Some(("a", 1)));
    }

    #[test]
    fn pluck_relinks_every_position() {
        let mut list = RecencyList::with_capacity(4);
        for (k, v) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            list.update(k, v);
        }
        assert_eq!(keys(&list), ["d", "c", "b", "a"]);

        // Interior.
        assert_eq!(list.pluck(&"c"), Some(3));
        assert_eq!(keys(&list), ["d", "b", "a"]);
        // Tail.
        assert_eq!(list.pluck(&"a"), Some(1));
        assert_eq!(keys(&list), ["d", "b"]);
        // Head.
        assert_eq!(list.pluck(&"d"), Some(4));
        assert_eq!(keys(&list), ["b"]);
        // Singleton.
        assert_eq!(list.pluck(&"b"), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);

        // Chain is reusable after going empty.
        list.update("e", 5);
        assert_eq!(keys(&list), ["e"]);
    }

    #[test]
    fn pluck_absent_returns_none() {
        let mut list: RecencyList<&str, u32> = RecencyList::with_capacity(2);
        list.update("a", 1);
        assert_eq!(list.pluck(&"zzz"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn capacity_floors_to_one() {
        let mut list = RecencyList::with_capacity(0);
        assert_eq!(list.capacity(), 1);
        assert_eq!(list.update("a", 1), None);
        assert_eq!(list.update("b", 2), Some(("a", 1)));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn len_always_matches_reachable_nodes() {
        let mut list = RecencyList::with_capacity(3);
        list.update("a", 1);
        list.update("b", 2);
        list.update("c", 3);
        list.pluck(&"b");
        list.update("d", 4);
        list.update("e", 5); // evicts the tail
        list.get(&"c");
        assert_eq!(list.len(), list.iter().count());
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn evicted_slot_is_reused() {
        let mut list = RecencyList::with_capacity(1);
        list.update("a", 1);
        list.update("b", 2);
        list.update("c", 3);
        // One live entry at a time; the arena does not grow past two slots
        // (one live, one transiently allocated before eviction).
        assert_eq!(list.len(), 1);
        assert!(list.slots.len() <= 2);
    }
}

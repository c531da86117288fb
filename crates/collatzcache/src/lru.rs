//! LRU (Least Recently Used) memoization cache
//!
//! Entries live in a slot arena linked into a doubly-linked recency list,
//! so lookup, promotion and eviction are all O(1).

use std::collections::HashMap;
use ahash::RandomState;

use crate::error::{Error, Result};

/// Entry in the recency list
struct Entry {
    key: u64,
    value: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Fixed-capacity cache from sequence inputs to step counts
pub struct MemoCache {
    map: HashMap<u64, usize, RandomState>,
    entries: Vec<Option<Entry>>,
    /// Most recently used
    head: Option<usize>,
    /// Least recently used
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: usize,
    evictions: u64,
}

impl MemoCache {
    /// Create a new cache holding at most `capacity` entries
    ///
    /// # Errors
    /// * `Error::InvalidConfiguration` - `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidConfiguration(
                "cache capacity must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            entries: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
            evictions: 0,
        })
    }

    /// Look up `key`, marking it most recently used on a hit
    pub fn get(&mut self, key: u64) -> Option<u64> {
        let idx = *self.map.get(&key)?;
        self.move_to_front(idx);
        self.entries[idx].as_ref().map(|entry| entry.value)
    }

    /// Insert or update `key`, evicting the least recently used entry when full
    pub fn put(&mut self, key: u64, value: u64) {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(entry) = &mut self.entries[idx] {
                entry.value = value;
            }
            self.move_to_front(idx);
            return;
        }

        if self.map.len() >= self.capacity {
            self.evict();
        }

        let idx = self.alloc_slot();
        self.entries[idx] = Some(Entry {
            key,
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.entries[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.map.insert(key, idx);
    }

    /// Read `key` without touching recency order
    pub fn peek(&self, key: u64) -> Option<u64> {
        let idx = *self.map.get(&key)?;
        self.entries[idx].as_ref().map(|entry| entry.value)
    }

    /// Check membership without touching recency order
    pub fn contains(&self, key: u64) -> bool {
        self.map.contains_key(&key)
    }

    /// Keys from most to least recently used
    pub fn keys(&self) -> Keys<'_> {
        Keys {
            cache: self,
            cursor: self.head,
        }
    }

    /// Current number of entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries evicted since creation
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Remove every entry; capacity is unchanged
    pub fn clear(&mut self) {
        self.map.clear();
        self.entries.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);

        if let Some(entry) = &mut self.entries[idx] {
            entry.prev = None;
            entry.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.entries[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.entries[idx] {
            Some(entry) => (entry.prev, entry.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_entry) = &mut self.entries[prev_idx] {
                    prev_entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_entry) = &mut self.entries[next_idx] {
                    next_entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn evict(&mut self) {
        let Some(tail_idx) = self.tail else {
            return;
        };

        // Unlink while the slot is still occupied so head/tail get repaired.
        self.unlink(tail_idx);
        if let Some(entry) = self.entries[tail_idx].take() {
            self.map.remove(&entry.key);
            self.free_list.push(tail_idx);
            self.evictions += 1;
        }
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.entries.len();
            self.entries.push(None);
            idx
        }
    }
}

/// Iterator over cache keys in recency order, returned by [`MemoCache::keys`]
pub struct Keys<'a> {
    cache: &'a MemoCache,
    cursor: Option<usize>,
}

impl Iterator for Keys<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let entry = self.cache.entries[self.cursor?].as_ref()?;
        self.cursor = entry.next;
        Some(entry.key)
    }
}

#[cfg(test)]
impl MemoCache {
    /// Walk the recency list and check it agrees with the index and arena
    fn assert_consistent(&self) {
        assert!(self.len() <= self.capacity);
        assert!(self.entries.len() <= self.capacity);

        let mut forward = Vec::new();
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let entry = self.entries[idx].as_ref().expect("linked slot is vacant");
            assert_eq!(entry.prev, prev, "broken back link at slot {}", idx);
            assert_eq!(self.map.get(&entry.key), Some(&idx));
            forward.push(entry.key);
            prev = Some(idx);
            cursor = entry.next;
        }
        assert_eq!(self.tail, prev);
        assert_eq!(forward.len(), self.map.len());

        let occupied = self.entries.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.map.len());
        assert_eq!(occupied + self.free_list.len(), self.entries.len());
    }
}

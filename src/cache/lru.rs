//! Recency Index Module
//!
//! Orders cache keys by when they were last inserted or read.

use std::collections::{BTreeMap, HashMap};

// == Recency Index ==
/// Tracks access order for LRU eviction.
///
/// Every `touch` stamps the key with a fresh, strictly increasing tick:
/// - Smallest tick = least recently used
/// - Largest tick = most recently used
///
/// Order depends only on the sequence of touches, never on access counts,
/// so two keys can never tie.
#[derive(Debug, Default)]
pub struct RecencyIndex {
    /// Keys ordered by tick
    order: BTreeMap<u64, String>,
    /// Current tick of every tracked key
    ticks: HashMap<String, u64>,
    /// Next tick to hand out
    next_tick: u64,
}

impl RecencyIndex {
    // == Constructor ==
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used, inserting it if new.
    pub fn touch(&mut self, key: &str) {
        let tick = self.next_tick;
        self.next_tick += 1;

        if let Some(previous) = self.ticks.insert(key.to_string(), tick) {
            self.order.remove(&previous);
        }
        self.order.insert(tick, key.to_string());
    }

    // == Remove ==
    /// Stops tracking a key. Returns true if it was tracked.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.ticks.remove(key) {
            Some(tick) => {
                self.order.remove(&tick);
                true
            }
            None => false,
        }
    }

    // == Pop Oldest ==
    /// Removes and returns the least recently used key.
    pub fn pop_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.ticks.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.values().next().map(String::as_str)
    }

    /// Iterates keys from least to most recently used.
    pub fn iter_oldest_first(&self) -> impl Iterator<Item = &str> {
        self.order.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.ticks.contains_key(key)
    }

    /// Forgets every key. The tick counter keeps running.
    pub fn clear(&mut self) {
        self.order.clear();
        self.ticks.clear();
    }
}

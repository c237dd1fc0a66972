//! Insertion-order-preserving registers
//!
//! Market-type display priority and tournament/location popularity are both
//! announced by the feed through arrival order, never by an explicit sort
//! key. These containers record first-seen order and keep it stable under
//! re-insertion; nothing is ever removed during normal operation.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use types::ids::BettingTypeId;

/// Rank assigned to a market type never announced by a main-market record.
/// 100 means "sorts last" — a magic-number contract, not an error value.
pub const MAIN_MARKET_FALLBACK_RANK: usize = 100;

/// Insertion-ordered set of betting-type ids announced by main-market
/// records. Position in the set is the display priority of that market
/// type; re-recording a known id keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct PriorityRegister {
    order: Vec<BettingTypeId>,
    seen: HashSet<BettingTypeId>,
}

impl PriorityRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a betting-type id in arrival order.
    pub fn record(&mut self, type_id: BettingTypeId) {
        if self.seen.insert(type_id.clone()) {
            self.order.push(type_id);
        }
    }

    /// First-seen position of a type id, or [`MAIN_MARKET_FALLBACK_RANK`]
    /// for types never announced.
    pub fn position_of(&self, type_id: &BettingTypeId) -> usize {
        self.order
            .iter()
            .position(|known| known == type_id)
            .unwrap_or(MAIN_MARKET_FALLBACK_RANK)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

/// Map whose iteration order is first-insertion order. Re-inserting an
/// existing key replaces the value but keeps the key's original position.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    order: Vec<K>,
    entries: HashMap<K, V>,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: K, value: V) {
        if !self.entries.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Values in first-insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.entries.clear();
    }
}

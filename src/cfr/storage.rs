//! Storage for information sets.
//!
//! The map is owned by the trainer and handed to the traversal by mutable
//! reference. Records are created lazily on first visit and never removed.

use rustc_hash::FxHashMap;

use crate::cfr::info_set::{InformationSet, UNIFORM};
use crate::games::kuhn::{InfoSetKey, NUM_ACTIONS};

/// Mapping from information set key to its regret/strategy record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoSetMap {
    nodes: FxHashMap<InfoSetKey, InformationSet>,
}

impl InfoSetMap {
    /// Create new empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Fetch the record for `key`, creating a uniform one on first visit.
    pub fn get_or_create(&mut self, key: InfoSetKey) -> &mut InformationSet {
        self.nodes.entry(key).or_insert_with(|| {
            log::debug!("new information set '{}'", key);
            InformationSet::new(key)
        })
    }

    /// Look up an existing record.
    pub fn get(&self, key: &InfoSetKey) -> Option<&InformationSet> {
        self.nodes.get(key)
    }

    /// Average strategy at `key`, uniform for unseen information sets.
    pub fn average_strategy(&self, key: &InfoSetKey) -> [f64; NUM_ACTIONS] {
        match self.nodes.get(key) {
            Some(node) => node.average_strategy(),
            None => UNIFORM,
        }
    }

    /// Zero every strategy sum, keeping regrets and current strategies.
    pub fn reset_strategy_sums(&mut self) {
        for node in self.nodes.values_mut() {
            node.reset_strategy_sum();
        }
    }

    /// Get the number of information sets stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Check if an info set exists in storage.
    pub fn contains(&self, key: &InfoSetKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Iterate over all records in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&InfoSetKey, &InformationSet)> {
        self.nodes.iter()
    }

    /// Records sorted by their human-readable key.
    pub fn sorted(&self) -> Vec<&InformationSet> {
        let mut nodes: Vec<&InformationSet> = self.nodes.values().collect();
        nodes.sort_by_cached_key(|node| node.key().to_string());
        nodes
    }
}

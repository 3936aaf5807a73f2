//! Indexed reference tables

use std::collections::hash_map::Entry;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::lms::LmsParams;

/// One WHO reference table, indexed by its composite key
#[derive(Debug, Clone)]
pub struct ReferenceTable<K> {
    rows: FxHashMap<K, LmsParams>,
}

impl<K: Eq + Hash + Copy> ReferenceTable<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: FxHashMap::default(),
        }
    }

    /// Insert a row. The first row for a key wins; returns `false` when the
    /// key was already present and the new row was discarded.
    pub fn insert(&mut self, key: K, params: LmsParams) -> bool {
        match self.rows.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(params);
                true
            }
        }
    }

    /// Exact-key lookup; `None` when the key is not tabulated
    #[must_use]
    pub fn lookup(&self, key: &K) -> Option<LmsParams> {
        self.rows.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over all rows in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &LmsParams)> {
        self.rows.iter()
    }
}

impl<K: Eq + Hash + Copy> Default for ReferenceTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

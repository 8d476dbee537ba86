// src/index.rs

use serde::Serialize;
use std::collections::HashMap;

/// Bidirectional name <-> position mapping for one axis.
///
/// The mapping is rebuilt in full after any operation that reorders or
/// regenerates the axis names, and extended incrementally on single appends.
/// Duplicate names (which slices may legitimately produce) resolve to the
/// last position carrying the name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NameIndex {
    positions: HashMap<String, usize>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full O(n) rebuild from the current axis-name sequence.
    pub fn rebuild(&mut self, names: &[String]) {
        self.positions.clear();
        for (pos, name) in names.iter().enumerate() {
            self.positions.insert(name.clone(), pos);
        }
    }

    /// Register a single appended name.
    pub fn insert(&mut self, name: &str, pos: usize) {
        self.positions.insert(name.to_string(), pos);
    }

    /// Position of a name, or None. Absence is a valid outcome, not an error.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

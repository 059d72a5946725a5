//! Accumulator mapping type names to the objects that carry them

use serde_json::Value;
use std::collections::BTreeMap;

/// Mapping from type name to the matched objects, in encounter order.
///
/// Keys iterate lexicographically; each entry's objects keep the order in
/// which the traversal found them. Objects accumulate and are never
/// overwritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeBucket {
    entries: BTreeMap<String, Vec<Value>>,
}

impl TypeBucket {
    /// Create an empty bucket
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object to the entry for `type_name`, creating it if absent
    pub fn push(&mut self, type_name: &str, object: Value) {
        self.entries
            .entry(type_name.to_string())
            .or_default()
            .push(object);
    }

    /// Absorb another bucket, concatenating object lists per type.
    ///
    /// `other`'s objects land after the ones already present, so merging
    /// per-document buckets in processing order yields the aggregate
    /// ordering: document order first, traversal order within a document.
    pub fn merge(&mut self, other: TypeBucket) {
        for (type_name, mut objects) in other.entries {
            self.entries.entry(type_name).or_default().append(&mut objects);
        }
    }

    /// Objects recorded for `type_name`, if any
    pub fn get(&self, type_name: &str) -> Option<&[Value]> {
        self.entries.get(type_name).map(Vec::as_slice)
    }

    /// Number of distinct types
    pub fn type_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of matched objects across all types
    pub fn object_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in lexicographic type-name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Value>)> {
        self.entries.iter()
    }

    /// Per-type object counts in lexicographic type-name order
    pub fn counts(&self) -> Vec<(String, usize)> {
        self.entries
            .iter()
            .map(|(name, objects)| (name.clone(), objects.len()))
            .collect()
    }

    /// Per-type object counts ordered by descending count.
    ///
    /// The sort is stable over the lexicographic sequence, so ties keep
    /// lexicographic order. Reruns over the same input produce identical
    /// orderings.
    pub fn counts_by_frequency(&self) -> Vec<(String, usize)> {
        let mut counts = self.counts();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

//! The backing store contract that answers "what is this identifier and what
//! is it related to".

use std::collections::{BTreeMap, BTreeSet};

use rxgraph_error::{Error, Result};

use crate::attrs::Attributes;
use crate::node::Key;

/// One outgoing relation of a vertex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Relation {
    pub target: Key,
    pub label: String,
}

impl Relation {
    pub fn new(target: impl Into<Key>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }
}

/// Synchronous, fallible lookups issued by vertices while they deliver.
///
/// Implementations own any caching or batching; the traversal issues one
/// blocking call per question.
pub trait BackingStore {
    /// Display attributes for `id`, `NotFound` when the store does not know it.
    fn attributes_of(&self, id: &Key) -> Result<Attributes>;

    /// Outgoing relations of `id`; empty when there are none.
    fn relations_of(&self, id: &Key) -> Result<Vec<Relation>>;

    /// Labels of the direct relations from `from` to `to`.
    fn relations_between(&self, from: &Key, to: &Key) -> Result<Vec<String>> {
        Ok(self
            .relations_of(from)?
            .into_iter()
            .filter(|rel| &rel.target == to)
            .map(|rel| rel.label)
            .collect())
    }
}

/// A store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    attributes: BTreeMap<Key, Attributes>,
    relations: BTreeMap<Key, BTreeSet<Relation>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` with display attributes.
    pub fn add_concept(&mut self, id: impl Into<Key>, attrs: Attributes) -> &mut Self {
        self.attributes.insert(id.into(), attrs);
        self
    }

    /// Register `from -label-> to`. Neither endpoint is registered implicitly.
    pub fn add_relation(
        &mut self,
        from: impl Into<Key>,
        label: impl Into<String>,
        to: impl Into<Key>,
    ) -> &mut Self {
        self.relations
            .entry(from.into())
            .or_default()
            .insert(Relation::new(to, label));
        self
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl BackingStore for MemoryStore {
    fn attributes_of(&self, id: &Key) -> Result<Attributes> {
        self.attributes
            .get(id)
            .cloned()
            .ok_or_else(|| Error::not_found(id.as_str()).with_operation("memory::attributes_of"))
    }

    fn relations_of(&self, id: &Key) -> Result<Vec<Relation>> {
        Ok(self
            .relations
            .get(id)
            .map(|rels| rels.iter().cloned().collect())
            .unwrap_or_default())
    }

    fn relations_between(&self, from: &Key, to: &Key) -> Result<Vec<String>> {
        Ok(self
            .relations
            .get(from)
            .into_iter()
            .flatten()
            .filter(|rel| &rel.target == to)
            .map(|rel| rel.label.clone())
            .collect())
    }
}

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use rxgraph_core::{
    Attributes, BackingStore, Concept, Error, GraphSource, Key, MemoryStore, Relation,
    RenderConfig, RenderContext, Result,
};

/// Run one pass from `root` and hand back the finished context.
pub fn render(store: &dyn BackingStore, root: &str, config: RenderConfig) -> RenderContext {
    let mut ctx = RenderContext::new(config);
    Concept::new(root, store).announce(&mut ctx, None);
    ctx
}

/// Output lines with indentation stripped.
pub fn lines(ctx: &RenderContext) -> Vec<&str> {
    ctx.output().lines().map(str::trim).collect()
}

/// Identifiers of node declaration lines, in output order.
pub fn declared_nodes(ctx: &RenderContext) -> Vec<String> {
    lines(ctx)
        .into_iter()
        .filter(|line| !line.contains(" -> "))
        .map(|line| {
            line.split([' ', ';'])
                .next()
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

/// `(from, to)` of edge lines, in output order.
pub fn declared_edges(ctx: &RenderContext) -> Vec<(String, String)> {
    lines(ctx)
        .into_iter()
        .filter_map(|line| {
            let (from, rest) = line.split_once(" -> ")?;
            let to = rest.split([' ', ';']).next()?;
            Some((from.to_string(), to.to_string()))
        })
        .collect()
}

/// Store where every concept is registered bare.
pub fn bare_store(nodes: &[&str], relations: &[(&str, &str, &str)]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for node in nodes {
        store.add_concept(*node, Attributes::new());
    }
    for (from, label, to) in relations {
        store.add_relation(*from, *label, *to);
    }
    store
}

/// Counts every lookup per identifier while delegating to an inner store.
pub struct CountingStore<S> {
    inner: S,
    calls: RefCell<BTreeMap<(&'static str, String), usize>>,
}

impl<S: BackingStore> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: RefCell::new(BTreeMap::new()),
        }
    }

    pub fn calls(&self, op: &'static str, id: &str) -> usize {
        self.calls
            .borrow()
            .get(&(op, id.to_string()))
            .copied()
            .unwrap_or(0)
    }

    fn record(&self, op: &'static str, id: &Key) {
        *self
            .calls
            .borrow_mut()
            .entry((op, id.to_string()))
            .or_default() += 1;
    }
}

impl<S: BackingStore> BackingStore for CountingStore<S> {
    fn attributes_of(&self, id: &Key) -> Result<Attributes> {
        self.record("attributes_of", id);
        self.inner.attributes_of(id)
    }

    fn relations_of(&self, id: &Key) -> Result<Vec<Relation>> {
        self.record("relations_of", id);
        self.inner.relations_of(id)
    }

    fn relations_between(&self, from: &Key, to: &Key) -> Result<Vec<String>> {
        self.record("relations_between", from);
        self.inner.relations_between(from, to)
    }
}

/// Fails chosen lookups with `QueryFailed` while delegating the rest.
pub struct FailingStore<S> {
    inner: S,
    failing: BTreeSet<(&'static str, String)>,
}

impl<S: BackingStore> FailingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            failing: BTreeSet::new(),
        }
    }

    pub fn fail(mut self, op: &'static str, id: &str) -> Self {
        self.failing.insert((op, id.to_string()));
        self
    }

    fn check(&self, op: &'static str, id: &Key) -> Result<()> {
        if self.failing.contains(&(op, id.to_string())) {
            return Err(Error::query_failed("database disk image is malformed")
                .with_operation(op)
                .with_context("id", id.as_str()));
        }
        Ok(())
    }
}

impl<S: BackingStore> BackingStore for FailingStore<S> {
    fn attributes_of(&self, id: &Key) -> Result<Attributes> {
        self.check("attributes_of", id)?;
        self.inner.attributes_of(id)
    }

    fn relations_of(&self, id: &Key) -> Result<Vec<Relation>> {
        self.check("relations_of", id)?;
        self.inner.relations_of(id)
    }

    fn relations_between(&self, from: &Key, to: &Key) -> Result<Vec<String>> {
        self.check("relations_between", from)?;
        self.inner.relations_between(from, to)
    }
}

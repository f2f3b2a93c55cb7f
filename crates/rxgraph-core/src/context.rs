//! The traversal engine.
//!
//! A [`RenderContext`] lives for exactly one rendering pass. It owns the set
//! of identities already announced, the depth counter that mirrors the
//! announce/deliver call stack, and the output buffer the entities write
//! their declarations into.

use std::collections::{HashMap, HashSet};

use rxgraph_error::{Error, ErrorKind};
use tracing::{debug, trace, warn};

use crate::dot;
use crate::node::{EdgeRef, Key};
use crate::source::GraphSource;

pub const DEFAULT_MAX_DEPTH: usize = 6;
pub const DEFAULT_MAX_WIDTH: usize = 10;

/// Bounds for one rendering pass. Both must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Announcements nested deeper than this are delivered as leaves.
    /// Edges count towards the depth just like vertices.
    pub max_depth: usize,
    /// Relation groups larger than this collapse into a proxy node.
    pub max_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl RenderConfig {
    pub fn new(max_depth: usize, max_width: usize) -> Self {
        Self {
            max_depth,
            max_width,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }
}

/// Counters collected while a pass runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub nodes: usize,
    pub edges: usize,
    pub leaves: usize,
    pub proxies: usize,
    /// Deepest announcement seen.
    pub deepest: usize,
}

/// A lookup that failed during traversal and was rendered as a bare stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub key: Key,
    pub kind: ErrorKind,
    pub message: String,
}

pub struct RenderContext {
    config: RenderConfig,
    visited: HashSet<Key>,
    /// DOT id written for each visited vertex, unique across key spaces.
    ids: HashMap<Key, String>,
    taken: HashSet<String>,
    depth: usize,
    output: String,
    next_token: usize,
    degradations: Vec<Degradation>,
    stats: RenderStats,
}

impl RenderContext {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            visited: HashSet::new(),
            ids: HashMap::new(),
            taken: HashSet::new(),
            depth: 0,
            output: String::with_capacity(4096),
            next_token: 0,
            degradations: Vec::new(),
            stats: RenderStats::default(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    pub fn max_width(&self) -> usize {
        self.config.max_width
    }

    /// Current nesting of announcements on the stack.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether `key` has been announced in this pass.
    pub fn has(&self, key: &Key) -> bool {
        self.visited.contains(key)
    }

    /// Deduplicate `entity` and, if it is new, have it deliver itself.
    pub fn announce(&mut self, entity: &mut dyn GraphSource) {
        let key = entity.identity();
        if self.visited.contains(&key) {
            trace!(id = %key, "already announced");
            return;
        }
        self.visited.insert(key.clone());
        if entity.endpoints().is_none() {
            self.assign_id(&key);
        }

        self.depth += 1;
        self.stats.deepest = self.stats.deepest.max(self.depth);
        let is_leaf = self.depth > self.config.max_depth;
        if is_leaf && entity.endpoints().is_none() {
            self.stats.leaves += 1;
        }
        debug!(id = %key, depth = self.depth, is_leaf, "deliver");

        entity.deliver(self, is_leaf);
        self.depth -= 1;
    }

    /// Record `via` on `entity` (when given) and announce it.
    pub fn announce_via(&mut self, entity: &mut dyn GraphSource, via: Option<EdgeRef>) {
        if let Some(via) = via {
            entity.set_via(via);
        }
        self.announce(entity);
    }

    /// Append the declaration of `entity` to the output.
    pub fn deliver(&mut self, entity: &dyn GraphSource) {
        let attrs = entity.declare();
        match entity.endpoints() {
            Some((from, to)) => {
                debug_assert!(
                    self.has(&from) && self.has(&to),
                    "edge {from} -> {to} delivered before its endpoints"
                );
                let (from, to) = (self.dot_id(&from).to_string(), self.dot_id(&to).to_string());
                dot::write_edge(&mut self.output, &from, &to, attrs.as_ref());
                self.stats.edges += 1;
            }
            None => {
                let id = self.dot_id(&entity.identity()).to_string();
                dot::write_node(&mut self.output, &id, attrs.as_ref());
                self.stats.nodes += 1;
            }
        }
    }

    /// A fresh key for a synthesized vertex, unique within this pass.
    ///
    /// Names already written for a vertex are skipped.
    pub fn synthesize_key(&mut self) -> Key {
        self.stats.proxies += 1;
        loop {
            self.next_token += 1;
            let name = format!("__proxy_{}", self.next_token);
            if !self.taken.contains(&name) {
                return Key::synthetic(name);
            }
        }
    }

    /// The DOT id written for a visited vertex.
    pub fn dot_id<'k>(&'k self, key: &'k Key) -> &'k str {
        self.ids.get(key).map_or(key.as_str(), String::as_str)
    }

    /// Give `key` its own name as DOT id, or a suffixed one if a vertex from
    /// another key space already holds that name.
    fn assign_id(&mut self, key: &Key) {
        let mut id = key.as_str().to_string();
        let mut suffix = 1;
        while self.taken.contains(&id) {
            suffix += 1;
            id = format!("{}_{suffix}", key.as_str());
        }
        if id != key.as_str() {
            debug!(id = %key, dot_id = %id, "renamed colliding vertex");
        }
        self.taken.insert(id.clone());
        self.ids.insert(key.clone(), id);
    }

    /// Record a lookup failure for `key`; the caller renders it bare.
    pub fn degrade(&mut self, key: &Key, err: &Error) {
        warn!(id = %key, error = %err, "lookup failed, rendering bare declaration");
        self.degradations.push(Degradation {
            key: key.clone(),
            kind: err.kind(),
            message: err.message().to_string(),
        });
    }

    pub fn degradations(&self) -> &[Degradation] {
        &self.degradations
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

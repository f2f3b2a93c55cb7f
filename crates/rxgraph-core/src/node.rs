use std::fmt;

use crate::attrs::Attributes;
use crate::context::RenderContext;
use crate::source::GraphSource;

/// Which kind of entity a [`Key`] names.
///
/// Keys from different spaces never compare equal, so a store identifier can
/// not shadow a synthesized proxy or an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeySpace {
    /// Identifiers handed out by a backing store or the caller.
    Vertex,
    /// Tokens minted by the context, e.g. proxy nodes.
    Synthetic,
    /// Edge identities derived from `(from, label, to)`.
    Edge,
}

/// Stable identity of a vertex or edge within one rendering pass.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    space: KeySpace,
    name: String,
}

impl Key {
    /// A vertex key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            space: KeySpace::Vertex,
            name: key.into(),
        }
    }

    pub fn synthetic(name: impl Into<String>) -> Self {
        Self {
            space: KeySpace::Synthetic,
            name: name.into(),
        }
    }

    /// The identity of the edge `from -label-> to`.
    ///
    /// Components are quoted so that names containing ` -> ` cannot make two
    /// different edges share a key.
    pub fn edge(from: &Key, label: &str, to: &Key) -> Self {
        Self {
            space: KeySpace::Edge,
            name: format!("{:?} -> {:?} [{:?}]", from.as_str(), to.as_str(), label),
        }
    }

    pub fn space(&self) -> KeySpace {
        self.space
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// The edge through which a vertex was discovered.
///
/// Holds keys only, so vertices never own each other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeRef {
    pub from: Key,
    pub label: String,
    pub to: Key,
}

impl EdgeRef {
    pub fn new(from: Key, label: impl Into<String>, to: Key) -> Self {
        Self {
            from,
            label: label.into(),
            to,
        }
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -[{}]-> {}", self.from, self.label, self.to)
    }
}

/// A plain vertex: identity, cosmetics and nothing to expand.
///
/// Used for proxy nodes standing in for collapsed fan-out, and for graphs
/// whose shape is known up front.
#[derive(Debug, Clone)]
pub struct Node {
    key: Key,
    attrs: Attributes,
    via: Option<EdgeRef>,
}

impl Node {
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            attrs: Attributes::default(),
            via: None,
        }
    }

    pub fn with_attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    /// A proxy for `count` collapsed relations; the label carries the count.
    pub fn proxy(key: Key, count: usize) -> Self {
        Self::new(key).with_attrs(
            Attributes::labeled(count.to_string())
                .with_shape("box")
                .with_style("dashed"),
        )
    }
}

impl GraphSource for Node {
    fn identity(&self) -> Key {
        self.key.clone()
    }

    fn declare(&self) -> Option<Attributes> {
        self.attrs.clone().into_declared()
    }

    fn via(&self) -> Option<&EdgeRef> {
        self.via.as_ref()
    }

    fn set_via(&mut self, via: EdgeRef) {
        self.via = Some(via);
    }

    fn deliver(&mut self, ctx: &mut RenderContext, _is_leaf: bool) {
        ctx.deliver(&*self);
    }
}

//! Bounded, deduplicating traversal of lazily discovered graphs into DOT.
//!
//! # Module Structure
//!
//! - [`source`]: the `GraphSource` capability every vertex and edge implements
//! - [`context`]: `RenderContext`, the identity-deduplicating, depth-bounded engine
//! - [`node`] / [`edge`]: keys, plain vertices, proxy nodes and labeled edges
//! - [`fanout`]: relation grouping and collapsing of dense fan-out
//! - [`store`]: the `BackingStore` contract and an in-memory store
//! - [`concept`]: a vertex backed by any `BackingStore`
//! - [`dot`]: declaration line formatting

pub mod attrs;
pub mod concept;
pub mod context;
pub mod dot;
pub mod edge;
pub mod fanout;
pub mod node;
pub mod source;
pub mod store;

pub use attrs::Attributes;
pub use concept::Concept;
pub use context::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_WIDTH, Degradation, RenderConfig, RenderContext, RenderStats,
};
pub use edge::Edge;
pub use node::{EdgeRef, Key, Node};
pub use rxgraph_error::{Error, ErrorKind, Result};
pub use source::GraphSource;
pub use store::{BackingStore, MemoryStore, Relation};

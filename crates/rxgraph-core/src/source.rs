//! The capability every vertex and edge kind implements to take part in a
//! rendering pass.
//!
//! # Protocol
//!
//! 1. Someone *announces* an entity to the [`RenderContext`].
//! 2. The context drops the announcement if the entity's [`identity`] was
//!    already seen in this pass.
//! 3. Otherwise it calls [`deliver`] exactly once. The entity writes its own
//!    declaration through [`RenderContext::deliver`] and then announces, but
//!    never delivers, whatever it is connected to.
//!
//! Edges announce both of their endpoints before delivering themselves, which
//! keeps every edge line after the declarations of the nodes it connects.
//!
//! [`identity`]: GraphSource::identity
//! [`deliver`]: GraphSource::deliver

use crate::attrs::Attributes;
use crate::context::RenderContext;
use crate::node::{EdgeRef, Key};

pub trait GraphSource {
    /// Stable key; two entities with the same key are the same vertex.
    fn identity(&self) -> Key;

    /// Display attributes, or `None` when a bare declaration suffices.
    fn declare(&self) -> Option<Attributes> {
        None
    }

    /// `Some((from, to))` for edges, `None` for vertices.
    fn endpoints(&self) -> Option<(Key, Key)> {
        None
    }

    /// The edge this entity was discovered through, if any.
    fn via(&self) -> Option<&EdgeRef> {
        None
    }

    fn set_via(&mut self, _via: EdgeRef) {}

    /// Called once per pass when the context first sees this identity.
    ///
    /// Must call `ctx.deliver(self)`. When `is_leaf` is false the entity may
    /// discover and announce its neighbours. When `is_leaf` is true it must
    /// not expand forward, but may announce a single edge back to its `via`
    /// node.
    fn deliver(&mut self, ctx: &mut RenderContext, is_leaf: bool);

    /// Record `via` and hand this entity to the context.
    fn announce(&mut self, ctx: &mut RenderContext, via: Option<EdgeRef>)
    where
        Self: Sized,
    {
        ctx.announce_via(self, via);
    }
}

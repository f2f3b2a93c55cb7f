use tracing::trace;

use crate::attrs::Attributes;
use crate::context::RenderContext;
use crate::edge::Edge;
use crate::fanout;
use crate::node::{EdgeRef, Key};
use crate::source::GraphSource;
use crate::store::BackingStore;

/// A vertex whose attributes and relations come from a [`BackingStore`].
///
/// Nothing is fetched until the context delivers the concept. A failed
/// attribute lookup leaves a bare declaration and stops expansion there.
pub struct Concept<'s> {
    key: Key,
    store: &'s dyn BackingStore,
    attrs: Option<Attributes>,
    via: Option<EdgeRef>,
}

impl<'s> Concept<'s> {
    pub fn new(key: impl Into<Key>, store: &'s dyn BackingStore) -> Self {
        Self {
            key: key.into(),
            store,
            attrs: None,
            via: None,
        }
    }

    /// At the depth boundary, keep the edge back to the discovering vertex
    /// visible if the store has one.
    fn announce_back_reference(&mut self, ctx: &mut RenderContext) {
        let Some(back) = self.via.as_ref().map(|via| via.from.clone()) else {
            return;
        };
        let labels = match self.store.relations_between(&self.key, &back) {
            Ok(labels) => labels,
            Err(err) => {
                ctx.degrade(&self.key, &err);
                return;
            }
        };
        let Some(label) = labels.into_iter().min() else {
            return;
        };

        trace!(id = %self.key, back = %back, label = %label, "leaf back-reference");
        let store = self.store;
        let mut node = Concept::new(back, store);
        ctx.announce(&mut Edge::new(self, label, &mut node));
    }
}

impl GraphSource for Concept<'_> {
    fn identity(&self) -> Key {
        self.key.clone()
    }

    fn declare(&self) -> Option<Attributes> {
        self.attrs.clone().and_then(Attributes::into_declared)
    }

    fn via(&self) -> Option<&EdgeRef> {
        self.via.as_ref()
    }

    fn set_via(&mut self, via: EdgeRef) {
        self.via = Some(via);
    }

    fn deliver(&mut self, ctx: &mut RenderContext, is_leaf: bool) {
        match self.store.attributes_of(&self.key) {
            Ok(attrs) => self.attrs = Some(attrs),
            Err(err) => {
                ctx.degrade(&self.key, &err);
                ctx.deliver(&*self);
                return;
            }
        }
        ctx.deliver(&*self);

        if is_leaf {
            self.announce_back_reference(ctx);
            return;
        }

        let relations = match self.store.relations_of(&self.key) {
            Ok(relations) => relations,
            Err(err) => {
                ctx.degrade(&self.key, &err);
                return;
            }
        };
        let store = self.store;
        fanout::announce_relations(self, ctx, relations, |key| Concept::new(key.clone(), store));
    }
}

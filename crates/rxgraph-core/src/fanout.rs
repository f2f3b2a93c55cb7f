//! Announcing discovered relations, with dense groups collapsed.
//!
//! Relations are grouped by label. A group no larger than the context's
//! `max_width` is announced edge by edge. A larger group becomes a single
//! proxy node carrying the group size plus one edge to it; if the origin was
//! discovered from a member of that group, one explicit edge back to that
//! member is announced as well so the back-reference stays visible.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::context::RenderContext;
use crate::edge::Edge;
use crate::node::{Key, Node};
use crate::source::GraphSource;
use crate::store::Relation;

/// Group relations by label, both levels in lexicographic order.
pub fn group_by_label(
    relations: impl IntoIterator<Item = Relation>,
) -> BTreeMap<String, BTreeSet<Key>> {
    let mut groups: BTreeMap<String, BTreeSet<Key>> = BTreeMap::new();
    for rel in relations {
        groups.entry(rel.label).or_default().insert(rel.target);
    }
    groups
}

/// Announce every relation of `origin`, building neighbour vertices with
/// `neighbor`.
pub fn announce_relations<N, F>(
    origin: &mut dyn GraphSource,
    ctx: &mut RenderContext,
    relations: Vec<Relation>,
    mut neighbor: F,
) where
    N: GraphSource,
    F: FnMut(&Key) -> N,
{
    let back_to = origin.via().map(|via| via.from.clone());

    for (label, targets) in group_by_label(relations) {
        if targets.len() <= ctx.max_width() {
            for target in &targets {
                let mut node = neighbor(target);
                ctx.announce(&mut Edge::new(&mut *origin, label.as_str(), &mut node));
            }
            continue;
        }

        debug!(
            id = %origin.identity(),
            label = %label,
            count = targets.len(),
            "collapsing fan-out"
        );
        let mut proxy = Node::proxy(ctx.synthesize_key(), targets.len());
        ctx.announce(&mut Edge::new(&mut *origin, label.as_str(), &mut proxy).with_style("dashed"));

        if let Some(back) = back_to.as_ref().filter(|key| targets.contains(*key)) {
            let mut node = neighbor(back);
            ctx.announce(&mut Edge::new(&mut *origin, label.as_str(), &mut node));
        }
    }
}

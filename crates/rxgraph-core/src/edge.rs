use crate::attrs::Attributes;
use crate::context::RenderContext;
use crate::node::{EdgeRef, Key};
use crate::source::GraphSource;

/// A directed, labeled connection between two vertices.
///
/// The edge borrows its endpoints only while it is being announced. On
/// delivery it announces `from`, then `to` (recording itself as `to`'s
/// discovery edge), and only then writes its own line.
pub struct Edge<'a> {
    key: Key,
    reference: EdgeRef,
    attrs: Attributes,
    from: &'a mut dyn GraphSource,
    to: &'a mut dyn GraphSource,
}

impl<'a> Edge<'a> {
    pub fn new(
        from: &'a mut dyn GraphSource,
        label: impl Into<String>,
        to: &'a mut dyn GraphSource,
    ) -> Self {
        let label = label.into();
        let reference = EdgeRef::new(from.identity(), label.clone(), to.identity());
        let key = Key::edge(&reference.from, &reference.label, &reference.to);
        Self {
            key,
            reference,
            attrs: Attributes::labeled(label),
            from,
            to,
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.attrs = self.attrs.with_style(style);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.attrs = self.attrs.with_color(color);
        self
    }

    pub fn label(&self) -> &str {
        &self.reference.label
    }
}

impl GraphSource for Edge<'_> {
    fn identity(&self) -> Key {
        self.key.clone()
    }

    fn declare(&self) -> Option<Attributes> {
        self.attrs.clone().into_declared()
    }

    fn endpoints(&self) -> Option<(Key, Key)> {
        Some((self.reference.from.clone(), self.reference.to.clone()))
    }

    fn deliver(&mut self, ctx: &mut RenderContext, _is_leaf: bool) {
        let via = self.reference.clone();
        ctx.announce_via(&mut *self.from, None);
        ctx.announce_via(&mut *self.to, Some(via));
        ctx.deliver(&*self);
    }
}

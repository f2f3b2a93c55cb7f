//! Wrapping a traversal's output into a complete DOT document.

use std::fmt::Write;
use std::time::Instant;

use rxgraph_core::dot::{escape_label, format_id, write_indent};
use rxgraph_core::{Degradation, GraphSource, RenderConfig, RenderContext, RenderStats};
use tracing::info;

/// Builds the `digraph <name> { ... }` wrapper around a declaration body.
pub struct DotDocument {
    output: String,
    indent: usize,
}

impl DotDocument {
    /// Create a new DOT graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {} {{", format_id(name));
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Append declarations produced by a [`RenderContext`] verbatim.
    pub fn body(&mut self, declarations: &str) -> &mut Self {
        self.output.push_str(declarations);
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

/// The outcome of one rendering pass.
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    pub document: String,
    pub stats: RenderStats,
    pub degradations: Vec<Degradation>,
}

/// Traverse from `root` with `config` and wrap the result as `digraph G`.
pub fn render_document(root: &mut dyn GraphSource, config: RenderConfig) -> RenderedGraph {
    render_document_with(root, config, &[])
}

/// Like [`render_document`], with graph-level attributes ahead of the body.
pub fn render_document_with(
    root: &mut dyn GraphSource,
    config: RenderConfig,
    graph_attrs: &[(&str, &str)],
) -> RenderedGraph {
    let start = Instant::now();
    let mut ctx = RenderContext::new(config);
    ctx.announce_via(root, None);

    let stats = ctx.stats();
    let degradations = ctx.degradations().to_vec();
    let mut document = DotDocument::new("G");
    for (key, value) in graph_attrs {
        document.attr(key, value);
    }
    document.body(ctx.output());

    info!(
        nodes = stats.nodes,
        edges = stats.edges,
        leaves = stats.leaves,
        proxies = stats.proxies,
        degraded = degradations.len(),
        "traversal: {:.2}s",
        start.elapsed().as_secs_f64()
    );

    RenderedGraph {
        document: document.build(),
        stats,
        degradations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        assert_eq!(DotDocument::new("G").build(), "digraph G {\n}\n");
    }

    #[test]
    fn test_document_header() {
        let mut doc = DotDocument::new("concept map");
        doc.attr("rankdir", "LR").body("  a;\n");
        assert_eq!(
            doc.build(),
            "digraph \"concept map\" {\n  rankdir=\"LR\";\n  a;\n}\n"
        );
    }
}

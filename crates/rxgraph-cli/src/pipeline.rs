//! Run pipeline: open store → check renderer → resolve root → traverse → render.

use std::time::Instant;

use rxgraph_core::{BackingStore, Concept, Key};
use rxgraph_dot::{RenderedGraph, render_document_with};
use rxgraph_error::Result;
use rxgraph_rxnorm::RxNormStore;
use tracing::{info, warn};

use crate::RxgraphOptions;

/// Render the graph reachable from `root`.
pub fn render_graph(
    opts: &RxgraphOptions,
    store: &dyn BackingStore,
    root: Key,
) -> RenderedGraph {
    let graph_attrs: Vec<(&str, &str)> = opts
        .rankdir
        .iter()
        .map(|rankdir| ("rankdir", rankdir.as_str()))
        .collect();

    let mut concept = Concept::new(root, store);
    let rendered = render_document_with(&mut concept, opts.render, &graph_attrs);
    if !rendered.degradations.is_empty() {
        warn!(
            count = rendered.degradations.len(),
            "some concepts could not be looked up and were rendered bare"
        );
    }
    rendered
}

/// Main entry point.
///
/// Returns the DOT document when `print_dot` is set; otherwise the renderer
/// writes the image and nothing is returned.
pub fn run_main(opts: &RxgraphOptions) -> Result<Option<String>> {
    // 1. Configuration errors surface before any traversal
    let open_start = Instant::now();
    let store = RxNormStore::open(&opts.db)?;
    if !opts.print_dot {
        opts.renderer.check_available()?;
    }
    info!("Opening store: {:.2}s", open_start.elapsed().as_secs_f64());

    // 2. Resolve the root concept
    let root = if opts.ndc {
        store.rxcui_for_ndc(&opts.identifier)?
    } else {
        Key::new(opts.identifier.as_str())
    };

    // 3. Traverse
    let rendered = render_graph(opts, &store, root);

    // 4. Emit
    if opts.print_dot {
        return Ok(Some(rendered.document));
    }
    opts.renderer.render(&rendered.document)?;
    Ok(None)
}

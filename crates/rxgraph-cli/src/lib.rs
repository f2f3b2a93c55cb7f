//! rxgraph command-line interface.
//!
pub mod config;
pub mod options;
pub mod pipeline;

use std::path::PathBuf;

use rxgraph_core::RenderConfig;
use rxgraph_dot::{DEFAULT_FORMAT, DEFAULT_PROGRAM, GraphvizRenderer};
use rxgraph_error::{Error, Result};

pub use config::Settings;
pub use options::{GraphvizOptions, RenderOptions, StoreOptions};
pub use pipeline::{render_graph, run_main};

/// Database used when neither `--db` nor `[store] path` is given.
pub const DEFAULT_DB_PATH: &str = "databases/rxnorm.db";

/// Options for one rxgraph run, after merging flags, file and defaults.
#[derive(Debug, Clone)]
pub struct RxgraphOptions {
    pub identifier: String,
    pub ndc: bool,
    pub db: PathBuf,
    pub render: RenderConfig,
    pub rankdir: Option<String>,
    pub renderer: GraphvizRenderer,
    pub print_dot: bool,
}

impl RxgraphOptions {
    /// Command-line values win over `settings`, which win over defaults.
    pub fn resolve(
        identifier: impl Into<String>,
        ndc: bool,
        render: &RenderOptions,
        store: &StoreOptions,
        graphviz: &GraphvizOptions,
        settings: &Settings,
    ) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.trim().is_empty() {
            return Err(Error::invalid_argument("identifier must not be empty")
                .with_operation("options::resolve"));
        }

        let mut config = RenderConfig::default();
        if let Some(max_depth) = render.max_depth.or(settings.render.max_depth) {
            config = config.with_max_depth(max_depth);
        }
        if let Some(max_width) = render.max_width.or(settings.render.max_width) {
            config = config.with_max_width(max_width);
        }
        if config.max_depth == 0 || config.max_width == 0 {
            return Err(Error::config_invalid("traversal bounds must be at least 1")
                .with_operation("options::resolve"));
        }

        let db = store
            .db
            .clone()
            .or_else(|| settings.store.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let format = graphviz
            .format
            .clone()
            .or_else(|| settings.graphviz.format.clone())
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());
        let output = graphviz
            .output
            .clone()
            .or_else(|| settings.graphviz.output.clone())
            .unwrap_or_else(|| PathBuf::from(format!("graph.{format}")));
        let program = graphviz
            .renderer
            .clone()
            .or_else(|| settings.graphviz.program.clone())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

        Ok(Self {
            identifier,
            ndc,
            db,
            render: config,
            rankdir: settings.render.rankdir.clone(),
            renderer: GraphvizRenderer::new(output)
                .with_program(program)
                .with_format(format),
            print_dot: graphviz.print_dot,
        })
    }
}

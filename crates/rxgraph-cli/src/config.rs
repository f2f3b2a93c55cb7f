//! The optional TOML configuration file.
//!
//! ```toml
//! [render]
//! max_depth = 4
//! max_width = 8
//! rankdir = "LR"
//!
//! [store]
//! path = "databases/rxnorm.db"
//!
//! [graphviz]
//! program = "dot"
//! format = "svg"
//! output = "graph.svg"
//! ```

use std::path::{Path, PathBuf};

use rxgraph_error::{Error, Result};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub render: RenderSection,
    pub store: StoreSection,
    pub graphviz: GraphvizSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSection {
    pub max_depth: Option<usize>,
    pub max_width: Option<usize>,
    pub rankdir: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSection {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphvizSection {
    pub program: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Read and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::config_invalid(format!("cannot read {}: {err}", path.display()))
                .with_operation("config::load")
                .with_context("path", path.display().to_string())
                .set_source(err)
        })?;
        let settings = Self::parse(&text)
            .map_err(|err| err.with_context("path", path.display().to_string()))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(settings)
    }

    /// Parse and validate configuration text.
    pub fn parse(text: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(text).map_err(|err| {
            Error::config_invalid(err.message().to_string())
                .with_operation("config::parse")
                .set_source(err)
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Traversal bounds must be positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("render.max_depth", self.render.max_depth),
            ("render.max_width", self.render.max_width),
        ] {
            if value == Some(0) {
                return Err(Error::config_invalid(format!("{name} must be at least 1"))
                    .with_operation("config::validate")
                    .with_context("key", name));
            }
        }
        Ok(())
    }
}

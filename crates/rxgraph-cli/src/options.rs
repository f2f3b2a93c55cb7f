//! Command-line option groups shared by the `rxgraph` binary and its tests.
//!
//! Every field is optional so that values from a configuration file can be
//! told apart from values given on the command line.

use std::path::PathBuf;

use clap::Args;

/// Parse a strictly positive bound.
pub fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

/// Traversal bounds.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderOptions {
    /// Maximum traversal depth; nodes past it are rendered as leaves.
    #[arg(long = "max-depth", value_name = "N", value_parser = parse_positive)]
    pub max_depth: Option<usize>,

    /// Maximum targets per relation label before they collapse into a proxy node.
    #[arg(long = "max-width", value_name = "N", value_parser = parse_positive)]
    pub max_width: Option<usize>,
}

/// Where concepts are looked up.
#[derive(Args, Debug, Clone, Default)]
pub struct StoreOptions {
    /// Path to the RxNorm SQLite database.
    #[arg(long = "db", value_name = "PATH")]
    pub db: Option<PathBuf>,
}

/// How the finished document is turned into an image.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphvizOptions {
    /// Output format passed to the renderer as `-T<FMT>`.
    #[arg(short = 'T', long = "format", value_name = "FMT")]
    pub format: Option<String>,

    /// Rendered output file.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Graphviz layout program.
    #[arg(long = "renderer", value_name = "PROGRAM")]
    pub renderer: Option<String>,

    /// Write the DOT document to stdout instead of running the renderer.
    #[arg(long = "print-dot", default_value_t = false)]
    pub print_dot: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

impl StoreOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, db: impl Into<PathBuf>) -> Self {
        self.db = Some(db.into());
        self
    }
}

impl GraphvizOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    pub fn with_print_dot(mut self, print_dot: bool) -> Self {
        self.print_dot = print_dot;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("6"), Ok(6));
        assert!(parse_positive("0").is_err());
        assert!(parse_positive("-1").is_err());
        assert!(parse_positive("six").is_err());
    }
}

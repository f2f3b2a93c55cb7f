//! Invoking the Graphviz layout renderer on an assembled document.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use rxgraph_error::{Error, Result};
use tempfile::NamedTempFile;
use tracing::{debug, info};

pub const DEFAULT_PROGRAM: &str = "dot";
pub const DEFAULT_FORMAT: &str = "png";
pub const DEFAULT_OUTPUT: &str = "graph.png";

/// Runs `<program> -T<format> -o<output> <input>` on a transient DOT file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphvizRenderer {
    program: String,
    format: String,
    output: PathBuf,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT)
    }
}

impl GraphvizRenderer {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            output: output.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The argument vector for rendering `input`.
    pub fn command(&self, input: &Path) -> Vec<String> {
        vec![
            self.program.clone(),
            format!("-T{}", self.format),
            format!("-o{}", self.output.display()),
            input.display().to_string(),
        ]
    }

    /// Fail fast if the renderer cannot be started at all.
    pub fn check_available(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("-V")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| {
                Error::renderer_unavailable(&self.program)
                    .with_operation("graphviz::check_available")
                    .set_source(err)
            })?;
        debug!(program = %self.program, %status, "renderer probe");
        Ok(())
    }

    /// Write `document` to a temporary file and run the renderer on it.
    pub fn render(&self, document: &str) -> Result<()> {
        let start = Instant::now();
        let mut input = NamedTempFile::new()?;
        input.write_all(document.as_bytes())?;
        input.flush()?;

        let argv = self.command(input.path());
        let command_line = shell_words::join(&argv);
        debug!(command = %command_line, "running renderer");

        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .status()
            .map_err(|err| {
                Error::renderer_unavailable(&self.program)
                    .with_operation("graphviz::render")
                    .with_context("command", command_line.clone())
                    .set_source(err)
            })?;

        if !status.success() {
            return Err(Error::render_failed(
                command_line,
                format!("renderer exited with {status}"),
            )
            .with_operation("graphviz::render"));
        }

        info!(
            output = %self.output.display(),
            "rendering: {:.2}s",
            start.elapsed().as_secs_f64()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line() {
        let renderer = GraphvizRenderer::new("out/graph.svg").with_format("svg");
        assert_eq!(
            renderer.command(Path::new("/tmp/in.dot")),
            vec!["dot", "-Tsvg", "-oout/graph.svg", "/tmp/in.dot"]
        );
    }

    #[test]
    fn test_defaults() {
        let renderer = GraphvizRenderer::default();
        assert_eq!(renderer.program(), "dot");
        assert_eq!(renderer.output(), Path::new("graph.png"));
    }
}

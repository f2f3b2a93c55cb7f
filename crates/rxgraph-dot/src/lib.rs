//! Document assembly and Graphviz invocation.
//!
//! # Module Structure
//!
//! - [`document`]: `digraph` wrapper around a rendering pass
//! - [`graphviz`]: transient input file plus the external `dot` process

mod document;
mod graphviz;

pub use document::{DotDocument, RenderedGraph, render_document, render_document_with};
pub use graphviz::{DEFAULT_FORMAT, DEFAULT_OUTPUT, DEFAULT_PROGRAM, GraphvizRenderer};

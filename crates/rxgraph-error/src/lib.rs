//! # rxgraph-error
//!
//! Unified error handling for rxgraph.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what error occurred (e.g., NotFound, RenderFailed)
//! - **ErrorFamily**: Decide how it propagates (Configuration, Lookup, Render, ...)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use rxgraph_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::NotFound, "no concept row")
//!         .with_operation("rxnorm::attributes_of")
//!         .with_context("id", "328406"))
//! }
//! ```
//!
//! ## Propagation
//!
//! - Configuration kinds are fatal and raised before traversal starts
//! - Lookup kinds are caught by the traversal and degrade a single node
//! - `RenderFailed` is fatal and carries the invoked command line
//! - External errors are wrapped with `set_source(err)`

mod error;
mod family;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;
pub use family::ErrorFamily;

/// Result type alias using rxgraph Error
pub type Result<T> = std::result::Result<T, Error>;

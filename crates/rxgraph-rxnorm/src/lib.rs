//! RxNorm as a backing store.
//!
//! Concepts are RXCUIs. A concept's label is its preferred English name,
//! relations come from `RXNREL` keyed by `RELA`, and NDC codes can be
//! resolved to the RXCUI they most often map to.

mod schema;
mod store;
mod term;

pub use store::RxNormStore;
pub use term::{ConceptName, PREFERRED_TTYS, preferred_name, shape_for_tty};

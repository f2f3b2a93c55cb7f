//! How an error propagates through a run.

use std::fmt;

/// The propagation family of an [`ErrorKind`](crate::ErrorKind).
///
/// - `Configuration`: fatal, raised before traversal starts
/// - `Lookup`: one identifier could not be resolved, the node degrades
/// - `Render`: the layout renderer failed after traversal, fatal
/// - `Io`: file system problems outside the store
/// - `General`: bad arguments and everything unclassified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    Configuration,
    Lookup,
    Render,
    Io,
    General,
}

impl ErrorFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorFamily::Configuration => "configuration",
            ErrorFamily::Lookup => "lookup",
            ErrorFamily::Render => "render",
            ErrorFamily::Io => "io",
            ErrorFamily::General => "general",
        }
    }
}

impl fmt::Display for ErrorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

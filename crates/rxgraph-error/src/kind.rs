//! Error kinds for rxgraph operations

use strum_macros::{Display, IntoStaticStr};

use crate::ErrorFamily;

/// The kind of error that occurred.
///
/// Kinds fall into three families that decide how a failure propagates:
/// configuration problems abort before any traversal starts, lookup problems
/// degrade a single node during traversal, and render problems abort the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,

    /// Invalid argument passed to a function or on the command line
    InvalidArgument,

    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Invalid configuration or parameters
    ConfigInvalid,

    /// The backing store could not be located or opened
    StoreUnavailable,

    /// The external layout renderer could not be started
    RendererUnavailable,

    // =========================================================================
    // Lookup errors
    // =========================================================================
    /// The identifier is unknown to the backing store
    NotFound,

    /// The backing store failed while answering a query
    QueryFailed,

    // =========================================================================
    // Render errors
    // =========================================================================
    /// The external layout renderer exited unsuccessfully
    RenderFailed,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The propagation family this kind belongs to.
    pub fn family(&self) -> ErrorFamily {
        match self {
            ErrorKind::ConfigInvalid
            | ErrorKind::StoreUnavailable
            | ErrorKind::RendererUnavailable => ErrorFamily::Configuration,
            ErrorKind::NotFound | ErrorKind::QueryFailed => ErrorFamily::Lookup,
            ErrorKind::RenderFailed => ErrorFamily::Render,
            ErrorKind::FileNotFound | ErrorKind::PermissionDenied | ErrorKind::IoFailed => {
                ErrorFamily::Io
            }
            ErrorKind::Unexpected | ErrorKind::InvalidArgument => ErrorFamily::General,
        }
    }

    /// Configuration problems must stop the run before traversal starts.
    pub fn is_configuration(&self) -> bool {
        self.family() == ErrorFamily::Configuration
    }

    /// Lookup problems only degrade the node being visited.
    pub fn is_lookup(&self) -> bool {
        self.family() == ErrorFamily::Lookup
    }
}

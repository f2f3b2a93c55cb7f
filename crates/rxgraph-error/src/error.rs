//! The main Error type for rxgraph.

use crate::{ErrorFamily, ErrorKind};
use std::fmt;

/// Unified error type for all rxgraph operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn family(&self) -> ErrorFamily {
        self.kind.family()
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Look up a single context value by key.
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }

    /// The run cannot start with this error in place.
    pub fn is_configuration(&self) -> bool {
        self.kind.is_configuration()
    }

    /// A single identifier could not be resolved; traversal may continue.
    pub fn is_lookup(&self) -> bool {
        self.kind.is_lookup()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) at {}", self.kind, self.family(), self.operation)?;

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.family(), self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

impl Error {
    /// Create an Unexpected error.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a StoreUnavailable error for the store at `location`.
    pub fn store_unavailable(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable, message).with_context("store", location)
    }

    /// Create a RendererUnavailable error for `program`.
    pub fn renderer_unavailable(program: impl Into<String>) -> Self {
        let program = program.into();
        Self::new(
            ErrorKind::RendererUnavailable,
            format!("renderer '{}' could not be started", program),
        )
        .with_context("program", program)
    }

    /// Create a NotFound error for an identifier missing from the store.
    pub fn not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::new(ErrorKind::NotFound, format!("identifier '{}' not found", id))
            .with_context("id", id)
    }

    /// Create a QueryFailed error
    pub fn query_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::QueryFailed, message)
    }

    /// Create a RenderFailed error carrying the full command line.
    pub fn render_failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        let command = command.into();
        Self::new(ErrorKind::RenderFailed, message).with_context("command", command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::new(ErrorKind::QueryFailed, "database is locked");
        assert_eq!(err.kind(), ErrorKind::QueryFailed);
        assert_eq!(err.message(), "database is locked");
        assert_eq!(err.family(), ErrorFamily::Lookup);
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::not_found("328406")
            .with_operation("rxnorm::attributes_of")
            .with_context("table", "RXNCONSO");

        assert_eq!(err.operation(), "rxnorm::attributes_of");
        assert_eq!(err.context().len(), 2);
        assert_eq!(err.context()[0], ("id", "328406".to_string()));
        assert_eq!(err.context_value("table"), Some("RXNCONSO"));
        assert_eq!(err.context_value("missing"), None);
    }

    #[test]
    fn test_operation_chaining() {
        let err = Error::query_failed("no such table")
            .with_operation("rxnorm::relations_of")
            .with_operation("concept::deliver");

        assert_eq!(err.operation(), "concept::deliver");
        assert_eq!(err.context().len(), 1);
        assert_eq!(
            err.context()[0],
            ("called", "rxnorm::relations_of".to_string())
        );
    }

    #[test]
    fn test_display() {
        let err = Error::render_failed("dot -Tpng -ograph.png /tmp/x", "exit status: 1")
            .with_operation("graphviz::render");

        let display = format!("{}", err);
        assert!(display.contains("RenderFailed"));
        assert!(display.contains("(render)"));
        assert!(display.contains("graphviz::render"));
        assert!(display.contains("command: dot -Tpng -ograph.png /tmp/x"));
        assert!(display.ends_with("=> exit status: 1"));
    }

    #[test]
    fn test_families() {
        assert!(Error::config_invalid("max_width must be positive").is_configuration());
        assert!(Error::store_unavailable("rxnorm.db", "missing").is_configuration());
        assert!(Error::renderer_unavailable("dot").is_configuration());
        assert!(Error::not_found("x").is_lookup());
        assert!(!Error::render_failed("dot", "boom").is_lookup());
        assert!(!Error::render_failed("dot", "boom").is_configuration());
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io_err.into();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert_eq!(err.operation(), "io");
        assert!(err.source_ref().is_some());
    }
}

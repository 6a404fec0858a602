//! Error types for host element bindings.

/// Errors raised by a host element API (browser DOM or in-memory tree).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// A host object the binding needs is missing (no window, no head, ...).
    #[error("{0} is not available in this host")]
    Unavailable(String),

    /// A host call returned an error.
    #[error("host call '{operation}' failed: {message}")]
    Host { operation: String, message: String },
}

impl DomError {
    /// Create an unavailable-object error.
    pub fn unavailable(what: impl Into<String>) -> Self {
        Self::Unavailable(what.into())
    }

    /// Create a failed host call error.
    pub fn host(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Host {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

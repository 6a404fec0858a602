//! Error types for button construction and option loading.

use paybutton_core::DomError;

/// Errors raised while building a button.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ButtonError {
    /// No click callback was supplied.
    #[error("Parameter 'onClick' must be set")]
    MissingRequiredCallback,

    /// The host rejected an element operation.
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// A specialized Result type for button construction.
pub type Result<T> = std::result::Result<T, ButtonError>;

/// Errors raised while loading [`StyleOptions`](crate::options::StyleOptions).
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// Malformed JSON.
    #[error("invalid JSON button options: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML.
    #[error("invalid TOML button options: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_callback_message() {
        assert_eq!(
            ButtonError::MissingRequiredCallback.to_string(),
            "Parameter 'onClick' must be set"
        );
    }

    #[test]
    fn dom_errors_pass_through() {
        let err: ButtonError = DomError::unavailable("document.head").into();
        assert_eq!(err.to_string(), "document.head is not available in this host");
    }
}

//! Error types for page behaviors
//!
//! None of these errors are fatal to the page. The exported bindings log them
//! and fall back to a conservative result instead of throwing into JavaScript.

use thiserror::Error;

/// Errors that can occur while a behavior manipulates the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// No `window` object (not running in a browser context)
    #[error("window is not available")]
    WindowUnavailable,

    /// The window has no `document`
    #[error("document is not available")]
    DocumentUnavailable,

    /// An element looked up by identifier does not exist
    #[error("element not found: #{id}")]
    ElementNotFound { id: String },

    /// A DOM call was rejected by the browser
    #[error("dom operation failed: {0}")]
    Dom(String),

    /// Configuration could not be parsed or is unusable
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl PageError {
    /// Shorthand for [`PageError::ElementNotFound`]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound { id: id.into() }
    }
}

/// Result type alias for page operations
pub type Result<T> = std::result::Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PageError::not_found("exam-form");
        assert_eq!(error.to_string(), "element not found: #exam-form");

        let error = PageError::Dom("style is read-only".to_string());
        assert_eq!(error.to_string(), "dom operation failed: style is read-only");

        let error = PageError::Config("alertSelector is empty".to_string());
        assert_eq!(
            error.to_string(),
            "invalid configuration: alertSelector is empty"
        );
    }

    #[test]
    fn test_error_clone() {
        let error = PageError::WindowUnavailable;
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}

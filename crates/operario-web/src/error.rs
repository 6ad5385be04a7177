//! Error types for browser automation.

use thiserror::Error;

/// Result type for browser operations.
pub type WebResult<T> = std::result::Result<T, WebError>;

/// Errors from driving the browser.
#[derive(Debug, Error)]
pub enum WebError {
    /// Browser process or devtools protocol failure.
    #[error("chromium error: {0}")]
    Chromium(String),

    /// Navigation failed.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// A selector matched nothing.
    #[error("selector not found: {0}")]
    SelectorNotFound(String),

    /// A selector did not show up in time.
    #[error("timed out after {waited_ms}ms waiting for selector: {selector}")]
    Timeout {
        /// Selector being waited on.
        selector: String,
        /// Milliseconds waited.
        waited_ms: u64,
    },

    /// A JavaScript evaluation failed.
    #[error("script evaluation failed: {0}")]
    Evaluate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WebError::Timeout {
            selector: "#btn-enviar".to_string(),
            waited_ms: 30_000,
        };
        assert!(err.to_string().contains("#btn-enviar"));
        assert!(err.to_string().contains("30000ms"));
    }
}

//! Error types for validation operations.
//!
//! Validation failures are values, never panics, and never generic strings:
//! callers match on the kind to decide whether a failed validation is fatal
//! to their workflow.

use serde::Serialize;
use thiserror::Error;

/// Why a CPF or CNPJ failed validation.
///
/// `NonNumericInput` is reserved for inputs that normalize to zero digits,
/// so a caller can distinguish garbage input from a truncated document.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentError {
    /// Wrong number of digits after stripping punctuation.
    #[error("invalid length: expected {expected} digits, got {actual}")]
    InvalidLength {
        /// Digits the document type requires.
        expected: usize,
        /// Digits actually present.
        actual: usize,
    },

    /// All digits identical. These pass the raw checksum but are not
    /// real documents, so they are rejected explicitly.
    #[error("repeated digit sequence")]
    RepeatedDigitSequence,

    /// A computed check digit does not match the input.
    #[error("check digit mismatch")]
    CheckDigitMismatch,

    /// The input contained no digits at all.
    #[error("input contains no digits")]
    NonNumericInput,
}

/// Errors from the generic (non-document) validators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not a plausible email address.
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),

    /// Not a Brazilian phone number of a known shape.
    #[error("invalid phone number: '{0}'")]
    InvalidPhone(String),

    /// A date string that does not match the expected format.
    #[error("invalid date '{value}': expected format {format}")]
    InvalidDate {
        /// The offending input.
        value: String,
        /// The strftime format that was expected.
        format: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_display() {
        let err = DocumentError::InvalidLength {
            expected: 11,
            actual: 9,
        };
        assert_eq!(err.to_string(), "invalid length: expected 11 digits, got 9");
        assert_eq!(
            DocumentError::CheckDigitMismatch.to_string(),
            "check digit mismatch"
        );
    }

    #[test]
    fn test_document_error_serializes_kind() {
        let json = serde_json::to_string(&DocumentError::RepeatedDigitSequence)
            .expect("serialize error kind");
        assert!(json.contains("repeated_digit_sequence"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidDate {
            value: "31/02/2024".to_string(),
            format: "%d/%m/%Y".to_string(),
        };
        assert!(err.to_string().contains("31/02/2024"));
    }
}

// ABOUTME: Unified error types for the HealthOS clinical intelligence engine
// ABOUTME: Validation and enum-parsing failures surfaced to the calling layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthOS Intelligence

//! # Unified Error Handling System
//!
//! The engine is a pure computation core: it never logs-and-swallows, never
//! retries, and never produces user-facing text. Every error here is raised
//! to the immediate caller (HTTP handler, LLM collaborator), which owns all
//! recovery and translation policy.

use thiserror::Error;

/// Result type used throughout the engine
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced by the clinical intelligence engine
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// A required numeric field is missing, non-positive, or non-finite
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected
        message: String,
    },

    /// A required field is absent from the input document
    #[error("Missing required field '{field}'")]
    MissingRequiredField {
        /// Name of the missing field
        field: String,
    },

    /// An enumerated field holds a value outside its fixed set
    ///
    /// Table lookups in the engine are exhaustive matches; unknown values are
    /// rejected at the parsing boundary instead of resolving to a silent
    /// default.
    #[error("Unknown value '{value}' for {field}. Valid options: {expected}")]
    UnknownEnumValue {
        /// Field or enum name being parsed
        field: String,
        /// The rejected value
        value: String,
        /// Comma-separated list of accepted values
        expected: String,
    },

    /// Internal invariant violation (should not occur for well-formed input)
    #[error("Internal error: {message}")]
    Internal {
        /// Details of the violated invariant
        message: String,
    },
}

impl AppError {
    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a missing required field error
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an unknown enum value error
    #[must_use]
    pub fn unknown_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::UnknownEnumValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = AppError::invalid_input("Height must be positive");
        assert_eq!(err.to_string(), "Invalid input: Height must be positive");
    }

    #[test]
    fn test_unknown_enum_lists_valid_options() {
        let err = AppError::unknown_enum("dietQuality", "superb", "poor, fair, good, excellent");
        let rendered = err.to_string();
        assert!(rendered.contains("superb"));
        assert!(rendered.contains("poor, fair, good, excellent"));
    }
}

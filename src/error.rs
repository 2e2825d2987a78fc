//! Error types for PromQL building and rendering.

use thiserror::Error;

/// The main error type for promql-builder operations.
#[derive(Debug, Error)]
pub enum PromqlError {
    /// A selector has neither a metric name nor any label matcher.
    #[error("Empty selector: metric name and labels cannot both be empty")]
    EmptySelector,

    /// A required operand slot was never filled.
    #[error("Missing operand: {node} has no {slot}")]
    MissingOperand {
        node: &'static str,
        slot: &'static str,
    },

    /// Label matcher text is not one of `=`, `!=`, `=~`, `!~`.
    #[error("Invalid label matcher: '{0}'. Expected: =, !=, =~ or !~")]
    InvalidMatcher(String),

    /// Keyword text does not name a known modifier.
    #[error("Invalid {kind} keyword: '{keyword}'")]
    InvalidKeyword { kind: &'static str, keyword: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl PromqlError {
    /// Create a missing operand error.
    pub fn missing(node: &'static str, slot: &'static str) -> Self {
        Self::MissingOperand { node, slot }
    }

    /// Create an invalid keyword error.
    pub fn keyword(kind: &'static str, keyword: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            kind,
            keyword: keyword.into(),
        }
    }
}

/// Result type alias for promql-builder operations.
pub type PromqlResult<T> = Result<T, PromqlError>;

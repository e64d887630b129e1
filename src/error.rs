//! Error types for Polezero.
//!
//! This module provides a unified error handling approach using `thiserror`.

use crate::model::Domain;
use thiserror::Error;

/// Result type alias for Polezero operations.
pub type Result<T> = std::result::Result<T, PolezeroError>;

/// Errors that can occur in Polezero.
#[derive(Debug, Error)]
pub enum PolezeroError {
    /// A domain-specific plot was requested for a model of the other domain.
    #[error("Domain mismatch: expected {expected} model, got {found}")]
    DomainMismatch {
        /// Domain the plot requires.
        expected: Domain,
        /// Domain of the model given.
        found: Domain,
    },

    /// Numerical evaluation of a transfer function failed.
    #[error("Numerical error: {0}")]
    Numerical(String),

    /// Model fields violate a construction invariant.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// A manual pole/zero entry could not be parsed.
    #[error("Invalid entry in row {row}: {message}")]
    InvalidInput {
        /// 1-based row number.
        row: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PolezeroError {
    /// Create a DomainMismatch error.
    pub fn domain_mismatch(expected: Domain, found: Domain) -> Self {
        Self::DomainMismatch { expected, found }
    }

    /// Create a Numerical error.
    pub fn numerical(message: impl Into<String>) -> Self {
        Self::Numerical(message.into())
    }

    /// Create an InvalidModel error.
    pub fn invalid_model(message: impl Into<String>) -> Self {
        Self::InvalidModel(message.into())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(row: usize, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            row,
            message: message.into(),
        }
    }
}

//! Error types for the Folio application.

use crate::agent::ArtifactKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Generic message used when an unexpected failure carries no description.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// A shared error type for the entire Folio application.
///
/// Parsing of agent output never produces one of these: malformed fields
/// degrade to empty values instead. Errors are reserved for the outer
/// boundary (input validation, the agent call, configuration and IO).
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FolioError {
    /// A required input field was empty. No request was sent.
    #[error("{0}")]
    Validation(String),

    /// The agent reported failure or returned no usable result.
    #[error("{message}")]
    Remote { kind: ArtifactKind, message: String },

    /// Something went wrong while the request was being made.
    #[error("{0}")]
    Unexpected(String),

    /// A request of this kind is already outstanding.
    #[error("Another {kind} request is already in progress")]
    RequestInFlight { kind: ArtifactKind },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Instruction template could not be rendered
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FolioError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Remote error, falling back to the kind's generic message
    /// when the agent supplied none.
    pub fn remote(kind: ArtifactKind, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| kind.failure_message().to_string());
        Self::Remote { kind, message }
    }

    /// Creates an Unexpected error, falling back to a generic description.
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Unexpected(UNEXPECTED_ERROR_MESSAGE.to_string())
        } else {
            Self::Unexpected(message)
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a remote failure
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if a request of the same kind was still running
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::RequestInFlight { .. })
    }

    /// The message shown to the user for this error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

/// A type alias for `Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;

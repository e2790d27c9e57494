//! Error taxonomy of the client.
//!
//! - `ValidationError`: detected locally, never sent to the backend.
//! - `ClientError::BackendRejection`: the backend answered a well-formed
//!   request with an error status.
//! - `ClientError::TransportFailure`: the backend was unreachable or its answer
//!   could not be decoded.
//! - `ClientError::LocalFailure`: the request could not be assembled in the
//!   browser (for example the upload form), so nothing was sent.
//!
//! None of these are fatal. Each one ends up as a notice in the scope of the
//! form or list that caused it.

use thiserror::Error;

/// A form or action rejected before any request was issued.
///
/// The display text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select all fields for the relationship.")]
    IncompleteRelationship,

    #[error("Source and Target relationship cannot be identical.")]
    IdenticalRelationship,

    #[error("Please fill all fields for the threshold.")]
    IncompleteThreshold,

    #[error("Threshold value must be a number.")]
    NonNumericThreshold,

    #[error("Please select CSV files to upload.")]
    NoFilesSelected,
}

/// Failure of a backend exchange.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The backend answered with a non-success status. `message` is the
    /// `error` field of the answer when it had one.
    #[error("backend rejected the request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    BackendRejection { status: u16, message: Option<String> },

    #[error("transport failure: {0}")]
    TransportFailure(String),

    #[error("request could not be prepared: {0}")]
    LocalFailure(String),
}

impl ClientError {
    /// Text to show the user for this error.
    ///
    /// Rejections use the backend's own message when it sent one and
    /// `fallback` otherwise; transport failures always use `unreachable`.
    /// Local failures never reached the backend and use `fallback`.
    pub fn user_message(&self, fallback: &str, unreachable: &str) -> String {
        match self {
            ClientError::BackendRejection {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ClientError::BackendRejection { .. } | ClientError::LocalFailure(_) => fallback.to_string(),
            ClientError::TransportFailure(_) => unreachable.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::TransportFailure(_))
    }
}

//! Error types for mortydex.
//!
//! The remote catalog, the local store and the detail editor each fail in
//! their own way; callers match on the variant to decide whether a failure is
//! recoverable (a remote `NotFound`) or must be surfaced to the user.

use std::fmt;
use thiserror::Error;

use crate::editor::Field;

/// The unified error type for mortydex operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The remote catalog has no characters matching the query.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// Network transport errors (connection, timeout, body decoding).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The remote answered with an error status other than 404.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Local store failures.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Detail editor rejections.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input validation errors (bad URL, unknown status word).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound {
            message: message.into(),
        }
    }

    /// Returns true if the remote reported that nothing matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Response body could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Error status returned by the remote catalog.
#[derive(Debug)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server (if present).
    pub message: Option<String>,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

/// Local store errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("I/O error on {slot}: {message}")]
    Io { slot: String, message: String },

    /// The slot holds something that is not a list of characters.
    #[error("corrupt slot {slot}: {message}")]
    Corrupt { slot: String, message: String },
}

/// Detail editor rejections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required fields are empty.
    #[error("required fields are empty: {}", join_fields(.0))]
    MissingFields(Vec<Field>),

    /// The character comes from the remote catalog and can only be removed.
    #[error("character {id} is read-only; it can only be removed")]
    Locked { id: i64 },

    /// A removal confirmation is waiting for an answer.
    #[error("a removal confirmation is pending")]
    ConfirmationPending,

    /// No removal confirmation was requested.
    #[error("no removal confirmation was requested")]
    NoPendingConfirmation,
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Unknown character status.
    #[error("invalid status '{value}': expected Alive, Dead or unknown")]
    Status { value: String },

    /// Unknown character gender.
    #[error("invalid gender '{value}': expected Female, Male, Genderless or unknown")]
    Gender { value: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

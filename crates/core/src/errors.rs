//! Core error types for the TimeValue application.
//!
//! This module defines transport-agnostic error types. HTTP-specific
//! failures (status codes, connection errors) are converted into
//! [`ApiError`] variants by the client crate.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// Backend-specific errors are wrapped in string form where needed to keep
/// this type transport-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Errors surfaced by the REST backend or the transport underneath it.
///
/// The variants mirror how failures are presented to the user: business
/// errors carry the backend message verbatim, auth errors trigger a session
/// teardown, everything else degrades to a generic notification.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP 400 with a backend-supplied message, surfaced verbatim.
    #[error("{0}")]
    Business(String),

    /// HTTP 401. The session has already been torn down when this is returned.
    #[error("Authentication required")]
    Unauthorized,

    /// HTTP 403.
    #[error("Permission denied")]
    Forbidden,

    /// HTTP 404.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// HTTP 5xx, with the backend message when one was provided.
    #[error("Server error: {0}")]
    Server(String),

    /// The request never reached the backend.
    #[error("Network unreachable: {0}")]
    Network(String),

    /// The response body could not be decoded as the expected envelope.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

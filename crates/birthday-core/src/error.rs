//! Error types for the birthdays client.
//!
//! This module provides a unified error type with explicit variants for
//! transport, server, authentication, input validation and date errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for birthday operations.
///
/// Every failure a caller can observe maps onto exactly one variant, so the
/// presentation layer can branch on the kind while still rendering the
/// message with `Display`.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, malformed response).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The API answered with a non-success status.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// Authentication errors (invalid credentials, no session).
    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Input validation errors, caught before any request is made.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A birth date that does not exist on the calendar reached the age calculator.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] InvalidDateError),
}

impl Error {
    /// Returns true if the error was raised before anything was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Returns the HTTP status code for server errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server(e) => Some(e.status),
            _ => None,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}. Check your connection.")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// The response body could not be decoded.
    #[error("malformed response: {message}")]
    Decode { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// A non-success response from the API.
#[derive(Debug)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// Machine-readable error code (if present).
    pub error: Option<String>,
    /// Error message from the server, or the reason phrase.
    pub message: Option<String>,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref error) = self.error {
            write!(f, " [{}]", error)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

impl ServerError {
    /// Create a new server error.
    pub fn new(status: u16, error: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            error,
            message,
        }
    }

    /// Check if the server reported a missing resource.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Authentication-related errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid credentials provided.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Registration was refused because the email is already in use.
    #[error("email already registered")]
    EmailTaken,

    /// An operation required a signed-in user.
    #[error("not signed in")]
    NotSignedIn,

    /// Authentication is not configured for this client.
    #[error("authentication is disabled")]
    Disabled,

    /// The identity provider rejected the request for another reason.
    #[error("identity provider error: {message}")]
    Provider { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// The record name is empty or whitespace.
    #[error("name cannot be empty")]
    BlankName,

    /// Day of month outside 1..=31.
    #[error("day must be a number between 1 and 31, got {value}")]
    Day { value: u32 },

    /// Month outside 1..=12.
    #[error("month must be a number between 1 and 12, got {value}")]
    Month { value: u32 },

    /// Year before the supported range.
    #[error("year must be {min} or later, got {value}")]
    Year { value: i32, min: i32 },

    /// A record id that the server has not assigned yet.
    #[error("record id {value} has not been assigned by the server")]
    UnassignedId { value: i64 },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid resource path segment.
    #[error("invalid resource path '{value}': {reason}")]
    ResourcePath { value: String, reason: String },

    /// Invalid email address.
    #[error("invalid email '{value}': {reason}")]
    Email { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}

/// A (year, month, day) triple that is not a real calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
pub struct InvalidDateError {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display_includes_status_and_message() {
        let err = Error::from(ServerError::new(
            500,
            None,
            Some("Internal Server Error".to_string()),
        ));
        assert_eq!(
            err.to_string(),
            "server error: HTTP 500: Internal Server Error"
        );
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn server_error_display_with_code() {
        let err = ServerError::new(404, Some("NotFound".into()), Some("no such id".into()));
        assert_eq!(err.to_string(), "HTTP 404 [NotFound]: no such id");
        assert!(err.is_not_found());
    }

    #[test]
    fn connection_error_mentions_connectivity() {
        let err = Error::from(TransportError::Connection {
            message: "dns lookup failed".into(),
        });
        assert!(err.to_string().contains("Check your connection"));
        assert!(!err.is_validation());
    }

    #[test]
    fn invalid_date_display() {
        let err = InvalidDateError {
            year: 2023,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "2023-02-30 is not a calendar date");
    }
}

//! Error types for the Fairway Concierge client toolkit

use std::{error::Error as StdError, fmt};

/// Main error type for the Fairway Concierge toolkit
#[derive(Debug)]
pub enum Error {
    /// Network or transport level failure (connection refused, DNS, TLS)
    Transport(String),

    /// Backend rejected the request with an HTTP error status
    Api {
        /// HTTP status code returned by the backend
        status: u16,
        /// Message from the backend's `detail` field, or a generic message
        message: String,
    },

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Resource not found
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Another mutation is already in flight on this editor
    Busy {
        /// Operation that was refused
        operation: String,
    },

    /// The caller is not authenticated
    Unauthenticated,

    /// Serialization error
    Serialization(serde_json::Error),

    /// I/O error
    Io(std::io::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(msg) => write!(f, "Transport error: {msg}"),
            Self::Api { status, message } => {
                write!(f, "Backend error ({status}): {message}")
            }
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Busy { operation } => {
                write!(f, "Operation already in flight: {operation}")
            }
            Self::Unauthenticated => write!(f, "Not authenticated"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Serialization(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

impl Error {
    /// True when the error represents a backend rejection (4xx/5xx)
    pub const fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// HTTP status carried by the error, if any
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

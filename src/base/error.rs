//! Error types for the networking client

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by service operations
#[derive(Error, Debug)]
pub enum Error {
    /// One or more required parameters were not supplied. Raised before
    /// any request is sent.
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingParameters(Vec<String>),

    /// A path template placeholder had no value, or a value was supplied
    /// for a placeholder that the template does not contain
    #[error("Unresolved path parameter: {0}")]
    UnresolvedPathParameter(String),

    /// A path value that cannot stand as a single segment (`.` or `..`)
    #[error("Invalid path parameter {name}: {value:?}")]
    InvalidPathParameter { name: String, value: String },

    /// Invalid client configuration (service URL, credentials, environment)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The authenticator could not produce credentials for a request
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The service answered with a non-success status. The body is kept
    /// as returned by the server.
    #[error("API request failed: {status} - {message}")]
    Api {
        status: StatusCode,
        message: String,
        body: Option<Value>,
    },

    /// A successful response had no body where the operation expects one
    #[error("Response contained no body (status {0})")]
    EmptyBody(StatusCode),

    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request body or response body could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed service URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A header name or value was not valid HTTP
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl Error {
    /// Whether this error was raised locally before anything was sent
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingParameters(_)
                | Error::UnresolvedPathParameter(_)
                | Error::InvalidPathParameter { .. }
        )
    }

    /// HTTP status of a remote failure, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

//! Base-service layer
//!
//! Everything an operation needs besides its own parameter mapping:
//!
//! - [`request`] - request builder and descriptor
//! - [`service`] - HTTP dispatch, service URL and default headers
//! - [`auth`] - authenticators (IAM, bearer token, basic, none)
//! - [`config`] - credentials file and environment lookup
//! - [`envelope`] - the CIS `{success, errors, messages, result}` envelope
//! - [`error`] - crate error type

pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod request;
pub mod service;

use serde::Serialize;

pub use error::{Error, Result};
pub use request::CustomHeaders;

/// Options for operations that take nothing but custom headers
#[derive(Debug, Clone, Default, Serialize)]
pub struct RequestOptions {
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Reject empty identifiers supplied at service construction
pub(crate) fn require_identifiers(identifiers: &[(&str, &str)]) -> Result<()> {
    let missing: Vec<String> = identifiers
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingParameters(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_identifiers() {
        assert!(require_identifiers(&[("crn", "crn:v1"), ("zone_id", "abc")]).is_ok());
        let err = require_identifiers(&[("crn", ""), ("zone_id", " ")]).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameters: crn, zone_id");
    }
}

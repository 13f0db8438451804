//! IBM Cloud networking services client
//!
//! Typed access to the IBM Cloud Internet Services (CIS) and DNS Services
//! REST APIs. Each resource group is a service struct holding its
//! identifying path parameters (CRN, zone id); each REST endpoint is one
//! async method taking an options struct.
//!
//! # Module Structure
//!
//! - [`base`] - request building, dispatch, authentication, configuration
//! - [`common`] - shared SDK headers
//! - [`cis`] - CIS services (caching, firewall rules, load-balancer pools,
//!   mutual TLS, routing, WAF rule groups, rate limits, zones, DNS records)
//! - [`dns_svcs`] - DNS Services (zones, resource records, permitted
//!   networks, custom resolvers)
//!
//! # Example
//!
//! ```ignore
//! use ibm_cloud_networking::cis::caching_api::{CachingApiV1, PurgeByUrlsOptions};
//! use ibm_cloud_networking::base::service::ServiceOptions;
//!
//! async fn purge(crn: &str, zone_id: &str) -> ibm_cloud_networking::Result<()> {
//!     // Authenticator and URL come from CACHING_API_* environment variables
//!     let caching = CachingApiV1::new(crn, zone_id, ServiceOptions::new())?;
//!     let options = PurgeByUrlsOptions {
//!         files: Some(vec!["https://example.com/a.png".to_string()]),
//!         ..Default::default()
//!     };
//!     caching.purge_by_urls(&options).await?;
//!     Ok(())
//! }
//! ```

pub mod base;
pub mod cis;
pub mod common;
pub mod dns_svcs;

pub use crate::base::auth::{
    Authenticator, BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator,
    NoAuthAuthenticator,
};
pub use crate::base::envelope::{CisResponse, ResultInfo};
pub use crate::base::service::{DetailedResponse, ServiceOptions};
pub use crate::base::{CustomHeaders, Error, RequestOptions, Result};

//! IBM Cloud DNS Services (private DNS for VPC)
//!
//! One client, [`DnsSvcsV1`], covers the whole API. Operations are grouped
//! by resource:
//!
//! - [`zones`] - private DNS zones
//! - [`resource_records`] - records inside a zone
//! - [`permitted_networks`] - VPCs allowed to resolve a zone
//! - [`custom_resolvers`] - custom resolvers and their forwarding rules
//!
//! Every operation takes the DNS Services `instance_id` and an optional
//! `X-Correlation-ID` header for request tracing.

pub mod custom_resolvers;
pub mod models;
pub mod permitted_networks;
pub mod resource_records;
pub mod zones;

use crate::base::request::RequestBuilder;
use crate::base::service::{BaseService, ServiceOptions};
use crate::base::Result;
use reqwest::Method;

pub use models::*;

pub const DEFAULT_SERVICE_URL: &str = "https://api.dns-svcs.cloud.ibm.com/v1";
pub const DEFAULT_SERVICE_NAME: &str = "dns_svcs";
const SERVICE_VERSION: &str = "V1";

pub(crate) const CORRELATION_ID_HEADER: &str = "X-Correlation-ID";

/// DNS Services client
#[derive(Clone)]
pub struct DnsSvcsV1 {
    service: BaseService,
}

impl DnsSvcsV1 {
    pub fn new(options: ServiceOptions) -> Result<Self> {
        let service = BaseService::new(options, DEFAULT_SERVICE_URL, DEFAULT_SERVICE_NAME)?;
        Ok(Self { service })
    }

    pub fn service(&self) -> &BaseService {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    /// Start a request with the parts every DNS Services call shares
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        operation_id: &str,
        instance_id: Option<&str>,
        correlation_id: Option<&str>,
    ) -> RequestBuilder {
        self.service
            .request(method, path)
            .path_param("instance_id", instance_id)
            .header(CORRELATION_ID_HEADER, correlation_id)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id)
    }
}

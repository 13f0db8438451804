//! Argo smart routing

use crate::base::envelope::{CisResponse, SettingObject};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, RequestOptions, Result};
use reqwest::Method;
use serde::Serialize;

pub const DEFAULT_SERVICE_NAME: &str = "routing";
const SERVICE_VERSION: &str = "V1";

const SMART_ROUTING_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/routing/smart_routing";

/// Smart routing setting: `value` is `on` or `off`
pub type SmartRoutingResponse = CisResponse<SettingObject<String>>;

/// Options for [`RoutingV1::update_smart_routing`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSmartRoutingOptions {
    /// `on` or `off`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Routing client for one zone
#[derive(Clone)]
pub struct RoutingV1 {
    service: BaseService,
    crn: String,
    zone_identifier: String,
}

impl RoutingV1 {
    pub fn new(crn: &str, zone_identifier: &str, options: ServiceOptions) -> Result<Self> {
        require_identifiers(&[("crn", crn), ("zone_identifier", zone_identifier)])?;
        let service = BaseService::new(options, super::DEFAULT_SERVICE_URL, DEFAULT_SERVICE_NAME)?;
        Ok(Self {
            service,
            crn: crn.to_string(),
            zone_identifier: zone_identifier.to_string(),
        })
    }

    pub fn service(&self) -> &BaseService {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    pub async fn get_smart_routing(
        &self,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<SmartRoutingResponse>> {
        let request = self
            .service
            .request(Method::GET, SMART_ROUTING_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_smart_routing")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_smart_routing(
        &self,
        options: &UpdateSmartRoutingOptions,
    ) -> Result<DetailedResponse<SmartRoutingResponse>> {
        let request = self
            .service
            .request(Method::PATCH, SMART_ROUTING_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_smart_routing")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

//! Zones
//!
//! A zone is a domain added to a CIS instance. New zones stay `pending`
//! until the registrar delegates to the assigned name servers; an
//! activation check asks CIS to look again.

use crate::base::envelope::{CisResponse, IdResult};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "zones";
const SERVICE_VERSION: &str = "V1";

const ZONES_PATH: &str = "/v1/{crn}/zones";
const ZONE_PATH: &str = "/v1/{crn}/zones/{zone_identifier}";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    /// `pending`, `active`, `deleted`, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub paused: bool,
    #[serde(default)]
    pub name_servers: Vec<String>,
    #[serde(default)]
    pub original_name_servers: Vec<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

pub type ZoneResponse = CisResponse<Zone>;
pub type ListZonesResponse = CisResponse<Vec<Zone>>;
pub type DeleteZoneResponse = CisResponse<IdResult>;
pub type ZoneActivationCheckResponse = CisResponse<IdResult>;

/// Options for [`ZonesV1::list_zones`]
#[derive(Debug, Clone, Default)]
pub struct ListZonesOptions {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub headers: CustomHeaders,
}

/// Options for [`ZonesV1::create_zone`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateZoneOptions {
    /// Domain name, e.g. `example.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get, delete and activation check of one zone
#[derive(Debug, Clone, Default)]
pub struct ZoneIdOptions {
    /// Required.
    pub zone_identifier: Option<String>,
    pub headers: CustomHeaders,
}

impl ZoneIdOptions {
    pub fn new(zone_identifier: &str) -> Self {
        Self {
            zone_identifier: Some(zone_identifier.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`ZonesV1::update_zone`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateZoneOptions {
    /// Required.
    #[serde(skip)]
    pub zone_identifier: Option<String>,
    /// Pause CIS proxying and serve DNS only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Zones client for one CIS instance
#[derive(Clone)]
pub struct ZonesV1 {
    service: BaseService,
    crn: String,
}

impl ZonesV1 {
    pub fn new(crn: &str, options: ServiceOptions) -> Result<Self> {
        require_identifiers(&[("crn", crn)])?;
        let service = BaseService::new(options, super::DEFAULT_SERVICE_URL, DEFAULT_SERVICE_NAME)?;
        Ok(Self {
            service,
            crn: crn.to_string(),
        })
    }

    pub fn service(&self) -> &BaseService {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    pub async fn list_zones(
        &self,
        options: &ListZonesOptions,
    ) -> Result<DetailedResponse<ListZonesResponse>> {
        let request = self
            .service
            .request(Method::GET, ZONES_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .query("page", options.page)
            .query("per_page", options.per_page)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_zones")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_zone(
        &self,
        options: &CreateZoneOptions,
    ) -> Result<DetailedResponse<ZoneResponse>> {
        let request = self
            .service
            .request(Method::POST, ZONES_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_zone")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_zone(&self, options: &ZoneIdOptions) -> Result<DetailedResponse<ZoneResponse>> {
        let request = self
            .service
            .request(Method::GET, ZONE_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_zone")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_zone(
        &self,
        options: &UpdateZoneOptions,
    ) -> Result<DetailedResponse<ZoneResponse>> {
        let request = self
            .service
            .request(Method::PATCH, ZONE_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_zone")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_zone(
        &self,
        options: &ZoneIdOptions,
    ) -> Result<DetailedResponse<DeleteZoneResponse>> {
        let request = self
            .service
            .request(Method::DELETE, ZONE_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_zone")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Ask CIS to re-check name server delegation for a pending zone
    pub async fn zone_activation_check(
        &self,
        options: &ZoneIdOptions,
    ) -> Result<DetailedResponse<ZoneActivationCheckResponse>> {
        let request = self
            .service
            .request(Method::PUT, "/v1/{crn}/zones/{zone_identifier}/activation_check")
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "zone_activation_check")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

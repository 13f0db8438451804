//! DNS records of a CIS zone

use crate::base::envelope::{CisResponse, IdResult};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_SERVICE_NAME: &str = "dns_records";
const SERVICE_VERSION: &str = "V1";

/// Record types accepted by the CIS DNS API
pub mod record_type {
    pub const A: &str = "A";
    pub const AAAA: &str = "AAAA";
    pub const CNAME: &str = "CNAME";
    pub const NS: &str = "NS";
    pub const MX: &str = "MX";
    pub const TXT: &str = "TXT";
    pub const LOC: &str = "LOC";
    pub const SRV: &str = "SRV";
    pub const SPF: &str = "SPF";
    pub const CAA: &str = "CAA";
    pub const PTR: &str = "PTR";
}

/// A DNS record as returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DnsRecordDetails {
    pub id: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub zone_id: Option<String>,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub proxiable: Option<bool>,
    #[serde(default)]
    pub proxied: Option<bool>,
    #[serde(default)]
    pub ttl: Option<i64>,
    #[serde(default)]
    pub priority: Option<i64>,
    /// Structured data for LOC, SRV and CAA records
    #[serde(default)]
    pub data: Option<Value>,
}

pub type DnsRecordResponse = CisResponse<DnsRecordDetails>;
pub type ListDnsRecordsResponse = CisResponse<Vec<DnsRecordDetails>>;
pub type DeleteDnsRecordResponse = CisResponse<IdResult>;

/// Options for [`DnsRecordsV1::list_all_dns_records`]
#[derive(Debug, Clone, Default)]
pub struct ListAllDnsRecordsOptions {
    pub record_type: Option<String>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Field to order by (`type`, `name`, `content`)
    pub order: Option<String>,
    /// `asc` or `desc`
    pub direction: Option<String>,
    /// `any` or `all` of the filters must match
    pub match_type: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for [`DnsRecordsV1::create_dns_record`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDnsRecordOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for [`DnsRecordsV1::get_dns_record`] and [`DnsRecordsV1::delete_dns_record`]
#[derive(Debug, Clone, Default)]
pub struct DnsRecordOptions {
    /// Required.
    pub dnsrecord_identifier: Option<String>,
    pub headers: CustomHeaders,
}

impl DnsRecordOptions {
    pub fn new(dnsrecord_identifier: &str) -> Self {
        Self {
            dnsrecord_identifier: Some(dnsrecord_identifier.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`DnsRecordsV1::update_dns_record`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDnsRecordOptions {
    /// Required.
    #[serde(skip)]
    pub dnsrecord_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxied: Option<bool>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// DNS records client for one zone
#[derive(Clone)]
pub struct DnsRecordsV1 {
    service: BaseService,
    crn: String,
    zone_identifier: String,
}

impl DnsRecordsV1 {
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

    /// List records, optionally filtered by type, name or content
    pub async fn list_all_dns_records(
        &self,
        options: &ListAllDnsRecordsOptions,
    ) -> Result<DetailedResponse<ListDnsRecordsResponse>> {
        let request = self
            .service
            .request(Method::GET, "/v1/{crn}/zones/{zone_identifier}/dns_records")
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .query("type", options.record_type.as_deref())
            .query("name", options.name.as_deref())
            .query("content", options.content.as_deref())
            .query("page", options.page)
            .query("per_page", options.per_page)
            .query("order", options.order.as_deref())
            .query("direction", options.direction.as_deref())
            .query("match", options.match_type.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_all_dns_records")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_dns_record(
        &self,
        options: &CreateDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsRecordResponse>> {
        let request = self
            .service
            .request(Method::POST, "/v1/{crn}/zones/{zone_identifier}/dns_records")
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_dns_record")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_dns_record(
        &self,
        options: &DnsRecordOptions,
    ) -> Result<DetailedResponse<DnsRecordResponse>> {
        let request = self
            .service
            .request(
                Method::GET,
                "/v1/{crn}/zones/{zone_identifier}/dns_records/{dnsrecord_identifier}",
            )
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .path_param("dnsrecord_identifier", options.dnsrecord_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_dns_record")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_dns_record(
        &self,
        options: &UpdateDnsRecordOptions,
    ) -> Result<DetailedResponse<DnsRecordResponse>> {
        let request = self
            .service
            .request(
                Method::PUT,
                "/v1/{crn}/zones/{zone_identifier}/dns_records/{dnsrecord_identifier}",
            )
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .path_param("dnsrecord_identifier", options.dnsrecord_identifier.as_deref())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_dns_record")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_dns_record(
        &self,
        options: &DnsRecordOptions,
    ) -> Result<DetailedResponse<DeleteDnsRecordResponse>> {
        let request = self
            .service
            .request(
                Method::DELETE,
                "/v1/{crn}/zones/{zone_identifier}/dns_records/{dnsrecord_identifier}",
            )
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .path_param("dnsrecord_identifier", options.dnsrecord_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_dns_record")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

//! Resource records inside a DNS zone

use super::models::{ListResourceRecords, Rdata, ResourceRecord};
use super::DnsSvcsV1;
use crate::base::request::CustomHeaders;
use crate::base::service::DetailedResponse;
use crate::base::Result;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

const RECORDS_PATH: &str = "/instances/{instance_id}/dnszones/{dnszone_id}/resource_records";
const RECORD_PATH: &str =
    "/instances/{instance_id}/dnszones/{dnszone_id}/resource_records/{record_id}";

/// Record types accepted by DNS Services
pub mod record_type {
    pub const A: &str = "A";
    pub const AAAA: &str = "AAAA";
    pub const CNAME: &str = "CNAME";
    pub const MX: &str = "MX";
    pub const SRV: &str = "SRV";
    pub const TXT: &str = "TXT";
    pub const PTR: &str = "PTR";
}

/// Options for [`DnsSvcsV1::list_resource_records`]
#[derive(Debug, Clone, Default)]
pub struct ListResourceRecordsOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub dnszone_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// Filter by record type
    pub record_type: Option<String>,
    /// Filter by record name
    pub name: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for [`DnsSvcsV1::create_resource_record`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateResourceRecordOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub dnszone_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdata: Option<Rdata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    /// SRV only, e.g. `_sip`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    /// SRV only, e.g. `udp`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get and delete of one record
#[derive(Debug, Clone, Default)]
pub struct ResourceRecordOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub dnszone_id: Option<String>,
    /// Required.
    pub record_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: CustomHeaders,
}

impl ResourceRecordOptions {
    pub fn new(instance_id: &str, dnszone_id: &str, record_id: &str) -> Self {
        Self {
            instance_id: Some(instance_id.to_string()),
            dnszone_id: Some(dnszone_id.to_string()),
            record_id: Some(record_id.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`DnsSvcsV1::update_resource_record`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateResourceRecordOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub dnszone_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub record_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdata: Option<Rdata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

impl DnsSvcsV1 {
    pub async fn list_resource_records(
        &self,
        options: &ListResourceRecordsOptions,
    ) -> Result<DetailedResponse<ListResourceRecords>> {
        let request = self
            .request(
                Method::GET,
                RECORDS_PATH,
                "list_resource_records",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .query("offset", options.offset)
            .query("limit", options.limit)
            .query("type", options.record_type.as_deref())
            .query("name", options.name.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_resource_record(
        &self,
        options: &CreateResourceRecordOptions,
    ) -> Result<DetailedResponse<ResourceRecord>> {
        let request = self
            .request(
                Method::POST,
                RECORDS_PATH,
                "create_resource_record",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_resource_record(
        &self,
        options: &ResourceRecordOptions,
    ) -> Result<DetailedResponse<ResourceRecord>> {
        let request = self
            .request(
                Method::GET,
                RECORD_PATH,
                "get_resource_record",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .path_param("record_id", options.record_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_resource_record(
        &self,
        options: &UpdateResourceRecordOptions,
    ) -> Result<DetailedResponse<ResourceRecord>> {
        let request = self
            .request(
                Method::PUT,
                RECORD_PATH,
                "update_resource_record",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .path_param("record_id", options.record_id.as_deref())
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_resource_record(
        &self,
        options: &ResourceRecordOptions,
    ) -> Result<DetailedResponse<Value>> {
        let request = self
            .request(
                Method::DELETE,
                RECORD_PATH,
                "delete_resource_record",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .path_param("record_id", options.record_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

//! DNS zones

use super::models::{Dnszone, ListDnszones};
use super::DnsSvcsV1;
use crate::base::request::CustomHeaders;
use crate::base::service::DetailedResponse;
use crate::base::Result;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

const DNSZONES_PATH: &str = "/instances/{instance_id}/dnszones";
const DNSZONE_PATH: &str = "/instances/{instance_id}/dnszones/{dnszone_id}";

/// Options for [`DnsSvcsV1::list_dnszones`]
#[derive(Debug, Clone, Default)]
pub struct ListDnszonesOptions {
    /// Required.
    pub instance_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    /// Only zones the VPC is permitted to resolve
    pub vpc_id: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for [`DnsSvcsV1::create_dnszone`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateDnszoneOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    /// Zone name, e.g. `example.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get and delete of one zone
#[derive(Debug, Clone, Default)]
pub struct DnszoneOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub dnszone_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: CustomHeaders,
}

impl DnszoneOptions {
    pub fn new(instance_id: &str, dnszone_id: &str) -> Self {
        Self {
            instance_id: Some(instance_id.to_string()),
            dnszone_id: Some(dnszone_id.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`DnsSvcsV1::update_dnszone`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateDnszoneOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub dnszone_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

impl DnsSvcsV1 {
    pub async fn list_dnszones(
        &self,
        options: &ListDnszonesOptions,
    ) -> Result<DetailedResponse<ListDnszones>> {
        let request = self
            .request(
                Method::GET,
                DNSZONES_PATH,
                "list_dnszones",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .query("offset", options.offset)
            .query("limit", options.limit)
            .query("vpc_id", options.vpc_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_dnszone(
        &self,
        options: &CreateDnszoneOptions,
    ) -> Result<DetailedResponse<Dnszone>> {
        let request = self
            .request(
                Method::POST,
                DNSZONES_PATH,
                "create_dnszone",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_dnszone(&self, options: &DnszoneOptions) -> Result<DetailedResponse<Dnszone>> {
        let request = self
            .request(
                Method::GET,
                DNSZONE_PATH,
                "get_dnszone",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_dnszone(
        &self,
        options: &UpdateDnszoneOptions,
    ) -> Result<DetailedResponse<Dnszone>> {
        let request = self
            .request(
                Method::PATCH,
                DNSZONE_PATH,
                "update_dnszone",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Delete a zone. Succeeds with an empty result (204).
    pub async fn delete_dnszone(&self, options: &DnszoneOptions) -> Result<DetailedResponse<Value>> {
        let request = self
            .request(
                Method::DELETE,
                DNSZONE_PATH,
                "delete_dnszone",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

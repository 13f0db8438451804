//! Permitted networks
//!
//! A zone only resolves inside the VPCs added to it as permitted networks.

use super::models::{ListPermittedNetworks, PermittedNetwork, PermittedNetworkVpc};
use super::DnsSvcsV1;
use crate::base::request::CustomHeaders;
use crate::base::service::DetailedResponse;
use crate::base::Result;
use reqwest::Method;
use serde::Serialize;

const NETWORKS_PATH: &str = "/instances/{instance_id}/dnszones/{dnszone_id}/permitted_networks";
const NETWORK_PATH: &str =
    "/instances/{instance_id}/dnszones/{dnszone_id}/permitted_networks/{permitted_network_id}";

/// Options for [`DnsSvcsV1::list_permitted_networks`]
#[derive(Debug, Clone, Default)]
pub struct ListPermittedNetworksOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub dnszone_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub headers: CustomHeaders,
}

/// Options for [`DnsSvcsV1::create_permitted_network`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePermittedNetworkOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub dnszone_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    /// `vpc`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permitted_network: Option<PermittedNetworkVpc>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

impl CreatePermittedNetworkOptions {
    /// Permit a VPC by CRN
    pub fn vpc(instance_id: &str, dnszone_id: &str, vpc_crn: &str) -> Self {
        Self {
            instance_id: Some(instance_id.to_string()),
            dnszone_id: Some(dnszone_id.to_string()),
            network_type: Some("vpc".to_string()),
            permitted_network: Some(PermittedNetworkVpc {
                vpc_crn: vpc_crn.to_string(),
            }),
            ..Default::default()
        }
    }
}

/// Options for get and delete of one permitted network
#[derive(Debug, Clone, Default)]
pub struct PermittedNetworkOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub dnszone_id: Option<String>,
    /// Required.
    pub permitted_network_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: CustomHeaders,
}

impl PermittedNetworkOptions {
    pub fn new(instance_id: &str, dnszone_id: &str, permitted_network_id: &str) -> Self {
        Self {
            instance_id: Some(instance_id.to_string()),
            dnszone_id: Some(dnszone_id.to_string()),
            permitted_network_id: Some(permitted_network_id.to_string()),
            ..Default::default()
        }
    }
}

impl DnsSvcsV1 {
    pub async fn list_permitted_networks(
        &self,
        options: &ListPermittedNetworksOptions,
    ) -> Result<DetailedResponse<ListPermittedNetworks>> {
        let request = self
            .request(
                Method::GET,
                NETWORKS_PATH,
                "list_permitted_networks",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .query("offset", options.offset)
            .query("limit", options.limit)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_permitted_network(
        &self,
        options: &CreatePermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        let request = self
            .request(
                Method::POST,
                NETWORKS_PATH,
                "create_permitted_network",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_permitted_network(
        &self,
        options: &PermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        let request = self
            .request(
                Method::GET,
                NETWORK_PATH,
                "get_permitted_network",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .path_param("permitted_network_id", options.permitted_network_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Remove a permitted network. The response echoes the network in
    /// `REMOVAL_IN_PROGRESS` state.
    pub async fn delete_permitted_network(
        &self,
        options: &PermittedNetworkOptions,
    ) -> Result<DetailedResponse<PermittedNetwork>> {
        let request = self
            .request(
                Method::DELETE,
                NETWORK_PATH,
                "delete_permitted_network",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("dnszone_id", options.dnszone_id.as_deref())
            .path_param("permitted_network_id", options.permitted_network_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

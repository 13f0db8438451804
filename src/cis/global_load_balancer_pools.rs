//! Global load balancer pools
//!
//! Pools group origin servers that a global load balancer steers traffic
//! to. Pools belong to the CIS instance, not to a zone.

use crate::base::envelope::{CisResponse, IdResult};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, RequestOptions, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "global_load_balancer_pools";
const SERVICE_VERSION: &str = "V0";

/// Origin server in a pool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadBalancerPoolOrigin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// IP address or hostname
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Relative traffic weight, 0.0 to 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancerPool {
    pub id: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub name: String,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub healthy: Option<bool>,
    #[serde(default)]
    pub monitor: Option<String>,
    #[serde(default)]
    pub minimum_origins: Option<i64>,
    #[serde(default)]
    pub check_regions: Vec<String>,
    #[serde(default)]
    pub origins: Vec<LoadBalancerPoolOrigin>,
    #[serde(default)]
    pub notification_email: Option<String>,
}

pub type LoadBalancerPoolResponse = CisResponse<LoadBalancerPool>;
pub type ListLoadBalancerPoolsResponse = CisResponse<Vec<LoadBalancerPool>>;
pub type DeleteLoadBalancerPoolResponse = CisResponse<IdResult>;

/// Pool attributes shared by create, edit and update
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadBalancerPoolBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Regions health checks run from (e.g. `WNAM`, `EEU`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_regions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origins: Option<Vec<LoadBalancerPoolOrigin>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_origins: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Monitor id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_email: Option<String>,
}

/// Options for [`GlobalLoadBalancerPoolsV0::create_load_balancer_pool`]
#[derive(Debug, Clone, Default)]
pub struct CreateLoadBalancerPoolOptions {
    pub pool: LoadBalancerPoolBody,
    pub headers: CustomHeaders,
}

/// Options for get and delete of a single pool
#[derive(Debug, Clone, Default)]
pub struct LoadBalancerPoolOptions {
    /// Required.
    pub pool_identifier: Option<String>,
    pub headers: CustomHeaders,
}

impl LoadBalancerPoolOptions {
    pub fn new(pool_identifier: &str) -> Self {
        Self {
            pool_identifier: Some(pool_identifier.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`GlobalLoadBalancerPoolsV0::edit_load_balancer_pool`] (full
/// replace) and [`GlobalLoadBalancerPoolsV0::update_load_balancer_pool`]
/// (partial update)
#[derive(Debug, Clone, Default)]
pub struct ModifyLoadBalancerPoolOptions {
    /// Required.
    pub pool_identifier: Option<String>,
    pub pool: LoadBalancerPoolBody,
    pub headers: CustomHeaders,
}

/// Load balancer pools client for one CIS instance
#[derive(Clone)]
pub struct GlobalLoadBalancerPoolsV0 {
    service: BaseService,
    crn: String,
}

impl GlobalLoadBalancerPoolsV0 {
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

    pub async fn list_all_load_balancer_pools(
        &self,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<ListLoadBalancerPoolsResponse>> {
        let request = self
            .service
            .request(Method::GET, "/v1/{crn}/load_balancers/pools")
            .path_param("crn", Some(self.crn.as_str()))
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_all_load_balancer_pools")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_load_balancer_pool(
        &self,
        options: &CreateLoadBalancerPoolOptions,
    ) -> Result<DetailedResponse<LoadBalancerPoolResponse>> {
        let request = self
            .service
            .request(Method::POST, "/v1/{crn}/load_balancers/pools")
            .path_param("crn", Some(self.crn.as_str()))
            .json(&options.pool)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_load_balancer_pool")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_load_balancer_pool(
        &self,
        options: &LoadBalancerPoolOptions,
    ) -> Result<DetailedResponse<LoadBalancerPoolResponse>> {
        let request = self
            .service
            .request(Method::GET, "/v1/{crn}/load_balancers/pools/{pool_identifier}")
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("pool_identifier", options.pool_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_load_balancer_pool")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_load_balancer_pool(
        &self,
        options: &LoadBalancerPoolOptions,
    ) -> Result<DetailedResponse<DeleteLoadBalancerPoolResponse>> {
        let request = self
            .service
            .request(Method::DELETE, "/v1/{crn}/load_balancers/pools/{pool_identifier}")
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("pool_identifier", options.pool_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_load_balancer_pool")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Replace a pool (PUT)
    pub async fn edit_load_balancer_pool(
        &self,
        options: &ModifyLoadBalancerPoolOptions,
    ) -> Result<DetailedResponse<LoadBalancerPoolResponse>> {
        self.modify_pool(Method::PUT, "edit_load_balancer_pool", options)
            .await
    }

    /// Change selected pool fields (PATCH)
    pub async fn update_load_balancer_pool(
        &self,
        options: &ModifyLoadBalancerPoolOptions,
    ) -> Result<DetailedResponse<LoadBalancerPoolResponse>> {
        self.modify_pool(Method::PATCH, "update_load_balancer_pool", options)
            .await
    }

    async fn modify_pool(
        &self,
        method: Method,
        operation_id: &str,
        options: &ModifyLoadBalancerPoolOptions,
    ) -> Result<DetailedResponse<LoadBalancerPoolResponse>> {
        let request = self
            .service
            .request(method, "/v1/{crn}/load_balancers/pools/{pool_identifier}")
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("pool_identifier", options.pool_identifier.as_deref())
            .json(&options.pool)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

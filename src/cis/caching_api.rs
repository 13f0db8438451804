//! Caching API
//!
//! Cache purge operations and the zone's cache-related settings.

use crate::base::envelope::{CisResponse, IdResult, SettingObject};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, RequestOptions, Result};
use reqwest::Method;
use serde::Serialize;

pub const DEFAULT_SERVICE_NAME: &str = "caching_api";
const SERVICE_VERSION: &str = "V1";

/// Accepted values for the cache level setting
pub mod cache_level {
    pub const BASIC: &str = "basic";
    pub const SIMPLIFIED: &str = "simplified";
    pub const AGGRESSIVE: &str = "aggressive";
}

/// Purge result: `{id}` of the zone
pub type PurgeResponse = CisResponse<IdResult>;
/// Browser cache TTL in seconds
pub type BrowserTtlResponse = CisResponse<SettingObject<i64>>;
/// `on`/`off` settings and the cache level
pub type SettingResponse = CisResponse<SettingObject<String>>;

/// Options for [`CachingApiV1::purge_by_urls`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeByUrlsOptions {
    /// URLs of the files to purge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for [`CachingApiV1::purge_by_cache_tags`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeByCacheTagsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for [`CachingApiV1::purge_by_hosts`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PurgeByHostsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for [`CachingApiV1::update_browser_cache_ttl`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBrowserCacheTtlOptions {
    /// TTL in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for the `on`/`off` and cache-level setting updates
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSettingOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

impl UpdateSettingOptions {
    pub fn value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Default::default()
        }
    }
}

/// Caching API client for one zone
#[derive(Clone)]
pub struct CachingApiV1 {
    service: BaseService,
    crn: String,
    zone_id: String,
}

impl CachingApiV1 {
    /// Create a client for `zone_id` in the CIS instance `crn`
    pub fn new(crn: &str, zone_id: &str, options: ServiceOptions) -> Result<Self> {
        require_identifiers(&[("crn", crn), ("zone_id", zone_id)])?;
        let service = BaseService::new(options, super::DEFAULT_SERVICE_URL, DEFAULT_SERVICE_NAME)?;
        Ok(Self {
            service,
            crn: crn.to_string(),
            zone_id: zone_id.to_string(),
        })
    }

    pub fn service(&self) -> &BaseService {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    pub fn crn(&self) -> &str {
        &self.crn
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    async fn purge<B: Serialize>(
        &self,
        path: &str,
        operation_id: &str,
        body: Option<&B>,
        headers: &CustomHeaders,
    ) -> Result<DetailedResponse<PurgeResponse>> {
        let mut request = self
            .service
            .request(Method::PUT, path)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", Some(self.zone_id.as_str()))
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id)
            .headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.service.send(request.build()?).await
    }

    async fn get_setting<T: serde::de::DeserializeOwned>(
        &self,
        setting: &str,
        operation_id: &str,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<T>> {
        let path = format!("/v1/{{crn}}/zones/{{zone_id}}/settings/{}", setting);
        let request = self
            .service
            .request(Method::GET, &path)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", Some(self.zone_id.as_str()))
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    async fn update_setting<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        setting: &str,
        operation_id: &str,
        body: &B,
        headers: &CustomHeaders,
    ) -> Result<DetailedResponse<T>> {
        let path = format!("/v1/{{crn}}/zones/{{zone_id}}/settings/{}", setting);
        let request = self
            .service
            .request(Method::PATCH, &path)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", Some(self.zone_id.as_str()))
            .json(body)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, operation_id)
            .headers(headers)
            .build()?;
        self.service.send(request).await
    }

    // =========================================================================
    // Purge
    // =========================================================================

    /// Purge everything cached for the zone
    pub async fn purge_all(&self, options: &RequestOptions) -> Result<DetailedResponse<PurgeResponse>> {
        self.purge::<RequestOptions>(
            "/v1/{crn}/zones/{zone_id}/purge_cache/purge_all",
            "purge_all",
            None,
            &options.headers,
        )
        .await
    }

    /// Purge individual files by URL
    pub async fn purge_by_urls(
        &self,
        options: &PurgeByUrlsOptions,
    ) -> Result<DetailedResponse<PurgeResponse>> {
        self.purge(
            "/v1/{crn}/zones/{zone_id}/purge_cache/purge_by_urls",
            "purge_by_urls",
            Some(options),
            &options.headers,
        )
        .await
    }

    /// Purge by Cache-Tag response header values
    pub async fn purge_by_cache_tags(
        &self,
        options: &PurgeByCacheTagsOptions,
    ) -> Result<DetailedResponse<PurgeResponse>> {
        self.purge(
            "/v1/{crn}/zones/{zone_id}/purge_cache/purge_by_cache_tags",
            "purge_by_cache_tags",
            Some(options),
            &options.headers,
        )
        .await
    }

    /// Purge every file under the given hostnames
    pub async fn purge_by_hosts(
        &self,
        options: &PurgeByHostsOptions,
    ) -> Result<DetailedResponse<PurgeResponse>> {
        self.purge(
            "/v1/{crn}/zones/{zone_id}/purge_cache/purge_by_hosts",
            "purge_by_hosts",
            Some(options),
            &options.headers,
        )
        .await
    }

    // =========================================================================
    // Settings
    // =========================================================================

    pub async fn get_browser_cache_ttl(
        &self,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<BrowserTtlResponse>> {
        self.get_setting("browser_cache_ttl", "get_browser_cache_ttl", options)
            .await
    }

    pub async fn update_browser_cache_ttl(
        &self,
        options: &UpdateBrowserCacheTtlOptions,
    ) -> Result<DetailedResponse<BrowserTtlResponse>> {
        self.update_setting(
            "browser_cache_ttl",
            "update_browser_cache_ttl",
            options,
            &options.headers,
        )
        .await
    }

    pub async fn get_serve_stale_content(
        &self,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.get_setting("serve_stale_content", "get_serve_stale_content", options)
            .await
    }

    pub async fn update_serve_stale_content(
        &self,
        options: &UpdateSettingOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.update_setting(
            "serve_stale_content",
            "update_serve_stale_content",
            options,
            &options.headers,
        )
        .await
    }

    pub async fn get_development_mode(
        &self,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.get_setting("development_mode", "get_development_mode", options)
            .await
    }

    pub async fn update_development_mode(
        &self,
        options: &UpdateSettingOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.update_setting(
            "development_mode",
            "update_development_mode",
            options,
            &options.headers,
        )
        .await
    }

    /// Whether query strings are sorted before caching
    pub async fn get_query_string_sort(
        &self,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.get_setting("sort_query_string_for_cache", "get_query_string_sort", options)
            .await
    }

    pub async fn update_query_string_sort(
        &self,
        options: &UpdateSettingOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.update_setting(
            "sort_query_string_for_cache",
            "update_query_string_sort",
            options,
            &options.headers,
        )
        .await
    }

    pub async fn get_cache_level(
        &self,
        options: &RequestOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.get_setting("cache_level", "get_cache_level", options)
            .await
    }

    /// Set the cache level; see [`cache_level`] for values
    pub async fn update_cache_level(
        &self,
        options: &UpdateSettingOptions,
    ) -> Result<DetailedResponse<SettingResponse>> {
        self.update_setting("cache_level", "update_cache_level", options, &options.headers)
            .await
    }
}

//! Zone rate limits

use crate::base::envelope::{CisResponse, IdResult};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "zone_rate_limits";
const SERVICE_VERSION: &str = "V1";

const RATE_LIMITS_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/rate_limits";
const RATE_LIMIT_PATH: &str = "/v1/{crn}/zones/{zone_identifier}/rate_limits/{rate_limit_identifier}";

/// Requests that bypass the rule, e.g. `{name: "url", value: "example.com/*"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitBypass {
    pub name: String,
    pub value: String,
}

/// What happens once the threshold is exceeded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitAction {
    /// `simulate`, `ban`, `challenge` or `js_challenge`
    pub mode: String,
    /// Ban duration in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<RateLimitActionResponse>,
}

/// Custom response served while a client is banned
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitActionResponse {
    pub content_type: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitCorrelate {
    /// `nat`
    pub by: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitMatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RateLimitMatchRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<RateLimitMatchResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitMatchRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitMatchResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<RateLimitHeaderMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_traffic: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimitHeaderMatch {
    pub name: String,
    /// `eq` or `ne`
    pub op: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimit {
    pub id: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bypass: Vec<RateLimitBypass>,
    pub threshold: i64,
    pub period: i64,
    #[serde(default)]
    pub correlate: Option<RateLimitCorrelate>,
    pub action: RateLimitAction,
    #[serde(rename = "match")]
    pub match_rule: RateLimitMatch,
}

pub type RateLimitResponse = CisResponse<RateLimit>;
pub type ListRateLimitsResponse = CisResponse<Vec<RateLimit>>;
pub type DeleteRateLimitResponse = CisResponse<IdResult>;

/// Options for [`ZoneRateLimitsV1::list_all_zone_rate_limits`]
#[derive(Debug, Clone, Default)]
pub struct ListAllZoneRateLimitsOptions {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub headers: CustomHeaders,
}

/// Rule body for create and update
#[derive(Debug, Clone, Default, Serialize)]
pub struct RateLimitBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass: Option<Vec<RateLimitBypass>>,
    /// Required. Requests allowed per period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
    /// Required. Window in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<i64>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<RateLimitAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlate: Option<RateLimitCorrelate>,
    /// Required.
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_rule: Option<RateLimitMatch>,
}

/// Options for [`ZoneRateLimitsV1::create_zone_rate_limits`]
#[derive(Debug, Clone, Default)]
pub struct CreateZoneRateLimitsOptions {
    pub rate_limit: RateLimitBody,
    pub headers: CustomHeaders,
}

/// Options for [`ZoneRateLimitsV1::update_rate_limit`]
#[derive(Debug, Clone, Default)]
pub struct UpdateRateLimitOptions {
    /// Required.
    pub rate_limit_identifier: Option<String>,
    pub rate_limit: RateLimitBody,
    pub headers: CustomHeaders,
}

/// Options for get and delete of one rule
#[derive(Debug, Clone, Default)]
pub struct RateLimitOptions {
    /// Required.
    pub rate_limit_identifier: Option<String>,
    pub headers: CustomHeaders,
}

impl RateLimitOptions {
    pub fn new(rate_limit_identifier: &str) -> Self {
        Self {
            rate_limit_identifier: Some(rate_limit_identifier.to_string()),
            ..Default::default()
        }
    }
}

/// Rate limits client for one zone
#[derive(Clone)]
pub struct ZoneRateLimitsV1 {
    service: BaseService,
    crn: String,
    zone_identifier: String,
}

impl ZoneRateLimitsV1 {
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

    pub async fn list_all_zone_rate_limits(
        &self,
        options: &ListAllZoneRateLimitsOptions,
    ) -> Result<DetailedResponse<ListRateLimitsResponse>> {
        let request = self
            .service
            .request(Method::GET, RATE_LIMITS_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .query("page", options.page)
            .query("per_page", options.per_page)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_all_zone_rate_limits")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_zone_rate_limits(
        &self,
        options: &CreateZoneRateLimitsOptions,
    ) -> Result<DetailedResponse<RateLimitResponse>> {
        let body = &options.rate_limit;
        let request = self
            .service
            .request(Method::POST, RATE_LIMITS_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .require("threshold", body.threshold.is_some())
            .require("period", body.period.is_some())
            .require("action", body.action.is_some())
            .require("match", body.match_rule.is_some())
            .json(body)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_zone_rate_limits")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_rate_limit(
        &self,
        options: &RateLimitOptions,
    ) -> Result<DetailedResponse<RateLimitResponse>> {
        let request = self
            .service
            .request(Method::GET, RATE_LIMIT_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .path_param("rate_limit_identifier", options.rate_limit_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_rate_limit")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Replace a rule
    pub async fn update_rate_limit(
        &self,
        options: &UpdateRateLimitOptions,
    ) -> Result<DetailedResponse<RateLimitResponse>> {
        let request = self
            .service
            .request(Method::PUT, RATE_LIMIT_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .path_param("rate_limit_identifier", options.rate_limit_identifier.as_deref())
            .require("threshold", options.rate_limit.threshold.is_some())
            .require("period", options.rate_limit.period.is_some())
            .require("action", options.rate_limit.action.is_some())
            .require("match", options.rate_limit.match_rule.is_some())
            .json(&options.rate_limit)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_rate_limit")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_zone_rate_limit(
        &self,
        options: &RateLimitOptions,
    ) -> Result<DetailedResponse<DeleteRateLimitResponse>> {
        let request = self
            .service
            .request(Method::DELETE, RATE_LIMIT_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", Some(self.zone_identifier.as_str()))
            .path_param("rate_limit_identifier", options.rate_limit_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_zone_rate_limit")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_keyword_round_trips_on_wire() {
        let body = json!({
            "id": "92f17202ed8bd63d69a66b86a49a8f6b",
            "disabled": false,
            "threshold": 1000,
            "period": 60,
            "action": {"mode": "simulate", "timeout": 60},
            "match": {"request": {"url": "*.example.org/path*", "methods": ["GET"]}}
        });
        let rule: RateLimit = serde_json::from_value(body).unwrap();
        assert_eq!(
            rule.match_rule.request.as_ref().map(|r| r.url.as_str()),
            Some("*.example.org/path*")
        );

        let out = serde_json::to_value(&rule).unwrap();
        assert!(out.get("match").is_some());
        assert!(out.get("match_rule").is_none());
    }
}

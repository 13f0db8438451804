//! WAF rule groups
//!
//! Rule groups of a WAF package can be switched `on` or `off` as a unit.

use crate::base::envelope::CisResponse;
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "waf_rule_groups_api";
const SERVICE_VERSION: &str = "V1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WafRuleGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rules_count: Option<i64>,
    #[serde(default)]
    pub modified_rules_count: Option<i64>,
    #[serde(default)]
    pub package_id: Option<String>,
    /// `on` or `off`
    pub mode: String,
    #[serde(default)]
    pub allowed_modes: Vec<String>,
}

pub type WafGroupResponse = CisResponse<WafRuleGroup>;
pub type WafGroupsResponse = CisResponse<Vec<WafRuleGroup>>;

/// Options for [`WafRuleGroupsApiV1::list_waf_rule_groups`]
#[derive(Debug, Clone, Default)]
pub struct ListWafRuleGroupsOptions {
    /// Required. WAF package id
    pub pkg_id: Option<String>,
    pub name: Option<String>,
    pub mode: Option<String>,
    pub rules_count: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Field to order by (`name`, `mode`, `rules_count`)
    pub order: Option<String>,
    /// `asc` or `desc`
    pub direction: Option<String>,
    /// `any` or `all`
    pub match_type: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for [`WafRuleGroupsApiV1::get_waf_rule_group`]
#[derive(Debug, Clone, Default)]
pub struct GetWafRuleGroupOptions {
    /// Required.
    pub pkg_id: Option<String>,
    /// Required.
    pub group_id: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for [`WafRuleGroupsApiV1::update_waf_rule_group`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateWafRuleGroupOptions {
    /// Required.
    #[serde(skip)]
    pub pkg_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub group_id: Option<String>,
    /// `on` or `off`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// WAF rule groups client for one zone
#[derive(Clone)]
pub struct WafRuleGroupsApiV1 {
    service: BaseService,
    crn: String,
    zone_id: String,
}

impl WafRuleGroupsApiV1 {
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

    pub async fn list_waf_rule_groups(
        &self,
        options: &ListWafRuleGroupsOptions,
    ) -> Result<DetailedResponse<WafGroupsResponse>> {
        let request = self
            .service
            .request(
                Method::GET,
                "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{pkg_id}/groups",
            )
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", Some(self.zone_id.as_str()))
            .path_param("pkg_id", options.pkg_id.as_deref())
            .query("name", options.name.as_deref())
            .query("mode", options.mode.as_deref())
            .query("rules_count", options.rules_count.as_deref())
            .query("page", options.page)
            .query("per_page", options.per_page)
            .query("order", options.order.as_deref())
            .query("direction", options.direction.as_deref())
            .query("match", options.match_type.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_waf_rule_groups")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_waf_rule_group(
        &self,
        options: &GetWafRuleGroupOptions,
    ) -> Result<DetailedResponse<WafGroupResponse>> {
        let request = self
            .service
            .request(
                Method::GET,
                "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{pkg_id}/groups/{group_id}",
            )
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", Some(self.zone_id.as_str()))
            .path_param("pkg_id", options.pkg_id.as_deref())
            .path_param("group_id", options.group_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_waf_rule_group")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Switch a rule group `on` or `off`
    pub async fn update_waf_rule_group(
        &self,
        options: &UpdateWafRuleGroupOptions,
    ) -> Result<DetailedResponse<WafGroupResponse>> {
        let request = self
            .service
            .request(
                Method::PATCH,
                "/v1/{crn}/zones/{zone_id}/firewall/waf/packages/{pkg_id}/groups/{group_id}",
            )
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", Some(self.zone_id.as_str()))
            .path_param("pkg_id", options.pkg_id.as_deref())
            .path_param("group_id", options.group_id.as_deref())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_waf_rule_group")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

//! Firewall rules
//!
//! Every firewall-rule endpoint requires the caller's IAM token in the
//! `X-Auth-User-Token` header in addition to the service authenticator.

use crate::base::envelope::{CisResponse, IdResult};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_NAME: &str = "firewall_rules";
const SERVICE_VERSION: &str = "V1";

const USER_TOKEN_HEADER: &str = "X-Auth-User-Token";

/// Actions a firewall rule can take
pub mod action {
    pub const LOG: &str = "log";
    pub const ALLOW: &str = "allow";
    pub const CHALLENGE: &str = "challenge";
    pub const JS_CHALLENGE: &str = "js_challenge";
    pub const BLOCK: &str = "block";
}

/// Filter attached to a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterObject {
    pub id: String,
    #[serde(default)]
    pub paused: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub expression: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallRuleObject {
    pub id: String,
    #[serde(default)]
    pub paused: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    pub action: String,
    #[serde(default)]
    pub filter: Option<FilterObject>,
    #[serde(default)]
    pub priority: Option<i64>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

/// Reference to an existing filter by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterRef {
    pub id: String,
}

/// Rule to create, bound to an existing filter
#[derive(Debug, Clone, Default, Serialize)]
pub struct FirewallRuleInput {
    pub filter: FilterRef,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// One entry of a bulk rule update
#[derive(Debug, Clone, Default, Serialize)]
pub struct FirewallRuleUpdateItem {
    pub id: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterRef>,
}

pub type FirewallRulesResponse = CisResponse<Vec<FirewallRuleObject>>;
pub type FirewallRuleResponse = CisResponse<FirewallRuleObject>;
pub type DeleteFirewallRulesResponse = CisResponse<Vec<IdResult>>;
pub type DeleteFirewallRuleResponse = CisResponse<IdResult>;

/// Options for [`FirewallRulesV1::list_all_firewall_rules`]
#[derive(Debug, Clone, Default)]
pub struct ListAllFirewallRulesOptions {
    /// Required.
    pub x_auth_user_token: Option<String>,
    /// Required.
    pub zone_identifier: Option<String>,
    pub description: Option<String>,
    pub action: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub headers: CustomHeaders,
}

/// Options for [`FirewallRulesV1::create_firewall_rules`]
#[derive(Debug, Clone, Default)]
pub struct CreateFirewallRulesOptions {
    /// Required.
    pub x_auth_user_token: Option<String>,
    /// Required.
    pub zone_identifier: Option<String>,
    /// Sent as the request body (a JSON array)
    pub firewall_rule_input_with_filter_id: Option<Vec<FirewallRuleInput>>,
    pub headers: CustomHeaders,
}

/// Options for [`FirewallRulesV1::update_firewall_rules`]
#[derive(Debug, Clone, Default)]
pub struct UpdateFirewallRulesOptions {
    /// Required.
    pub x_auth_user_token: Option<String>,
    /// Required.
    pub zone_identifier: Option<String>,
    /// Sent as the request body (a JSON array)
    pub firewall_rules_update_input_item: Option<Vec<FirewallRuleUpdateItem>>,
    pub headers: CustomHeaders,
}

/// Options for [`FirewallRulesV1::delete_firewall_rules`]
#[derive(Debug, Clone, Default)]
pub struct DeleteFirewallRulesOptions {
    /// Required.
    pub x_auth_user_token: Option<String>,
    /// Required.
    pub zone_identifier: Option<String>,
    /// Required. Ids of the rules to delete, sent comma-joined
    pub id: Option<Vec<String>>,
    pub headers: CustomHeaders,
}

/// Options for [`FirewallRulesV1::get_firewall_rule`] and [`FirewallRulesV1::delete_firewall_rule`]
#[derive(Debug, Clone, Default)]
pub struct FirewallRuleOptions {
    /// Required.
    pub x_auth_user_token: Option<String>,
    /// Required.
    pub zone_identifier: Option<String>,
    /// Required.
    pub firewall_rule_identifier: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for [`FirewallRulesV1::update_firewall_rule`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateFirewallRuleOptions {
    /// Required.
    #[serde(skip)]
    pub x_auth_user_token: Option<String>,
    /// Required.
    #[serde(skip)]
    pub zone_identifier: Option<String>,
    /// Required.
    #[serde(skip)]
    pub firewall_rule_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterRef>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Firewall rules client for one CIS instance
#[derive(Clone)]
pub struct FirewallRulesV1 {
    service: BaseService,
    crn: String,
}

impl FirewallRulesV1 {
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

    pub async fn list_all_firewall_rules(
        &self,
        options: &ListAllFirewallRulesOptions,
    ) -> Result<DetailedResponse<FirewallRulesResponse>> {
        let request = self
            .service
            .request(Method::GET, "/v1/{crn}/zones/{zone_identifier}/firewall/rules")
            .header(USER_TOKEN_HEADER, options.x_auth_user_token.as_deref())
            .require("x_auth_user_token", options.x_auth_user_token.is_some())
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .query("description", options.description.as_deref())
            .query("action", options.action.as_deref())
            .query("page", options.page)
            .query("per_page", options.per_page)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_all_firewall_rules")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Create rules in bulk
    pub async fn create_firewall_rules(
        &self,
        options: &CreateFirewallRulesOptions,
    ) -> Result<DetailedResponse<FirewallRulesResponse>> {
        let mut request = self
            .service
            .request(Method::POST, "/v1/{crn}/zones/{zone_identifier}/firewall/rules")
            .header(USER_TOKEN_HEADER, options.x_auth_user_token.as_deref())
            .require("x_auth_user_token", options.x_auth_user_token.is_some())
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref());
        if let Some(rules) = &options.firewall_rule_input_with_filter_id {
            request = request.json(rules);
        }
        let request = request
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_firewall_rules")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Update rules in bulk
    pub async fn update_firewall_rules(
        &self,
        options: &UpdateFirewallRulesOptions,
    ) -> Result<DetailedResponse<FirewallRulesResponse>> {
        let mut request = self
            .service
            .request(Method::PUT, "/v1/{crn}/zones/{zone_identifier}/firewall/rules")
            .header(USER_TOKEN_HEADER, options.x_auth_user_token.as_deref())
            .require("x_auth_user_token", options.x_auth_user_token.is_some())
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref());
        if let Some(items) = &options.firewall_rules_update_input_item {
            request = request.json(items);
        }
        let request = request
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_firewall_rules")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Delete several rules by id
    pub async fn delete_firewall_rules(
        &self,
        options: &DeleteFirewallRulesOptions,
    ) -> Result<DetailedResponse<DeleteFirewallRulesResponse>> {
        let request = self
            .service
            .request(Method::DELETE, "/v1/{crn}/zones/{zone_identifier}/firewall/rules")
            .header(USER_TOKEN_HEADER, options.x_auth_user_token.as_deref())
            .require("x_auth_user_token", options.x_auth_user_token.is_some())
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .require("id", options.id.as_ref().map(|ids| !ids.is_empty()).unwrap_or(false))
            .query("id", options.id.as_ref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_firewall_rules")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_firewall_rule(
        &self,
        options: &FirewallRuleOptions,
    ) -> Result<DetailedResponse<FirewallRuleResponse>> {
        let request = self
            .service
            .request(
                Method::GET,
                "/v1/{crn}/zones/{zone_identifier}/firewall/rules/{firewall_rule_identifier}",
            )
            .header(USER_TOKEN_HEADER, options.x_auth_user_token.as_deref())
            .require("x_auth_user_token", options.x_auth_user_token.is_some())
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .path_param("firewall_rule_identifier", options.firewall_rule_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_firewall_rule")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_firewall_rule(
        &self,
        options: &UpdateFirewallRuleOptions,
    ) -> Result<DetailedResponse<FirewallRuleResponse>> {
        let request = self
            .service
            .request(
                Method::PUT,
                "/v1/{crn}/zones/{zone_identifier}/firewall/rules/{firewall_rule_identifier}",
            )
            .header(USER_TOKEN_HEADER, options.x_auth_user_token.as_deref())
            .require("x_auth_user_token", options.x_auth_user_token.is_some())
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .path_param("firewall_rule_identifier", options.firewall_rule_identifier.as_deref())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_firewall_rule")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_firewall_rule(
        &self,
        options: &FirewallRuleOptions,
    ) -> Result<DetailedResponse<DeleteFirewallRuleResponse>> {
        let request = self
            .service
            .request(
                Method::DELETE,
                "/v1/{crn}/zones/{zone_identifier}/firewall/rules/{firewall_rule_identifier}",
            )
            .header(USER_TOKEN_HEADER, options.x_auth_user_token.as_deref())
            .require("x_auth_user_token", options.x_auth_user_token.is_some())
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_identifier", options.zone_identifier.as_deref())
            .path_param("firewall_rule_identifier", options.firewall_rule_identifier.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_firewall_rule")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

//! Custom resolvers and forwarding rules
//!
//! A custom resolver answers queries from inside a VPC and forwards the
//! domains named by its forwarding rules to on-premises name servers.

use super::models::{CustomResolver, ForwardingRule, ListCustomResolvers, ListForwardingRules, LocationInput};
use super::DnsSvcsV1;
use crate::base::request::CustomHeaders;
use crate::base::service::DetailedResponse;
use crate::base::Result;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

const RESOLVERS_PATH: &str = "/instances/{instance_id}/custom_resolvers";
const RESOLVER_PATH: &str = "/instances/{instance_id}/custom_resolvers/{resolver_id}";
const RULES_PATH: &str = "/instances/{instance_id}/custom_resolvers/{resolver_id}/forwarding_rules";
const RULE_PATH: &str =
    "/instances/{instance_id}/custom_resolvers/{resolver_id}/forwarding_rules/{rule_id}";

// =============================================================================
// Custom resolvers
// =============================================================================

/// Options for [`DnsSvcsV1::list_custom_resolvers`]
#[derive(Debug, Clone, Default)]
pub struct ListCustomResolversOptions {
    /// Required.
    pub instance_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for [`DnsSvcsV1::create_custom_resolver`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCustomResolverOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<LocationInput>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get and delete of one resolver
#[derive(Debug, Clone, Default)]
pub struct CustomResolverOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub resolver_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: CustomHeaders,
}

impl CustomResolverOptions {
    pub fn new(instance_id: &str, resolver_id: &str) -> Self {
        Self {
            instance_id: Some(instance_id.to_string()),
            resolver_id: Some(resolver_id.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`DnsSvcsV1::update_custom_resolver`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCustomResolverOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub resolver_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

// =============================================================================
// Forwarding rules
// =============================================================================

/// Options for [`DnsSvcsV1::list_forwarding_rules`]
#[derive(Debug, Clone, Default)]
pub struct ListForwardingRulesOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub resolver_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub headers: CustomHeaders,
}

/// Options for [`DnsSvcsV1::create_forwarding_rule`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateForwardingRuleOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub resolver_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    /// `zone`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub rule_type: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_domain: Option<String>,
    /// Upstream name server addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_to: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get and delete of one forwarding rule
#[derive(Debug, Clone, Default)]
pub struct ForwardingRuleOptions {
    /// Required.
    pub instance_id: Option<String>,
    /// Required.
    pub resolver_id: Option<String>,
    /// Required.
    pub rule_id: Option<String>,
    pub x_correlation_id: Option<String>,
    pub headers: CustomHeaders,
}

impl ForwardingRuleOptions {
    pub fn new(instance_id: &str, resolver_id: &str, rule_id: &str) -> Self {
        Self {
            instance_id: Some(instance_id.to_string()),
            resolver_id: Some(resolver_id.to_string()),
            rule_id: Some(rule_id.to_string()),
            ..Default::default()
        }
    }
}

/// Options for [`DnsSvcsV1::update_forwarding_rule`]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateForwardingRuleOptions {
    /// Required.
    #[serde(skip)]
    pub instance_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub resolver_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub rule_id: Option<String>,
    #[serde(skip)]
    pub x_correlation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub match_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_to: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

impl DnsSvcsV1 {
    pub async fn list_custom_resolvers(
        &self,
        options: &ListCustomResolversOptions,
    ) -> Result<DetailedResponse<ListCustomResolvers>> {
        let request = self
            .request(
                Method::GET,
                RESOLVERS_PATH,
                "list_custom_resolvers",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_custom_resolver(
        &self,
        options: &CreateCustomResolverOptions,
    ) -> Result<DetailedResponse<CustomResolver>> {
        let request = self
            .request(
                Method::POST,
                RESOLVERS_PATH,
                "create_custom_resolver",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_custom_resolver(
        &self,
        options: &CustomResolverOptions,
    ) -> Result<DetailedResponse<CustomResolver>> {
        let request = self
            .request(
                Method::GET,
                RESOLVER_PATH,
                "get_custom_resolver",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_custom_resolver(
        &self,
        options: &UpdateCustomResolverOptions,
    ) -> Result<DetailedResponse<CustomResolver>> {
        let request = self
            .request(
                Method::PATCH,
                RESOLVER_PATH,
                "update_custom_resolver",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_custom_resolver(
        &self,
        options: &CustomResolverOptions,
    ) -> Result<DetailedResponse<Value>> {
        let request = self
            .request(
                Method::DELETE,
                RESOLVER_PATH,
                "delete_custom_resolver",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn list_forwarding_rules(
        &self,
        options: &ListForwardingRulesOptions,
    ) -> Result<DetailedResponse<ListForwardingRules>> {
        let request = self
            .request(
                Method::GET,
                RULES_PATH,
                "list_forwarding_rules",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .query("offset", options.offset)
            .query("limit", options.limit)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn create_forwarding_rule(
        &self,
        options: &CreateForwardingRuleOptions,
    ) -> Result<DetailedResponse<ForwardingRule>> {
        let request = self
            .request(
                Method::POST,
                RULES_PATH,
                "create_forwarding_rule",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_forwarding_rule(
        &self,
        options: &ForwardingRuleOptions,
    ) -> Result<DetailedResponse<ForwardingRule>> {
        let request = self
            .request(
                Method::GET,
                RULE_PATH,
                "get_forwarding_rule",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .path_param("rule_id", options.rule_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_forwarding_rule(
        &self,
        options: &UpdateForwardingRuleOptions,
    ) -> Result<DetailedResponse<ForwardingRule>> {
        let request = self
            .request(
                Method::PATCH,
                RULE_PATH,
                "update_forwarding_rule",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .path_param("rule_id", options.rule_id.as_deref())
            .json(options)
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_forwarding_rule(
        &self,
        options: &ForwardingRuleOptions,
    ) -> Result<DetailedResponse<Value>> {
        let request = self
            .request(
                Method::DELETE,
                RULE_PATH,
                "delete_forwarding_rule",
                options.instance_id.as_deref(),
                options.x_correlation_id.as_deref(),
            )
            .path_param("resolver_id", options.resolver_id.as_deref())
            .path_param("rule_id", options.rule_id.as_deref())
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }
}

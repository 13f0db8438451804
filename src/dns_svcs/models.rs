//! DNS Services response models
//!
//! Unlike CIS, DNS Services returns bare objects. List endpoints carry
//! offset based pagination next to the items.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Link to a page of a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
}

/// Pagination fields shared by all list responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub total_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PageLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

impl Pagination {
    /// Offset of the following page, if there is one
    pub fn next_offset(&self) -> Option<i64> {
        let next = self.offset.saturating_add(self.count);
        (self.count > 0 && next < self.total_count).then_some(next)
    }
}

// =============================================================================
// Zones
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dnszone {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub instance_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `pending_network_add`, `active`, `deleted`, `disabled`
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDnszones {
    #[serde(default)]
    pub dnszones: Vec<Dnszone>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

// =============================================================================
// Resource records
// =============================================================================

/// Record data, shaped by the record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rdata {
    Srv {
        priority: i64,
        weight: i64,
        port: i64,
        target: String,
    },
    Mx {
        exchange: String,
        preference: i64,
    },
    /// A and AAAA
    Ip { ip: String },
    Cname { cname: String },
    Txt { text: String },
    Ptr { ptrdname: String },
    Other(Value),
}

impl Rdata {
    pub fn ip(ip: &str) -> Self {
        Rdata::Ip { ip: ip.to_string() }
    }

    pub fn cname(cname: &str) -> Self {
        Rdata::Cname {
            cname: cname.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        Rdata::Txt {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub rdata: Rdata,
    #[serde(default)]
    pub ttl: Option<i64>,
    /// SRV only
    #[serde(default)]
    pub service: Option<String>,
    /// SRV only
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResourceRecords {
    #[serde(default)]
    pub resource_records: Vec<ResourceRecord>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

// =============================================================================
// Permitted networks
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermittedNetworkVpc {
    pub vpc_crn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermittedNetwork {
    pub id: String,
    pub permitted_network: PermittedNetworkVpc,
    /// Always `vpc`
    #[serde(rename = "type")]
    pub network_type: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPermittedNetworks {
    #[serde(default)]
    pub permitted_networks: Vec<PermittedNetwork>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

// =============================================================================
// Custom resolvers and forwarding rules
// =============================================================================

/// Subnet a custom resolver listens in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub subnet_crn: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub healthy: bool,
    #[serde(default)]
    pub dns_server_ip: Option<String>,
}

/// Location as given on create
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    pub subnet_crn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomResolver {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    /// `HEALTHY`, `DEGRADED` or `CRITICAL`
    #[serde(default)]
    pub health: Option<String>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCustomResolvers {
    #[serde(default)]
    pub custom_resolvers: Vec<CustomResolver>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForwardingRule {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `zone` or `default`
    #[serde(rename = "type")]
    pub rule_type: String,
    /// Domain the rule applies to
    #[serde(rename = "match")]
    pub match_domain: String,
    #[serde(default)]
    pub forward_to: Vec<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListForwardingRules {
    #[serde(default)]
    pub forwarding_rules: Vec<ForwardingRule>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

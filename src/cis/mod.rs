//! IBM Cloud Internet Services (CIS)
//!
//! One service struct per CIS resource group. Each is constructed with the
//! CIS instance CRN (and, for zone-scoped groups, the zone identifier) and
//! exposes one async method per REST endpoint.
//!
//! # Module Structure
//!
//! - [`caching_api`] - cache purge and cache settings
//! - [`dns_records`] - DNS records of a CIS zone
//! - [`firewall_rules`] - firewall rules
//! - [`global_load_balancer_pools`] - load-balancer origin pools
//! - [`mtls`] - mutual TLS access certificates, apps and policies
//! - [`routing`] - Argo smart routing
//! - [`waf_rule_groups`] - WAF rule groups
//! - [`zone_rate_limits`] - rate limiting rules
//! - [`zones`] - zones of a CIS instance

pub mod caching_api;
pub mod dns_records;
pub mod firewall_rules;
pub mod global_load_balancer_pools;
pub mod mtls;
pub mod routing;
pub mod waf_rule_groups;
pub mod zone_rate_limits;
pub mod zones;

/// Default endpoint shared by all CIS services
pub const DEFAULT_SERVICE_URL: &str = "https://api.cis.cloud.ibm.com";

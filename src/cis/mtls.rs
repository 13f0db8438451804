//! Mutual TLS
//!
//! Access certificates (client CA roots), per-hostname certificate
//! settings, the access organization, and the access applications and
//! policies that enforce client certificates.

use crate::base::envelope::{CisResponse, IdResult};
use crate::base::request::CustomHeaders;
use crate::base::service::{BaseService, DetailedResponse, ServiceOptions};
use crate::base::{require_identifiers, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_SERVICE_NAME: &str = "mtls";
const SERVICE_VERSION: &str = "V1";

// =============================================================================
// Models
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessCertificate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub associated_hostnames: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub expires_on: Option<String>,
}

/// Client certificate forwarding for one hostname
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessCertSetting {
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub china_network: Option<bool>,
    pub client_certificate_forwarding: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessOrganization {
    pub name: String,
    pub auth_domain: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessApp {
    pub id: String,
    pub name: String,
    pub domain: String,
    #[serde(default)]
    pub aud: Option<String>,
    #[serde(default)]
    pub policies: Vec<AccessPolicy>,
    #[serde(default)]
    pub session_duration: Option<String>,
    #[serde(default)]
    pub auto_redirect_to_identity: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Who a policy matches: any valid client certificate, or a certificate
/// with a given common name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<CommonNameRule>,
}

impl PolicyRule {
    /// Match any valid client certificate
    pub fn any_certificate() -> Self {
        Self {
            certificate: Some(Map::new()),
            common_name: None,
        }
    }

    /// Match a certificate by common name
    pub fn common_name(name: &str) -> Self {
        Self {
            certificate: None,
            common_name: Some(CommonNameRule {
                common_name: name.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonNameRule {
    pub common_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub id: String,
    pub name: String,
    /// `non_identity` for certificate-based policies
    pub decision: String,
    #[serde(default)]
    pub include: Vec<PolicyRule>,
    #[serde(default)]
    pub exclude: Vec<PolicyRule>,
    #[serde(default)]
    pub require: Vec<PolicyRule>,
    #[serde(default)]
    pub precedence: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

pub type AccessCertResponse = CisResponse<AccessCertificate>;
pub type ListAccessCertsResponse = CisResponse<Vec<AccessCertificate>>;
pub type AccessCertSettingsResponse = CisResponse<Vec<AccessCertSetting>>;
pub type AccessOrgResponse = CisResponse<AccessOrganization>;
pub type AccessAppResponse = CisResponse<AccessApp>;
pub type ListAccessAppsResponse = CisResponse<Vec<AccessApp>>;
pub type AccessPolicyResponse = CisResponse<AccessPolicy>;
pub type ListAccessPoliciesResponse = CisResponse<Vec<AccessPolicy>>;
pub type DeleteAccessResponse = CisResponse<IdResult>;

// =============================================================================
// Options
// =============================================================================

/// Options for operations scoped to a zone only
#[derive(Debug, Clone, Default)]
pub struct ZoneOptions {
    /// Required.
    pub zone_id: Option<String>,
    pub headers: CustomHeaders,
}

impl ZoneOptions {
    pub fn new(zone_id: &str) -> Self {
        Self {
            zone_id: Some(zone_id.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAccessCertificateOptions {
    /// Required.
    #[serde(skip)]
    pub zone_id: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required. PEM encoded CA certificate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_hostnames: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get and delete of one access certificate
#[derive(Debug, Clone, Default)]
pub struct AccessCertificateOptions {
    /// Required.
    pub zone_id: Option<String>,
    /// Required.
    pub cert_id: Option<String>,
    pub headers: CustomHeaders,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAccessCertificateOptions {
    /// Required.
    #[serde(skip)]
    pub zone_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub cert_id: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_hostnames: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAccessCertSettingsOptions {
    /// Required.
    #[serde(skip)]
    pub zone_id: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Vec<AccessCertSetting>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAccessOrganizationOptions {
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required. e.g. `example.cloudflareaccess.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for creating or replacing an access application
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccessAppBodyOptions {
    /// Required.
    #[serde(skip)]
    pub zone_id: Option<String>,
    /// Required for update only.
    #[serde(skip)]
    pub app_id: Option<String>,
    /// Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required. Hostname the application protects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// e.g. `24h`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_duration: Option<String>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get and delete of one access application, and for listing
/// its policies
#[derive(Debug, Clone, Default)]
pub struct AccessAppOptions {
    /// Required.
    pub zone_id: Option<String>,
    /// Required.
    pub app_id: Option<String>,
    pub headers: CustomHeaders,
}

/// Options for creating or replacing an access policy
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccessPolicyBodyOptions {
    /// Required.
    #[serde(skip)]
    pub zone_id: Option<String>,
    /// Required.
    #[serde(skip)]
    pub app_id: Option<String>,
    /// Required for update only.
    #[serde(skip)]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<PolicyRule>>,
    #[serde(skip)]
    pub headers: CustomHeaders,
}

/// Options for get and delete of one access policy
#[derive(Debug, Clone, Default)]
pub struct AccessPolicyOptions {
    /// Required.
    pub zone_id: Option<String>,
    /// Required.
    pub app_id: Option<String>,
    /// Required.
    pub policy_id: Option<String>,
    pub headers: CustomHeaders,
}

// =============================================================================
// Service
// =============================================================================

const CERTIFICATES_PATH: &str = "/v1/{crn}/zones/{zone_id}/access/certificates";
const CERTIFICATE_PATH: &str = "/v1/{crn}/zones/{zone_id}/access/certificates/{cert_id}";
const CERT_SETTINGS_PATH: &str = "/v1/{crn}/zones/{zone_id}/access/certificates/settings";
const ORGANIZATIONS_PATH: &str = "/v1/{crn}/access/organizations";
const APPS_PATH: &str = "/v1/{crn}/zones/{zone_id}/access/apps";
const APP_PATH: &str = "/v1/{crn}/zones/{zone_id}/access/apps/{app_id}";
const POLICIES_PATH: &str = "/v1/{crn}/zones/{zone_id}/access/apps/{app_id}/policies";
const POLICY_PATH: &str = "/v1/{crn}/zones/{zone_id}/access/apps/{app_id}/policies/{policy_id}";

/// Mutual TLS client for one CIS instance
#[derive(Clone)]
pub struct MtlsV1 {
    service: BaseService,
    crn: String,
}

impl MtlsV1 {
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

    // =========================================================================
    // Access certificates
    // =========================================================================

    pub async fn list_access_certificates(
        &self,
        options: &ZoneOptions,
    ) -> Result<DetailedResponse<ListAccessCertsResponse>> {
        let request = self
            .service
            .request(Method::GET, CERTIFICATES_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_access_certificates")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Upload a CA root certificate used to validate client certificates
    pub async fn create_access_certificate(
        &self,
        options: &CreateAccessCertificateOptions,
    ) -> Result<DetailedResponse<AccessCertResponse>> {
        let request = self
            .service
            .request(Method::POST, CERTIFICATES_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .require("name", options.name.is_some())
            .require("certificate", options.certificate.is_some())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_access_certificate")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_access_certificate(
        &self,
        options: &AccessCertificateOptions,
    ) -> Result<DetailedResponse<AccessCertResponse>> {
        let request = self
            .service
            .request(Method::GET, CERTIFICATE_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("cert_id", options.cert_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_access_certificate")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_access_certificate(
        &self,
        options: &UpdateAccessCertificateOptions,
    ) -> Result<DetailedResponse<AccessCertResponse>> {
        let request = self
            .service
            .request(Method::PUT, CERTIFICATE_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("cert_id", options.cert_id.as_deref())
            .require("name", options.name.is_some())
            .require("associated_hostnames", options.associated_hostnames.is_some())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_access_certificate")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_access_certificate(
        &self,
        options: &AccessCertificateOptions,
    ) -> Result<DetailedResponse<DeleteAccessResponse>> {
        let request = self
            .service
            .request(Method::DELETE, CERTIFICATE_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("cert_id", options.cert_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_access_certificate")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    // =========================================================================
    // Certificate settings
    // =========================================================================

    pub async fn list_access_cert_settings(
        &self,
        options: &ZoneOptions,
    ) -> Result<DetailedResponse<AccessCertSettingsResponse>> {
        let request = self
            .service
            .request(Method::GET, CERT_SETTINGS_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_access_cert_settings")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_access_cert_settings(
        &self,
        options: &UpdateAccessCertSettingsOptions,
    ) -> Result<DetailedResponse<AccessCertSettingsResponse>> {
        let request = self
            .service
            .request(Method::PUT, CERT_SETTINGS_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .require("settings", options.settings.is_some())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_access_cert_settings")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    // =========================================================================
    // Organization
    // =========================================================================

    pub async fn create_access_organization(
        &self,
        options: &CreateAccessOrganizationOptions,
    ) -> Result<DetailedResponse<AccessOrgResponse>> {
        let request = self
            .service
            .request(Method::POST, ORGANIZATIONS_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .require("name", options.name.is_some())
            .require("auth_domain", options.auth_domain.is_some())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_access_organization")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    // =========================================================================
    // Applications
    // =========================================================================

    pub async fn list_access_apps(
        &self,
        options: &ZoneOptions,
    ) -> Result<DetailedResponse<ListAccessAppsResponse>> {
        let request = self
            .service
            .request(Method::GET, APPS_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_access_apps")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Create an application; `app_id` is ignored
    pub async fn create_access_app(
        &self,
        options: &AccessAppBodyOptions,
    ) -> Result<DetailedResponse<AccessAppResponse>> {
        let request = self
            .service
            .request(Method::POST, APPS_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .require("name", options.name.is_some())
            .require("domain", options.domain.is_some())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_access_app")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_access_app(
        &self,
        options: &AccessAppOptions,
    ) -> Result<DetailedResponse<AccessAppResponse>> {
        let request = self
            .service
            .request(Method::GET, APP_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_access_app")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_access_app(
        &self,
        options: &AccessAppBodyOptions,
    ) -> Result<DetailedResponse<AccessAppResponse>> {
        let request = self
            .service
            .request(Method::PUT, APP_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .require("name", options.name.is_some())
            .require("domain", options.domain.is_some())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_access_app")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_access_app(
        &self,
        options: &AccessAppOptions,
    ) -> Result<DetailedResponse<DeleteAccessResponse>> {
        let request = self
            .service
            .request(Method::DELETE, APP_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_access_app")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    // =========================================================================
    // Policies
    // =========================================================================

    pub async fn list_access_policies(
        &self,
        options: &AccessAppOptions,
    ) -> Result<DetailedResponse<ListAccessPoliciesResponse>> {
        let request = self
            .service
            .request(Method::GET, POLICIES_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "list_access_policies")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    /// Create a policy; `policy_id` is ignored
    pub async fn create_access_policy(
        &self,
        options: &AccessPolicyBodyOptions,
    ) -> Result<DetailedResponse<AccessPolicyResponse>> {
        let request = self
            .service
            .request(Method::POST, POLICIES_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "create_access_policy")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn get_access_policy(
        &self,
        options: &AccessPolicyOptions,
    ) -> Result<DetailedResponse<AccessPolicyResponse>> {
        let request = self
            .service
            .request(Method::GET, POLICY_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .path_param("policy_id", options.policy_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "get_access_policy")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn update_access_policy(
        &self,
        options: &AccessPolicyBodyOptions,
    ) -> Result<DetailedResponse<AccessPolicyResponse>> {
        let request = self
            .service
            .request(Method::PUT, POLICY_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .path_param("policy_id", options.policy_id.as_deref())
            .json(options)
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "update_access_policy")
            .headers(&options.headers)
            .build()?;
        self.service.send(request).await
    }

    pub async fn delete_access_policy(
        &self,
        options: &AccessPolicyOptions,
    ) -> Result<DetailedResponse<DeleteAccessResponse>> {
        let request = self
            .service
            .request(Method::DELETE, POLICY_PATH)
            .path_param("crn", Some(self.crn.as_str()))
            .path_param("zone_id", options.zone_id.as_deref())
            .path_param("app_id", options.app_id.as_deref())
            .path_param("policy_id", options.policy_id.as_deref())
            .sdk_headers(DEFAULT_SERVICE_NAME, SERVICE_VERSION, "delete_access_policy")
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
    fn test_policy_rule_shapes() {
        assert_eq!(
            serde_json::to_value(PolicyRule::any_certificate()).unwrap(),
            json!({"certificate": {}})
        );
        assert_eq!(
            serde_json::to_value(PolicyRule::common_name("client.example.com")).unwrap(),
            json!({"common_name": {"common_name": "client.example.com"}})
        );
    }
}

//! Base service
//!
//! Holds the HTTP client, service URL and authenticator shared by every
//! operation of one service, and dispatches [`RequestDescriptor`]s.

use super::auth::SharedAuthenticator;
use super::config::{self, PROP_DISABLE_SSL, PROP_URL};
use super::error::{Error, Result};
use super::request::{RequestBuilder, RequestDescriptor};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sanitize response body for logging
/// Truncates long responses and drops control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut cut = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..cut], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Pull a human-readable message out of an error body.
///
/// Handles the shapes returned across CIS and DNS Services:
/// `{"errors": [{"message": ..}]}`, `{"errors": [["code", "message"]]}`,
/// `{"message": ..}`, `{"error": ..}` and `{"errorMessage": ..}`.
pub fn extract_error_message(body: &Value) -> Option<String> {
    if let Some(first) = body.get("errors").and_then(|e| e.as_array()).and_then(|a| a.first()) {
        if let Some(msg) = first.get("message").and_then(|m| m.as_str()) {
            return Some(msg.to_string());
        }
        if let Some(parts) = first.as_array() {
            let joined: Vec<&str> = parts.iter().filter_map(|p| p.as_str()).collect();
            if !joined.is_empty() {
                return Some(joined.join(": "));
            }
        }
    }
    ["message", "error", "errorMessage"].iter().find_map(|key| match body.get(*key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(obj @ Value::Object(_)) => obj
            .get("message")
            .and_then(|m| m.as_str())
            .map(|s| s.to_string()),
        _ => None,
    })
}

/// Response of a successful call
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed body; `None` when the service returned no content
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// Take the parsed body, failing if the service sent none
    pub fn into_result(self) -> Result<T> {
        self.result.ok_or(Error::EmptyBody(self.status))
    }
}

/// Construction options shared by every service
#[derive(Clone, Default)]
pub struct ServiceOptions {
    /// Name used to look up `<NAME>_*` properties; defaults per service
    pub service_name: Option<String>,
    /// Overrides the service's default URL
    pub service_url: Option<String>,
    /// Explicit authenticator; discovered from the environment when absent
    pub authenticator: Option<SharedAuthenticator>,
    pub disable_ssl_verification: bool,
    pub timeout: Option<Duration>,
}

impl ServiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn service_name(mut self, name: &str) -> Self {
        self.service_name = Some(name.to_string());
        self
    }

    pub fn service_url(mut self, url: &str) -> Self {
        self.service_url = Some(url.to_string());
        self
    }

    pub fn authenticator(mut self, authenticator: SharedAuthenticator) -> Self {
        self.authenticator = Some(authenticator);
        self
    }

    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP plumbing shared by the operations of one service
#[derive(Clone)]
pub struct BaseService {
    client: Client,
    service_name: String,
    service_url: String,
    authenticator: SharedAuthenticator,
    default_headers: Vec<(String, String)>,
}

impl BaseService {
    /// Create a base service.
    ///
    /// Service URL precedence: explicit option, `<NAME>_URL` from the
    /// environment or credentials file, then `default_url`.
    pub fn new(options: ServiceOptions, default_url: &str, default_name: &str) -> Result<Self> {
        let service_name = options
            .service_name
            .unwrap_or_else(|| default_name.to_string());

        let needs_external = options.authenticator.is_none() || options.service_url.is_none();
        let external = if needs_external {
            config::read_external_sources(&service_name)
        } else {
            Default::default()
        };

        let authenticator = match options.authenticator {
            Some(auth) => auth,
            None => config::authenticator_from_properties(&external).map_err(|e| match e {
                Error::Config(msg) => {
                    Error::Config(format!("{} (service '{}')", msg, service_name))
                },
                other => other,
            })?,
        };

        let service_url = options
            .service_url
            .or_else(|| external.get(PROP_URL).cloned())
            .unwrap_or_else(|| default_url.to_string());
        let service_url = normalize_service_url(&service_url)?;

        let disable_ssl = options.disable_ssl_verification
            || external
                .get(PROP_DISABLE_SSL)
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);
        if disable_ssl {
            tracing::warn!("SSL verification disabled for service '{}'", service_name);
        }

        let client = Client::builder()
            .user_agent(crate::common::user_agent())
            .timeout(options.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .danger_accept_invalid_certs(disable_ssl)
            .build()?;

        Ok(Self {
            client,
            service_name,
            service_url,
            authenticator,
            default_headers: Vec::new(),
        })
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn set_service_url(&mut self, url: &str) -> Result<()> {
        self.service_url = normalize_service_url(url)?;
        Ok(())
    }

    pub fn authenticator(&self) -> &SharedAuthenticator {
        &self.authenticator
    }

    /// Headers added to every request before operation headers
    pub fn set_default_headers(&mut self, headers: Vec<(String, String)>) {
        self.default_headers = headers;
    }

    /// Start building a request for this service
    pub fn request(&self, method: Method, path_template: &str) -> RequestBuilder {
        RequestBuilder::new(method, path_template)
    }

    /// Full URL a descriptor will be sent to
    pub fn url_for(&self, descriptor: &RequestDescriptor) -> Result<Url> {
        let path = descriptor.resolve_path()?;
        let mut url = Url::parse(&format!("{}{}", self.service_url, path))?;
        if !descriptor.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &descriptor.query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    fn header_map(&self, descriptor: &RequestDescriptor) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in self.default_headers.iter().chain(descriptor.headers.iter()) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::InvalidHeader(name.as_str().to_string()))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }

    /// Send a descriptor and parse the JSON response
    pub async fn send<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<DetailedResponse<T>> {
        let url = self.url_for(&descriptor)?;
        let mut headers = self.header_map(&descriptor)?;
        self.authenticator.authenticate(&mut headers).await?;

        tracing::debug!("{} {}", descriptor.method, url);

        let mut request = self
            .client
            .request(descriptor.method.clone(), url)
            .headers(headers);
        if let Some(body) = &descriptor.body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let body = response.text().await?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
            tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            let parsed: Option<Value> = serde_json::from_str(&body).ok();
            let message = parsed
                .as_ref()
                .and_then(extract_error_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(Error::Api {
                status,
                message,
                body: parsed,
            });
        }

        // Handle empty response
        let result = if body.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(&body)?)
        };

        Ok(DetailedResponse {
            status,
            headers: response_headers,
            result,
        })
    }
}

fn normalize_service_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(Error::Config("service URL must not be empty".into()));
    }
    if trimmed.contains('{') || trimmed.contains('}') || trimmed.contains('"') {
        return Err(Error::Config(format!(
            "service URL must not contain braces or quotes: {}",
            trimmed
        )));
    }
    Url::parse(trimmed)?;
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::auth::NoAuthAuthenticator;
    use serde_json::json;
    use std::sync::Arc;

    fn service(url: &str) -> BaseService {
        BaseService::new(
            ServiceOptions::new()
                .service_url(url)
                .authenticator(Arc::new(NoAuthAuthenticator)),
            "https://api.cis.cloud.ibm.com",
            "test_service",
        )
        .unwrap()
    }

    #[test]
    fn test_trailing_slash_stripped() {
        assert_eq!(service("https://api.example.com/v1/").service_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_rejects_bad_url() {
        let result = BaseService::new(
            ServiceOptions::new()
                .service_url("{https://api.example.com}")
                .authenticator(Arc::new(NoAuthAuthenticator)),
            "https://api.cis.cloud.ibm.com",
            "test_service",
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_url_for_appends_query() {
        let svc = service("https://api.dns-svcs.cloud.ibm.com/v1");
        let req = svc
            .request(Method::GET, "/instances/{instance_id}/dnszones")
            .path_param("instance_id", Some("inst 1"))
            .query("offset", Some(0_i64))
            .query("limit", Some(50_i64))
            .build()
            .unwrap();
        let url = svc.url_for(&req).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dns-svcs.cloud.ibm.com/v1/instances/inst%201/dnszones?offset=0&limit=50"
        );
    }

    #[test]
    fn test_extract_error_message_shapes() {
        assert_eq!(
            extract_error_message(&json!({"errors": [{"code": "not_found", "message": "zone not found"}]})),
            Some("zone not found".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({"errors": [["1003", "Invalid zone"]]})),
            Some("1003: Invalid zone".to_string())
        );
        assert_eq!(
            extract_error_message(&json!({"error": "bad token"})),
            Some("bad token".to_string())
        );
        assert_eq!(extract_error_message(&json!({"result": null})), None);
    }

    #[test]
    fn test_into_result_without_body_is_empty_body() {
        let response: DetailedResponse<Value> = DetailedResponse {
            status: StatusCode::NO_CONTENT,
            headers: HeaderMap::new(),
            result: None,
        };
        let err = response.into_result().unwrap_err();
        assert!(matches!(err, Error::EmptyBody(s) if s == StatusCode::NO_CONTENT));
        assert!(err.status().is_none());
    }

    #[test]
    fn test_sanitize_for_log_truncates() {
        let long = "x".repeat(500);
        let sanitized = sanitize_for_log(&long);
        assert!(sanitized.contains("[truncated, 500 bytes total]"));
        assert!(sanitize_for_log("a\nb").eq("ab"));
    }
}

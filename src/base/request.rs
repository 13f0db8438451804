//! Request construction
//!
//! Every operation turns its options into a [`RequestDescriptor`] through a
//! [`RequestBuilder`]. Building is pure: nothing is sent until the
//! descriptor is handed to [`BaseService::send`](super::service::BaseService::send).
//!
//! ```ignore
//! let request = RequestBuilder::new(Method::PUT, "/v1/{crn}/zones/{zone_id}/purge_cache/purge_by_urls")
//!     .path_param("crn", Some(crn))
//!     .path_param("zone_id", Some(zone_id))
//!     .json(&options)
//!     .build()?;
//! ```

use super::error::{Error, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-supplied headers attached to an operation's options
pub type CustomHeaders = BTreeMap<String, String>;

/// Render a parameter value the way it appears on the wire
pub trait ToParam {
    fn to_param(&self) -> String;
}

impl ToParam for str {
    fn to_param(&self) -> String {
        self.to_string()
    }
}

impl ToParam for String {
    fn to_param(&self) -> String {
        self.clone()
    }
}

impl ToParam for bool {
    fn to_param(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }
}

macro_rules! numeric_param {
    ($($t:ty),*) => {
        $(impl ToParam for $t {
            fn to_param(&self) -> String {
                self.to_string()
            }
        })*
    };
}

numeric_param!(i32, i64, u32, u64, f64);

// Lists go out comma-joined (e.g. `?id=a,b,c`)
impl ToParam for [String] {
    fn to_param(&self) -> String {
        self.join(",")
    }
}

impl ToParam for Vec<String> {
    fn to_param(&self) -> String {
        self.join(",")
    }
}

impl<T: ToParam + ?Sized> ToParam for &T {
    fn to_param(&self) -> String {
        (**self).to_param()
    }
}

/// A fully validated request, ready for dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path_template: String,
    pub path_params: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Substitute every `{name}` placeholder with its percent-encoded value
    pub fn resolve_path(&self) -> Result<String> {
        let mut resolved = String::with_capacity(self.path_template.len() + 64);
        let mut used = vec![false; self.path_params.len()];
        let mut rest = self.path_template.as_str();

        while let Some(start) = rest.find('{') {
            resolved.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                return Err(Error::UnresolvedPathParameter(rest[start..].to_string()));
            };
            let name = &after[..end];
            let Some(idx) = self.path_params.iter().position(|(k, _)| k == name) else {
                return Err(Error::UnresolvedPathParameter(name.to_string()));
            };
            used[idx] = true;
            resolved.push_str(&urlencoding::encode(&self.path_params[idx].1));
            rest = &after[end + 1..];
        }
        if rest.contains('}') {
            return Err(Error::UnresolvedPathParameter(rest.to_string()));
        }
        resolved.push_str(rest);

        if let Some(idx) = used.iter().position(|u| !u) {
            return Err(Error::UnresolvedPathParameter(
                self.path_params[idx].0.clone(),
            ));
        }

        Ok(resolved)
    }

    /// Look up a header value (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Look up a query parameter value
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Fluent builder for [`RequestDescriptor`]
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    path_template: String,
    path_params: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
    custom_headers: Vec<(String, String)>,
    missing: Vec<String>,
    invalid: Vec<(String, String)>,
    error: Option<Error>,
}

impl RequestBuilder {
    pub fn new(method: Method, path_template: &str) -> Self {
        Self {
            method,
            path_template: path_template.to_string(),
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            custom_headers: Vec::new(),
            missing: Vec::new(),
            invalid: Vec::new(),
            error: None,
        }
    }

    /// Path substitution. `None` or an empty value marks the parameter missing.
    ///
    /// `.` and `..` are rejected: URL normalization would collapse them and
    /// send the request to a parent resource.
    pub fn path_param<V: ToParam>(mut self, name: &str, value: Option<V>) -> Self {
        match value.map(|v| v.to_param()) {
            Some(v) if v == "." || v == ".." => self.invalid.push((name.to_string(), v)),
            Some(v) if !v.is_empty() => self.path_params.push((name.to_string(), v)),
            _ => self.missing.push(name.to_string()),
        }
        self
    }

    /// Mark a required body or header parameter as present or missing
    pub fn require(mut self, name: &str, present: bool) -> Self {
        if !present {
            self.missing.push(name.to_string());
        }
        self
    }

    /// Query parameter; `None` is dropped
    pub fn query<V: ToParam>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.query.push((name.to_string(), v.to_param()));
        }
        self
    }

    /// Operation header parameter; `None` is dropped
    pub fn header<V: ToParam>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(v) = value {
            set_header(&mut self.headers, name, v.to_param());
        }
        self
    }

    /// JSON body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => {
                self.body = Some(value);
                set_header(
                    &mut self.headers,
                    "Content-Type",
                    "application/json".to_string(),
                );
            },
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(Error::Json(e));
                }
            },
        }
        self
    }

    /// Merge the shared SDK headers for this operation
    pub fn sdk_headers(mut self, service_name: &str, service_version: &str, operation_id: &str) -> Self {
        for (name, value) in crate::common::sdk_headers(service_name, service_version, operation_id) {
            set_header(&mut self.headers, &name, value);
        }
        self
    }

    /// Caller-supplied headers. Applied last, so they win over defaults.
    pub fn headers(mut self, custom: &CustomHeaders) -> Self {
        self.custom_headers
            .extend(custom.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Validate and produce the descriptor
    pub fn build(self) -> Result<RequestDescriptor> {
        if !self.missing.is_empty() {
            return Err(Error::MissingParameters(self.missing));
        }
        if let Some((name, value)) = self.invalid.into_iter().next() {
            return Err(Error::InvalidPathParameter { name, value });
        }
        if let Some(e) = self.error {
            return Err(e);
        }

        let mut headers = self.headers;
        for (name, value) in self.custom_headers {
            set_header(&mut headers, &name, value);
        }

        let descriptor = RequestDescriptor {
            method: self.method,
            path_template: self.path_template,
            path_params: self.path_params,
            query: self.query,
            body: self.body,
            headers,
        };
        // Reject templates that cannot be fully substituted up front
        descriptor.resolve_path()?;
        Ok(descriptor)
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Files {
        #[serde(skip_serializing_if = "Option::is_none")]
        files: Option<Vec<String>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    }

    #[test]
    fn test_substitutes_and_encodes_path() {
        let req = RequestBuilder::new(Method::GET, "/v1/{crn}/zones/{zone_id}/settings")
            .path_param("crn", Some("crn:v1:bluemix:public:internet-svcs:global:a/123::"))
            .path_param("zone_id", Some("abc"))
            .build()
            .unwrap();

        let path = req.resolve_path().unwrap();
        assert_eq!(
            path,
            "/v1/crn%3Av1%3Abluemix%3Apublic%3Ainternet-svcs%3Aglobal%3Aa%2F123%3A%3A/zones/abc/settings"
        );
        assert!(!path.contains('{'));
    }

    #[test]
    fn test_reports_all_missing_in_order() {
        let err = RequestBuilder::new(Method::POST, "/instances/{instance_id}/dnszones")
            .path_param::<&str>("instance_id", None)
            .require("name", false)
            .require("description", true)
            .build()
            .unwrap_err();

        match err {
            Error::MissingParameters(names) => assert_eq!(names, vec!["instance_id", "name"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_path_value_is_missing() {
        let err = RequestBuilder::new(Method::GET, "/zones/{zone_id}")
            .path_param("zone_id", Some(""))
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_dot_segments_rejected() {
        for dots in [".", ".."] {
            let err = RequestBuilder::new(Method::DELETE, "/zones/{zone_id}/dns_records/{record_id}")
                .path_param("zone_id", Some("z"))
                .path_param("record_id", Some(dots))
                .build()
                .unwrap_err();
            assert!(err.is_validation());
            assert!(matches!(
                err,
                Error::InvalidPathParameter { ref name, ref value } if name == "record_id" && value == dots
            ));
        }

        // dots inside a longer value stay in one encoded segment
        let req = RequestBuilder::new(Method::GET, "/zones/{zone_id}")
            .path_param("zone_id", Some("a..b"))
            .build()
            .unwrap();
        assert_eq!(req.resolve_path().unwrap(), "/zones/a..b");
    }

    #[test]
    fn test_missing_reported_before_invalid() {
        let err = RequestBuilder::new(Method::GET, "/zones/{zone_id}/dns_records/{record_id}")
            .path_param("zone_id", Some(".."))
            .path_param::<&str>("record_id", None)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingParameters(ref n) if n == &["record_id"]));
    }

    #[test]
    fn test_unknown_placeholder_rejected() {
        let err = RequestBuilder::new(Method::GET, "/zones/{zone_id}/records/{record_id}")
            .path_param("zone_id", Some("z"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedPathParameter(ref n) if n == "record_id"));
    }

    #[test]
    fn test_unused_path_value_rejected() {
        let err = RequestBuilder::new(Method::GET, "/zones")
            .path_param("zone_id", Some("z"))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::UnresolvedPathParameter(ref n) if n == "zone_id"));
    }

    #[test]
    fn test_query_drops_none_and_renders_values() {
        let ids = vec!["a".to_string(), "b".to_string()];
        let req = RequestBuilder::new(Method::DELETE, "/rules")
            .query("id", Some(&ids))
            .query::<i64>("page", None)
            .query("per_page", Some(20_i64))
            .query("paused", Some(false))
            .build()
            .unwrap();

        assert_eq!(
            req.query,
            vec![
                ("id".to_string(), "a,b".to_string()),
                ("per_page".to_string(), "20".to_string()),
                ("paused".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_body_skips_absent_fields() {
        let req = RequestBuilder::new(Method::PUT, "/purge")
            .json(&Files {
                files: Some(vec!["https://example.com/a.png".into()]),
                note: None,
            })
            .build()
            .unwrap();

        assert_eq!(req.body, Some(json!({"files": ["https://example.com/a.png"]})));
        assert_eq!(req.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_custom_headers_override_defaults() {
        let mut custom = CustomHeaders::new();
        custom.insert("accept".to_string(), "text/plain".to_string());
        custom.insert("X-Trace".to_string(), "1".to_string());

        // custom headers registered before sdk headers still win
        let req = RequestBuilder::new(Method::GET, "/zones")
            .headers(&custom)
            .sdk_headers("zones", "V1", "list_zones")
            .build()
            .unwrap();

        assert_eq!(req.header("Accept"), Some("text/plain"));
        assert_eq!(req.header("x-trace"), Some("1"));
        assert!(req.header("User-Agent").is_some());
        assert_eq!(
            req.headers.iter().filter(|(k, _)| k.eq_ignore_ascii_case("accept")).count(),
            1
        );
    }

    #[test]
    fn test_no_body_means_no_content_type() {
        let req = RequestBuilder::new(Method::GET, "/zones").build().unwrap();
        assert!(req.body.is_none());
        assert!(req.header("Content-Type").is_none());
    }
}

//! External configuration
//!
//! Service properties come from a credentials file and from environment
//! variables named `<SERVICE_NAME>_<PROPERTY>`, e.g. `DNS_SVCS_APIKEY` or
//! `CACHING_API_URL`. Environment variables override the file.

use super::auth::{
    BasicAuthenticator, BearerTokenAuthenticator, IamAuthenticator, NoAuthAuthenticator,
    SharedAuthenticator, AUTHTYPE_BASIC, AUTHTYPE_BEARERTOKEN, AUTHTYPE_IAM, AUTHTYPE_NOAUTH,
};
use super::error::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Environment variable naming an explicit credentials file
pub const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// Credentials file looked up in the working and home directories
pub const DEFAULT_CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";

/// Property names recognised after the service prefix
pub const PROP_AUTH_TYPE: &str = "AUTH_TYPE";
pub const PROP_APIKEY: &str = "APIKEY";
pub const PROP_BEARER_TOKEN: &str = "BEARER_TOKEN";
pub const PROP_USERNAME: &str = "USERNAME";
pub const PROP_PASSWORD: &str = "PASSWORD";
pub const PROP_AUTH_URL: &str = "AUTH_URL";
pub const PROP_CLIENT_ID: &str = "CLIENT_ID";
pub const PROP_CLIENT_SECRET: &str = "CLIENT_SECRET";
pub const PROP_SCOPE: &str = "SCOPE";
pub const PROP_AUTH_DISABLE_SSL: &str = "AUTH_DISABLE_SSL";
pub const PROP_URL: &str = "URL";
pub const PROP_DISABLE_SSL: &str = "DISABLE_SSL";

/// Normalize a service name into an environment variable prefix
pub fn env_prefix(service_name: &str) -> String {
    format!("{}_", service_name.to_uppercase().replace('-', "_"))
}

/// Locate the credentials file, if any
pub fn credentials_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIALS_FILE_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    let cwd_file = std::env::current_dir()
        .ok()
        .map(|d| d.join(DEFAULT_CREDENTIALS_FILE_NAME));
    if let Some(path) = cwd_file.filter(|p| p.exists()) {
        return Some(path);
    }

    dirs::home_dir()
        .map(|home| home.join(DEFAULT_CREDENTIALS_FILE_NAME))
        .filter(|p| p.exists())
}

/// Parse `KEY=value` lines, skipping blanks and comments
pub fn parse_credentials(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            values.insert(key.trim().to_string(), value.to_string());
        }
    }
    values
}

/// Pick out one service's properties, prefix removed
fn filter_service_properties(
    values: impl IntoIterator<Item = (String, String)>,
    prefix: &str,
) -> HashMap<String, String> {
    values
        .into_iter()
        .filter_map(|(k, v)| k.strip_prefix(prefix).map(|p| (p.to_string(), v)))
        .collect()
}

/// Read a service's properties from the credentials file and environment
pub fn read_external_sources(service_name: &str) -> HashMap<String, String> {
    let prefix = env_prefix(service_name);
    let mut properties = HashMap::new();

    if let Some(path) = credentials_file_path() {
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!("Reading credentials from {:?}", path);
                properties.extend(filter_service_properties(parse_credentials(&content), &prefix));
            },
            Err(e) => tracing::warn!("Could not read credentials file {:?}: {}", path, e),
        }
    }

    properties.extend(filter_service_properties(std::env::vars(), &prefix));
    properties
}

fn is_true(value: Option<&String>) -> bool {
    value.map(|v| v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn required_property<'a>(
    properties: &'a HashMap<String, String>,
    name: &str,
    auth_type: &str,
) -> Result<&'a str> {
    properties
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| Error::Config(format!("missing {} for {} authentication", name, auth_type)))
}

/// Build an authenticator from a service's external properties
pub fn authenticator_from_properties(
    properties: &HashMap<String, String>,
) -> Result<SharedAuthenticator> {
    let auth_type = properties
        .get(PROP_AUTH_TYPE)
        .cloned()
        .unwrap_or_else(|| {
            if properties.contains_key(PROP_APIKEY) {
                AUTHTYPE_IAM.to_string()
            } else {
                String::new()
            }
        });

    let required = |name: &str| required_property(properties, name, &auth_type);

    if auth_type.eq_ignore_ascii_case(AUTHTYPE_IAM) {
        let mut builder = IamAuthenticator::builder(required(PROP_APIKEY)?)
            .disable_ssl_verification(is_true(properties.get(PROP_AUTH_DISABLE_SSL)));
        if let Some(url) = properties.get(PROP_AUTH_URL) {
            builder = builder.url(url);
        }
        if let Some(id) = properties.get(PROP_CLIENT_ID) {
            builder = builder.client_id(id);
        }
        if let Some(secret) = properties.get(PROP_CLIENT_SECRET) {
            builder = builder.client_secret(secret);
        }
        if let Some(scope) = properties.get(PROP_SCOPE) {
            builder = builder.scope(scope);
        }
        Ok(Arc::new(builder.build()?))
    } else if auth_type.eq_ignore_ascii_case(AUTHTYPE_BEARERTOKEN) {
        Ok(Arc::new(BearerTokenAuthenticator::new(required(PROP_BEARER_TOKEN)?)?))
    } else if auth_type.eq_ignore_ascii_case(AUTHTYPE_BASIC) {
        Ok(Arc::new(BasicAuthenticator::new(
            required(PROP_USERNAME)?,
            required(PROP_PASSWORD)?,
        )?))
    } else if auth_type.eq_ignore_ascii_case(AUTHTYPE_NOAUTH) {
        Ok(Arc::new(NoAuthAuthenticator))
    } else if auth_type.is_empty() {
        Err(Error::Config(
            "no authentication properties found in the environment".into(),
        ))
    } else {
        Err(Error::Config(format!("unrecognized authentication type: {}", auth_type)))
    }
}

/// Discover an authenticator for `service_name` from the environment
pub fn get_authenticator_from_environment(service_name: &str) -> Result<SharedAuthenticator> {
    let properties = read_external_sources(service_name);
    authenticator_from_properties(&properties).map_err(|e| match e {
        Error::Config(msg) => Error::Config(format!("{} (service '{}')", msg, service_name)),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_prefix() {
        assert_eq!(env_prefix("dns_svcs"), "DNS_SVCS_");
        assert_eq!(env_prefix("caching-api"), "CACHING_API_");
    }

    #[test]
    fn test_parse_credentials_skips_comments() {
        let content = r#"
# comment
ZONES_APIKEY=abc123
ZONES_URL = "https://api.cis.test"
not a pair
"#;
        let values = parse_credentials(content);
        assert_eq!(values.get("ZONES_APIKEY").map(String::as_str), Some("abc123"));
        assert_eq!(values.get("ZONES_URL").map(String::as_str), Some("https://api.cis.test"));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_filter_service_properties() {
        let values = vec![
            ("ZONES_APIKEY".to_string(), "k".to_string()),
            ("ZONES_URL".to_string(), "u".to_string()),
            ("ROUTING_APIKEY".to_string(), "other".to_string()),
        ];
        let props = filter_service_properties(values, "ZONES_");
        assert_eq!(props.len(), 2);
        assert_eq!(props["APIKEY"], "k");
    }

    #[test]
    fn test_apikey_implies_iam() {
        let mut props = HashMap::new();
        props.insert(PROP_APIKEY.to_string(), "key".to_string());
        let auth = authenticator_from_properties(&props).unwrap();
        assert_eq!(auth.authentication_type(), AUTHTYPE_IAM);
    }

    #[test]
    fn test_auth_type_selection() {
        let mut props = HashMap::new();
        props.insert(PROP_AUTH_TYPE.to_string(), "bearertoken".to_string());
        props.insert(PROP_BEARER_TOKEN.to_string(), "tok".to_string());
        assert_eq!(
            authenticator_from_properties(&props).unwrap().authentication_type(),
            AUTHTYPE_BEARERTOKEN
        );

        let mut props = HashMap::new();
        props.insert(PROP_AUTH_TYPE.to_string(), "noauth".to_string());
        assert_eq!(
            authenticator_from_properties(&props).unwrap().authentication_type(),
            AUTHTYPE_NOAUTH
        );
    }

    #[test]
    fn test_missing_credentials_is_config_error() {
        let mut props = HashMap::new();
        props.insert(PROP_AUTH_TYPE.to_string(), "basic".to_string());
        props.insert(PROP_USERNAME.to_string(), "user".to_string());
        assert!(matches!(authenticator_from_properties(&props), Err(Error::Config(_))));

        assert!(matches!(
            authenticator_from_properties(&HashMap::new()),
            Err(Error::Config(_))
        ));
    }
}

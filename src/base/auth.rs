//! Authentication
//!
//! Authenticators add credentials to an outgoing request. The IAM
//! authenticator exchanges an API key for an access token and caches it
//! until shortly before it expires.

use super::error::{Error, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub const AUTHTYPE_NOAUTH: &str = "noAuth";
pub const AUTHTYPE_BEARERTOKEN: &str = "bearerToken";
pub const AUTHTYPE_BASIC: &str = "basic";
pub const AUTHTYPE_IAM: &str = "iam";

/// Default IAM token service
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const IAM_TOKEN_PATH: &str = "/identity/token";
const IAM_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

/// Refresh tokens this much before they actually expire
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Adds credentials to outgoing requests
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Add authentication headers to `headers`
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()>;

    /// One of the `AUTHTYPE_*` constants
    fn authentication_type(&self) -> &'static str;
}

/// Shared handle to an authenticator
pub type SharedAuthenticator = Arc<dyn Authenticator>;

fn authorization_value(value: &str) -> Result<HeaderValue> {
    let mut header = HeaderValue::from_str(value)
        .map_err(|_| Error::Authentication("credential is not a valid header value".into()))?;
    header.set_sensitive(true);
    Ok(header)
}

/// Credentials must not be wrapped in braces or quotes (a common
/// copy/paste error from JSON or shell files)
fn has_bad_first_or_last_char(value: &str) -> bool {
    let first = value.chars().next();
    let last = value.chars().last();
    matches!(first, Some('{') | Some('"')) || matches!(last, Some('}') | Some('"'))
}

fn check_credential(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::Config(format!("the {} property is required", name)));
    }
    if has_bad_first_or_last_char(value) {
        return Err(Error::Config(format!(
            "the {} property must not start or end with a brace or quote",
            name
        )));
    }
    Ok(())
}

// =============================================================================
// No authentication
// =============================================================================

/// Sends requests without credentials
#[derive(Debug, Clone, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    async fn authenticate(&self, _headers: &mut HeaderMap) -> Result<()> {
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_NOAUTH
    }
}

// =============================================================================
// Bearer token
// =============================================================================

/// Sends a caller-managed bearer token
pub struct BearerTokenAuthenticator {
    token: RwLock<String>,
}

impl BearerTokenAuthenticator {
    pub fn new(token: &str) -> Result<Self> {
        check_credential("bearer_token", token)?;
        Ok(Self { token: RwLock::new(token.to_string()) })
    }

    /// Replace the token used for subsequent requests
    pub async fn set_bearer_token(&self, token: &str) -> Result<()> {
        check_credential("bearer_token", token)?;
        *self.token.write().await = token.to_string();
        Ok(())
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let token = self.token.read().await;
        headers.insert(AUTHORIZATION, authorization_value(&format!("Bearer {}", token))?);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BEARERTOKEN
    }
}

// =============================================================================
// Basic
// =============================================================================

/// HTTP basic authentication
#[derive(Clone)]
pub struct BasicAuthenticator {
    encoded: String,
}

impl BasicAuthenticator {
    pub fn new(username: &str, password: &str) -> Result<Self> {
        check_credential("username", username)?;
        check_credential("password", password)?;
        let encoded = STANDARD.encode(format!("{}:{}", username, password).as_bytes());
        Ok(Self { encoded })
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        headers.insert(AUTHORIZATION, authorization_value(&format!("Basic {}", self.encoded))?);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_BASIC
    }
}

// =============================================================================
// IAM
// =============================================================================

#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// How long a token is reused before refreshing.
/// Short lifetimes keep 80% instead of losing the whole buffer.
fn usable_lifetime(ttl: Duration) -> Duration {
    ttl - TOKEN_EXPIRY_BUFFER.min(ttl / 5)
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Exchanges an IBM Cloud API key for IAM access tokens
#[derive(Clone)]
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    client_id_secret: Option<(String, String)>,
    scope: Option<String>,
    http: reqwest::Client,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

impl IamAuthenticator {
    /// Authenticator against the default IAM endpoint
    pub fn new(apikey: &str) -> Result<Self> {
        IamAuthenticatorBuilder::new(apikey).build()
    }

    pub fn builder(apikey: &str) -> IamAuthenticatorBuilder {
        IamAuthenticatorBuilder::new(apikey)
    }

    /// IAM endpoint this authenticator requests tokens from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get an access token, fetching a new one if the cached token expired
    pub async fn get_token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached IAM token expired, fetching new token");
            }
        }

        let fetched = self.request_token().await?;
        let ttl = Duration::from_secs(fetched.expires_in.unwrap_or(3600));
        let usable = usable_lifetime(ttl);
        let expires_at = Instant::now() + usable;

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: fetched.access_token.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "New IAM token cached, expires in ~{} seconds",
            usable.as_secs()
        );

        Ok(fetched.access_token)
    }

    /// Drop the cached token and fetch a fresh one
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }
        self.get_token().await
    }

    async fn request_token(&self) -> Result<IamTokenResponse> {
        let url = format!("{}{}", self.url, IAM_TOKEN_PATH);
        tracing::debug!("POST {}", url);

        let mut form = vec![
            ("grant_type", IAM_GRANT_TYPE),
            ("apikey", self.apikey.as_str()),
            ("response_type", "cloud_iam"),
        ];
        if let Some(scope) = self.scope.as_deref() {
            form.push(("scope", scope));
        }

        let mut request = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&form);
        if let Some((id, secret)) = &self.client_id_secret {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!("IAM token request failed: {}", status);
            return Err(Error::Authentication(format!(
                "IAM token request failed: {}",
                status
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::Authentication(format!("unexpected IAM token response: {}", e))
        })
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    async fn authenticate(&self, headers: &mut HeaderMap) -> Result<()> {
        let token = self.get_token().await?;
        headers.insert(AUTHORIZATION, authorization_value(&format!("Bearer {}", token))?);
        Ok(())
    }

    fn authentication_type(&self) -> &'static str {
        AUTHTYPE_IAM
    }
}

/// Optional settings for [`IamAuthenticator`]
pub struct IamAuthenticatorBuilder {
    apikey: String,
    url: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    disable_ssl_verification: bool,
}

impl IamAuthenticatorBuilder {
    pub fn new(apikey: &str) -> Self {
        Self {
            apikey: apikey.to_string(),
            url: None,
            client_id: None,
            client_secret: None,
            scope: None,
            disable_ssl_verification: false,
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    pub fn client_id(mut self, client_id: &str) -> Self {
        self.client_id = Some(client_id.to_string());
        self
    }

    pub fn client_secret(mut self, client_secret: &str) -> Self {
        self.client_secret = Some(client_secret.to_string());
        self
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn disable_ssl_verification(mut self, disable: bool) -> Self {
        self.disable_ssl_verification = disable;
        self
    }

    pub fn build(self) -> Result<IamAuthenticator> {
        check_credential("apikey", &self.apikey)?;

        let client_id_secret = match (self.client_id, self.client_secret) {
            (Some(id), Some(secret)) => Some((id, secret)),
            (None, None) => None,
            _ => {
                return Err(Error::Config(
                    "client_id and client_secret must be supplied together".into(),
                ))
            },
        };

        let url = self
            .url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_IAM_URL.to_string());
        let url = url.trim_end_matches('/').trim_end_matches(IAM_TOKEN_PATH).to_string();

        let http = reqwest::Client::builder()
            .user_agent(crate::common::user_agent())
            .danger_accept_invalid_certs(self.disable_ssl_verification)
            .build()?;

        Ok(IamAuthenticator {
            apikey: self.apikey,
            url,
            client_id_secret,
            scope: self.scope,
            http,
            token_cache: Arc::new(RwLock::new(None)),
        })
    }
}

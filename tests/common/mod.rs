//! Shared helpers for integration tests

#![allow(dead_code)]

use ibm_cloud_networking::{BearerTokenAuthenticator, ServiceOptions};
use std::sync::{Arc, Once};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

pub const CRN: &str = "crn:v1:bluemix:public:internet-svcs:global:a/123456::";

/// `CRN` as it appears in a request path
pub const ENCODED_CRN: &str =
    "crn%3Av1%3Abluemix%3Apublic%3Ainternet-svcs%3Aglobal%3Aa%2F123456%3A%3A";

pub const ZONE_ID: &str = "zone123";

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Service options pointed at the mock server with a fixed bearer token
pub fn options(server: &MockServer) -> ServiceOptions {
    init_tracing();
    let auth = BearerTokenAuthenticator::new(TOKEN).expect("valid token");
    ServiceOptions::new()
        .service_url(&server.uri())
        .authenticator(Arc::new(auth))
}

/// CIS envelope around `result`
pub fn envelope(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

/// One request an operation must send, and what it is answered with
pub struct Expected {
    pub method: &'static str,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub status: u16,
    pub response: Option<serde_json::Value>,
}

impl Expected {
    pub fn new(method: &'static str, path: String, response: serde_json::Value) -> Self {
        Self {
            method,
            path,
            body: None,
            status: 200,
            response: Some(response),
        }
    }

    /// Answered with `204 No Content`
    pub fn no_content(method: &'static str, path: String) -> Self {
        Self {
            method,
            path,
            body: None,
            status: 204,
            response: None,
        }
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Mount each expected request exactly once, then refuse anything else
pub async fn mount_expected(server: &MockServer, expected: Vec<Expected>) {
    use wiremock::matchers::{bearer_token, body_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    for e in expected {
        let mut mock = Mock::given(method(e.method))
            .and(path(e.path))
            .and(bearer_token(TOKEN));
        if let Some(body) = e.body {
            mock = mock.and(body_json(body));
        }
        let mut template = ResponseTemplate::new(e.status);
        if let Some(response) = e.response {
            template = template.set_body_json(response);
        }
        mock.respond_with(template)
            .expect(1)
            .mount(server)
            .await;
    }
    refuse_all(server).await;
}

/// Fail verification if any request reaches the server
pub async fn refuse_all(server: &MockServer) {
    use wiremock::matchers::any;
    use wiremock::{Mock, ResponseTemplate};

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

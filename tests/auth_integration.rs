//! Integration tests for authentication and external configuration
//!
//! Tests touching process environment run serially.

mod common;

use common::{envelope, CRN, ENCODED_CRN};
use ibm_cloud_networking::base::config::{get_authenticator_from_environment, CREDENTIALS_FILE_ENV};
use ibm_cloud_networking::cis::zones::{ListZonesOptions, ZonesV1};
use ibm_cloud_networking::{Error, IamAuthenticator, ServiceOptions};
use serde_json::json;
use serial_test::serial;
use std::io::Write;
use std::sync::Arc;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_zone_list(server: &MockServer, authorization: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/v1/{}/zones", ENCODED_CRN)))
        .and(header("Authorization", authorization))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(times)
        .mount(server)
        .await;
}

mod iam_tests {
    use super::*;

    /// One token exchange serves several calls until it expires
    #[tokio::test]
    async fn test_iam_token_is_cached() {
        common::init_tracing();
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .and(body_string_contains("grant_type=urn%3Aibm%3Aparams%3Aoauth%3Agrant-type%3Aapikey"))
            .and(body_string_contains("apikey=my-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "iam-access-token",
                "refresh_token": "not-used",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;
        mount_zone_list(&server, "Bearer iam-access-token", 2).await;

        let iam = IamAuthenticator::builder("my-api-key")
            .url(&server.uri())
            .build()
            .unwrap();
        let zones = ZonesV1::new(
            CRN,
            ServiceOptions::new()
                .service_url(&server.uri())
                .authenticator(Arc::new(iam)),
        )
        .unwrap();

        zones.list_zones(&ListZonesOptions::default()).await.unwrap();
        zones.list_zones(&ListZonesOptions::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_iam_failure_is_authentication_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errorCode": "BXNIM0415E",
                "errorMessage": "Provided API key could not be found"
            })))
            .mount(&server)
            .await;

        let iam = IamAuthenticator::builder("bad-key")
            .url(&server.uri())
            .build()
            .unwrap();
        let err = iam.get_token().await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)));
    }

    #[test]
    fn test_iam_rejects_quoted_apikey() {
        assert!(IamAuthenticator::new("\"my-api-key\"").is_err());
        assert!(IamAuthenticator::new("").is_err());
    }
}

mod environment_tests {
    use super::*;

    fn credentials_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn clear_env(prefix: &str) {
        for (key, _) in std::env::vars() {
            if key.starts_with(prefix) {
                std::env::remove_var(key);
            }
        }
        std::env::remove_var(CREDENTIALS_FILE_ENV);
    }

    /// Authenticator and URL both come from the credentials file
    #[tokio::test]
    #[serial]
    async fn test_credentials_file_configures_service() {
        let server = MockServer::start().await;
        mount_zone_list(&server, "Bearer file-token", 1).await;

        clear_env("ZONES_");
        let file = credentials_file(&format!(
            "# CIS zones\nZONES_AUTH_TYPE=bearerToken\nZONES_BEARER_TOKEN=file-token\nZONES_URL={}\n",
            server.uri()
        ));
        std::env::set_var(CREDENTIALS_FILE_ENV, file.path());

        let zones = ZonesV1::new(CRN, ServiceOptions::new()).unwrap();
        assert_eq!(zones.service().service_url(), server.uri());
        zones.list_zones(&ListZonesOptions::default()).await.unwrap();

        clear_env("ZONES_");
    }

    /// Environment variables override the credentials file
    #[tokio::test]
    #[serial]
    async fn test_environment_overrides_file() {
        let server = MockServer::start().await;
        // "user:pass"
        mount_zone_list(&server, "Basic dXNlcjpwYXNz", 1).await;

        clear_env("ZONES_");
        let file = credentials_file(
            "ZONES_AUTH_TYPE=basic\nZONES_USERNAME=file-user\nZONES_PASSWORD=pass\n",
        );
        std::env::set_var(CREDENTIALS_FILE_ENV, file.path());
        std::env::set_var("ZONES_USERNAME", "user");
        std::env::set_var("ZONES_URL", server.uri());

        let zones = ZonesV1::new(CRN, ServiceOptions::new()).unwrap();
        zones.list_zones(&ListZonesOptions::default()).await.unwrap();

        clear_env("ZONES_");
    }

    #[test]
    #[serial]
    fn test_apikey_alone_selects_iam() {
        clear_env("DNS_SVCS_");
        std::env::set_var("DNS_SVCS_APIKEY", "my-api-key");

        let auth = get_authenticator_from_environment("dns_svcs").unwrap();
        assert_eq!(auth.authentication_type(), "iam");

        clear_env("DNS_SVCS_");
    }

    #[test]
    #[serial]
    fn test_unknown_service_has_no_authenticator() {
        clear_env("NOT_CONFIGURED_");
        let err = get_authenticator_from_environment("not-configured")
            .err()
            .unwrap();
        assert!(matches!(err, Error::Config(ref msg) if msg.contains("not-configured")));
    }

    #[test]
    #[serial]
    fn test_service_name_option_selects_prefix() {
        clear_env("MY_ZONES_");
        std::env::set_var("MY_ZONES_AUTH_TYPE", "noAuth");

        let zones = ZonesV1::new(CRN, ServiceOptions::new().service_name("my-zones")).unwrap();
        assert_eq!(zones.service().service_name(), "my-zones");
        assert_eq!(zones.service().authenticator().authentication_type(), "noAuth");
        assert_eq!(zones.service().service_url(), "https://api.cis.cloud.ibm.com");

        clear_env("MY_ZONES_");
    }
}

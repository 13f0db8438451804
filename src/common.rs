//! Shared request headers
//!
//! Every operation stamps its request with a diagnostic User-Agent and an
//! analytics header naming the service and operation.

/// SDK name reported in the User-Agent header
pub const SDK_NAME: &str = "ibm-cloud-networking-rust-sdk";

/// Version injected at compile time via NETWORKING_SDK_VERSION (set by CI/CD),
/// or the crate version for local builds.
pub const VERSION: &str = match option_env!("NETWORKING_SDK_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Header carrying service/operation analytics
pub const ANALYTICS_HEADER: &str = "X-IBMCloud-SDK-Analytics";

/// Build the User-Agent string for this SDK
pub fn user_agent() -> String {
    format!(
        "{}/{} (lang=rust; os.name={} os.arch={})",
        SDK_NAME,
        VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

/// Headers sent with every request of `operation_id`
pub fn sdk_headers(
    service_name: &str,
    service_version: &str,
    operation_id: &str,
) -> Vec<(String, String)> {
    vec![
        ("User-Agent".to_string(), user_agent()),
        (
            ANALYTICS_HEADER.to_string(),
            format!(
                "service_name={};service_version={};operation_id={}",
                service_name, service_version, operation_id
            ),
        ),
    ]
}

//! Behavior-driven tests for error handling and credential safety
//!
//! These tests verify what callers observe when the API rejects a request,
//! returns a body that does not match the schema, or cannot be reached, and
//! that credentials never leak through `Debug` output.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::json;
use shopby_core::{
    ConfigError, Environment, HttpError, HttpMethod, OrderClient, ProductsClient,
    ScriptedHttpClient, ServerApiClient, Settings, ShopbyError, ShopbyErrorKind,
};

fn api(http: &Arc<ScriptedHttpClient>) -> ServerApiClient {
    ServerApiClient::new(
        http.clone(),
        "https://server-api.e-ncp.com",
        "secret-token",
        "secret-key",
    )
}

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(name, value)| (String::from(*name), String::from(*value)))
        .collect();
    move |name| vars.get(name).cloned()
}

// =============================================================================
// Error Handling: API responses
// =============================================================================

#[tokio::test]
async fn when_api_returns_client_error_status_and_body_are_preserved() {
    // Given: a 404 with a JSON error body
    let body = json!({ "code": "PRODUCT_NOT_FOUND", "message": "no such product" }).to_string();
    let http = Arc::new(ScriptedHttpClient::new().with_json(404, body.clone()));
    let client = ProductsClient::new(api(&http));

    // When: the product is fetched
    let error = client
        .get_product_detail_v3(999)
        .await
        .expect_err("should fail");

    // Then: a status error carries everything needed to diagnose it
    match &error {
        ShopbyError::Status {
            status,
            method,
            url,
            body: returned,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(*method, HttpMethod::Get);
            assert_eq!(url, "https://server-api.e-ncp.com/products/999/");
            assert_eq!(returned, &body);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!error.retryable(), "client errors should not be retried");
}

#[tokio::test]
async fn when_api_returns_server_error_it_is_retryable() {
    let http = Arc::new(ScriptedHttpClient::new().with_json(503, "Service Unavailable"));
    let client = OrderClient::new(api(&http));

    let error = client
        .get_order_detail("202503011230001")
        .await
        .expect_err("should fail");

    assert_eq!(error.kind(), ShopbyErrorKind::Status);
    assert_eq!(error.status(), Some(503));
    assert!(error.retryable());
}

#[tokio::test]
async fn when_success_body_violates_schema_decode_error_keeps_body() {
    // Given: an order page whose timestamp is in an unsupported shape
    let body = json!({
        "totalCount": 1,
        "contents": [{ "orderNo": "1", "orderYmdt": "2025/03/01 12:30" }]
    })
    .to_string();
    let http = Arc::new(ScriptedHttpClient::new().with_json(200, body.clone()));
    let client = OrderClient::new(api(&http));

    // When: orders are listed
    let error = client
        .get_orders(&Default::default())
        .await
        .expect_err("should fail");

    // Then: the decode error names the bad value and keeps the raw body
    match &error {
        ShopbyError::Decode {
            url,
            message,
            body: returned,
        } => {
            assert!(url.starts_with("https://server-api.e-ncp.com/orders"));
            assert!(message.contains("2025/03/01 12:30"), "{message}");
            assert_eq!(returned, &body);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!error.retryable());
}

#[tokio::test]
async fn when_transport_fails_error_keeps_retry_hint() {
    let http = Arc::new(ScriptedHttpClient::new().with_error(HttpError::new("connection reset")));
    let client = ProductsClient::new(api(&http));

    let error = client.get_product_histories(1).await.expect_err("should fail");

    assert_eq!(error.kind(), ShopbyErrorKind::Transport);
    assert!(error.retryable());
    assert!(error.to_string().contains("connection reset"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn when_credentials_are_missing_settings_name_the_variable() {
    let error = Settings::from_lookup(lookup(&[("SHOPBY_SERVER_ACCESS_TOKEN", "t")]))
        .expect_err("should fail");

    assert_eq!(
        error,
        ConfigError::MissingVar {
            name: "SHOPBY_SERVER_SYSTEM_KEY"
        }
    );
}

#[test]
fn when_credentials_are_blank_they_count_as_missing() {
    let result = Settings::from_lookup(lookup(&[
        ("SHOPBY_SERVER_ACCESS_TOKEN", "   "),
        ("SHOPBY_SERVER_SYSTEM_KEY", "k"),
    ]));

    assert!(matches!(result, Err(ConfigError::MissingVar { .. })));
}

#[test]
fn when_optional_settings_are_absent_defaults_apply() {
    let settings = Settings::from_lookup(lookup(&[
        ("SHOPBY_SERVER_ACCESS_TOKEN", "t"),
        ("SHOPBY_SERVER_SYSTEM_KEY", "k"),
    ]))
    .expect("should load");

    assert_eq!(settings.env, Environment::Dev);
    assert_eq!(settings.base_url, "https://server-api.e-ncp.com");
    assert_eq!(settings.timeout_ms, 10_000);
}

#[test]
fn when_timeout_is_not_a_positive_number_settings_fail() {
    let result = Settings::from_lookup(lookup(&[
        ("SHOPBY_SERVER_ACCESS_TOKEN", "t"),
        ("SHOPBY_SERVER_SYSTEM_KEY", "k"),
        ("SHOPBY_TIMEOUT_MS", "0"),
    ]));

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            name: "SHOPBY_TIMEOUT_MS",
            ..
        })
    ));
}

// =============================================================================
// Security: credential redaction
// =============================================================================

#[test]
fn when_settings_are_debug_printed_credentials_are_redacted() {
    let settings = Settings::from_lookup(lookup(&[
        ("SHOPBY_SERVER_ACCESS_TOKEN", "secret-token"),
        ("SHOPBY_SERVER_SYSTEM_KEY", "secret-key"),
        ("SHOPBY_ENV", "PROD"),
    ]))
    .expect("should load");

    let printed = format!("{settings:?}");

    assert_eq!(settings.env, Environment::Prod);
    assert!(!printed.contains("secret-token"), "{printed}");
    assert!(!printed.contains("secret-key"), "{printed}");
}

#[test]
fn when_client_is_debug_printed_credentials_are_redacted() {
    let http = Arc::new(ScriptedHttpClient::new());
    let printed = format!("{:?}", api(&http));

    assert!(printed.contains("https://server-api.e-ncp.com"));
    assert!(!printed.contains("secret-token"), "{printed}");
    assert!(!printed.contains("secret-key"), "{printed}");
}

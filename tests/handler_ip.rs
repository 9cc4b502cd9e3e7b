mod common;

use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_ip_success() {
    let app = common::create_test_app_with(
        Arc::new(common::StaticIpLookup("203.0.113.1".to_string())),
        false,
    );

    let response = app.server.get("/ip").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ip": "203.0.113.1" }));
}

#[tokio::test]
async fn test_ip_lookup_failure() {
    let app = common::create_test_app_with(Arc::new(common::FailingIpLookup), false);

    let response = app.server.get("/ip").await;

    response.assert_status_internal_server_error();
    response.assert_json(&json!({ "error": "Failed to get IP address" }));
}

#[tokio::test]
async fn test_ip_is_not_a_short_code() {
    let app = common::create_test_app();
    common::shorten(&app, "https://example.com").await;

    app.server.get("/ip").await.assert_status_ok();
    assert!(app.clicks.events().await.is_empty());
}

//! Integration tests for the health probe.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_reports_ok_and_version() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
    assert!(app.upstream.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v2/employee", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

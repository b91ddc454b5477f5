//! Integration tests for health endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["version"].is_string());
}

#[tokio::test]
async fn test_detailed_health_reports_backends() {
    let app = TestApp::new().await;
    app.upload_ok("X1", &[("a.txt", "text/plain", b"a")]).await;

    let response = app.request("GET", "/api/health/detailed").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"]["registryBackend"], "memory");
    assert_eq!(response.body["store"]["blobBackend"], "local");
    assert_eq!(response.body["store"]["recordCount"], 1);
    assert_eq!(response.body["store"]["blobCount"], 1);
}

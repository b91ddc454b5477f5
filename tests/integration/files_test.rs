//! Integration tests for listing and deleting files.

use axum::http::StatusCode;

use codevault_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_upload_list_delete_lifecycle() {
    let app = TestApp::new().await;

    app.upload_ok(
        "X1",
        &[("a.txt", "text/plain", b"a"), ("b.txt", "text/plain", b"b")],
    )
    .await;

    let listed = app.list("X1").await;
    assert_eq!(listed.len(), 2);
    let a = listed
        .iter()
        .find(|f| f["originalName"] == "a.txt")
        .expect("a.txt not listed");
    let a_id = a["id"].as_str().unwrap().to_string();

    let response = app.request("DELETE", &format!("/api/files/{a_id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "File deleted successfully");

    let listed = app.list("X1").await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["originalName"], "b.txt");

    let response = app.request("DELETE", &format!("/api/files/{a_id}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "File not found");
}

#[tokio::test]
async fn test_unknown_code_lists_nothing() {
    let app = TestApp::new().await;
    app.upload_ok("X1", &[("a.txt", "text/plain", b"a")]).await;

    assert!(app.list("ZZZ").await.is_empty());
}

#[tokio::test]
async fn test_codes_are_isolated() {
    let app = TestApp::new().await;
    app.upload_ok("X1", &[("a.txt", "text/plain", b"a")]).await;
    app.upload_ok("Y2", &[("c.txt", "text/plain", b"c")]).await;

    let x1 = app.list("X1").await;
    assert_eq!(x1.len(), 1);
    assert_eq!(x1[0]["originalName"], "a.txt");
    assert!(app.list("x1").await.is_empty());
}

#[tokio::test]
async fn test_percent_encoded_code() {
    let app = TestApp::new().await;
    app.upload_ok("team code", &[("a.txt", "text/plain", b"a")]).await;

    assert_eq!(app.list("team%20code").await.len(), 1);
}

#[tokio::test]
async fn test_delete_with_malformed_id() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/api/files/not-a-uuid").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_with_wrong_code_keeps_file() {
    let app = TestApp::new().await;
    let files = app.upload_ok("X1", &[("a.txt", "text/plain", b"a")]).await;
    let id = files[0]["id"].as_str().unwrap();

    let response = app
        .request("DELETE", &format!("/api/files/{id}?accessCode=Y2"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.list("X1").await.len(), 1);

    let response = app
        .request("DELETE", &format!("/api/files/{id}?accessCode=X1"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(app.list("X1").await.is_empty());
}

#[tokio::test]
async fn test_delete_can_require_code() {
    let mut config = AppConfig::default();
    config.access.require_code_for_delete = true;
    let app = TestApp::with_config(config).await;

    let files = app.upload_ok("X1", &[("a.txt", "text/plain", b"a")]).await;
    let id = files[0]["id"].as_str().unwrap();

    let response = app.request("DELETE", &format!("/api/files/{id}")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.list("X1").await.len(), 1);

    let response = app
        .request("DELETE", &format!("/api/files/{id}?accessCode=X1"))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

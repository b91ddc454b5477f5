//! Integration tests for raw blob retrieval.

use axum::http::{StatusCode, header};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_blob_is_served_with_inferred_type() {
    let app = TestApp::new().await;
    let files = app
        .upload_ok("X1", &[("notes.txt", "text/plain", b"hello blob")])
        .await;
    let url = files[0]["url"].as_str().unwrap();

    let response = app.request("GET", url).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, b"hello blob");
    assert_eq!(response.header(header::CONTENT_TYPE), Some("text/plain"));
    assert_eq!(response.header(header::CONTENT_LENGTH), Some("10"));
}

#[tokio::test]
async fn test_blob_alias_route() {
    let app = TestApp::new().await;
    let files = app
        .upload_ok("X1", &[("image.png", "image/png", &[0x89, b'P', b'N', b'G'])])
        .await;
    let stored = files[0]["storedName"].as_str().unwrap();

    let response = app.request("GET", &format!("/blob/{stored}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.bytes, vec![0x89, b'P', b'N', b'G']);
    assert_eq!(response.header(header::CONTENT_TYPE), Some("image/png"));
}

#[tokio::test]
async fn test_deleted_blob_is_gone() {
    let app = TestApp::new().await;
    let files = app.upload_ok("X1", &[("a.txt", "text/plain", b"a")]).await;
    let id = files[0]["id"].as_str().unwrap();
    let url = files[0]["url"].as_str().unwrap();

    app.request("DELETE", &format!("/api/files/{id}")).await;

    let response = app.request("GET", url).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_missing_blob_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/uploads/1700000000000-deadbeef-x.txt").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_traversal_is_not_found() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/uploads/..%2Foutside.txt").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/uploads/.hidden").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

//! Integration tests for `POST /api/upload`.

use axum::http::StatusCode;

use codevault_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_upload_returns_records() {
    let app = TestApp::new().await;

    let response = app
        .upload(
            Some("X1"),
            &[
                ("a.txt", "text/plain", b"alpha"),
                ("b.txt", "text/plain", b"bravo!"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let files = response.body["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["originalName"], "a.txt");
    assert_eq!(files[1]["originalName"], "b.txt");
    assert_eq!(files[0]["accessCode"], "X1");
    assert_eq!(files[1]["sizeBytes"], 6);
    assert_ne!(files[0]["storedName"], files[1]["storedName"]);

    let stored = files[0]["storedName"].as_str().unwrap();
    assert_eq!(files[0]["url"], format!("/uploads/{stored}"));
    assert!(app.blob_dir.path().join(stored).exists());
}

#[tokio::test]
async fn test_upload_without_access_code_is_rejected() {
    let app = TestApp::new().await;

    let response = app.upload(None, &[("a.txt", "text/plain", b"a")]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_upload_with_blank_access_code_is_rejected() {
    let app = TestApp::new().await;

    let response = app.upload(Some("   "), &[("a.txt", "text/plain", b"a")]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_without_files_creates_nothing() {
    let app = TestApp::new().await;

    let response = app.upload(Some("X1"), &[]).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(app.list("X1").await.is_empty());
}

#[tokio::test]
async fn test_oversized_file_is_rejected() {
    let mut config = AppConfig::default();
    config.storage.max_upload_size_bytes = 8;
    let app = TestApp::with_config(config).await;

    let response = app
        .upload(
            Some("X1"),
            &[
                ("small.txt", "text/plain", b"ok"),
                ("big.txt", "text/plain", b"way more than eight bytes"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(app.list("X1").await.is_empty());
}

#[tokio::test]
async fn test_padded_access_code_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .upload(Some(" X1 "), &[("a.txt", "text/plain", b"a")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION");
    assert!(app.list("X1").await.is_empty());
}

//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use codevault_api::AppState;
use codevault_api::router::build_router;
use codevault_core::config::AppConfig;
use codevault_database::MemoryFileRegistry;
use codevault_storage::LocalBlobStore;

const BOUNDARY: &str = "codevault-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
    /// Blob root, removed on drop
    pub blob_dir: tempfile::TempDir,
}

impl TestApp {
    /// Create a test application with default configuration
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a test application, pointing the blob root at a temp dir
    pub async fn with_config(mut config: AppConfig) -> Self {
        let blob_dir = tempfile::tempdir().expect("Failed to create temp dir");
        config.storage.blob_root = blob_dir.path().to_string_lossy().to_string();

        let blobs = LocalBlobStore::new(&config.storage.blob_root)
            .await
            .expect("Failed to init blob store");
        let state = AppState::new(
            config.clone(),
            Arc::new(MemoryFileRegistry::new()),
            Arc::new(blobs),
        );

        Self {
            router: build_router(state),
            config,
            blob_dir,
        }
    }

    /// Make a bodiless request
    pub async fn request(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(req).await
    }

    /// POST a multipart upload. `files` are `(file name, content type, body)`.
    pub async fn upload(
        &self,
        access_code: Option<&str>,
        files: &[(&str, &str, &[u8])],
    ) -> TestResponse {
        let body = multipart_body(access_code, files);
        let req = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Upload under `code` and return the `files` array from the response
    pub async fn upload_ok(&self, code: &str, files: &[(&str, &str, &[u8])]) -> Vec<Value> {
        let response = self.upload(Some(code), files).await;
        assert_eq!(response.status, StatusCode::OK, "Upload failed: {:?}", response.body);
        response.body["files"]
            .as_array()
            .expect("No files in upload response")
            .clone()
    }

    /// List the files under `code`
    pub async fn list(&self, code: &str) -> Vec<Value> {
        let response = self.request("GET", &format!("/api/files/{code}")).await;
        assert_eq!(response.status, StatusCode::OK, "List failed: {:?}", response.body);
        response.body.as_array().expect("List is not an array").clone()
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            bytes,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub bytes: Vec<u8>,
    /// Parsed JSON body, `Null` if the body is not JSON
    pub body: Value,
}

impl TestResponse {
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

fn multipart_body(access_code: Option<&str>, files: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some(code) = access_code {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"accessCode\"\r\n\r\n{code}\r\n"
            )
            .as_bytes(),
        );
    }

    for (name, content_type, data) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

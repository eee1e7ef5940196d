#![allow(dead_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use ems_api::config::AppConfig;
use ems_api::database::DatabaseManager;
use ems_api::{app, AppState};

const BOUNDARY: &str = "ems-test-boundary";

/// Router over a private in-memory database and a scratch upload directory
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub upload_dir: PathBuf,
    _scratch: TempDir,
}

impl TestApp {
    pub async fn new() -> Result<Self> {
        let scratch = tempfile::tempdir()?;
        let upload_dir = scratch.path().join("uploads");
        Self::with_upload_dir(scratch, upload_dir).await
    }

    /// Use a caller-chosen upload directory inside `scratch`
    pub async fn with_upload_dir(scratch: TempDir, upload_dir: PathBuf) -> Result<Self> {
        let config = AppConfig::for_testing(upload_dir.clone());
        let manager = DatabaseManager::connect(&config.database)
            .await
            .context("failed to open test database")?;
        let pool = manager.pool().clone();
        let router = app(AppState::new(pool.clone(), config));

        Ok(Self {
            router,
            pool,
            upload_dir,
            _scratch: scratch,
        })
    }

    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            // Multipart framing errors from axum itself are plain text
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        Ok((status, body))
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))?,
            None => builder.body(Body::empty())?,
        };
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::PUT, uri, Some(body)).await
    }

    /// Register a user and return its profile id
    pub async fn signup(&self, username: &str, role: &str) -> Result<i64> {
        let (status, body) = self
            .post(
                "/auth/signup",
                json!({
                    "username": username,
                    "password": format!("{}-pw", username),
                    "name": username,
                    "email": format!("{}@example.com", username),
                    "role": role
                }),
            )
            .await?;
        anyhow::ensure!(status == StatusCode::OK, "signup failed: {} {}", status, body);
        body["userId"].as_i64().context("signup response without userId")
    }

    pub async fn upload(&self, document_type: &str, file_name: &str, contents: &[u8]) -> Result<(StatusCode, Value)> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
                 Content-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(contents);
        body.extend_from_slice(
            format!(
                "\r\n--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"documentType\"\r\n\r\n{document_type}\
                 \r\n--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"fileName\"\r\n\r\n{file_name}\
                 \r\n--{BOUNDARY}--\r\n"
            )
            .as_bytes(),
        );

        let request = Request::builder()
            .method(Method::POST)
            .uri("/employee/documents/upload")
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(body))?;
        self.send(request).await
    }
}

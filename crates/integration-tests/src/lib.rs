//! Integration tests for the Jumbo Meats website service.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p jumbo-meats-integration-tests
//! ```
//!
//! Tests drive the real router in process. Each [`TestApp`] owns a fresh
//! temporary data directory, so the JSON stores start from the seeded
//! defaults, and carries cookies between requests the way a browser would,
//! which makes session-backed flows (basket, admin logins) testable
//! end to end.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test harness; panicking on a malformed response is the desired failure mode.
#![allow(clippy::missing_panics_doc, clippy::indexing_slicing)]

use std::net::{IpAddr, Ipv4Addr};
use std::path::Path;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use jumbo_meats_server::config::{GeminiConfig, ServerConfig};
use jumbo_meats_server::middleware::create_session_layer;
use jumbo_meats_server::routes;
use jumbo_meats_server::state::AppState;

/// Upper bound when buffering response bodies.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        base_url: "http://localhost:3000".to_owned(),
        data_dir: data_dir.to_path_buf(),
        gemini: GeminiConfig {
            api_key: SecretString::from("test-api-key"),
            model: "gemini-test".to_owned(),
        },
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    }
}

/// An in-process instance of the full application.
pub struct TestApp {
    router: Router,
    cookies: Vec<(String, String)>,
    _data_dir: TempDir,
}

impl TestApp {
    /// Spin up a fresh application over an empty data directory.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = TempDir::new().expect("Failed to create temp data dir");
        let config = test_config(data_dir.path());
        let state = AppState::new(config).expect("Failed to create application state");
        let session_layer = create_session_layer(state.config());
        let router = routes::routes().layer(session_layer).with_state(state);
        Self {
            router,
            cookies: Vec::new(),
            _data_dir: data_dir,
        }
    }

    /// Drop all cookies, simulating a fresh browser on the same site.
    pub fn clear_cookies(&mut self) {
        self.cookies.clear();
    }

    /// `GET` a path.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None).await
    }

    /// `POST` with an empty body.
    pub async fn post(&mut self, path: &str) -> TestResponse {
        self.send(Method::POST, path, None).await
    }

    /// `POST` a JSON body.
    pub async fn post_json(&mut self, path: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, path, Some(body)).await
    }

    /// `PUT` a JSON body.
    pub async fn put_json(&mut self, path: &str, body: &Value) -> TestResponse {
        self.send(Method::PUT, path, Some(body)).await
    }

    /// `DELETE` a path.
    pub async fn delete(&mut self, path: &str) -> TestResponse {
        self.send(Method::DELETE, path, None).await
    }

    /// `POST` a prebuilt multipart body.
    pub async fn post_multipart(
        &mut self,
        path: &str,
        boundary: &str,
        body: Vec<u8>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(Method::POST).uri(path).header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        );
        if let Some(cookie_header) = self.cookie_header() {
            builder = builder.header(header::COOKIE, cookie_header);
        }
        let request = builder
            .body(Body::from(body))
            .expect("Failed to build request");
        self.dispatch(request).await
    }

    async fn send(&mut self, method: Method, path: &str, body: Option<&Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie_header) = self.cookie_header() {
            builder = builder.header(header::COOKIE, cookie_header);
        }
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(value).expect("Failed to encode request body"),
                )),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");
        self.dispatch(request).await
    }

    async fn dispatch(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router call failed");
        let (parts, body) = response.into_parts();
        self.store_cookies(&parts.headers);
        let body = to_bytes(body, MAX_BODY_BYTES)
            .await
            .expect("Failed to read response body");
        TestResponse {
            status: parts.status,
            headers: parts.headers,
            body: body.to_vec(),
        }
    }

    fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        Some(pairs.join("; "))
    }

    fn store_cookies(&mut self, headers: &HeaderMap) {
        for raw in headers.get_all(header::SET_COOKIE) {
            let Ok(raw) = raw.to_str() else { continue };
            let pair = raw.split(';').next().unwrap_or(raw);
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim().to_owned();
            let value = value.trim().to_owned();
            if let Some(existing) = self.cookies.iter_mut().find(|(n, _)| *n == name) {
                existing.1 = value;
            } else {
                self.cookies.push((name, value));
            }
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// A buffered response with helpers for assertions.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Decode the body as JSON.
    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("Response body was not JSON")
    }

    /// The body as text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// A response header as UTF-8, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Username used by [`register_primary_admin`].
pub const PRIMARY_USERNAME: &str = "mkhize";
/// Password used by [`register_primary_admin`].
pub const PRIMARY_PASSWORD: &str = "biltong-boerewors-47";

/// Register the first admin account, which is auto-approved, becomes the
/// primary admin, and is logged in on this app's cookies.
pub async fn register_primary_admin(app: &mut TestApp) -> Value {
    let response = app
        .post_json(
            "/admin/auth/register",
            &json!({"username": PRIMARY_USERNAME, "password": PRIMARY_PASSWORD}),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let account = response.json();
    assert_eq!(account["is_primary"], json!(true));
    account
}

/// Log in with the primary admin credentials.
pub async fn login_primary(app: &mut TestApp) {
    let response = app
        .post_json(
            "/admin/auth/login",
            &json!({"username": PRIMARY_USERNAME, "password": PRIMARY_PASSWORD}),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

/// Create a product through the admin API. The app must be logged in.
pub async fn create_product(app: &mut TestApp, name: &str, category: &str, price: &str) -> Value {
    let response = app
        .post_json(
            "/admin/products",
            &json!({
                "name": name,
                "category": category,
                "description": format!("{name}, cut fresh daily"),
                "price_range": price,
                "image": "",
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()["product"].clone()
}

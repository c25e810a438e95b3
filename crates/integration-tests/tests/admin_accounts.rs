//! Integration tests for admin registration, approval, and login.
//!
//! Run with: `cargo test -p jumbo-meats-integration-tests`

#![allow(clippy::indexing_slicing)]

use axum::http::StatusCode;
use jumbo_meats_integration_tests::{TestApp, login_primary, register_primary_admin};
use serde_json::{Value, json};

const PASSWORD: &str = "chuck-short-rib-77";

/// Register a second, pending account on fresh cookies and return it.
async fn register_pending(app: &mut TestApp, username: &str) -> Value {
    app.clear_cookies();
    let response = app
        .post_json(
            "/admin/auth/register",
            &json!({"username": username, "password": PASSWORD}),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn the_first_registration_becomes_the_approved_primary_admin() {
    let mut app = TestApp::new();
    let account = register_primary_admin(&mut app).await;
    assert_eq!(account["is_approved"], json!(true));
    assert_eq!(account["is_primary"], json!(true));
    assert!(account.get("password_hash").is_none());

    // And it is logged in right away
    let session = app.get("/admin/auth/session").await.json();
    assert_eq!(session["username"], json!("mkhize"));
    assert_eq!(session["is_primary"], json!(true));
}

#[tokio::test]
async fn later_registrations_are_created_pending_and_not_logged_in() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;

    let account = register_pending(&mut app, "sipho").await;
    assert_eq!(account["is_approved"], json!(false));
    assert_eq!(account["is_primary"], json!(false));

    let session = app.get("/admin/auth/session").await.json();
    assert_eq!(session, json!(null));
}

#[tokio::test]
async fn duplicate_usernames_are_rejected() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;

    let response = app
        .post_json(
            "/admin/auth/register",
            &json!({"username": "mkhize", "password": PASSWORD}),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn weak_passwords_are_rejected() {
    let mut app = TestApp::new();
    let response = app
        .post_json(
            "/admin/auth/register",
            &json!({"username": "mkhize", "password": "short"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn pending_accounts_cannot_log_in_until_approved() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;
    register_pending(&mut app, "sipho").await;

    let response = app
        .post_json(
            "/admin/auth/login",
            &json!({"username": "sipho", "password": PASSWORD}),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.text(), "Pending approval.");
}

#[tokio::test]
async fn wrong_passwords_do_not_reveal_the_pending_state() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;
    register_pending(&mut app, "sipho").await;

    let response = app
        .post_json(
            "/admin/auth/login",
            &json!({"username": "sipho", "password": "not-the-password-1"}),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.text(), "Invalid credentials.");

    let unknown = app
        .post_json(
            "/admin/auth/login",
            &json!({"username": "nobody", "password": PASSWORD}),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.text(), "Invalid credentials.");
}

#[tokio::test]
async fn approval_unlocks_login() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;
    let account = register_pending(&mut app, "sipho").await;
    let id = account["id"].as_str().expect("id").to_owned();

    app.clear_cookies();
    login_primary(&mut app).await;
    let approve = app.post(&format!("/admin/users/{id}/approve")).await;
    assert_eq!(approve.status, StatusCode::OK);
    assert_eq!(approve.json()["is_approved"], json!(true));

    app.clear_cookies();
    let login = app
        .post_json(
            "/admin/auth/login",
            &json!({"username": "sipho", "password": PASSWORD}),
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);

    let session = app.get("/admin/auth/session").await.json();
    assert_eq!(session["username"], json!("sipho"));
    assert_eq!(session["is_primary"], json!(false));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;

    let response = app.post("/admin/auth/logout").await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let session = app.get("/admin/auth/session").await.json();
    assert_eq!(session, json!(null));
}

// ============================================================================
// Access control
// ============================================================================

#[tokio::test]
async fn admin_surfaces_require_a_login() {
    let mut app = TestApp::new();

    assert_eq!(
        app.get("/admin/products").await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.get("/admin/blog").await.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        app.get("/admin/settings").await.status,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(app.get("/admin/users").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn settings_and_accounts_are_primary_only() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;
    let account = register_pending(&mut app, "sipho").await;
    let id = account["id"].as_str().expect("id").to_owned();

    app.clear_cookies();
    login_primary(&mut app).await;
    app.post(&format!("/admin/users/{id}/approve")).await;

    app.clear_cookies();
    app.post_json(
        "/admin/auth/login",
        &json!({"username": "sipho", "password": PASSWORD}),
    )
    .await;

    // A regular admin manages content
    assert_eq!(app.get("/admin/products").await.status, StatusCode::OK);
    assert_eq!(app.get("/admin/blog").await.status, StatusCode::OK);

    // But settings and accounts stay with the primary admin
    assert_eq!(app.get("/admin/settings").await.status, StatusCode::FORBIDDEN);
    assert_eq!(app.get("/admin/users").await.status, StatusCode::FORBIDDEN);
}

// ============================================================================
// Account removal
// ============================================================================

#[tokio::test]
async fn the_primary_admin_cannot_be_removed() {
    let mut app = TestApp::new();
    let primary = register_primary_admin(&mut app).await;
    let id = primary["id"].as_str().expect("id").to_owned();

    let response = app.delete(&format!("/admin/users/{id}")).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn removed_accounts_can_no_longer_log_in() {
    let mut app = TestApp::new();
    register_primary_admin(&mut app).await;
    let account = register_pending(&mut app, "sipho").await;
    let id = account["id"].as_str().expect("id").to_owned();

    app.clear_cookies();
    login_primary(&mut app).await;
    let removed = app.delete(&format!("/admin/users/{id}")).await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let listed = app.get("/admin/users").await.json();
    assert_eq!(listed.as_array().expect("account list").len(), 1);

    app.clear_cookies();
    let login = app
        .post_json(
            "/admin/auth/login",
            &json!({"username": "sipho", "password": PASSWORD}),
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);
}

//! Back-office routes.
//!
//! Everything except the auth endpoints requires a logged-in approved admin.
//! Website settings and account management are gated further to the primary
//! admin.

mod auth;
mod blog;
mod images;
mod products;
mod settings;
mod users;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use chrono::{DateTime, Utc};
use jumbo_meats_core::models::AdminAccount;
use jumbo_meats_core::types::{AdminId, ImageRef, Username};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// An admin account as exposed over the API. Never carries the password
/// hash.
#[derive(Debug, Serialize)]
pub struct AdminView {
    pub id: AdminId,
    pub username: Username,
    pub is_approved: bool,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl From<AdminAccount> for AdminView {
    fn from(account: AdminAccount) -> Self {
        Self {
            id: account.id,
            username: account.username,
            is_approved: account.is_approved,
            is_primary: account.is_primary,
            created_at: account.created_at,
        }
    }
}

/// Parse an optional image field from a form: empty input means no image.
fn parse_optional_image(raw: &str) -> Result<Option<ImageRef>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    ImageRef::parse(raw)
        .map(Some)
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Admin authentication routes.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::session))
}

/// Inventory management routes.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/{id}", put(products::update).delete(products::remove))
}

/// Blog management routes.
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list).post(blog::create))
        .route("/{id}", put(blog::update).delete(blog::remove))
}

/// Website settings routes.
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(settings::show).put(settings::update))
}

/// Admin account management routes.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list))
        .route("/{id}/approve", post(users::approve))
        .route("/{id}", delete(users::remove))
}

/// Build the `/admin` router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/blog", blog_routes())
        .nest("/settings", settings_routes())
        .nest("/users", user_routes())
        .route(
            "/images",
            post(images::upload).layer(DefaultBodyLimit::max(images::MAX_UPLOAD_BYTES)),
        )
}

//! Authentication extractors for the admin API.
//!
//! Provides extractors for requiring admin authentication in route handlers.
//! The API is JSON-only, so rejections are plain 401/403 responses rather
//! than login redirects.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::{CurrentAdmin, session_keys};

/// Extractor that requires an authenticated admin.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.username)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = current_admin(parts).await?;
        Ok(Self(admin))
    }
}

/// Extractor that requires the primary admin.
///
/// Settings and user management are reserved for the primary admin;
/// a logged-in secondary admin gets 403.
pub struct RequirePrimaryAdmin(pub CurrentAdmin);

impl<S> FromRequestParts<S> for RequirePrimaryAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let admin = current_admin(parts).await?;

        if !admin.is_primary {
            return Err(AppError::Forbidden(
                "Only the primary admin can access this resource".to_string(),
            ));
        }

        Ok(Self(admin))
    }
}

/// Read the logged-in admin from the session.
async fn current_admin(parts: &mut Parts) -> Result<CurrentAdmin, AppError> {
    // Get the session from extensions (set by SessionManagerLayer)
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or_else(|| AppError::Unauthorized("Not logged in".to_string()))?;

    session
        .get(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
        .ok_or_else(|| AppError::Unauthorized("Not logged in".to_string()))
}

/// Helper to set the current admin in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Helper to clear the current admin from the session (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}

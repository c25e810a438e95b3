//! Admin authentication endpoints.

use axum::{Json, extract::State, http::StatusCode};
use jumbo_meats_core::models::AdminAccount;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::AdminView;
use crate::error::{AppError, Result};
use crate::middleware::{clear_current_admin, set_current_admin};
use crate::models::{CurrentAdmin, session_keys};
use crate::services::AuthService;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

async fn log_in(session: &Session, account: &AdminAccount) -> Result<()> {
    let current = CurrentAdmin {
        id: account.id,
        username: account.username.clone(),
        is_primary: account.is_primary,
    };
    set_current_admin(session, &current)
        .await
        .map_err(|e| AppError::Internal(format!("failed to store session: {e}")))
}

/// `POST /admin/auth/register`
///
/// The first account ever registered is approved automatically, becomes the
/// primary admin, and is logged in right away. Later registrations are
/// created pending and cannot log in until the primary admin approves them.
#[instrument(skip(state, session, request))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AdminView>> {
    let auth = AuthService::new(state.store().admins());
    let account = auth.register(&request.username, &request.password)?;

    if account.is_approved {
        log_in(&session, &account).await?;
    }
    Ok(Json(AdminView::from(account)))
}

/// `POST /admin/auth/login`
#[instrument(skip(state, session, request))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AdminView>> {
    let auth = AuthService::new(state.store().admins());
    let account = auth.login(&request.username, &request.password)?;
    log_in(&session, &account).await?;
    Ok(Json(AdminView::from(account)))
}

/// `POST /admin/auth/logout`
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    clear_current_admin(&session)
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /admin/auth/session`
///
/// The logged-in admin, or `null` for an anonymous visitor.
#[instrument(skip(session))]
pub async fn session(session: Session) -> Json<Option<CurrentAdmin>> {
    let current = session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten();
    Json(current)
}

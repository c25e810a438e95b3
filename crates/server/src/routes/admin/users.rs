//! Admin account management. Primary admin only.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use jumbo_meats_core::types::AdminId;
use tracing::instrument;

use super::AdminView;
use crate::error::Result;
use crate::middleware::RequirePrimaryAdmin;
use crate::state::AppState;

/// `GET /admin/users`
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    RequirePrimaryAdmin(_admin): RequirePrimaryAdmin,
) -> Json<Vec<AdminView>> {
    let accounts = state
        .store()
        .admins()
        .list()
        .into_iter()
        .map(AdminView::from)
        .collect();
    Json(accounts)
}

/// `POST /admin/users/{id}/approve`
#[instrument(skip(state))]
pub async fn approve(
    State(state): State<AppState>,
    RequirePrimaryAdmin(_admin): RequirePrimaryAdmin,
    Path(id): Path<AdminId>,
) -> Result<Json<AdminView>> {
    let account = state.store().admins().approve(id)?;
    Ok(Json(AdminView::from(account)))
}

/// `DELETE /admin/users/{id}`
///
/// The primary admin account itself cannot be removed.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    RequirePrimaryAdmin(_admin): RequirePrimaryAdmin,
    Path(id): Path<AdminId>,
) -> Result<StatusCode> {
    state.store().admins().remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

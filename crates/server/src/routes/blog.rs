//! Blog reading endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use jumbo_meats_core::models::BlogPost;
use jumbo_meats_core::types::PostId;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// `GET /blog`
///
/// All posts, newest first.
#[instrument(skip(state))]
pub async fn list_posts(State(state): State<AppState>) -> Json<Vec<BlogPost>> {
    Json(state.store().blog().list_newest_first())
}

/// `GET /blog/{id}`
#[instrument(skip(state))]
pub async fn show_post(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<BlogPost>> {
    let post = state
        .store()
        .blog()
        .find(id)
        .ok_or_else(|| AppError::NotFound(format!("blog post {id} not found")))?;
    Ok(Json(post))
}

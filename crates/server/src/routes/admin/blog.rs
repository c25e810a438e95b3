//! Blog management endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use jumbo_meats_core::models::BlogPost;
use jumbo_meats_core::types::{Excerpt, ImageRef, PostId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::parse_optional_image;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Notice the back-office flashes after a save.
const SAVED_NOTICE: &str = "Blog Published!";
/// Notice flashed after a delete.
const REMOVED_NOTICE: &str = "Post Deleted.";

/// Post fields as submitted by the back-office form.
#[derive(Debug, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[serde(default)]
    pub is_highlighted: bool,
    /// Image URL or data URL; empty means no image.
    #[serde(default)]
    pub image: String,
}

struct ParsedDraft {
    title: String,
    excerpt: Excerpt,
    content: String,
    is_highlighted: bool,
    image: Option<ImageRef>,
}

impl PostDraft {
    fn parse(self) -> Result<ParsedDraft> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(AppError::Validation("title must not be empty".to_owned()));
        }
        let excerpt =
            Excerpt::parse(self.excerpt.trim()).map_err(|e| AppError::Validation(e.to_string()))?;
        let content = self.content.trim().to_owned();
        if content.is_empty() {
            return Err(AppError::Validation("content must not be empty".to_owned()));
        }
        let image = parse_optional_image(&self.image)?;
        Ok(ParsedDraft {
            title,
            excerpt,
            content,
            is_highlighted: self.is_highlighted,
            image,
        })
    }
}

/// A saved post plus the notice to flash.
#[derive(Debug, Serialize)]
pub struct SavedPost {
    pub notice: &'static str,
    pub post: BlogPost,
}

#[derive(Debug, Serialize)]
pub struct RemovedPost {
    pub notice: &'static str,
}

/// `GET /admin/blog`
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Json<Vec<BlogPost>> {
    Json(state.store().blog().list_newest_first())
}

/// `POST /admin/blog`
#[instrument(skip(state, draft))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(draft): Json<PostDraft>,
) -> Result<Json<SavedPost>> {
    let parsed = draft.parse()?;
    let post = BlogPost::new(
        parsed.title,
        parsed.excerpt,
        parsed.content,
        parsed.image,
        parsed.is_highlighted,
    );
    state.store().blog().insert(post.clone())?;
    Ok(Json(SavedPost {
        notice: SAVED_NOTICE,
        post,
    }))
}

/// `PUT /admin/blog/{id}`
///
/// Edits keep the post's original publication date.
#[instrument(skip(state, draft))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<PostId>,
    Json(draft): Json<PostDraft>,
) -> Result<Json<SavedPost>> {
    let parsed = draft.parse()?;
    let post = state.store().blog().update(id, |post| {
        post.title = parsed.title;
        post.excerpt = parsed.excerpt;
        post.content = parsed.content;
        post.is_highlighted = parsed.is_highlighted;
        post.image = parsed.image;
    })?;
    Ok(Json(SavedPost {
        notice: SAVED_NOTICE,
        post,
    }))
}

/// `DELETE /admin/blog/{id}`
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<PostId>,
) -> Result<Json<RemovedPost>> {
    state.store().blog().remove(id)?;
    Ok(Json(RemovedPost {
        notice: REMOVED_NOTICE,
    }))
}

//! Image upload.
//!
//! Uploaded files are inlined as `data:` URLs so the JSON stores stay
//! self-contained; the returned reference goes straight onto a product,
//! post, or the hero image.

use axum::{Json, extract::Multipart};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use jumbo_meats_core::types::ImageRef;
use serde::Serialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;

/// Largest accepted image, in bytes.
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Request body limit for the upload route. Leaves headroom above
/// [`MAX_IMAGE_BYTES`] for multipart framing.
pub const MAX_UPLOAD_BYTES: usize = 6 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct UploadedImage {
    pub image: ImageRef,
}

/// `POST /admin/images`
///
/// Accepts a multipart form with a single `file` field.
#[instrument(skip(multipart))]
pub async fn upload(
    RequireAdmin(_admin): RequireAdmin,
    mut multipart: Multipart,
) -> Result<Json<UploadedImage>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let mime = field.content_type().map(ToOwned::to_owned).ok_or_else(|| {
            AppError::Validation("file field is missing a content type".to_owned())
        })?;
        if !mime.starts_with("image/") {
            return Err(AppError::Validation(format!(
                "unsupported content type: {mime}"
            )));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("uploaded file is empty".to_owned()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(AppError::Validation(format!(
                "image exceeds the {MAX_IMAGE_BYTES} byte limit"
            )));
        }

        let image = ImageRef::embedded(&mime, &STANDARD.encode(&bytes));
        return Ok(Json(UploadedImage { image }));
    }

    Err(AppError::BadRequest(
        "multipart body had no file field".to_owned(),
    ))
}

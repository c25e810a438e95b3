//! Customer testimonials.

use axum::Json;
use jumbo_meats_core::models::Testimonial;
use tracing::instrument;

use crate::defaults;

/// `GET /testimonials`
#[instrument]
pub async fn list_testimonials() -> Json<Vec<Testimonial>> {
    Json(defaults::testimonials())
}

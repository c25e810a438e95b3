//! Storefront landing payload.

use axum::{Json, extract::State};
use jumbo_meats_core::models::{BlogPost, Product, WebsiteSettings};
use serde::Serialize;
use tracing::instrument;

use crate::defaults::ASSISTANT_GREETING;
use crate::state::AppState;

/// Everything the landing page needs in a single response: shop identity,
/// the featured cuts, the highlighted posts for the news ticker, and the
/// assistant's opening line.
#[derive(Debug, Serialize)]
pub struct HomePayload {
    pub settings: WebsiteSettings,
    pub featured: Vec<Product>,
    pub highlights: Vec<BlogPost>,
    pub assistant_greeting: &'static str,
}

/// `GET /`
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Json<HomePayload> {
    let store = state.store();
    Json(HomePayload {
        settings: store.settings().get(),
        featured: store.catalog().featured(),
        highlights: store.blog().highlighted(),
        assistant_greeting: ASSISTANT_GREETING,
    })
}

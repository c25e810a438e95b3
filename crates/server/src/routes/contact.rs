//! Contact page payload.

use axum::{Json, extract::State};
use jumbo_meats_core::models::BusinessHours;
use serde::Serialize;
use tracing::instrument;

use crate::defaults::MAP_EMBED_URL;
use crate::state::AppState;

/// Contact details shown on the storefront, with the map embed for the
/// shop's location.
#[derive(Debug, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub hours: BusinessHours,
    pub map_embed_url: &'static str,
}

/// `GET /contact`
#[instrument(skip(state))]
pub async fn contact(State(state): State<AppState>) -> Json<ContactPayload> {
    let settings = state.store().settings().get();
    Json(ContactPayload {
        name: settings.name,
        address: settings.address,
        phone: settings.phone,
        whatsapp: settings.whatsapp,
        email: settings.email,
        hours: settings.hours,
        map_embed_url: MAP_EMBED_URL,
    })
}

//! Website settings endpoints. Primary admin only.

use axum::{Json, extract::State};
use jumbo_meats_core::models::{BusinessHours, WebsiteSettings};
use jumbo_meats_core::types::ImageRef;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequirePrimaryAdmin;
use crate::state::AppState;

/// Notice the back-office flashes after a save.
const SAVED_NOTICE: &str = "Settings Saved!";

/// Full settings document as submitted by the back-office form. A `PUT`
/// replaces the stored settings wholesale.
#[derive(Debug, Deserialize)]
pub struct SettingsDraft {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub hours: BusinessHours,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: String,
}

impl SettingsDraft {
    fn parse(self) -> Result<WebsiteSettings> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::Validation(
                "shop name must not be empty".to_owned(),
            ));
        }
        let whatsapp = self.whatsapp.trim().to_owned();
        if whatsapp.is_empty() {
            return Err(AppError::Validation(
                "WhatsApp number must not be empty".to_owned(),
            ));
        }
        let hero_image = ImageRef::parse(self.hero_image.trim())
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(WebsiteSettings {
            name,
            tagline: self.tagline,
            address: self.address,
            phone: self.phone,
            whatsapp,
            email: self.email,
            hours: self.hours,
            hero_title: self.hero_title,
            hero_subtitle: self.hero_subtitle,
            hero_image,
        })
    }
}

/// Saved settings plus the notice to flash.
#[derive(Debug, Serialize)]
pub struct SavedSettings {
    pub notice: &'static str,
    pub settings: WebsiteSettings,
}

/// `GET /admin/settings`
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    RequirePrimaryAdmin(_admin): RequirePrimaryAdmin,
) -> Json<WebsiteSettings> {
    Json(state.store().settings().get())
}

/// `PUT /admin/settings`
#[instrument(skip(state, draft))]
pub async fn update(
    State(state): State<AppState>,
    RequirePrimaryAdmin(_admin): RequirePrimaryAdmin,
    Json(draft): Json<SettingsDraft>,
) -> Result<Json<SavedSettings>> {
    let settings = state.store().settings().update(draft.parse()?)?;
    Ok(Json(SavedSettings {
        notice: SAVED_NOTICE,
        settings,
    }))
}

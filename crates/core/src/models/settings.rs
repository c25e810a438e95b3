//! Site settings model.

use serde::{Deserialize, Serialize};

use crate::types::ImageRef;

/// Opening hours, displayed verbatim on the contact page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessHours {
    pub weekday: String,
    pub saturday: String,
    pub sunday: String,
}

/// The singleton site configuration: business identity plus homepage hero
/// content. Only the primary admin may change it.
///
/// Phone, WhatsApp number, and email are free text because fresh installs
/// ship with placeholder values the owner replaces later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebsiteSettings {
    pub name: String,
    pub tagline: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    pub email: String,
    pub hours: BusinessHours,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image: ImageRef,
}

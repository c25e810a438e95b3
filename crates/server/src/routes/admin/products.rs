//! Inventory management endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use jumbo_meats_core::models::Product;
use jumbo_meats_core::types::{Category, ImageRef, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::parse_optional_image;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::state::AppState;

/// Notice the back-office flashes after a save.
const SAVED_NOTICE: &str = "Inventory Updated!";
/// Notice flashed after a delete.
const REMOVED_NOTICE: &str = "Item Removed.";

/// Product fields as submitted by the back-office form.
#[derive(Debug, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price_range: String,
    /// Image URL or data URL; empty means no image.
    #[serde(default)]
    pub image: String,
}

struct ParsedDraft {
    name: String,
    category: Category,
    description: String,
    price_range: String,
    image: Option<ImageRef>,
}

impl ProductDraft {
    fn parse(self) -> Result<ParsedDraft> {
        let name = self.name.trim().to_owned();
        if name.is_empty() {
            return Err(AppError::Validation(
                "product name must not be empty".to_owned(),
            ));
        }
        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let price_range = self.price_range.trim().to_owned();
        if price_range.is_empty() {
            return Err(AppError::Validation(
                "price range must not be empty".to_owned(),
            ));
        }
        let image = parse_optional_image(&self.image)?;
        Ok(ParsedDraft {
            name,
            category,
            description: self.description,
            price_range,
            image,
        })
    }
}

/// A saved product plus the notice to flash.
#[derive(Debug, Serialize)]
pub struct SavedProduct {
    pub notice: &'static str,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct RemovedProduct {
    pub notice: &'static str,
}

/// `GET /admin/products`
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Json<Vec<Product>> {
    Json(state.store().catalog().list())
}

/// `POST /admin/products`
#[instrument(skip(state, draft))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<SavedProduct>> {
    let parsed = draft.parse()?;
    let product = Product::new(
        parsed.name,
        parsed.category,
        parsed.description,
        parsed.price_range,
        parsed.image,
    );
    state.store().catalog().insert(product.clone())?;
    Ok(Json(SavedProduct {
        notice: SAVED_NOTICE,
        product,
    }))
}

/// `PUT /admin/products/{id}`
#[instrument(skip(state, draft))]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<SavedProduct>> {
    let parsed = draft.parse()?;
    let product = state.store().catalog().update(id, |product| {
        product.name = parsed.name;
        product.category = parsed.category;
        product.description = parsed.description;
        product.price_range = parsed.price_range;
        product.image = parsed.image;
    })?;
    Ok(Json(SavedProduct {
        notice: SAVED_NOTICE,
        product,
    }))
}

/// `DELETE /admin/products/{id}`
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<ProductId>,
) -> Result<Json<RemovedProduct>> {
    state.store().catalog().remove(id)?;
    Ok(Json(RemovedProduct {
        notice: REMOVED_NOTICE,
    }))
}

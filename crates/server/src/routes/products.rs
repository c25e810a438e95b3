//! Catalog browsing.

use axum::{
    Json,
    extract::{Query, State},
};
use jumbo_meats_core::models::Product;
use jumbo_meats_core::types::CategoryFilter;
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;

/// Filters accepted by the catalog listing. Both are optional; omitting
/// them returns the full catalog.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    /// A category name, or `"All"` for no category filter.
    #[serde(default)]
    pub category: CategoryFilter,
    /// Case-insensitive substring match on product names.
    #[serde(default)]
    pub q: String,
}

/// `GET /products`
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> Json<Vec<Product>> {
    Json(state.store().catalog().filter(params.category, &params.q))
}

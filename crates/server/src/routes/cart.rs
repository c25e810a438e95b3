//! Session-backed shopping basket.
//!
//! The basket lives entirely in the visitor's session; nothing is persisted
//! server-side. Lines are keyed by product id, so adding a product that is
//! already in the basket bumps its quantity instead of adding a second line.

use axum::{
    Json,
    extract::{Path, State},
    response::Redirect,
};
use jumbo_meats_core::models::CartItem;
use jumbo_meats_core::types::ProductId;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::services::{cart, checkout};
use crate::state::AppState;

// ============================================================================
// Request and response types
// ============================================================================

/// Basket contents plus the line-count badge value.
#[derive(Debug, Serialize)]
pub struct CartPayload {
    pub items: Vec<CartItem>,
    pub item_count: u64,
}

impl CartPayload {
    fn new(items: Vec<CartItem>) -> Self {
        let item_count = cart::item_count(&items);
        Self { items, item_count }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
}

#[derive(Debug, Deserialize)]
pub struct AdjustQuantityRequest {
    /// Signed change applied to the line quantity, e.g. `-1` or `2`.
    pub delta: i64,
}

// ============================================================================
// Session helpers
// ============================================================================

async fn load_cart(session: &Session) -> Vec<CartItem> {
    session
        .get(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

async fn save_cart(session: &Session, items: &[CartItem]) -> Result<()> {
    session
        .insert(session_keys::CART, items)
        .await
        .map_err(|e| AppError::Internal(format!("failed to persist cart: {e}")))
}

// ============================================================================
// Handlers
// ============================================================================

/// `GET /cart`
#[instrument(skip(session))]
pub async fn view_cart(session: Session) -> Json<CartPayload> {
    Json(CartPayload::new(load_cart(&session).await))
}

/// `POST /cart/items`
///
/// Adds one unit of a product to the basket.
#[instrument(skip(state, session))]
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<CartPayload>> {
    let product = state
        .store()
        .catalog()
        .find(request.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {} not found", request.product_id)))?;

    let mut items = load_cart(&session).await;
    cart::add_item(&mut items, product);
    save_cart(&session, &items).await?;
    Ok(Json(CartPayload::new(items)))
}

/// `POST /cart/items/{id}/quantity`
///
/// Applies a signed delta to a line's quantity. Quantities never drop below
/// one; removal is a separate operation.
#[instrument(skip(session))]
pub async fn adjust_quantity(
    session: Session,
    Path(id): Path<ProductId>,
    Json(request): Json<AdjustQuantityRequest>,
) -> Result<Json<CartPayload>> {
    let mut items = load_cart(&session).await;
    cart::adjust_quantity(&mut items, id, request.delta);
    save_cart(&session, &items).await?;
    Ok(Json(CartPayload::new(items)))
}

/// `DELETE /cart/items/{id}`
#[instrument(skip(session))]
pub async fn remove_item(
    session: Session,
    Path(id): Path<ProductId>,
) -> Result<Json<CartPayload>> {
    let mut items = load_cart(&session).await;
    cart::remove_item(&mut items, id);
    save_cart(&session, &items).await?;
    Ok(Json(CartPayload::new(items)))
}

/// `GET /cart/checkout`
///
/// Redirects to a WhatsApp conversation with the shop, prefilled with the
/// order message. An empty basket redirects back to the basket instead.
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Redirect {
    let items = load_cart(&session).await;
    if items.is_empty() {
        return Redirect::to("/cart");
    }
    let settings = state.store().settings().get();
    let link = checkout::whatsapp_link(&settings.whatsapp, &settings.name, &items);
    Redirect::to(&link)
}

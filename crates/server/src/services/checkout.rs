//! WhatsApp checkout.
//!
//! Checkout hands the order to the shop over WhatsApp: the basket is
//! rendered into a plain-text message and wrapped in a `wa.me` deep link
//! the browser is redirected to. No payment or order state is kept.

use jumbo_meats_core::CartItem;

/// Render basket lines as `- {name} (x{quantity})`, one per line.
#[must_use]
pub fn order_lines(items: &[CartItem]) -> String {
    items
        .iter()
        .map(|i| format!("- {} (x{})", i.product.name, i.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full order message addressed to the shop.
#[must_use]
pub fn order_message(shop_name: &str, items: &[CartItem]) -> String {
    format!(
        "Hi {shop_name}! I would like to place an order for:\n\n{}\n\nPlease confirm availability and total price.",
        order_lines(items)
    )
}

/// Build the `wa.me` link carrying the URL-encoded order message.
///
/// The WhatsApp number is used verbatim; the shop configures it in
/// settings, digits only with country code.
#[must_use]
pub fn whatsapp_link(whatsapp: &str, shop_name: &str, items: &[CartItem]) -> String {
    let message = order_message(shop_name, items);
    format!("https://wa.me/{whatsapp}?text={}", urlencoding::encode(&message))
}

//! Session cart model.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// One line in a shopping basket: a product snapshot plus a quantity.
///
/// Carts live in the visitor's session only and are never written to the
/// content store. The quantity is at least 1; removing a line is a separate
/// operation from decrementing it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// A new line for `product` with quantity 1.
    #[must_use]
    pub const fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }
}

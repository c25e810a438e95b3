//! Catalog product model.

use serde::{Deserialize, Serialize};

use crate::types::{Category, ImageRef, ProductId};

/// A cut or item sold by the shop.
///
/// Prices are free text (for example `"$12.50 /kg"` or `"$5 per pack"`) and
/// are never parsed as numbers; the shop confirms totals over WhatsApp at
/// checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub price_range: String,
    pub image: Option<ImageRef>,
}

impl Product {
    /// Create a product with a freshly assigned identifier.
    #[must_use]
    pub fn new(
        name: String,
        category: Category,
        description: String,
        price_range: String,
        image: Option<ImageRef>,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name,
            category,
            description,
            price_range,
            image,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Product::new(
            "Ribeye".to_owned(),
            Category::Beef,
            String::new(),
            "$15 /kg".to_owned(),
            None,
        );
        let b = Product::new(
            "Ribeye".to_owned(),
            Category::Beef,
            String::new(),
            "$15 /kg".to_owned(),
            None,
        );
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serde_roundtrip() {
        let product = Product::new(
            "Boerewors".to_owned(),
            Category::Boerewors,
            "Traditional farm-style sausage.".to_owned(),
            "$8 /kg".to_owned(),
            Some(ImageRef::parse("https://example.com/wors.jpg").unwrap()),
        );
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}

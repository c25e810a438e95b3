//! Shopping basket logic.
//!
//! The basket lives in the visitor's session, so these are pure functions
//! over the item list rather than a store-backed service. Quantities never
//! drop below one; removing a line is an explicit operation.

use jumbo_meats_core::{CartItem, Product, ProductId};

/// Add a product to the basket.
///
/// A product already in the basket gets its quantity bumped by one instead
/// of a second line.
pub fn add_item(items: &mut Vec<CartItem>, product: Product) {
    if let Some(item) = items.iter_mut().find(|i| i.product.id == product.id) {
        item.quantity += 1;
    } else {
        items.push(CartItem::new(product));
    }
}

/// Adjust the quantity of a basket line by `delta`.
///
/// The quantity is clamped to a minimum of one, so a large negative delta
/// leaves a single unit in the basket rather than removing the line.
/// Unknown product ids are ignored.
pub fn adjust_quantity(items: &mut [CartItem], id: ProductId, delta: i64) {
    if let Some(item) = items.iter_mut().find(|i| i.product.id == id) {
        let adjusted = i64::from(item.quantity).saturating_add(delta).max(1);
        item.quantity = u32::try_from(adjusted).unwrap_or(u32::MAX);
    }
}

/// Remove a basket line entirely.
pub fn remove_item(items: &mut Vec<CartItem>, id: ProductId) {
    items.retain(|i| i.product.id != id);
}

/// Total number of units across all basket lines.
#[must_use]
pub fn item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity)).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use jumbo_meats_core::Category;

    fn product(name: &str) -> Product {
        Product::new(
            name.to_owned(),
            Category::Beef,
            String::from("Fresh cut"),
            String::from("$10/kg"),
            None,
        )
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut items = Vec::new();
        let ribeye = product("Ribeye");

        for _ in 0..4 {
            add_item(&mut items, ribeye.clone());
        }

        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().quantity, 4);
    }

    #[test]
    fn different_products_get_their_own_lines() {
        let mut items = Vec::new();
        add_item(&mut items, product("Ribeye"));
        add_item(&mut items, product("Wors"));

        assert_eq!(items.len(), 2);
        assert_eq!(item_count(&items), 2);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let mut items = Vec::new();
        let ribeye = product("Ribeye");
        let id = ribeye.id;
        add_item(&mut items, ribeye);

        adjust_quantity(&mut items, id, -100);
        assert_eq!(items.first().unwrap().quantity, 1);

        adjust_quantity(&mut items, id, i64::MIN);
        assert_eq!(items.first().unwrap().quantity, 1);
    }

    #[test]
    fn positive_and_negative_deltas_apply() {
        let mut items = Vec::new();
        let ribeye = product("Ribeye");
        let id = ribeye.id;
        add_item(&mut items, ribeye);

        adjust_quantity(&mut items, id, 5);
        assert_eq!(items.first().unwrap().quantity, 6);

        adjust_quantity(&mut items, id, -2);
        assert_eq!(items.first().unwrap().quantity, 4);
    }

    #[test]
    fn adjusting_unknown_product_is_a_no_op() {
        let mut items = Vec::new();
        add_item(&mut items, product("Ribeye"));

        adjust_quantity(&mut items, ProductId::generate(), 3);

        assert_eq!(items.first().unwrap().quantity, 1);
    }

    #[test]
    fn remove_deletes_the_whole_line() {
        let mut items = Vec::new();
        let ribeye = product("Ribeye");
        let id = ribeye.id;
        add_item(&mut items, ribeye);
        add_item(&mut items, product("Wors"));

        remove_item(&mut items, id);

        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|i| i.product.id != id));
    }

    #[test]
    fn item_count_sums_quantities() {
        let mut items = Vec::new();
        let ribeye = product("Ribeye");
        let id = ribeye.id;
        add_item(&mut items, ribeye);
        adjust_quantity(&mut items, id, 2);
        add_item(&mut items, product("Wors"));

        assert_eq!(item_count(&items), 4);
    }
}

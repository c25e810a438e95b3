//! Product catalog store.
//!
//! Backed by the `jumbo_products` blob. Matching for the storefront filter is
//! exact on category and case-insensitive substring on the product name;
//! result order is catalog order, with no ranking or pagination.

use jumbo_meats_core::Product;
use jumbo_meats_core::types::{CategoryFilter, ProductId};
use parking_lot::RwLock;

use super::{JsonBlobStore, StoreError, keys};

/// How many products the homepage features.
const FEATURED_COUNT: usize = 3;

/// Store for catalog products.
pub struct CatalogStore {
    blobs: JsonBlobStore,
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// Load the catalog from its blob (or an empty catalog).
    #[must_use]
    pub fn load(blobs: JsonBlobStore) -> Self {
        let products = blobs.load_or(keys::PRODUCTS, Vec::new);
        Self {
            blobs,
            products: RwLock::new(products),
        }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    /// The products featured on the homepage (the first few in the catalog).
    #[must_use]
    pub fn featured(&self) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .take(FEATURED_COUNT)
            .cloned()
            .collect()
    }

    /// Products passing the category filter and name search.
    #[must_use]
    pub fn filter(&self, category: CategoryFilter, query: &str) -> Vec<Product> {
        filter_products(&self.products.read(), category, query)
    }

    /// Look up one product.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    /// Append a product and persist the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if writing the blob fails.
    pub fn insert(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products.write();
        products.push(product);
        self.blobs.save(keys::PRODUCTS, &*products)
    }

    /// Mutate the product with `id` in place and persist the catalog.
    ///
    /// The identifier is not touchable through `mutate`; callers edit the
    /// remaining fields and the entry keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or a write error.
    pub fn update<F>(&self, id: ProductId, mutate: F) -> Result<Product, StoreError>
    where
        F: FnOnce(&mut Product),
    {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        mutate(product);
        product.id = id;
        let updated = product.clone();

        self.blobs.save(keys::PRODUCTS, &*products)?;
        Ok(updated)
    }

    /// Remove a product and persist the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or a write error.
    pub fn remove(&self, id: ProductId) -> Result<(), StoreError> {
        let mut products = self.products.write();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(StoreError::NotFound);
        }
        self.blobs.save(keys::PRODUCTS, &*products)
    }
}

/// Filter `products` by category and case-insensitive name substring.
///
/// An empty query matches every name. An empty catalog yields an empty
/// result for any input.
#[must_use]
pub fn filter_products(
    products: &[Product],
    category: CategoryFilter,
    query: &str,
) -> Vec<Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| category.matches(p.category) && p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jumbo_meats_core::types::Category;

    use super::*;

    fn product(name: &str, category: Category) -> Product {
        Product::new(
            name.to_owned(),
            category,
            String::new(),
            "$10 /kg".to_owned(),
            None,
        )
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("Ribeye Steak", Category::Beef),
            product("T-Bone Steak", Category::Beef),
            product("Chicken Wings", Category::Chicken),
            product("Farm Boerewors", Category::Boerewors),
        ]
    }

    #[test]
    fn test_filter_empty_catalog_is_empty_not_an_error() {
        let result = filter_products(&[], CategoryFilter::All, "steak");
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let result = filter_products(&catalog, CategoryFilter::All, "sTeAk");
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|p| p.name.contains("Steak")));
    }

    #[test]
    fn test_filter_combines_category_and_query() {
        let catalog = sample_catalog();
        let result = filter_products(&catalog, CategoryFilter::Only(Category::Beef), "t-bone");
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().name, "T-Bone Steak");
    }

    #[test]
    fn test_filter_empty_query_keeps_category_matches() {
        let catalog = sample_catalog();
        let result = filter_products(&catalog, CategoryFilter::Only(Category::Chicken), "");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = sample_catalog();
        let result = filter_products(&catalog, CategoryFilter::All, "");
        let names: Vec<_> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Ribeye Steak",
                "T-Bone Steak",
                "Chicken Wings",
                "Farm Boerewors"
            ]
        );
    }

    #[test]
    fn test_store_crud_and_featured() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::load(JsonBlobStore::open(dir.path()).unwrap());

        for p in sample_catalog() {
            store.insert(p).unwrap();
        }
        assert_eq!(store.list().len(), 4);
        assert_eq!(store.featured().len(), 3);
        assert_eq!(store.featured().first().unwrap().name, "Ribeye Steak");

        let id = store.list().first().unwrap().id;
        let updated = store
            .update(id, |p| p.price_range = "$18 /kg".to_owned())
            .unwrap();
        assert_eq!(updated.price_range, "$18 /kg");
        assert_eq!(updated.id, id);

        store.remove(id).unwrap();
        assert!(store.find(id).is_none());
        assert!(matches!(store.remove(id), Err(StoreError::NotFound)));
    }

    #[test]
    fn test_store_persists_across_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = JsonBlobStore::open(dir.path()).unwrap();

        let store = CatalogStore::load(blobs.clone());
        store.insert(product("Brisket", Category::Beef)).unwrap();
        let written = store.list();

        let reloaded = CatalogStore::load(blobs);
        assert_eq!(reloaded.list(), written);
    }
}

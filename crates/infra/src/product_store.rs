use std::collections::HashMap;
use std::sync::RwLock;

use shopfront_catalog::{Product, ProductId};
use shopfront_shopping::{ProductStore, StoreError};

/// In-memory product store.
///
/// Intended for tests/dev. Owns the canonical product state; lookups hand out
/// clones, and `save` overwrites by id.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or overwrite one product (upsert by id).
    pub fn insert(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        products.insert(product.id_typed(), product);
        Ok(())
    }

    /// Read the canonical state of one product.
    pub fn get(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(products.get(id).cloned())
    }
}

impl ProductStore for InMemoryProductStore {
    fn get_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        // Names are not required to be unique; the lowest id wins so lookups
        // stay deterministic.
        Ok(products
            .values()
            .filter(|p| p.name() == name)
            .min_by_key(|p| p.id_typed())
            .cloned())
    }

    fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        let products = self
            .products
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let mut all: Vec<Product> = products.values().cloned().collect();
        // Deterministic listing order.
        all.sort_by_key(Product::id_typed);
        Ok(all)
    }

    fn save(&self, product: &Product) -> Result<(), StoreError> {
        let mut products = self
            .products
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        products.insert(product.id_typed(), product.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u64, name: &str, available: u32) -> Product {
        Product::new(ProductId::new(id), name, available).unwrap()
    }

    #[test]
    fn lookup_miss_is_none() {
        let store = InMemoryProductStore::new();
        assert_eq!(store.get_by_name("nonexistent").unwrap(), None);
        assert_eq!(store.get(&ProductId::new(1)).unwrap(), None);
    }

    #[test]
    fn save_overwrites_by_id() {
        let store = InMemoryProductStore::new();
        store.insert(test_product(1, "apple", 3)).unwrap();

        let updated = test_product(1, "apple", 1);
        store.save(&updated).unwrap();
        store.save(&updated).unwrap();

        assert_eq!(store.get(&ProductId::new(1)).unwrap(), Some(updated));
        assert_eq!(store.get_all().unwrap().len(), 1);
    }

    #[test]
    fn get_all_lists_products_in_id_order() {
        let store = InMemoryProductStore::new();
        store.insert(test_product(3, "cider", 2)).unwrap();
        store.insert(test_product(1, "apple", 3)).unwrap();
        store.insert(test_product(2, "cone jam", 5)).unwrap();

        let ids: Vec<u64> = store
            .get_all()
            .unwrap()
            .iter()
            .map(|p| p.id_typed().as_u64())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn name_collisions_resolve_to_the_lowest_id() {
        let store = InMemoryProductStore::new();
        store.insert(test_product(9, "apple", 1)).unwrap();
        store.insert(test_product(4, "apple", 2)).unwrap();

        let found = store.get_by_name("apple").unwrap().unwrap();
        assert_eq!(found.id_typed(), ProductId::new(4));
    }
}

use std::sync::Arc;

use thiserror::Error;

use shopfront_catalog::Product;

/// Product store operation error.
///
/// Infrastructure failures only (storage, locking); deterministic domain
/// failures are modeled in `shopfront_core::DomainError`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Lookup/persistence collaborator for catalog products.
///
/// Implementations own the canonical product state; callers only ever see
/// clones of it.
///
/// - `get_by_name` miss is `Ok(None)`.
/// - `save` has idempotent overwrite semantics keyed by product id.
pub trait ProductStore: Send + Sync {
    /// Look up one product by name.
    fn get_by_name(&self, name: &str) -> Result<Option<Product>, StoreError>;

    /// Return every known product.
    fn get_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Persist one product's state (upsert by id).
    fn save(&self, product: &Product) -> Result<(), StoreError>;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        (**self).get_by_name(name)
    }

    fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).get_all()
    }

    fn save(&self, product: &Product) -> Result<(), StoreError> {
        (**self).save(product)
    }
}

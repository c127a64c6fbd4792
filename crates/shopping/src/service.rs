use thiserror::Error;
use tracing::{debug, warn};

use shopfront_catalog::{Product, ProductId};
use shopfront_core::DomainError;

use crate::cart::Cart;
use crate::store::{ProductStore, StoreError};

/// Checkout/lookup failure.
#[derive(Debug, Error)]
pub enum ShoppingError {
    /// A cart line requested more units than the product has on hand.
    ///
    /// Checkout is all-or-nothing: when this is raised, nothing was mutated
    /// or persisted.
    #[error("insufficient stock for '{name}' (id {product_id}): requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        name: String,
        requested: u32,
        available: u32,
    },

    /// Store-level failure, passed through unchanged.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Deterministic domain failure surfaced by an entity operation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Mediates between callers and the product store; enforces the
/// stock-sufficiency policy at checkout.
///
/// The store is injected at construction and is the service's only state.
/// Works with an owned store or a shared `Arc<S>` (see the blanket
/// [`ProductStore`] impl).
#[derive(Debug)]
pub struct ShoppingService<S> {
    store: S,
}

impl<S> ShoppingService<S>
where
    S: ProductStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Look up one product by name.
    ///
    /// Pure pass-through: whatever the store returns (including a miss) is
    /// returned unchanged, and the name is not validated here.
    pub fn product_by_name(&self, name: &str) -> Result<Option<Product>, StoreError> {
        self.store.get_by_name(name)
    }

    /// List every known product. One store read per call, no side effects.
    pub fn all_products(&self) -> Result<Vec<Product>, StoreError> {
        self.store.get_all()
    }

    /// Check out a cart.
    ///
    /// Runs in two phases: every line is validated against on-hand stock
    /// first, and only then are counts decremented and persisted. Any
    /// shortfall aborts the whole operation before a single mutation; on
    /// success each distinct product is saved exactly once. An empty cart is
    /// "nothing to buy" and returns `Ok(false)` without touching the store.
    ///
    /// Validation order across lines is unspecified (the cart mapping is
    /// unordered); the returned error identifies the offending product.
    pub fn buy(&self, cart: &Cart) -> Result<bool, ShoppingError> {
        if cart.is_empty() {
            debug!("checkout skipped: empty cart");
            return Ok(false);
        }

        for line in cart.lines() {
            let product = line.product();
            if !product.can_fulfill(line.quantity()) {
                warn!(
                    product_id = %product.id_typed(),
                    requested = line.quantity(),
                    available = product.available(),
                    "checkout rejected: insufficient stock"
                );
                return Err(ShoppingError::InsufficientStock {
                    product_id: product.id_typed(),
                    name: product.name().to_string(),
                    requested: line.quantity(),
                    available: product.available(),
                });
            }
        }

        // All lines validated; commit each one.
        for line in cart.lines() {
            let mut product = line.product().clone();
            product.subtract(line.quantity())?;
            self.store.save(&product)?;
        }

        debug!(lines = cart.len(), "checkout committed");
        Ok(true)
    }
}

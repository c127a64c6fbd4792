use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shopfront_catalog::{Product, ProductId};

/// Cart line: a product snapshot plus the requested quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product: Product,
    quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// A transient collection of (product, requested quantity) pairs for a single
/// purchase attempt.
///
/// The cart holds product snapshots; the store keeps the canonical state. No
/// invariants are enforced here: an empty cart is a meaningful "nothing to
/// buy" state, and checkout validates quantities against stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: HashMap<ProductId, CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a line into the cart.
    ///
    /// Re-adding a product replaces its existing line (map semantics).
    pub fn add(&mut self, product: Product, quantity: u32) {
        self.lines
            .insert(product.id_typed(), CartLine::new(product, quantity));
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over the cart's lines. Iteration order is unspecified.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: u64, available: u32) -> Product {
        Product::new(ProductId::new(id), format!("product-{id}"), available).unwrap()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.lines().count(), 0);
    }

    #[test]
    fn add_keeps_one_line_per_product() {
        let mut cart = Cart::new();
        cart.add(test_product(1, 5), 2);
        cart.add(test_product(2, 5), 1);
        assert_eq!(cart.len(), 2);

        // Re-adding replaces the line for that product.
        cart.add(test_product(1, 5), 4);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.line(&ProductId::new(1)).unwrap().quantity(), 4);
    }

    #[test]
    fn line_returns_the_stored_snapshot() {
        let mut cart = Cart::new();
        let product = test_product(3, 7);
        cart.add(product.clone(), 2);

        let line = cart.line(&ProductId::new(3)).unwrap();
        assert_eq!(line.product(), &product);
        assert_eq!(line.quantity(), 2);
    }
}

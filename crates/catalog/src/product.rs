use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity};

/// Product identifier.
///
/// Opaque to the domain; whoever seeds the store assigns them (sequential
/// integers in practice).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Entity: a purchasable product and its on-hand count.
///
/// The store owns the canonical instance; carts and services work on clones.
/// The available count is non-negative by construction (`u32`) and only ever
/// shrinks through the checked [`Product::subtract`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    available: u32,
}

impl Product {
    /// Create a product with an initial on-hand count.
    pub fn new(id: ProductId, name: impl Into<String>, available: u32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { id, name, available })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    /// Rename the product. Identity lives in the id, so names may change freely.
    pub fn rename(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        self.name = name;
        Ok(())
    }

    /// Check whether a request for `quantity` units can be served from stock.
    pub fn can_fulfill(&self, quantity: u32) -> bool {
        quantity <= self.available
    }

    /// Remove `quantity` units from stock.
    ///
    /// Rejected before mutation when the request exceeds the on-hand count;
    /// the available count never goes negative.
    pub fn subtract(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.available {
            return Err(DomainError::invariant(format!(
                "cannot subtract {quantity} units, only {} available",
                self.available
            )));
        }
        self.available -= quantity;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

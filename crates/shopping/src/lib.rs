//! Shopping domain module: carts, checkout, and the product store seam.
//!
//! Business rules live here as deterministic logic over an injected store
//! collaborator (no IO of its own, no HTTP, no storage).

pub mod cart;
pub mod service;
pub mod store;

pub use cart::{Cart, CartLine};
pub use service::{ShoppingError, ShoppingService};
pub use store::{ProductStore, StoreError};

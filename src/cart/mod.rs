//! Cart module
//!
//! # Module structure
//!
//! - [`CartItem`] - persisted cart line
//! - [`CartManager`] - add/remove/quantity operations
//! - [`reconcile`] / [`cleanup`] - keep lines valid across catalog changes

mod item;
mod manager;
mod reconcile;

pub use item::CartItem;
pub use manager::CartManager;
pub use reconcile::{cleanup, reconcile};

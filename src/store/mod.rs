//! Durable store module
//!
//! # Module structure
//!
//! - [`Store`] - redb-backed collections with change notifications
//! - [`StoreEvent`] - notifications broadcast to view subscribers
//! - [`StoreError`] - storage failures

mod storage;

pub use storage::{CART_KEY, CATALOG_KEY, ORDERS_KEY, Store, StoreError, StoreEvent, StoreResult};

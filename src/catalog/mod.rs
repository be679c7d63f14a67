//! Product catalog module
//!
//! # Module structure
//!
//! - [`Product`] / [`ProductCatalog`] - catalog model keyed by slug
//! - [`ProductEntry`] / [`build_catalog`] - rebuild from rendered data
//! - [`CatalogManager`] - persistence plus cart reconciliation on change

mod builder;
mod manager;
mod product;

pub use builder::{ProductEntry, build_catalog, parse_price_per_kg};
pub use manager::CatalogManager;
pub use product::{Product, ProductCatalog, slugify};

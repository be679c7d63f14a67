//! Headless storefront core
//!
//! # Overview
//!
//! Keeps a persisted product catalog and shopping cart mutually
//! consistent as product data changes. Pricing and order submission
//! build on the same store:
//!
//! - **Catalog** (`catalog`): slug-keyed snapshot rebuilt from the
//!   rendered product data, with explicit change notification
//! - **Cart** (`cart`): persisted lines, reconciled on every catalog
//!   change so renames remap instead of orphaning them
//! - **Pricing** (`pricing`): display resolution and totals with a
//!   fixed tax rate and flat delivery fee
//! - **Checkout** (`checkout`): validation, order construction and a
//!   pluggable delivery transport
//! - **Services** (`services`): thin clients for the contact and
//!   account endpoints
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/       # configuration
//! ├── store/      # durable collections + change events
//! ├── catalog/    # product model, builder, change notification
//! ├── cart/       # cart lines, operations, reconciliation
//! ├── pricing/    # display model and totals
//! ├── checkout/   # validation, order submission, transports
//! ├── services/   # contact + account endpoint clients
//! └── utils/      # errors, logging, validation helpers
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod pricing;
pub mod services;
pub mod store;
pub mod utils;

// Re-export the types embedders reach for first
pub use cart::{CartItem, CartManager};
pub use catalog::{CatalogManager, Product, ProductCatalog, ProductEntry};
pub use checkout::{
    CheckoutManager, CustomerDetails, HttpOrderTransport, LocalLogTransport, Order, OrderTransport,
    PaymentDetails, PaymentMethod,
};
pub use core::Config;
pub use pricing::{CartLine, CartTotals, build_cart_view, calculate_totals};
pub use services::{AccountClient, ContactClient, ContactMessage};
pub use store::{Store, StoreEvent};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

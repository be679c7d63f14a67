//! Pricing module
//!
//! Resolves cart lines against the catalog for display and computes
//! the order totals (subtotal, tax, delivery, grand total).

mod totals;

pub use totals::*;

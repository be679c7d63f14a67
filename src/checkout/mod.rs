//! Checkout module
//!
//! # Module structure
//!
//! - [`CustomerDetails`] / [`PaymentDetails`] / [`Order`] - checkout model
//! - [`CheckoutManager`] - validation, pricing, delivery, recording
//! - [`OrderTransport`] - delivery seam (local log or backend POST)

mod order;
mod submit;
mod transport;

pub use order::{CustomerDetails, Order, PaymentDetails, PaymentMethod};
pub use submit::CheckoutManager;
pub use transport::{HttpOrderTransport, LocalLogTransport, OrderTransport};

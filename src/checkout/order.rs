//! Order model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicI64, Ordering};

use crate::cart::CartItem;

/// Customer contact block captured at checkout
///
/// Older persisted entries may lack fields; absent ones read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Accepted payment methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery, the storefront default
    #[default]
    Cod,
    Card,
    Upi,
}

/// Method-specific fields collected by the payment form
///
/// Card and UPI details are validated and then discarded; only the
/// method tag is recorded on the order.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentDetails {
    /// Cash on delivery; nothing further to validate
    Cod,
    Card {
        number: String,
        holder: String,
        expiry: String,
        cvv: String,
    },
    Upi {
        id: String,
    },
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            PaymentDetails::Cod => PaymentMethod::Cod,
            PaymentDetails::Card { .. } => PaymentMethod::Card,
            PaymentDetails::Upi { .. } => PaymentMethod::Upi,
        }
    }
}

/// A placed order; immutable once recorded
///
/// Like the cart shapes, reads tolerate fields absent from older
/// entries instead of failing the whole order log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// `"ORD-"` plus a millisecond timestamp, unique within the process
    #[serde(default)]
    pub id: String,
    #[serde(default = "epoch")]
    pub date: DateTime<Utc>,
    /// Cart snapshot at submission time
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub customer: CustomerDetails,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub delivery: f64,
    #[serde(default)]
    pub total: f64,
}

/// Fallback date for entries that predate the field
fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

static LAST_ORDER_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Time-based order id, nudged forward when two submissions land in
/// the same millisecond
pub(crate) fn next_order_id() -> String {
    let now = Utc::now().timestamp_millis();
    let prev = LAST_ORDER_MILLIS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(now.max(last + 1))
        })
        .unwrap_or(0);
    format!("ORD-{}", now.max(prev + 1))
}

//! Cart pricing and display model
//!
//! Logic for pricing the cart against the current catalog.
//! Uses rust_decimal for precise calculations, stores as f64.

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::cart::CartItem;
use crate::catalog::ProductCatalog;

/// Fixed tax rate applied to the subtotal
pub const TAX_RATE: f64 = 0.05;
/// Flat delivery fee in currency units
pub const DELIVERY_FEE: f64 = 50.0;
/// Fallback image when neither catalog nor cart carries one
pub const DEFAULT_IMAGE: &str = "images/default.jpg";
/// Display name for lines that no longer resolve and carry no cached name
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// One cart line resolved against the catalog for display
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub weight: u32,
    pub quantity: u32,
    pub price_per_kg: f64,
    /// `price_per_kg * weight * quantity`, rounded
    pub line_total: f64,
}

/// Monetary totals for a cart, every field rounded to 2 decimal places
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery: f64,
    pub total: f64,
}

/// Exact (unrounded) value of one line; saturates instead of
/// overflowing on extreme inputs
fn line_subtotal(item: &CartItem, price_per_kg: f64) -> Decimal {
    to_decimal(price_per_kg)
        .saturating_mul(Decimal::from(item.weight))
        .saturating_mul(Decimal::from(item.quantity))
}

fn cached_or_default_image(item: &CartItem) -> String {
    item.image
        .as_deref()
        .filter(|image| !image.is_empty())
        .unwrap_or(DEFAULT_IMAGE)
        .to_string()
}

/// Resolve every cart line for display
///
/// Lines whose product vanished from the catalog render as a
/// placeholder (cached name or [`UNKNOWN_PRODUCT`], price 0) rather
/// than failing the whole view.
pub fn build_cart_view(items: &[CartItem], catalog: &ProductCatalog) -> Vec<CartLine> {
    items
        .iter()
        .map(|item| match catalog.get(&item.product_id) {
            Some(product) => CartLine {
                product_id: item.product_id.clone(),
                name: product.name.clone(),
                image: if product.image.is_empty() {
                    cached_or_default_image(item)
                } else {
                    product.image.clone()
                },
                weight: item.weight,
                quantity: item.quantity,
                price_per_kg: product.price_per_kg,
                line_total: to_f64(line_subtotal(item, product.price_per_kg)),
            },
            None => CartLine {
                product_id: item.product_id.clone(),
                name: if item.original_name.is_empty() {
                    UNKNOWN_PRODUCT.to_string()
                } else {
                    item.original_name.clone()
                },
                image: cached_or_default_image(item),
                weight: item.weight,
                quantity: item.quantity,
                price_per_kg: 0.0,
                line_total: 0.0,
            },
        })
        .collect()
}

/// Subtotal, 5% tax, flat delivery fee, grand total
///
/// Unresolvable lines price at zero, matching the placeholder the
/// view shows for them. The delivery fee applies even to an empty
/// cart; checkout rejects empty carts before this matters.
pub fn calculate_totals(items: &[CartItem], catalog: &ProductCatalog) -> CartTotals {
    let mut subtotal = Decimal::ZERO;
    for item in items {
        let price_per_kg = catalog
            .get(&item.product_id)
            .map(|p| p.price_per_kg)
            .unwrap_or(0.0);
        subtotal = subtotal.saturating_add(line_subtotal(item, price_per_kg));
    }
    let tax = subtotal.saturating_mul(to_decimal(TAX_RATE));
    let delivery = to_decimal(DELIVERY_FEE);
    let total = subtotal.saturating_add(tax).saturating_add(delivery);

    CartTotals {
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        delivery: to_f64(delivery),
        total: to_f64(total),
    }
}

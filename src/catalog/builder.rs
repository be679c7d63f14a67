//! Catalog builder: rendered product entries -> catalog snapshot

use serde::{Deserialize, Serialize};

use super::product::{Product, ProductCatalog, slugify};

/// Raw product data as currently rendered by the product-view owner
///
/// The owner re-sends the full entry list on every product change;
/// [`build_catalog`] turns it into a keyed snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    /// Display name
    pub name: String,
    /// Formatted price text, e.g. `"Rs. 750/kg"`
    pub price_text: String,
    #[serde(default)]
    pub image: String,
    /// Offered weight labels, e.g. `["1kg", "5kg"]`
    #[serde(default)]
    pub weight_options: Vec<String>,
    /// Tracked identity across renames; the display name is used when
    /// the owner supplies none (a brand-new product)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_name: Option<String>,
}

/// Parse the numeric price out of formatted text like `"Rs. 750/kg"`
///
/// Takes the first run of digits (with at most one decimal point);
/// unparsable text yields 0 rather than failing the whole rebuild.
pub fn parse_price_per_kg(text: &str) -> f64 {
    let bytes = text.as_bytes();
    let Some(start) = bytes.iter().position(|b| b.is_ascii_digit()) else {
        return 0.0;
    };
    let mut end = start;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => end += 1,
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }
    text[start..end].parse().unwrap_or(0.0)
}

/// Build a catalog snapshot from rendered entries
///
/// Later entries silently overwrite earlier ones when two display
/// names collide on the same slug.
pub fn build_catalog(entries: &[ProductEntry]) -> ProductCatalog {
    let mut catalog = ProductCatalog::new();
    for entry in entries {
        let id = slugify(&entry.name);
        let original_name = entry
            .original_name
            .clone()
            .unwrap_or_else(|| entry.name.clone());
        catalog.insert(
            id.clone(),
            Product {
                id,
                name: entry.name.clone(),
                price_per_kg: parse_price_per_kg(&entry.price_text),
                image: entry.image.clone(),
                original_name,
                weight_options: entry.weight_options.clone(),
            },
        );
    }
    catalog
}

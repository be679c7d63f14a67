//! Product model and naming identity

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog snapshot keyed by product slug
///
/// Ordered map so scans (reconciliation matching) are deterministic.
pub type ProductCatalog = BTreeMap<String, Product>;

/// A sellable product as captured from the rendered listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Slug of the display name; regenerated whenever the name changes
    pub id: String,
    /// Display name
    pub name: String,
    /// Price per kilogram in currency units
    #[serde(default)]
    pub price_per_kg: f64,
    /// Currently displayed image reference
    #[serde(default)]
    pub image: String,
    /// Tracked identity that survives display-name edits
    #[serde(default)]
    pub original_name: String,
    /// Offered weight labels, e.g. `"5kg"`
    #[serde(default)]
    pub weight_options: Vec<String>,
}

impl Product {
    /// Whether this product is offered at the given weight label
    pub fn offers_weight(&self, label: &str) -> bool {
        self.weight_options.iter().any(|w| w == label)
    }
}

/// Derive the catalog key from a display name: lowercase, each
/// whitespace run collapsed to a single hyphen. No trimming, so
/// leading or trailing spaces produce edge hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_gap = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_gap {
                slug.push('-');
            }
            in_gap = true;
        } else {
            slug.push(c);
            in_gap = false;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Almonds"), "almonds");
        assert_eq!(slugify("Premium Almonds"), "premium-almonds");
        assert_eq!(slugify("Dry   Fruit  Mix"), "dry-fruit-mix");
    }

    #[test]
    fn test_slugify_keeps_edge_whitespace_as_hyphens() {
        assert_eq!(slugify(" Almonds "), "-almonds-");
    }

    #[test]
    fn test_slugify_is_not_injective() {
        // Distinct display names can share a slug
        assert_eq!(slugify("Dry Fruits"), slugify("Dry  FRUITS"));
    }

    #[test]
    fn test_offers_weight() {
        let product = Product {
            id: "almonds".to_string(),
            name: "Almonds".to_string(),
            price_per_kg: 750.0,
            image: String::new(),
            original_name: "Almonds".to_string(),
            weight_options: vec!["1kg".to_string(), "5kg".to_string()],
        };
        assert!(product.offers_weight("5kg"));
        assert!(!product.offers_weight("2kg"));
    }
}

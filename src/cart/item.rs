//! Cart line model

use serde::{Deserialize, Serialize};

/// One cart line; at most one exists per `(product_id, weight)`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog key at the time the line was last written
    pub product_id: String,
    /// Weight in whole kilograms
    pub weight: u32,
    pub quantity: u32,
    /// Display name captured at add time, shown when the product no
    /// longer resolves
    #[serde(default)]
    pub original_name: String,
    /// Cached image reference, refreshed when reconciliation remaps
    /// the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartItem {
    /// Weight label as it appears in `weight_options`, e.g. `"5kg"`
    pub fn weight_label(&self) -> String {
        format!("{}kg", self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_label() {
        let item = CartItem {
            product_id: "almonds".to_string(),
            weight: 5,
            quantity: 1,
            original_name: "Almonds".to_string(),
            image: None,
        };
        assert_eq!(item.weight_label(), "5kg");
    }

    #[test]
    fn test_serializes_camel_case_without_empty_image() {
        let item = CartItem {
            product_id: "almonds".to_string(),
            weight: 5,
            quantity: 2,
            original_name: "Almonds".to_string(),
            image: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["productId"], "almonds");
        assert_eq!(json["originalName"], "Almonds");
        assert!(json.get("image").is_none());
    }
}

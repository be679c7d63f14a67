//! Cart reconciliation against catalog changes
//!
//! Product ids are name slugs, so a rename silently invalidates every
//! cart line pointing at the old id. Reconciliation walks the cart
//! once per catalog change and rewrites or drops each line.

use crate::catalog::ProductCatalog;

use super::item::CartItem;

/// Rewrite cart lines so each still resolves to a valid
/// product-and-weight combination after a catalog change
///
/// Per line: resolve the product in `old_catalog` (lines that never
/// resolved are dropped), then find the product in `new_catalog` that
/// carries the same tracked identity and still offers the line's
/// weight. On a match under a new id the line keeps its quantity and
/// weight, takes the new id and the matched product's image; a line
/// whose id is unchanged is kept untouched. No match drops the line.
///
/// Output preserves input order, so an unchanged catalog reconciles
/// every cart to itself.
pub fn reconcile(
    old_catalog: &ProductCatalog,
    new_catalog: &ProductCatalog,
    cart: Vec<CartItem>,
) -> Vec<CartItem> {
    cart.into_iter()
        .filter_map(|item| {
            let old_product = old_catalog.get(&item.product_id)?;
            let label = item.weight_label();
            let matched = new_catalog
                .values()
                .find(|p| p.original_name == old_product.original_name && p.offers_weight(&label))?;
            if matched.id == item.product_id {
                Some(item)
            } else {
                Some(CartItem {
                    product_id: matched.id.clone(),
                    image: Some(matched.image.clone()),
                    ..item
                })
            }
        })
        .collect()
}

/// Drop lines whose product is gone or whose weight is no longer
/// offered; run when loading the cart for display
pub fn cleanup(catalog: &ProductCatalog, cart: Vec<CartItem>) -> Vec<CartItem> {
    cart.into_iter()
        .filter(|item| {
            catalog
                .get(&item.product_id)
                .is_some_and(|p| p.offers_weight(&item.weight_label()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductCatalog, slugify};

    fn product(name: &str, original_name: &str, weights: &[&str]) -> Product {
        Product {
            id: slugify(name),
            name: name.to_string(),
            price_per_kg: 100.0,
            image: format!("images/{}.jpg", slugify(name)),
            original_name: original_name.to_string(),
            weight_options: weights.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn catalog_of(products: &[Product]) -> ProductCatalog {
        products
            .iter()
            .map(|p| (p.id.clone(), p.clone()))
            .collect()
    }

    fn line(product_id: &str, weight: u32, quantity: u32) -> CartItem {
        CartItem {
            product_id: product_id.to_string(),
            weight,
            quantity,
            original_name: product_id.to_string(),
            image: None,
        }
    }

    #[test]
    fn test_unchanged_catalog_reconciles_to_identity() {
        let catalog = catalog_of(&[product("Almonds", "Almonds", &["1kg", "5kg"])]);
        let cart = vec![line("almonds", 5, 2), line("almonds", 1, 1)];

        assert_eq!(reconcile(&catalog, &catalog, cart.clone()), cart);
    }

    #[test]
    fn test_rename_remaps_id_and_refreshes_image() {
        let old = catalog_of(&[product("Almonds", "Almonds", &["1kg", "5kg"])]);
        let new = catalog_of(&[product("Premium Almonds", "Almonds", &["1kg", "5kg"])]);

        let out = reconcile(&old, &new, vec![line("almonds", 5, 2)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product_id, "premium-almonds");
        assert_eq!(out[0].quantity, 2);
        assert_eq!(out[0].weight, 5);
        assert_eq!(out[0].image.as_deref(), Some("images/premium-almonds.jpg"));
    }

    #[test]
    fn test_removed_weight_drops_only_that_line() {
        let old = catalog_of(&[product("Almonds", "Almonds", &["1kg", "5kg"])]);
        let new = catalog_of(&[product("Almonds", "Almonds", &["1kg"])]);

        let out = reconcile(&old, &new, vec![line("almonds", 5, 2), line("almonds", 1, 3)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].weight, 1);
        assert_eq!(out[0].quantity, 3);
    }

    #[test]
    fn test_line_missing_from_old_catalog_is_dropped() {
        let old = catalog_of(&[product("Almonds", "Almonds", &["5kg"])]);
        let new = old.clone();

        let out = reconcile(&old, &new, vec![line("ghost", 5, 1), line("almonds", 5, 1)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product_id, "almonds");
    }

    #[test]
    fn test_deleted_product_is_dropped() {
        let old = catalog_of(&[
            product("Almonds", "Almonds", &["5kg"]),
            product("Cashews", "Cashews", &["1kg"]),
        ]);
        let new = catalog_of(&[product("Almonds", "Almonds", &["5kg"])]);

        let out = reconcile(&old, &new, vec![line("cashews", 1, 2), line("almonds", 5, 1)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].product_id, "almonds");
    }

    #[test]
    fn test_reconcile_preserves_line_order() {
        let catalog = catalog_of(&[
            product("Almonds", "Almonds", &["1kg", "5kg"]),
            product("Cashews", "Cashews", &["1kg"]),
        ]);
        let cart = vec![line("cashews", 1, 1), line("almonds", 5, 2), line("almonds", 1, 4)];

        let out = reconcile(&catalog, &catalog, cart.clone());
        assert_eq!(out, cart);
    }

    #[test]
    fn test_cleanup_drops_stale_lines() {
        let catalog = catalog_of(&[product("Almonds", "Almonds", &["5kg"])]);
        let cart = vec![
            line("almonds", 5, 2),
            line("almonds", 2, 1),
            line("ghost", 5, 1),
        ];

        let out = cleanup(&catalog, cart);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].weight, 5);
    }
}

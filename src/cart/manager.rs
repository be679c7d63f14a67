//! Cart operations over the persisted store

use crate::store::Store;
use crate::utils::{AppError, AppResult};

use super::item::CartItem;
use super::reconcile::cleanup;

/// Cart operations
///
/// Every mutation is a full read-modify-write of the persisted line
/// list; concurrent writers race at collection granularity and the
/// last one wins.
#[derive(Debug, Clone)]
pub struct CartManager {
    store: Store,
}

impl CartManager {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Current cart lines
    pub fn items(&self) -> AppResult<Vec<CartItem>> {
        Ok(self.store.cart()?)
    }

    /// Total units across all lines (the badge count)
    pub fn count(&self) -> AppResult<u32> {
        Ok(self.store.cart()?.iter().map(|i| i.quantity).sum())
    }

    /// Add one unit of a product at the given weight
    ///
    /// A repeat add of the same `(product, weight)` increments the
    /// existing line instead of creating a duplicate. Returns the
    /// written line.
    pub fn add_item(&self, product_id: &str, weight: u32) -> AppResult<CartItem> {
        let catalog = self.store.catalog()?;
        let product = catalog
            .get(product_id)
            .ok_or_else(|| AppError::not_found(format!("product '{product_id}'")))?;
        let label = format!("{weight}kg");
        if !product.offers_weight(&label) {
            return Err(AppError::validation(format!(
                "{} is not offered as {label}",
                product.name
            )));
        }

        let mut items = self.store.cart()?;
        let line = match items
            .iter_mut()
            .find(|i| i.product_id == product_id && i.weight == weight)
        {
            Some(existing) => {
                existing.quantity += 1;
                existing.clone()
            }
            None => {
                let item = CartItem {
                    product_id: product_id.to_string(),
                    weight,
                    quantity: 1,
                    original_name: product.name.clone(),
                    image: None,
                };
                items.push(item.clone());
                item
            }
        };
        self.store.set_cart(&items)?;
        tracing::debug!(
            "Added {} of {} (quantity now {})",
            label,
            line.original_name,
            line.quantity
        );
        Ok(line)
    }

    /// Increase a line's quantity by one; missing lines are left alone
    pub fn increase_quantity(&self, product_id: &str, weight: u32) -> AppResult<()> {
        self.update_quantity(product_id, weight, |q| q + 1)
    }

    /// Decrease a line's quantity by one, never below 1; removal is a
    /// separate, explicit action
    pub fn decrease_quantity(&self, product_id: &str, weight: u32) -> AppResult<()> {
        self.update_quantity(product_id, weight, |q| q.saturating_sub(1).max(1))
    }

    fn update_quantity(
        &self,
        product_id: &str,
        weight: u32,
        apply: impl Fn(u32) -> u32,
    ) -> AppResult<()> {
        let mut items = self.store.cart()?;
        if let Some(line) = items
            .iter_mut()
            .find(|i| i.product_id == product_id && i.weight == weight)
        {
            line.quantity = apply(line.quantity);
            self.store.set_cart(&items)?;
        }
        Ok(())
    }

    /// Remove a line entirely
    pub fn remove_item(&self, product_id: &str, weight: u32) -> AppResult<()> {
        let mut items = self.store.cart()?;
        let before = items.len();
        items.retain(|i| !(i.product_id == product_id && i.weight == weight));
        if items.len() != before {
            self.store.set_cart(&items)?;
        }
        Ok(())
    }

    /// Empty the cart
    pub fn clear(&self) -> AppResult<()> {
        Ok(self.store.set_cart(&[])?)
    }

    /// Drop lines that no longer resolve against the current catalog,
    /// persisting only when something was dropped; run when loading
    /// the cart for display
    pub fn cleanup(&self) -> AppResult<Vec<CartItem>> {
        let catalog = self.store.catalog()?;
        let items = self.store.cart()?;
        let before = items.len();
        let kept = cleanup(&catalog, items);
        if kept.len() != before {
            tracing::info!("Cart cleanup dropped {} stale line(s)", before - kept.len());
            self.store.set_cart(&kept)?;
        }
        Ok(kept)
    }
}

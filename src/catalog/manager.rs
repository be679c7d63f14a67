//! Catalog ownership: rebuilds, persistence, change notification

use crate::cart::reconcile;
use crate::store::{Store, StoreEvent};
use crate::utils::AppResult;

use super::builder::{ProductEntry, build_catalog};
use super::product::ProductCatalog;

/// Owns catalog persistence and drives cart reconciliation on change
#[derive(Debug, Clone)]
pub struct CatalogManager {
    store: Store,
}

impl CatalogManager {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Current persisted snapshot; absent reads as empty
    pub fn catalog(&self) -> AppResult<ProductCatalog> {
        Ok(self.store.catalog()?)
    }

    /// Rebuild the catalog from rendered entries and reconcile the
    /// cart against the previous snapshot
    pub fn rebuild_from_entries(&self, entries: &[ProductEntry]) -> AppResult<ProductCatalog> {
        let old_catalog = self.store.catalog()?;
        let new_catalog = build_catalog(entries);
        self.notify_catalog_changed(&old_catalog, &new_catalog)?;
        Ok(new_catalog)
    }

    /// Explicit change notification from whatever owns product data
    ///
    /// Persists the new snapshot, reconciles the cart exactly once
    /// against the old one, then broadcasts [`StoreEvent::CatalogUpdated`].
    pub fn notify_catalog_changed(
        &self,
        old_catalog: &ProductCatalog,
        new_catalog: &ProductCatalog,
    ) -> AppResult<()> {
        self.store.set_catalog(new_catalog)?;

        let cart = self.store.cart()?;
        let before = cart.len();
        let reconciled = reconcile(old_catalog, new_catalog, cart);
        if reconciled.len() < before {
            tracing::info!(
                "Reconciliation dropped {} cart line(s) no longer offered",
                before - reconciled.len()
            );
        }
        self.store.set_cart(&reconciled)?;

        self.store.publish(StoreEvent::CatalogUpdated);
        tracing::debug!("📦 Catalog updated: {} product(s)", new_catalog.len());
        Ok(())
    }
}

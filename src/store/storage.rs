//! redb-based persisted store for the storefront collections
//!
//! # Layout
//!
//! One string-keyed table holds every collection as a JSON value:
//!
//! | Key | Value | Purpose |
//! |-----|-------|---------|
//! | `productCatalog` | JSON object | slug -> product snapshot |
//! | `cartItems` | JSON array | cart lines |
//! | `orders` | JSON array | append-only order log |
//!
//! Values carry no version tag; a reader treats an absent key as an
//! empty collection. Writers replace a whole collection per commit,
//! so the last writer wins and partially-updated state is never
//! observable.
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `commit()` returns
//! the collection is persistent, and the file stays consistent across
//! crashes mid-write.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::cart::CartItem;
use crate::catalog::ProductCatalog;
use crate::checkout::Order;

/// Single table for all collections: key = collection name, value = JSON
const COLLECTIONS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("collections");

/// Collection key for the product catalog (slug -> product)
pub const CATALOG_KEY: &str = "productCatalog";
/// Collection key for the cart line list
pub const CART_KEY: &str = "cartItems";
/// Collection key for the append-only order log
pub const ORDERS_KEY: &str = "orders";

/// Event broadcast channel capacity (a handful of view subscribers)
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Change notifications broadcast by the store
///
/// Events carry no payload; subscribers re-read the collections they
/// care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The catalog snapshot was replaced and the cart reconciled
    /// against it
    CatalogUpdated,
}

/// Durable storefront state backed by redb
///
/// Cheap to clone; clones share the database handle and the event
/// channel.
#[derive(Clone)]
pub struct Store {
    db: Arc<Database>,
    event_tx: broadcast::Sender<StoreEvent>,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("db", &"<redb::Database>")
            .field("event_tx", &"<broadcast::Sender>")
            .finish()
    }
}

impl Store {
    /// Open or create the store file at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;

        // Make sure the table exists before the first read
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            db: Arc::new(db),
            event_tx,
        })
    }

    /// Open an in-memory store (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(COLLECTIONS_TABLE)?;
        }
        write_txn.commit()?;

        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Ok(Self {
            db: Arc::new(db),
            event_tx,
        })
    }

    // ========== Generic Collection Access ==========

    fn read_collection<T: serde::de::DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COLLECTIONS_TABLE)?;
        match table.get(key)? {
            Some(guard) => Ok(Some(serde_json::from_slice(guard.value())?)),
            None => Ok(None),
        }
    }

    fn write_collection<T: serde::Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Typed Collections ==========

    /// Current catalog snapshot; an absent key reads as empty
    pub fn catalog(&self) -> StoreResult<ProductCatalog> {
        Ok(self.read_collection(CATALOG_KEY)?.unwrap_or_default())
    }

    /// Replace the catalog snapshot
    pub fn set_catalog(&self, catalog: &ProductCatalog) -> StoreResult<()> {
        self.write_collection(CATALOG_KEY, catalog)
    }

    /// Current cart lines; an absent key reads as empty
    pub fn cart(&self) -> StoreResult<Vec<CartItem>> {
        Ok(self.read_collection(CART_KEY)?.unwrap_or_default())
    }

    /// Replace the cart line list
    pub fn set_cart(&self, items: &[CartItem]) -> StoreResult<()> {
        self.write_collection(CART_KEY, &items)
    }

    /// Recorded orders, oldest first
    pub fn orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.read_collection(ORDERS_KEY)?.unwrap_or_default())
    }

    /// Append to the order log in a single transaction
    pub fn append_order(&self, order: &Order) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(COLLECTIONS_TABLE)?;
            let mut orders: Vec<Order> = match table.get(ORDERS_KEY)? {
                Some(guard) => serde_json::from_slice(guard.value())?,
                None => Vec::new(),
            };
            orders.push(order.clone());
            let bytes = serde_json::to_vec(&orders)?;
            table.insert(ORDERS_KEY, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Change Notifications ==========

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast an event; send failures (no live receivers) are ignored
    pub fn publish(&self, event: StoreEvent) {
        let _ = self.event_tx.send(event);
    }
}

use crate::menu_actor::{MenuError, ITEM_NOT_FOUND};
use crate::model::{MenuItem, MenuItemId, MenuItemPatch};
use record_store::StoreClient;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Sole owner of the menu collection and of the id sequence.
///
/// The collection lives in the menu store actor; this type wraps its client and adds the id
/// counter. Clones share both, so every clone sees the same items and draws from the same
/// sequence.
#[derive(Clone)]
pub struct MenuRepository {
    inner: StoreClient<MenuItem>,
    next_id: Arc<AtomicI64>,
}

impl MenuRepository {
    pub fn new(inner: StoreClient<MenuItem>) -> Self {
        Self {
            inner,
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Snapshot of every item, in insertion order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<MenuItem>, MenuError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    /// Issues the next id: 1, 2, 3, ... Never returns the same value twice, even when called
    /// from many tasks at once.
    pub fn next_id(&self) -> MenuItemId {
        MenuItemId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Appends an item that already carries its id.
    #[instrument(skip(self, item), fields(id = %item.id))]
    pub async fn insert(&self, item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!(?item, "Sending request");
        Ok(self.inner.insert(item).await?)
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await?
            .ok_or_else(|| MenuError::NotFound(ITEM_NOT_FOUND.to_string()))
    }

    /// Rewrites `name`, `description` and `price` of the stored item in place.
    #[instrument(skip(self))]
    pub async fn update(&self, id: MenuItemId, patch: MenuItemPatch) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }
}

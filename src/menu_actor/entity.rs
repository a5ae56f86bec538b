//! Record trait implementation for [`MenuItem`].
//!
//! This is what lets a [`StoreActor`](record_store::StoreActor) own menu items: it tells the store
//! which id an item is kept under and how a [`MenuItemPatch`] is applied.

use crate::model::{MenuItem, MenuItemId, MenuItemPatch};
use record_store::Record;
use std::convert::Infallible;

impl Record for MenuItem {
    type Id = MenuItemId;
    type Patch = MenuItemPatch;
    type Error = Infallible;

    fn id(&self) -> MenuItemId {
        self.id
    }

    /// Partial update.
    ///
    /// # Fields Updated
    /// - `name`
    /// - `description`
    /// - `price`
    ///
    /// `size`, `extra_items`, `modifiers` and `promotion` are left as stored.
    fn on_update(&mut self, patch: MenuItemPatch) -> Result<(), Infallible> {
        self.name = patch.name;
        self.description = patch.description;
        self.price = patch.price;
        Ok(())
    }
}

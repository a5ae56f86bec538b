use crate::menu_actor::{MenuError, NON_POSITIVE_ID, NULL_ID};
use crate::model::{MenuItem, MenuItemId, MenuItemPatch};
use crate::repository::MenuRepository;
use tracing::{debug, info, instrument};

/// Business operations on the menu.
///
/// Checks ids, then delegates to [`MenuRepository`]. Body fields are expected to have passed
/// [`MenuItem::validate`] already; the service does not re-check them.
#[derive(Clone)]
pub struct MenuService {
    repository: MenuRepository,
}

impl MenuService {
    pub fn new(repository: MenuRepository) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn get_all_menu_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.repository.list().await
    }

    /// Fetches one item.
    ///
    /// # Errors
    /// - `InvalidArgument` if `id` is `None` or not positive
    /// - `NotFound` if no item has this id
    #[instrument(skip(self))]
    pub async fn get_menu_item_by_id(&self, id: Option<i64>) -> Result<MenuItem, MenuError> {
        let id = match id {
            None => return Err(MenuError::InvalidArgument(NULL_ID.to_string())),
            Some(id) if id <= 0 => {
                return Err(MenuError::InvalidArgument(NON_POSITIVE_ID.to_string()))
            }
            Some(id) => MenuItemId(id),
        };
        self.repository.find_by_id(id).await
    }

    /// Stores a new item under a freshly issued id. Any id on `item` is discarded.
    #[instrument(skip(self, item))]
    pub async fn create_menu_item(&self, mut item: MenuItem) -> Result<MenuItem, MenuError> {
        debug!(?item, "create_menu_item called");
        item.id = self.repository.next_id();
        let created = self.repository.insert(item).await?;
        info!(id = %created.id, name = %created.name, "Menu item created");
        Ok(created)
    }

    /// Partial update: only `name`, `description` and `price` are taken from `item`.
    ///
    /// The item is looked up first, so an invalid or unknown id fails before anything is written.
    #[instrument(skip(self, item))]
    pub async fn update_menu_item(
        &self,
        id: Option<i64>,
        item: MenuItem,
    ) -> Result<MenuItem, MenuError> {
        debug!(?item, "update_menu_item called");
        let existing = self.get_menu_item_by_id(id).await?;
        let updated = self
            .repository
            .update(existing.id, MenuItemPatch::from(item))
            .await?;
        info!(id = %updated.id, "Menu item updated");
        Ok(updated)
    }
}

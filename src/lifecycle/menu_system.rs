use tracing::{error, info};

use crate::config::StoreConfig;
use crate::menu_actor::{self, MenuError};
use crate::model::{ItemSize, MenuItem};
use crate::repository::MenuRepository;
use crate::service::MenuService;

/// The runtime orchestrator for the menu backend.
///
/// `MenuSystem` is responsible for:
/// - **Lifecycle Management**: starting the menu store actor and stopping it again
/// - **Dependency Wiring**: store client → [`MenuRepository`] → [`MenuService`]
///
/// # Example
///
/// ```ignore
/// let system = MenuSystem::new(&settings.store);
/// let item = system.menu_service.create_menu_item(MenuItem::new("Burger", 5.0)).await?;
/// system.shutdown().await?;
/// ```
pub struct MenuSystem {
    /// Entry point for every menu operation
    pub menu_service: MenuService,

    /// Task handle of the store actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl MenuSystem {
    /// Creates the store actor, spawns its loop, and wires repository and service on top.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &StoreConfig) -> Self {
        let (actor, client) = menu_actor::new(config.buffer_size);
        let handle = tokio::spawn(actor.run());

        let repository = MenuRepository::new(client);
        let menu_service = MenuService::new(repository);

        Self {
            menu_service,
            handle,
        }
    }

    /// Creates the two items the demo espresso bar starts with.
    pub async fn seed_demo_items(&self) -> Result<(), MenuError> {
        let espresso = MenuItem::new("Espresso", 2.50)
            .with_description(
                "Strong coffee brewed by forcing hot water through finely-ground coffee beans",
            )
            .with_size(ItemSize::Small)
            .with_extra_items(["Extra Shot", "Whipped Cream"])
            .with_modifier("Sugar", ["None", "Low", "Medium", "High"]);

        let cappuccino = MenuItem::new("Cappuccino", 3.50)
            .with_description("Coffee drink with espresso, hot milk, and steamed milk foam")
            .with_size(ItemSize::Medium)
            .with_extra_items(["Extra Shot", "Soy Milk", "Cinnamon"])
            .with_modifier(
                "Milk Type",
                ["Whole Milk", "Skim Milk", "Soy Milk", "Almond Milk"],
            );

        for item in [espresso, cappuccino] {
            item.validate()?;
            self.menu_service.create_menu_item(item).await?;
        }
        info!("Demo menu seeded");
        Ok(())
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops this system's service handle, then waits for the store task. The task only ends
    /// once every other clone of the service (e.g. the one held by the HTTP router) is gone too.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down menu system...");

        drop(self.menu_service);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Menu system shutdown complete.");
        Ok(())
    }
}

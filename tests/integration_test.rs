use menu_backend::config::StoreConfig;
use menu_backend::lifecycle::MenuSystem;
use menu_backend::menu_actor::{MenuError, ITEM_NOT_FOUND, NON_POSITIVE_ID, NULL_ID};
use menu_backend::model::{ItemSize, MenuItem, MenuItemId, Promotion};
use std::collections::HashSet;

fn store_config() -> StoreConfig {
    StoreConfig {
        buffer_size: 16,
        seed_demo_items: false,
    }
}

/// Full end-to-end run of the menu walkthrough against a real store.
#[tokio::test]
async fn test_full_menu_system_integration() {
    let system = MenuSystem::new(&store_config());
    let service = &system.menu_service;

    // 1. Create the first item
    let burger = service
        .create_menu_item(
            MenuItem::new("Burger", 5.0)
                .with_modifier("Doneness", ["Medium", "Well Done"])
                .with_promotion(Promotion::BuyOneGetOne {
                    description: "Tuesdays only".into(),
                }),
        )
        .await
        .expect("Failed to create burger");
    assert_eq!(burger.id, MenuItemId(1));
    assert_eq!(burger.name, "Burger");
    assert_eq!(burger.price, 5.0);

    // 2. Second item gets the next id
    let fries = service
        .create_menu_item(MenuItem::new("Fries", 2.5))
        .await
        .expect("Failed to create fries");
    assert_eq!(fries.id, MenuItemId(2));

    // 3. Fetch returns the stored item unchanged
    let fetched = service
        .get_menu_item_by_id(Some(1))
        .await
        .expect("Failed to get burger");
    assert_eq!(fetched, burger);

    // 4. Unknown id
    assert_eq!(
        service.get_menu_item_by_id(Some(99)).await,
        Err(MenuError::NotFound(ITEM_NOT_FOUND.to_string()))
    );

    // 5. Partial update
    let body = MenuItem::new("Cheeseburger", 6.0).with_description("with cheese");
    let updated = service
        .update_menu_item(Some(1), body)
        .await
        .expect("Failed to update burger");
    assert_eq!(updated.id, MenuItemId(1));
    assert_eq!(updated.name, "Cheeseburger");
    assert_eq!(updated.price, 6.0);
    assert_eq!(updated.modifiers, burger.modifiers);
    assert_eq!(updated.promotion, burger.promotion);

    // 6. Body constraints
    let err = MenuItem::new("X", 1.0).validate().unwrap_err();
    assert_eq!(err.field, "name");

    // Listing keeps creation order
    let names: Vec<String> = service
        .get_all_menu_items()
        .await
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, vec!["Cheeseburger", "Fries"]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let system = MenuSystem::new(&store_config());

    let mut tasks = Vec::new();
    for i in 0..50 {
        let service = system.menu_service.clone();
        tasks.push(tokio::spawn(async move {
            service
                .create_menu_item(MenuItem::new(format!("Item {}", i), 1.0))
                .await
        }));
    }

    let mut ids = HashSet::new();
    for task in tasks {
        let item = task.await.unwrap().expect("Create failed");
        assert!(ids.insert(item.id.0), "id {} issued twice", item.id);
    }
    assert_eq!(ids, (1..=50).collect::<HashSet<i64>>());

    let listed = system.menu_service.get_all_menu_items().await.unwrap();
    assert_eq!(listed.len(), 50);
    let listed_ids: HashSet<i64> = listed.iter().map(|item| item.id.0).collect();
    assert_eq!(listed_ids, ids);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_invalid_ids_are_rejected() {
    let system = MenuSystem::new(&store_config());
    let service = &system.menu_service;

    assert_eq!(
        service.get_menu_item_by_id(None).await,
        Err(MenuError::InvalidArgument(NULL_ID.to_string()))
    );
    for id in [0, -1] {
        assert_eq!(
            service.get_menu_item_by_id(Some(id)).await,
            Err(MenuError::InvalidArgument(NON_POSITIVE_ID.to_string()))
        );
    }
}

#[tokio::test]
async fn test_create_ignores_input_id_and_round_trips() {
    let system = MenuSystem::new(&store_config());
    let service = &system.menu_service;

    let mut body = MenuItem::new("Flat White", 3.2)
        .with_size(ItemSize::Medium)
        .with_extra_items(["Extra Shot"]);
    body.id = MenuItemId(500);

    let created = service.create_menu_item(body).await.unwrap();
    assert_eq!(created.id, MenuItemId(1));

    let fetched = service.get_menu_item_by_id(Some(created.id.0)).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_failed_update_leaves_store_unchanged() {
    let system = MenuSystem::new(&store_config());
    let service = &system.menu_service;

    service
        .create_menu_item(MenuItem::new("Bagel", 2.0))
        .await
        .unwrap();
    let before = service.get_all_menu_items().await.unwrap();

    let result = service
        .update_menu_item(Some(42), MenuItem::new("Croissant", 2.5))
        .await;
    assert_eq!(result, Err(MenuError::NotFound(ITEM_NOT_FOUND.to_string())));

    let result = service
        .update_menu_item(Some(0), MenuItem::new("Croissant", 2.5))
        .await;
    assert!(matches!(result, Err(MenuError::InvalidArgument(_))));

    assert_eq!(service.get_all_menu_items().await.unwrap(), before);
}

#[tokio::test]
async fn test_seed_demo_items() {
    let system = MenuSystem::new(&store_config());
    system.seed_demo_items().await.expect("Seeding failed");

    let items = system.menu_service.get_all_menu_items().await.unwrap();
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Espresso", "Cappuccino"]);
    assert_eq!(items[0].id, MenuItemId(1));
    assert_eq!(items[1].size, Some(ItemSize::Medium));
    assert_eq!(items[1].modifiers[0].name, "Milk Type");

    system.shutdown().await.expect("Shutdown failed");
}

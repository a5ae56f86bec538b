use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use menu_backend::api::{self, ErrorBody};
use menu_backend::config::StoreConfig;
use menu_backend::lifecycle::MenuSystem;
use menu_backend::model::MenuItem;
use menu_backend::repository::MenuRepository;
use menu_backend::service::MenuService;
use record_store::mock::MockStore;
use record_store::StoreError;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (MenuSystem, Router) {
    let system = MenuSystem::new(&StoreConfig {
        buffer_size: 16,
        seed_demo_items: false,
    });
    let router = api::router(system.menu_service.clone());
    (system, router)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = body.map(|b| b.to_string());
    let (status, bytes) = send(app, method, uri, body.as_deref()).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn error_body(value: Value) -> ErrorBody {
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let (_system, app) = app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn test_create_list_get_update() {
    let (_system, app) = app();

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/menu",
        Some(json!({
            "id": 40,
            "name": "Burger",
            "price": 5.0,
            "modifiers": [{"name": "Bun", "options": ["Sesame", "Brioche"]}],
            "promotion": {"type": "discount", "amount": 1.0}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], json!(1));
    assert_eq!(created["name"], json!("Burger"));

    let (status, listed) = send_json(&app, Method::GET, "/menu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created.clone()]));

    let (status, fetched) = send_json(&app, Method::GET, "/menu/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send_json(
        &app,
        Method::PUT,
        "/menu/1",
        Some(json!({"name": "Cheeseburger", "description": "with cheese", "price": 6.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], json!("Cheeseburger"));
    assert_eq!(updated["description"], json!("with cheese"));
    assert_eq!(updated["modifiers"], created["modifiers"]);
    assert_eq!(updated["promotion"], created["promotion"]);
}

#[tokio::test]
async fn test_validation_failure() {
    let (_system, app) = app();

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/menu",
        Some(json!({"name": "X", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(body),
        ErrorBody {
            code: 400,
            message: "Validation failed for field 'name': size must be between 3 and 50".into(),
        }
    );

    // Nothing was stored
    let (_, listed) = send_json(&app, Method::GET, "/menu", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_update_body_is_validated() {
    let (system, app) = app();
    system
        .menu_service
        .create_menu_item(MenuItem::new("Tea", 1.0))
        .await
        .unwrap();

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/menu/1",
        Some(json!({"name": "Green Tea", "price": -1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(body).message,
        "Validation failed for field 'price': must be greater than or equal to 0"
    );
}

#[tokio::test]
async fn test_not_found() {
    let (_system, app) = app();

    let (status, body) = send_json(&app, Method::GET, "/menu/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_body(body),
        ErrorBody {
            code: 404,
            message: "[/menu/99] Menu item not found".into(),
        }
    );

    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/menu/99",
        Some(json!({"name": "Ghost", "price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_body(body).message, "[/menu/99] Menu item not found");
}

#[tokio::test]
async fn test_invalid_path_ids() {
    let (_system, app) = app();

    let (status, body) = send_json(&app, Method::GET, "/menu/0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(body),
        ErrorBody {
            code: 400,
            message: "[/menu/0] Invalid request: Menu ID must be a positive number".into(),
        }
    );

    let (status, body) = send_json(&app, Method::GET, "/menu/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(body).message,
        "[/menu/abc] Invalid request: Menu ID must be an integer"
    );
}

#[tokio::test]
async fn test_malformed_body() {
    let (_system, app) = app();

    let (status, bytes) = send(&app, Method::POST, "/menu", Some("{\"name\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = error_body(serde_json::from_slice(&bytes).unwrap());
    assert_eq!(body.code, 400);
    assert!(body.message.starts_with("Invalid JSON format: "), "{}", body.message);

    // Wrong type for a field
    let (status, body) = send_json(
        &app,
        Method::POST,
        "/menu",
        Some(json!({"name": "Soup", "price": "cheap"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_body(body).message.starts_with("Invalid JSON format: "));
}

#[tokio::test]
async fn test_missing_required_fields() {
    let (system, app) = app();

    let (status, body) = send_json(&app, Method::POST, "/menu", Some(json!({"price": 5.0}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(body),
        ErrorBody {
            code: 400,
            message: "Validation failed for field 'name': must not be null".into(),
        }
    );

    let (status, body) = send_json(
        &app,
        Method::POST,
        "/menu",
        Some(json!({"name": "Soup", "price": null})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(body).message,
        "Validation failed for field 'price': must not be null"
    );

    system
        .menu_service
        .create_menu_item(MenuItem::new("Tea", 1.0))
        .await
        .unwrap();
    let (status, body) = send_json(
        &app,
        Method::PUT,
        "/menu/1",
        Some(json!({"name": null, "price": 2.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_body(body).message,
        "Validation failed for field 'name': must not be null"
    );
}

#[tokio::test]
async fn test_create_with_null_id() {
    let (_system, app) = app();

    let (status, created) = send_json(
        &app,
        Method::POST,
        "/menu",
        Some(json!({"id": null, "name": "Burger", "price": 5.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], json!(1));
    assert_eq!(created["name"], json!("Burger"));
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let mut mock = MockStore::<MenuItem>::new();
    mock.expect_list().return_err(StoreError::StoreClosed);
    let app = api::router(MenuService::new(MenuRepository::new(mock.client())));

    let (status, body) = send_json(&app, Method::GET, "/menu", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        error_body(body),
        ErrorBody {
            code: 500,
            message: "[/menu] Menu store error: Store closed".into(),
        }
    );
    mock.verify();
}

#[tokio::test]
async fn test_internal_not_found_message_is_404() {
    let mut mock = MockStore::<MenuItem>::new();
    mock.expect_list().return_err(StoreError::RecordError(Box::new(
        std::io::Error::other("Supplier Not Found"),
    )));
    let app = api::router(MenuService::new(MenuRepository::new(mock.client())));

    let (status, body) = send_json(&app, Method::GET, "/menu", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_body(body).message,
        "[/menu] Menu store error: Record error: Supplier Not Found"
    );
    mock.verify();
}

//! # HTTP Boundary
//!
//! Routes requests to [`MenuService`] and turns its failures into `{code, message}` responses.
//!
//! | Route | Verb | Handler |
//! |---|---|---|
//! | `/` | GET | [`handlers::health_check`] |
//! | `/menu` | GET | [`handlers::list_menu`] |
//! | `/menu` | POST | [`handlers::create_menu_item`] |
//! | `/menu/{menu_id}` | GET | [`handlers::get_menu_item`] |
//! | `/menu/{menu_id}` | PUT | [`handlers::update_menu_item`] |
//!
//! Bodies are read as [`MenuItemBody`](crate::model::MenuItemBody) and checked with
//! [`MenuItemBody::validate`](crate::model::MenuItemBody::validate) before the
//! service sees them. Status mapping lives in [`error::ApiError`].

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::service::MenuService;

pub fn router(service: MenuService) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route(
            "/menu",
            get(handlers::list_menu).post(handlers::create_menu_item),
        )
        .route(
            "/menu/{menu_id}",
            get(handlers::get_menu_item).put(handlers::update_menu_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

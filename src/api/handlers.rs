use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::Uri,
    Json,
};
use tracing::info;

use super::error::ApiError;
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemBody};
use crate::service::MenuService;

const NON_INTEGER_ID: &str = "Menu ID must be an integer";

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn list_menu(
    State(service): State<MenuService>,
    uri: Uri,
) -> Result<Json<Vec<MenuItem>>, ApiError> {
    let items = service
        .get_all_menu_items()
        .await
        .map_err(|e| ApiError::at(uri.path(), e))?;
    info!(count = items.len(), "Listed menu");
    Ok(Json(items))
}

pub async fn create_menu_item(
    State(service): State<MenuService>,
    uri: Uri,
    payload: Result<Json<MenuItemBody>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let Json(body) = payload?;
    let item = body.validate()?;

    let created = service
        .create_menu_item(item)
        .await
        .map_err(|e| ApiError::at(uri.path(), e))?;
    Ok(Json(created))
}

pub async fn get_menu_item(
    State(service): State<MenuService>,
    uri: Uri,
    menu_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let menu_id = menu_id_from(&uri, menu_id)?;

    let item = service
        .get_menu_item_by_id(Some(menu_id))
        .await
        .map_err(|e| ApiError::at(uri.path(), e))?;
    Ok(Json(item))
}

pub async fn update_menu_item(
    State(service): State<MenuService>,
    uri: Uri,
    menu_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<MenuItemBody>, JsonRejection>,
) -> Result<Json<MenuItem>, ApiError> {
    let menu_id = menu_id_from(&uri, menu_id)?;
    let Json(body) = payload?;
    let item = body.validate()?;

    let updated = service
        .update_menu_item(Some(menu_id), item)
        .await
        .map_err(|e| ApiError::at(uri.path(), e))?;
    Ok(Json(updated))
}

/// A path id that is not an integer is a bad request (400), not a server failure.
fn menu_id_from(uri: &Uri, menu_id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    match menu_id {
        Ok(Path(id)) => Ok(id),
        Err(_) => Err(ApiError::at(
            uri.path(),
            MenuError::InvalidArgument(NON_INTEGER_ID.to_string()),
        )),
    }
}

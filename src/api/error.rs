//! Translation of typed failures into HTTP responses.
//!
//! Every error body has the same shape:
//!
//! ```json
//! { "code": 404, "message": "[/menu/99] Menu item not found" }
//! ```

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::menu_actor::MenuError;
use crate::model::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A body field broke a constraint. Reports the first one only.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The body could not be parsed as the expected JSON shape.
    #[error("Invalid JSON format: {0}")]
    MalformedBody(String),

    /// A failure raised by the menu core while serving `path`.
    #[error("[{path}] {source}")]
    Menu { path: String, source: MenuError },
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
}

impl ApiError {
    /// Attaches the request path to a core failure.
    pub fn at(path: impl Into<String>, source: MenuError) -> Self {
        match source {
            MenuError::Validation(e) => ApiError::Validation(e),
            source => ApiError::Menu {
                path: path.into(),
                source,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Menu { source, .. } => match source {
                MenuError::InvalidArgument(_) | MenuError::Validation(_) => StatusCode::BAD_REQUEST,
                MenuError::NotFound(_) => StatusCode::NOT_FOUND,
                MenuError::Internal(msg) if msg.to_lowercase().contains("not found") => {
                    StatusCode::NOT_FOUND
                }
                MenuError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::Menu {
                path,
                source: MenuError::InvalidArgument(msg),
            } => format!("[{}] Invalid request: {}", path, msg),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(code = status.as_u16(), %message, "Request failed");
        } else {
            tracing::warn!(code = status.as_u16(), %message, "Request rejected");
        }

        let body = Json(ErrorBody {
            code: status.as_u16(),
            message,
        });

        (status, body).into_response()
    }
}

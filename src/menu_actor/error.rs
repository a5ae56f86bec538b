//! Error types for menu operations.

use record_store::StoreError;
use thiserror::Error;

use crate::model::ValidationError;

pub const NULL_ID: &str = "Menu ID cannot be null";
pub const NON_POSITIVE_ID: &str = "Menu ID must be a positive number";
pub const ITEM_NOT_FOUND: &str = "Menu item not found";

/// Errors that can occur during menu operations.
///
/// Transport-agnostic: the HTTP boundary decides which status each variant maps to.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The menu id is absent or not positive.
    #[error("{0}")]
    InvalidArgument(String),

    /// No item carries the requested id.
    #[error("{0}")]
    NotFound(String),

    /// A field constraint on the body was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Any other failure, e.g. the store task is gone.
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for MenuError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => MenuError::NotFound(ITEM_NOT_FOUND.to_string()),
            other => MenuError::Internal(format!("Menu store error: {}", other)),
        }
    }
}

//! # Store Errors
//!
//! Failures raised by the store itself, independent of the record type it holds.

/// Errors that can occur while talking to a [`StoreActor`](crate::StoreActor).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),
    #[error("Record error: {0}")]
    RecordError(Box<dyn std::error::Error + Send + Sync>),
}

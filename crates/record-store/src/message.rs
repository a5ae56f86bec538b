//! # Store Messages
//!
//! Request types exchanged between a [`StoreClient`](crate::StoreClient) and its
//! [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A request processed by the store task.
///
/// The set is deliberately small: records can be listed, appended, fetched and patched. There is
/// no removal, so a record lives as long as the store does.
///
/// - **List**: snapshot of every record in insertion order.
/// - **Insert**: append a record that already carries its id.
/// - **Get**: clone of one record, or `None`.
/// - **Update**: apply a [`Record::Patch`] in place and return the new state.
#[derive(Debug)]
pub enum StoreRequest<T: Record> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Insert {
        record: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
}

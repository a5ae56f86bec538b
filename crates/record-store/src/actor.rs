//! # Store Actor
//!
//! The `StoreActor` is the single owner of a collection of records. It runs in its own Tokio task
//! and handles requests one at a time, so readers and writers never overlap.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The task that owns an ordered collection of records.
///
/// # Concurrency Model
///
/// Every clone of the [`StoreClient`] feeds the same channel. The actor drains it sequentially,
/// which means:
///
/// * an `Insert` is either fully visible to a later `List`/`Get` or not visible at all;
/// * an `Update` is applied in place with no concurrent reader;
/// * no `Mutex` guards `records`, the task owns it outright.
///
/// # Usage Pattern
///
/// ```rust
/// use record_store::{Record, StoreActor};
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NotePatch(String);
///
/// impl Record for Note {
///     type Id = u32;
///     type Patch = NotePatch;
///     type Error = Infallible;
///     fn id(&self) -> u32 { self.id }
///     fn on_update(&mut self, patch: NotePatch) -> Result<(), Infallible> {
///         self.text = patch.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     client.insert(Note { id: 1, text: "first".into() }).await.unwrap();
///     let note = client.get(1).await.unwrap().unwrap();
///     assert_eq!(note.text, "first");
/// }
/// ```
///
/// # Operations
///
/// * **List**: clones every record, in insertion order.
/// * **Insert**: rejects an id that is already stored, otherwise appends.
/// * **Get**: linear scan by id, returns a clone.
/// * **Update**: linear scan by id, calls [`Record::on_update`], returns a clone of the result.
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: Vec<T>,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full, client calls wait
    /// for room.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Runs the request loop until every client has been dropped.
    pub async fn run(mut self) {
        // Just the type name, e.g. "MenuItem"
        let record_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(record_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List { respond_to } => {
                    debug!(record_type, size = self.records.len(), "List");
                    let _ = respond_to.send(Ok(self.records.clone()));
                }
                StoreRequest::Insert { record, respond_to } => {
                    let id = record.id();
                    if self.position(id).is_some() {
                        warn!(record_type, %id, "Duplicate id");
                        let _ = respond_to.send(Err(StoreError::DuplicateId(id.to_string())));
                        continue;
                    }
                    self.records.push(record.clone());
                    info!(record_type, %id, size = self.records.len(), "Inserted");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.position(id).map(|i| self.records[i].clone());
                    let found = record.is_some();
                    debug!(record_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?patch, "Update");
                    let Some(index) = self.position(id) else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };
                    // Patch a copy so a failing hook leaves the stored record intact.
                    let mut updated = self.records[index].clone();
                    if let Err(e) = updated.on_update(patch) {
                        warn!(record_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(StoreError::RecordError(Box::new(e))));
                        continue;
                    }
                    self.records[index] = updated.clone();
                    info!(record_type, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                }
            }
        }

        info!(record_type, size = self.records.len(), "Shutdown");
    }
}

//! # Record Store
//!
//! An in-memory, actor-owned collection of records for Tokio applications.
//!
//! A [`StoreActor`] runs in its own task and is the only code that touches the collection.
//! Everything else holds a cheap, cloneable [`StoreClient`] and talks to the actor with
//! request/reply messages. Because the actor drains its channel one message at a time, inserts,
//! reads and in-place updates never interleave, and no lock is needed around the records.
//!
//! ## Layers
//!
//! 1. **Record layer** ([`Record`]): the stored type, its id, and how a patch applies to it.
//! 2. **Runtime layer** ([`StoreActor`]): the request loop that owns the records.
//! 3. **Interface layer** ([`StoreClient`]): typed async calls that hide the channels.
//!
//! ## Guarantees
//!
//! - Records are kept in insertion order; `list` returns them that way.
//! - Ids are unique: inserting a record whose id is already stored fails with
//!   [`StoreError::DuplicateId`].
//! - Every value handed out is a clone. Mutating it never changes the store.
//! - There is no removal. A record lives as long as its store.
//!
//! ## Lifetime
//!
//! The actor stops when the last client is dropped. Pending requests are answered first, then the
//! loop ends and logs the final size.
//!
//! ## Testing
//!
//! [`mock::MockStore`] produces a `StoreClient` whose replies are scripted, for testing code built
//! on top of the client without a running actor.

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};
pub use record::Record;

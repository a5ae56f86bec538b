//! # Record Trait
//!
//! The `Record` trait is the contract every value kept by a [`StoreActor`](crate::StoreActor) must
//! satisfy. It names the identifier type, the partial-update payload, and the error a patch may
//! produce.
//!
//! Records carry their own identifier. The store never invents ids: the caller assigns the id
//! before inserting, and the store only guarantees that no two stored records share one.

use std::fmt::{Debug, Display};

/// A value that can be owned and mutated by a [`StoreActor`](crate::StoreActor).
///
/// # Example
///
/// ```rust
/// use record_store::Record;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
///
/// #[derive(Debug)]
/// struct NotePatch { text: String }
///
/// impl Record for Note {
///     type Id = u32;
///     type Patch = NotePatch;
///     type Error = Infallible;
///
///     fn id(&self) -> u32 { self.id }
///
///     fn on_update(&mut self, patch: NotePatch) -> Result<(), Infallible> {
///         self.text = patch.text;
///         Ok(())
///     }
/// }
/// ```
pub trait Record: Clone + Send + Sync + 'static {
    /// The unique identifier of a record.
    type Id: Eq + Copy + Send + Sync + Display + Debug + 'static;

    /// The data accepted by an in-place update.
    type Patch: Send + Sync + Debug + 'static;

    /// The error a patch may raise. Use [`std::convert::Infallible`] when patches always apply.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier this record is stored under.
    fn id(&self) -> Self::Id;

    /// Applies a patch to the stored record.
    ///
    /// Runs inside the store task, so no other request observes the record half-updated. If it
    /// returns an error the stored record must be left as it was.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
}

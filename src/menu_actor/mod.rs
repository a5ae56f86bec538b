//! # Menu Actor
//!
//! The store task that owns every [`MenuItem`], and the error type shared by the menu layers.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](record_store::Record) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`], the failure taxonomy of the core
//! - [`new()`] - Factory that creates the store actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use menu_backend::menu_actor;
//! use menu_backend::model::{MenuItem, MenuItemId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = menu_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let mut item = MenuItem::new("Burger", 5.0);
//!     item.id = MenuItemId(1);
//!     client.insert(item).await.unwrap();
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! Application code goes through [`MenuRepository`](crate::repository::MenuRepository), which
//! also owns the id sequence.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use record_store::{StoreActor, StoreClient};

/// Creates a new menu store actor and its client.
pub fn new(buffer_size: usize) -> (StoreActor<MenuItem>, StoreClient<MenuItem>) {
    StoreActor::new(buffer_size)
}

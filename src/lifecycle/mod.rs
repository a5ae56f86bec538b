//! # System Lifecycle
//!
//! Starting, wiring and stopping the menu backend.
//!
//! ## Startup
//!
//! [`MenuSystem::new`] creates the store actor, spawns it, and builds the
//! [`MenuRepository`](crate::repository::MenuRepository) and
//! [`MenuService`](crate::service::MenuService) on top of its client.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles**: the service clones hold the store's channel sender
//! 2. **Store detects closure**: `receiver.recv()` returns `None`
//! 3. **Store logs its final size** and its task ends
//! 4. **Await completion**: [`MenuSystem::shutdown`] waits for the task
//!
//! Nothing is flushed; the menu lives only as long as the process.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging. See the [`tracing`] module.

pub mod menu_system;
pub mod tracing;

pub use self::menu_system::*;
pub use self::tracing::*;

//! The menu business layer. [`MenuService`] is what the HTTP handlers call.

pub mod menu_service;

pub use menu_service::*;

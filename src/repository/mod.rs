//! Typed access to the menu store. [`MenuRepository`] is the only code allowed to change it.

pub mod menu_repository;

pub use menu_repository::*;

//! Pure data structures for the menu, plus the field constraints checked at the boundary.

pub mod menu_item;
pub mod validation;

pub use menu_item::*;
pub use validation::*;

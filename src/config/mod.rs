//! Layered configuration (defaults, optional file, environment).

pub mod settings;

pub use settings::*;

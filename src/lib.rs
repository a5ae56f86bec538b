//! # Menu Backend
//!
//! > **A menu-management service for a coffee shop, built on a record store actor.**
//!
//! Items live in a single store task that processes requests one at a time, so concurrent
//! callers never observe a half-applied change. Everything above it is plain async Rust.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`MenuItem`](model::MenuItem), [`Modifier`](model::Modifier), [`Promotion`](model::Promotion)
//! and the body constraints checked by [`MenuItem::validate`](model::MenuItem::validate).
//!
//! ### 2. The Store ([`menu_actor`], [`repository`])
//! [`menu_actor`] plugs [`MenuItem`](model::MenuItem) into the generic
//! [`record_store::StoreActor`]. [`MenuRepository`](repository::MenuRepository) wraps its client
//! and issues ids.
//!
//! ### 3. The Rules ([`service`])
//! [`MenuService`](service::MenuService) checks ids and implements the partial update.
//!
//! ### 4. The Edges ([`api`], [`config`], [`lifecycle`])
//! - [`api`]: axum routes and the `{code, message}` error body
//! - [`config`]: [`Settings`](config::Settings) from defaults, file and `MENU__*` env vars
//! - [`lifecycle`]: [`MenuSystem`](lifecycle::MenuSystem) wiring and [`setup_tracing`](lifecycle::setup_tracing)
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Serve on 0.0.0.0:8080 with the demo items loaded
//! MENU__STORE__SEED_DEMO_ITEMS=true RUST_LOG=info cargo run
//! ```

pub mod api;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod repository;
pub mod service;

//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber for the binary.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Hierarchical spans**: repository and service calls are `#[instrument]`ed, HTTP requests get
//!   a span from `tower_http::trace::TraceLayer`
//! - **Log levels** via `RUST_LOG`, `info` when unset
//!
//! ```bash
//! RUST_LOG=info cargo run                     # compact
//! RUST_LOG=debug cargo run                    # full payloads
//! RUST_LOG=record_store=debug,info cargo run  # store requests only
//! ```
//!
//! With `RUST_LOG=info`, creating an item logs something like:
//!
//! ```text
//! INFO create_menu_item: Inserted record_type="MenuItem" id=1 size=1
//! INFO create_menu_item: Menu item created id=1 name=Burger
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

//! # Tracing Setup
//!
//! Structured logging for actor systems. Every actor logs with an `entity_type` field and the
//! entity id, so module paths are left out of the output (`with_target(false)`).
//!
//! Log levels follow `RUST_LOG`; without it everything at `info` and above is shown:
//!
//! ```bash
//! RUST_LOG=debug cargo run            # every request an actor sees
//! RUST_LOG=warn cargo run             # failures only
//! ```

use tracing_subscriber::EnvFilter;

/// Install the global compact `fmt` subscriber. Safe to call more than once; later calls are
/// ignored (tests in the same binary each call it).
///
/// ```rust
/// actor_framework::tracing::setup_tracing();
/// tracing::info!("hub started");
/// ```
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

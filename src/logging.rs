// Opt-in diagnostics for the demos.
//
// The library emits `debug` events when a registry resolves a key, a command
// runs or is undone, a subscriber receives an event, or a singleton is built.
// Failed deliveries are logged at `warn`.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a console subscriber filtered by `RUST_LOG`, once per process.
///
/// Does nothing when `RUST_LOG` is unset, so the demos print only their own
/// output: `RUST_LOG=pattern_catalog=debug cargo run --bin observer_demo`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        assert!(INIT.is_completed());
        tracing::debug!("still logging after repeated init");
    }
}

//! Logging setup for applications embedding the grid.
//!
//! The grid emits structured `tracing` events (`event = "rename.committed"`,
//! `event = "grid.activate"`, ...). These helpers install a `fmt` subscriber
//! so they show up without further wiring.

use tracing_subscriber::{EnvFilter, fmt};

/// Default filter: info+ for this crate, warn+ for everything else.
pub const DEFAULT_FILTER: &str = "directory_grid=info,warn";

/// Initialize a tracing subscriber, honoring `RUST_LOG` when set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    install(filter, false);
}

/// Initialize a tracing subscriber with a custom filter.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize a verbose subscriber for development: trace+ for this crate,
/// with file and line numbers.
pub fn init_tracing_dev() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "directory_grid=trace,info".into());
    install(filter, true);
}

fn install(filter: EnvFilter, verbose: bool) {
    // try_init: a subscriber installed by the host application wins
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init_tracing_with_filter("directory_grid=debug");
        init_tracing();
        init_tracing_dev();
    }
}

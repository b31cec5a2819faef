//! Mote command-line driver.
//!
//! The binary is a thin shell over this library: [`run_source`] runs a
//! whole program against a print sink, and [`commands`] holds the
//! `run`, `parse` and `lex` handlers.

pub mod commands;
mod config;
mod runner;

use std::sync::Once;

pub use config::{ConfigError, RunConfig};
pub use runner::{run_source, RunError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Silent unless `RUST_LOG` is set, e.g. `RUST_LOG=mote_eval=trace`.
/// `MOTE_LOG_TREE=1` switches to an indented call tree. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var("MOTE_LOG_TREE").is_ok_and(|value| value == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

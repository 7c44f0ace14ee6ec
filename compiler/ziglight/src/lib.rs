//! Command-line driver for the `ziglight_lexer` tokenizer.
//!
//! The binary in `main.rs` only parses arguments; every command lives in
//! [`commands`] and writes to a caller-supplied sink so it can be tested
//! without spawning a process.

use std::sync::Once;

pub mod commands;
mod error;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=ziglight_lexer=trace`
/// to see every token as it is emitted.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

//! Moon compiler driver.
//!
//! Only the front end exists so far: chunks are streamed from a file or
//! stdin through the lexer, and `moonc lex` prints the resulting tokens.

mod commands;

pub use commands::{check_chunk, dump_tokens, Chunk, CommandError};

use std::sync::Once;

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV: &str = "MOON_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber (stderr, filtered by `MOON_LOG`).
///
/// Safe to call more than once; does nothing when `MOON_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_some() {
            let filter = EnvFilter::from_env(LOG_ENV);
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

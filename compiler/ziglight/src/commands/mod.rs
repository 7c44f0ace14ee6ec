//! Command handlers for the `ziglight` CLI.
//!
//! Each submodule implements one command. Commands take the path to read and
//! a sink to write to; `main` passes stdout. Shared utilities like
//! `read_file` live here in the module root.

use tracing::debug;

use crate::CliError;

mod check;
mod lex;
mod stats;

pub use check::{check_file, check_source};
pub use lex::{lex_file, lex_source};
pub use stats::{stats_file, stats_source, TagCounts};

/// Read a source file as raw bytes.
///
/// No encoding check: the tokenizer accepts any bytes and reports what it
/// cannot classify as invalid tokens.
pub(crate) fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    debug!(path, len = bytes.len(), "read source file");
    Ok(bytes)
}

/// Render token bytes as a quoted, escaped string for terminal output.
pub(crate) fn quote(bytes: &[u8]) -> String {
    format!("{:?}", String::from_utf8_lossy(bytes))
}

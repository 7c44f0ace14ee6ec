use std::io;

use thiserror::Error;

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", describe_io(.path, .source))]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("found {count} invalid token(s) in '{path}'")]
    InvalidTokens { path: String, count: usize },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl CliError {
    /// Process exit code: 2 for bad invocations, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Io { .. } | CliError::InvalidTokens { .. } | CliError::Output(_) => 1,
        }
    }
}

fn describe_io(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}

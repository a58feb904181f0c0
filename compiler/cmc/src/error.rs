use std::path::PathBuf;

use cm_ir::ClassFileError;
use thiserror::Error;

/// Failures reported by driver commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Parsing or model errors, including missing files.
    #[error(transparent)]
    ClassFile(#[from] ClassFileError),

    /// Any other I/O failure on a specific path.
    #[error("cannot access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

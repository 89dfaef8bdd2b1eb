use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while converting a single map.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The driver treats this one as a skip, not a failure.
    #[error("source map {} not found", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "{} is malformed: layer 0 needs {expected} tile ids, `data` has {actual}",
        .path.display()
    )]
    MalformedMap {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },

    #[error("IO error with {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;

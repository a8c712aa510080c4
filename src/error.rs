//! Error types for materializing a single library file.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using `MaterializeError`
pub type Result<T> = std::result::Result<T, MaterializeError>;

/// Per-file failures. None of these abort a run; the driver counts them.
#[derive(Error, Debug)]
pub enum MaterializeError {
    /// The source is not nested at least two named directories deep.
    #[error("cannot derive destination for {0}: need artist and album directories")]
    InvalidPath(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tag error on {path}: {source}")]
    Tag {
        path: PathBuf,
        #[source]
        source: lofty::error::LoftyError,
    },

    /// The container decoded but carries no tag at all.
    #[error("no tags found in {0}")]
    NoTags(PathBuf),

    #[error("missing {field} tag in {path}")]
    MissingField { path: PathBuf, field: &'static str },

    /// Integrity error: a field expected to be single-valued holds several values.
    #[error("{field} tag in {path} holds {count} values, expected one")]
    MultipleValues {
        path: PathBuf,
        field: &'static str,
        count: usize,
    },
}

impl MaterializeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn tag(path: impl Into<PathBuf>, source: lofty::error::LoftyError) -> Self {
        Self::Tag {
            path: path.into(),
            source,
        }
    }
}

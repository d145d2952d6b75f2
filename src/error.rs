// src/error.rs
//! Public error type for the entire crate

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The platform user-config directory could not be resolved, typically
    /// because `$HOME` is unset.
    #[error("could not determine the user config directory")]
    NoConfigDir,

    /// A filesystem operation failed for a reason other than "not found"
    #[error("{} {}: {}", .op, .path.display(), .source)]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file holds malformed JSON, or JSON that does not match
    /// the shape of the destination value
    #[error("decode config JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The value could not be encoded as JSON
    #[error("encode config JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

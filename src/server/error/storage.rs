use std::path::PathBuf;
use thiserror::Error;

/// Failure writing to the flat-file fallback store.
///
/// Reaching this error means both backends are exhausted for the current call, since
/// the file store is only used once the relational store is unavailable or disabled.
#[derive(Error, Debug)]
pub enum FileStoreError {
    /// The collection could not be serialized to JSON.
    #[error("Failed to serialize application collection: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The largest stored id is already the largest representable one.
    #[error("No application id left to assign in {}", path.display())]
    IdSpaceExhausted {
        /// Path of the exhausted collection
        path: PathBuf,
    },

    /// The collection could not be written to disk.
    #[error("Failed to write application file {}: {source}", path.display())]
    Write {
        /// Path that was being written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

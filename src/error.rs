//! Errors raised while loading level, tuning or settings documents.
//!
//! The simulation itself is total; only the JSON/file loaders can fail.

/// Errors that can occur while loading external data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the file from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for the expected type.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

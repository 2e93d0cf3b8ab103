use std::path::PathBuf;
use thiserror::Error;

/// Core error type for curlew operations.
///
/// The assembler itself is infallible (missing inputs fall back to
/// defaults); only emitting the assembled configuration can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to encode config: {0}")]
    ConfigEncode(#[from] serde_json::Error),

    #[error("Failed to write config to {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

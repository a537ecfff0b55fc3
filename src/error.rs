//! Error types for wordroot

use thiserror::Error;

/// Result type alias for wordroot operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading words or building a tree
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot build a tree from an empty word list")]
    EmptyInput,

    #[error("invalid digest: {0}")]
    InvalidDigest(String),
}

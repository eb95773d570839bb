//! Library error type.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown format: {0}. Use text or json")]
    UnknownFormat(String),

    /// Any failure while asking the completion service for a doc block.
    #[error("An error occurred while trying to get the doc block: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, Error>;

use std::path::PathBuf;
use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while supplying documents to the tokenizer
#[derive(Error, Debug)]
pub enum CorpusError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The git binary could not be launched
    #[error("Failed to launch git: {0}")]
    GitUnavailable(std::io::Error),

    /// git exited non-zero
    #[error("git clone of {url} failed: {stderr}")]
    CloneFailed { url: String, stderr: String },

    /// Refusing to clone over existing content
    #[error("Destination already exists and is not empty: {0}")]
    DestinationNotEmpty(PathBuf),

    /// Repo has no README.md at its root
    #[error("No README.md found under {0}")]
    ReadmeMissing(PathBuf),
}

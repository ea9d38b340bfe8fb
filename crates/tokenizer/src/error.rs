use thiserror::Error;

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, TokenizerError>;

/// Errors surfaced by the tokenizer module.
///
/// End of stream is not an error; [`crate::TokenStream::next`] reports it
/// as `Ok(None)` and keeps doing so on every later call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
    /// Document handle out of range; reported at `open`, never at `next`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// `next` or `close` called on a closed stream; a host-engine bug
    #[error("Tokenizer state used after close")]
    UseAfterClose,

    /// A module with the same name is already registered
    #[error("Tokenizer module already registered: {0}")]
    DuplicateModule(String),
}

impl TokenizerError {
    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

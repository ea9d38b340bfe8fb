//! # Repotok Corpus
//!
//! Everything that puts bytes in front of the tokenizer: shallow-cloning a
//! repository, locating and cleaning its README, and walking its tree for
//! source files.
//!
//! ## Pipeline
//!
//! ```text
//! Repository URL
//!     │
//!     ├──> RepoFetcher (git clone --depth N)
//!     │      └─> Local checkout
//!     │
//!     ├──> FileScanner (.gitignore aware)
//!     │      └─> Source files → one Document each
//!     │
//!     └──> README cleanup (links/images/badges stripped)
//!            └─> Prose text, ready to tokenize or summarize
//! ```

mod error;
mod fetch;
mod readme;
mod scanner;

pub use error::{CorpusError, Result};
pub use fetch::RepoFetcher;
pub use readme::{clean_readme, load_readme};
pub use scanner::FileScanner;

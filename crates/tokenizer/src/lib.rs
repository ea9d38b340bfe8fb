//! # Repotok Tokenizer
//!
//! Sub-word tokenization of code identifiers for full-text search.
//!
//! A host search engine hands this crate one document at a time and pulls
//! back normalized tokens, each tied to the exact byte range it came from.
//! Identifiers like `getUserById123` or `API_Endpoint` become the tokens a
//! user would actually type into a search box (`get`, `user`, `by`, `id`,
//! `123`, `api`, `endpoint`).
//!
//! ## Pipeline
//!
//! ```text
//! Document bytes
//!     │
//!     ├──> Byte classification (lower/upper/digit/underscore/other)
//!     │
//!     ├──> Segmentation → maximal letter/digit runs
//!     │      (underscores and punctuation are separators, never tokens)
//!     │
//!     ├──> Boundary detection within each run
//!     │      ├─> lower→upper       helloWorld  → hello | World
//!     │      ├─> acronym→word      APIEndpoint → API | Endpoint
//!     │      └─> letter↔digit      userID123   → user | ID | 123
//!     │
//!     └──> Normalization (ASCII lowercase)
//!            └─> Token { text, span, position }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use repotok_tokenizer::{Document, IdentifierTokenizer, Tokenizer};
//!
//! let doc = Document::new(b"getUserById123");
//! let tokenizer = IdentifierTokenizer;
//!
//! let mut stream = tokenizer.open(doc).unwrap();
//! let mut texts = Vec::new();
//! while let Some(token) = stream.next().unwrap() {
//!     texts.push(token.text);
//! }
//! assert_eq!(texts, ["get", "user", "by", "id", "123"]);
//! ```

mod boundary;
mod category;
mod error;
mod normalize;
mod registry;
mod segment;
mod stream;
mod types;

pub use boundary::cut_points;
pub use category::Category;
pub use error::{Result, TokenizerError};
pub use normalize::normalize;
pub use registry::{IdentifierTokenizer, Tokenizer, TokenizerRegistry, TOKENIZER_API_VERSION};
pub use segment::{Run, Runs};
pub use stream::TokenStream;
pub use types::{ByteSpan, Document, Token};

use serde::{Deserialize, Serialize};

/// Half-open byte interval `[start, end)` into a [`Document`].
///
/// Invariant for emitted tokens: `start < end`, and spans of one document
/// strictly increase in `start` without overlapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteSpan {
    /// First byte of the token in the source document
    pub start: usize,

    /// One past the last byte of the token
    pub end: usize,
}

impl ByteSpan {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// One immutable input buffer, borrowed for a single tokenization pass.
///
/// The buffer is never copied or mutated. The host passes the raw bytes, an
/// optional window (the "bytes plus length" a database engine hands its
/// tokenizer when only part of a column should be scanned), and a logical
/// column identifier for context. The window is validated when the document
/// is opened, not here.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a> {
    bytes: &'a [u8],
    window: Option<ByteSpan>,
    column: Option<&'a str>,
}

impl<'a> Document<'a> {
    /// Document covering a whole buffer
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            window: None,
            column: None,
        }
    }

    /// Restrict tokenization to `[start, end)` of the buffer.
    ///
    /// The range is taken as-given from the host and checked at
    /// [`crate::TokenStream::open`]; an out-of-range window is the
    /// `InvalidInput` condition.
    #[must_use]
    pub const fn with_window(mut self, start: usize, end: usize) -> Self {
        self.window = Some(ByteSpan::new(start, end));
        self
    }

    /// Attach the host's logical column identifier
    #[must_use]
    pub const fn with_column(mut self, column: &'a str) -> Self {
        self.column = Some(column);
        self
    }

    /// Full underlying buffer
    #[must_use]
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Host-declared window, if any
    #[must_use]
    pub const fn window(&self) -> Option<ByteSpan> {
        self.window
    }

    /// Logical column identifier, if any
    #[must_use]
    pub const fn column(&self) -> Option<&'a str> {
        self.column
    }
}

/// A normalized sub-word token tied to its source bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Lowercased token text
    pub text: String,

    /// Exact byte range in the source document
    pub span: ByteSpan,

    /// Emission ordinal (`0, 1, 2, ...` per document), the unit the host
    /// engine uses for phrase and proximity matching
    pub position: usize,
}

impl Token {
    /// Create a new token
    #[must_use]
    pub const fn new(text: String, span: ByteSpan, position: usize) -> Self {
        Self {
            text,
            span,
            position,
        }
    }
}

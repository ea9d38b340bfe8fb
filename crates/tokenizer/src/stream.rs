use std::collections::VecDeque;

use crate::boundary::cut_points;
use crate::error::{Result, TokenizerError};
use crate::normalize::normalize;
use crate::segment::Runs;
use crate::types::{ByteSpan, Document, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Scanning,
    Exhausted,
    Closed,
}

/// Pull-based token stream over one [`Document`].
///
/// State machine: `Scanning` (repeatable [`next`](Self::next)) →
/// `Exhausted` (terminal; every later `next` keeps returning `Ok(None)`),
/// with [`close`](Self::close) reachable from any state. A closed stream
/// fails any further call with [`TokenizerError::UseAfterClose`].
///
/// Every call runs to completion on the caller's thread; there is no I/O
/// and no blocking. One stream must be driven by one caller at a time —
/// share the document, not the stream.
pub struct TokenStream<'a> {
    bytes: &'a [u8],
    runs: Runs<'a>,
    pending: VecDeque<ByteSpan>,
    position: usize,
    state: StreamState,
}

impl<'a> TokenStream<'a> {
    /// Bind fresh scanning state to a document without copying its buffer.
    ///
    /// Fails only when the host-declared window falls outside the buffer;
    /// that is the single `InvalidInput` condition, and it is reported
    /// here, never at [`next`](Self::next).
    pub fn open(doc: Document<'a>) -> Result<Self> {
        let bytes = doc.bytes();
        let window = match doc.window() {
            Some(window) => {
                if window.start > window.end || window.end > bytes.len() {
                    return Err(TokenizerError::invalid_input(format!(
                        "window [{}, {}) out of range for a {}-byte document",
                        window.start,
                        window.end,
                        bytes.len()
                    )));
                }
                window
            }
            None => ByteSpan::new(0, bytes.len()),
        };

        Ok(Self {
            bytes,
            runs: Runs::new(&bytes[window.start..window.end], window.start),
            pending: VecDeque::new(),
            position: 0,
            state: StreamState::Scanning,
        })
    }

    /// Pull the next token, or `Ok(None)` once the document is exhausted.
    ///
    /// Exhaustion is idempotent; positions count up from 0 in emission
    /// order with no gaps.
    pub fn next(&mut self) -> Result<Option<Token>> {
        match self.state {
            StreamState::Closed => return Err(TokenizerError::UseAfterClose),
            StreamState::Exhausted => return Ok(None),
            StreamState::Scanning => {}
        }

        let span = loop {
            if let Some(span) = self.pending.pop_front() {
                break span;
            }
            let Some(run) = self.runs.next() else {
                self.state = StreamState::Exhausted;
                return Ok(None);
            };

            let mut start = run.span.start;
            for cut in cut_points(run.bytes) {
                self.pending.push_back(ByteSpan::new(start, run.span.start + cut));
                start = run.span.start + cut;
            }
            self.pending.push_back(ByteSpan::new(start, run.span.end));
        };

        let token = Token::new(
            normalize(&self.bytes[span.start..span.end]),
            span,
            self.position,
        );
        self.position += 1;
        Ok(Some(token))
    }

    /// Release the state. Valid at most once; later calls to
    /// [`next`](Self::next) or `close` are [`TokenizerError::UseAfterClose`].
    pub fn close(&mut self) -> Result<()> {
        if self.state == StreamState::Closed {
            return Err(TokenizerError::UseAfterClose);
        }
        self.state = StreamState::Closed;
        self.pending.clear();
        Ok(())
    }

    /// Drain the remaining tokens into a vector and close the stream.
    pub fn collect_tokens(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next()? {
            tokens.push(token);
        }
        self.close()?;
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::TokenStream;
    use crate::error::TokenizerError;
    use crate::types::Document;
    use pretty_assertions::assert_eq;

    fn texts(input: &[u8]) -> Vec<String> {
        TokenStream::open(Document::new(input))
            .unwrap()
            .collect_tokens()
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn composes_segmentation_boundaries_and_normalization() {
        assert_eq!(texts(b"camelCase_with_123"), ["camel", "case", "with", "123"]);
        assert_eq!(texts(b"API_Endpoint"), ["api", "endpoint"]);
    }

    #[test]
    fn spans_index_the_original_bytes() {
        let input = b"getUserById123";
        let tokens = TokenStream::open(Document::new(input))
            .unwrap()
            .collect_tokens()
            .unwrap();
        for token in &tokens {
            let source = &input[token.span.start..token.span.end];
            assert_eq!(token.text, source.to_ascii_lowercase().iter().map(|&b| b as char).collect::<String>());
        }
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn positions_are_contiguous_from_zero() {
        let tokens = TokenStream::open(Document::new(b"one_twoThree 4"))
            .unwrap()
            .collect_tokens()
            .unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn exhaustion_is_idempotent() {
        let mut stream = TokenStream::open(Document::new(b"ab")).unwrap();
        assert!(stream.next().unwrap().is_some());
        assert!(stream.next().unwrap().is_none());
        assert!(stream.next().unwrap().is_none());
        assert!(stream.next().unwrap().is_none());
    }

    #[test]
    fn empty_document_is_immediately_exhausted() {
        let mut stream = TokenStream::open(Document::new(b"")).unwrap();
        assert_eq!(stream.next().unwrap(), None);
    }

    #[test]
    fn window_restricts_the_scan_and_keeps_spans_absolute() {
        let input = b"skip helloWorld skip";
        let doc = Document::new(input).with_window(5, 15);
        let tokens = TokenStream::open(doc).unwrap().collect_tokens().unwrap();
        assert_eq!(tokens[0].text, "hello");
        assert_eq!((tokens[0].span.start, tokens[0].span.end), (5, 10));
        assert_eq!(tokens[1].text, "world");
        assert_eq!((tokens[1].span.start, tokens[1].span.end), (10, 15));
    }

    #[test]
    fn out_of_range_window_fails_at_open() {
        let doc = Document::new(b"abc").with_window(1, 9);
        assert!(matches!(
            TokenStream::open(doc),
            Err(TokenizerError::InvalidInput(_))
        ));

        let doc = Document::new(b"abc").with_window(3, 1);
        assert!(matches!(
            TokenStream::open(doc),
            Err(TokenizerError::InvalidInput(_))
        ));
    }

    #[test]
    fn close_is_terminal() {
        let mut stream = TokenStream::open(Document::new(b"helloWorld")).unwrap();
        assert!(stream.next().unwrap().is_some());
        stream.close().unwrap();

        assert_eq!(stream.next(), Err(TokenizerError::UseAfterClose));
        assert_eq!(stream.close(), Err(TokenizerError::UseAfterClose));
    }

    #[test]
    fn close_is_reachable_before_any_next() {
        let mut stream = TokenStream::open(Document::new(b"helloWorld")).unwrap();
        stream.close().unwrap();
        assert_eq!(stream.next(), Err(TokenizerError::UseAfterClose));
    }
}

use crate::category::Category;
use crate::types::ByteSpan;

/// One maximal run of letter/digit bytes.
///
/// The span is absolute into the document buffer; `bytes` is the matching
/// slice. Runs never contain underscores or other separator bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    /// The run's bytes
    pub bytes: &'a [u8],

    /// Absolute position of the run in the source document
    pub span: ByteSpan,
}

/// Iterator over the maximal letter/digit runs of a buffer.
///
/// Scans left to right exactly once. Separator bytes between runs are
/// skipped and never emitted; a trailing open run is closed at end of
/// input. All-separator input yields nothing.
pub struct Runs<'a> {
    bytes: &'a [u8],
    base: usize,
    pos: usize,
}

impl<'a> Runs<'a> {
    /// Iterate the runs of `bytes`, reporting spans offset by `base`.
    ///
    /// `base` is the window start when only part of a document is scanned,
    /// so emitted spans always index the full document buffer.
    #[must_use]
    pub const fn new(bytes: &'a [u8], base: usize) -> Self {
        Self {
            bytes,
            base,
            pos: 0,
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Run<'a>> {
        while self.pos < self.bytes.len() && !Category::of(self.bytes[self.pos]).is_word() {
            self.pos += 1;
        }
        if self.pos == self.bytes.len() {
            return None;
        }

        let start = self.pos;
        while self.pos < self.bytes.len() && Category::of(self.bytes[self.pos]).is_word() {
            self.pos += 1;
        }

        Some(Run {
            bytes: &self.bytes[start..self.pos],
            span: ByteSpan::new(self.base + start, self.base + self.pos),
        })
    }
}

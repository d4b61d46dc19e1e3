//! Source spans and file locations.
//!
//! Spans are byte offsets into a source file; the engine never reads source
//! text itself, it only carries the spans handed to it by the host facade.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, start + length)` in a source file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: u32,
    pub length: u32,
}

impl Span {
    #[must_use]
    pub const fn new(start: u32, length: u32) -> Self {
        Self { start, length }
    }

    #[must_use]
    pub const fn end(&self) -> u32 {
        self.start + self.length
    }

    /// Whether `other` lies entirely inside this span.
    #[must_use]
    pub const fn contains(&self, other: Span) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }
}

/// A span within a named file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub span: Span,
}

impl Location {
    #[must_use]
    pub fn new(file: impl Into<String>, span: Span) -> Self {
        Self {
            file: file.into(),
            span,
        }
    }
}

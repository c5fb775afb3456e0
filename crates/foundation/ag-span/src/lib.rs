//! Source file spans and locations
//!
//! Two coordinate systems live here. [`Span`] is a byte range local to one
//! file, which is what the syntax tree speaks. [`SourceLoc`] is a position in
//! the global location space shared by every file registered in a
//! [`SourceMap`], which is what the AST speaks.

mod source_map;

pub use source_map::{SourceFile, SourceMap};

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::ops::Range;

/// A unique identifier for a source file
#[derive(Copy, Clone, Debug, Display, Hash, Eq, PartialEq, Ord, PartialOrd, From, Serialize, Deserialize)]
#[display("file#{_0}")]
pub struct FileId(pub u32);

impl FileId {
    /// Creates a file id from its raw index
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A byte offset span in a source file
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset
    pub start: u32,
    /// Exclusive end offset
    pub end: u32,
}

impl Span {
    /// Creates a span from two offsets
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start {start} is past its end {end}");
        Self { start, end }
    }

    /// Byte range usable for slicing source text
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Length in bytes
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// A span with associated file
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct FileSpan {
    /// The file the span points into
    pub file: FileId,
    /// Local byte range
    pub span: Span,
}

impl FileSpan {
    /// Creates a file span
    pub fn new(file: FileId, span: Span) -> Self {
        Self { file, span }
    }

    /// Byte range usable for slicing source text
    pub fn range(&self) -> Range<usize> {
        self.span.range()
    }
}

/// A position in the global location space of a [`SourceMap`].
///
/// Offset `0` is never handed out, so an absent location is simply
/// `Option::<SourceLoc>::None` and costs no extra space.
#[derive(Copy, Clone, Debug, Display, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[display("@{_0}")]
pub struct SourceLoc(NonZeroU32);

impl SourceLoc {
    /// The lowest valid location
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a location from a raw global offset, `None` for offset `0`
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Raw global offset
    pub fn raw(self) -> u32 {
        self.0.get()
    }

    /// Location `delta` bytes further into the same buffer
    #[must_use]
    pub fn advanced_by(self, delta: u32) -> Self {
        Self(self.0.saturating_add(delta))
    }
}

/// A range between two locations.
///
/// Both ends point at the *start* of a token: `end` is the location of the
/// last token in the range, not one past it.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SourceRange {
    /// Location of the first token
    pub start: SourceLoc,
    /// Location of the last token
    pub end: SourceLoc,
}

impl SourceRange {
    /// Creates a range, `start` must not be after `end`
    pub fn new(start: SourceLoc, end: SourceLoc) -> Self {
        debug_assert!(start <= end, "range start {start} is past its end {end}");
        Self { start, end }
    }

    /// A range covering exactly one token
    pub fn single(loc: SourceLoc) -> Self {
        Self { start: loc, end: loc }
    }

    /// Whether `loc` lies within the range (inclusive on both ends)
    pub fn contains(&self, loc: SourceLoc) -> bool {
        self.start <= loc && loc <= self.end
    }
}

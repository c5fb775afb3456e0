//! Registry of source files laid out in one global location space

use crate::{FileId, SourceLoc, Span};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Bytes reserved in front of every file so no file starts at offset `0`
const PADDING: u32 = 1;

/// A source file registered in a [`SourceMap`]
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Identifier of the file
    pub id: FileId,
    /// Display name (usually a path)
    pub name: String,
    /// Full source text
    pub source: Arc<str>,
    /// Global location of the first byte of the file
    pub base: SourceLoc,
}

impl SourceFile {
    /// Length of the file in bytes
    pub fn len(&self) -> u32 {
        self.source.len() as u32
    }

    /// Whether the file is empty
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Global location of a local byte offset
    pub fn loc(&self, offset: u32) -> SourceLoc {
        debug_assert!(offset <= self.len(), "offset {offset} is outside of {}", self.name);
        self.base.advanced_by(offset)
    }

    /// Whether `loc` falls inside this file (the end-of-file position included)
    pub fn contains(&self, loc: SourceLoc) -> bool {
        let start = self.base.raw();
        (start..=start + self.len()).contains(&loc.raw())
    }

    /// Source text covered by a local span
    pub fn snippet(&self, span: Span) -> &str {
        &self.source[span.range()]
    }
}

/// Mapping from [`FileId`] to [`SourceFile`].
///
/// Files are laid out next to each other, each preceded by one byte of
/// padding. The padding keeps global offset `0` unmapped and gives the
/// end-of-file position of one file a location distinct from the start of
/// the next.
///
/// ```text
/// | |  f0  | |  f1  | ...
///  ^ ^      ^ ^
///  | |      | f1.base
///  | f0.base padding
///  padding, never a location
/// ```
#[derive(Debug, Default)]
pub struct SourceMap {
    files: Vec<SourceFile>,
    by_name: FxHashMap<String, FileId>,
}

impl SourceMap {
    /// Creates an empty source map
    pub fn new() -> Self {
        Self::default()
    }

    fn next_base(&self) -> SourceLoc {
        let end = self
            .files
            .last()
            .map_or(0, |file| file.base.raw() + file.len());
        SourceLoc::FIRST.advanced_by(end + PADDING - 1)
    }

    /// Registers a file and returns its id.
    ///
    /// Every call registers a new file with its own id and location range.
    /// A name registered again refers to the newest file from then on.
    pub fn add(&mut self, name: impl Into<String>, source: impl Into<Arc<str>>) -> FileId {
        let name = name.into();
        let id = FileId(self.files.len() as u32);
        let base = self.next_base();
        self.by_name.insert(name.clone(), id);
        self.files.push(SourceFile {
            id,
            name,
            source: source.into(),
            base,
        });
        id
    }

    /// Looks up a file by id
    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.0 as usize]
    }

    /// Looks up the newest file registered under a display name
    pub fn file_by_name(&self, name: &str) -> Option<&SourceFile> {
        self.by_name.get(name).map(|&id| self.file(id))
    }

    /// Finds the file containing a global location and the local offset in it
    pub fn lookup(&self, loc: SourceLoc) -> Option<(FileId, u32)> {
        let index = self
            .files
            .partition_point(|file| file.base <= loc)
            .checked_sub(1)?;
        let file = &self.files[index];
        file.contains(loc)
            .then(|| (file.id, loc.raw() - file.base.raw()))
    }

    /// All registered files in registration order
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    /// Number of registered files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether no file has been registered
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_do_not_overlap() {
        let mut map = SourceMap::new();
        let first = map.add("a.swift", "struct A {}");
        let second = map.add("b.swift", "enum B {}");

        let end_of_first = map.file(first).loc(11);
        let start_of_second = map.file(second).loc(0);
        assert!(end_of_first < start_of_second);
        assert_eq!(map.file(first).base.raw(), 1);
    }

    #[test]
    fn test_lookup_roundtrip() {
        let mut map = SourceMap::new();
        map.add("a.swift", "let x = 1");
        let id = map.add("b.swift", "import Foo");

        let loc = map.file(id).loc(7);
        assert_eq!(map.lookup(loc), Some((id, 7)));
        assert_eq!(map.file(id).snippet(Span::new(7, 10)), "Foo");
    }

    #[test]
    fn test_duplicate_registration() {
        let mut map = SourceMap::new();
        let id1 = map.add("a.swift", "");
        let id2 = map.add("a.swift", "edited");
        assert_ne!(id1, id2);
        assert_eq!(map.len(), 2);
        assert!(map.file(id1).is_empty());
        assert_eq!(map.file(id2).source.as_ref(), "edited");
        assert!(map.file(id1).base < map.file(id2).base);
        assert_eq!(map.file_by_name("a.swift").map(|file| file.id), Some(id2));
        assert_eq!(map.lookup(map.file(id2).loc(0)), Some((id2, 0)));
    }
}

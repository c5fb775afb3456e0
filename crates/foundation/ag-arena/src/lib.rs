//! Indexed arena allocator for AST nodes
//!
//! Single nodes live in `la-arena` arenas, the same arena implementation
//! rust-analyzer uses. Variable-length node lists are frozen into
//! [`ArrayArena`]s: built once from an iterator, owned by the arena, and
//! referred to through a copyable [`ArrayRef`].

pub use la_arena::{Arena, ArenaMap, Idx, RawIdx};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// Handle to an immutable, contiguous array owned by an [`ArrayArena`]
pub struct ArrayRef<T> {
    idx: Idx<Box<[T]>>,
    len: u32,
}

impl<T> ArrayRef<T> {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether the array has no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Clone for ArrayRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArrayRef<T> {}

impl<T> PartialEq for ArrayRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

impl<T> Eq for ArrayRef<T> {}

impl<T> Hash for ArrayRef<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.idx.hash(state);
    }
}

impl<T> fmt::Debug for ArrayRef<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "ArrayRef({}; len {})", u32::from(self.idx.into_raw()), self.len)
    }
}

/// Arena of frozen arrays
pub struct ArrayArena<T> {
    arrays: Arena<Box<[T]>>,
}

impl<T> ArrayArena<T> {
    /// Creates an empty array arena
    pub fn new() -> Self {
        Self {
            arrays: Arena::new(),
        }
    }

    /// Collects `items` into one contiguous array and takes ownership of it.
    ///
    /// Element order is preserved exactly. An empty iterator still yields a
    /// valid (empty) array.
    pub fn alloc<I>(&mut self, items: I) -> ArrayRef<T>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Box<[T]> = items.into_iter().collect();
        let len = items.len() as u32;
        ArrayRef {
            idx: self.arrays.alloc(items),
            len,
        }
    }

    /// Borrows the elements of an array
    pub fn get(&self, array: ArrayRef<T>) -> &[T] {
        &self.arrays[array.idx]
    }

    /// Number of arrays allocated so far
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Whether no array has been allocated
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }
}

impl<T> Default for ArrayArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayArena<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.arrays.values())
            .finish()
    }
}

impl<T> Index<ArrayRef<T>> for ArrayArena<T> {
    type Output = [T];

    fn index(&self, array: ArrayRef<T>) -> &[T] {
        self.get(array)
    }
}

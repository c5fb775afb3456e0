//! Identifier interning shared between the syntax tree and the AST

pub use lasso::Spur as Identifier;
use lasso::ThreadedRodeo;
use std::fmt;
use std::sync::Arc;

/// Thread-safe identifier interner.
///
/// Cloning is cheap and every clone interns into the same table, so files
/// lowered on different threads agree on identifier values.
#[derive(Clone, Default)]
pub struct Interner {
    inner: Arc<ThreadedRodeo>,
}

impl Interner {
    /// Creates an empty interner
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a string
    pub fn intern(&self, text: &str) -> Identifier {
        self.inner.get_or_intern(text)
    }

    /// Returns the identifier of an already interned string
    pub fn get(&self, text: &str) -> Option<Identifier> {
        self.inner.get(text)
    }

    /// Resolves an identifier to its text
    pub fn resolve(&self, ident: &Identifier) -> &str {
        self.inner.resolve(ident)
    }

    /// Resolves an identifier, `None` if it came from another interner
    pub fn try_resolve(&self, ident: &Identifier) -> Option<&str> {
        self.inner.try_resolve(ident)
    }

    /// Number of distinct strings interned so far
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing has been interned yet
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Interner {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Interner")
            .field("len", &self.len())
            .finish()
    }
}

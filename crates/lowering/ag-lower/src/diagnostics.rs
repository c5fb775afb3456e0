//! Diagnostics raised while lowering
//!
//! Lowering never fails. The only recoverable problem it detects is a
//! keyword that does not belong to the closed set expected at its position;
//! that produces one [`Diagnostic`] and the declaration is still built with a
//! fallback value.

use crate::LowerError;
use ag_span::Span;
use ag_syntax::{Token, TokenKind};
use miette::{NamedSource, Report};

/// A diagnostic keyed to the syntax node it was raised for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// File-local span of the offending node
    pub span: Span,
    /// What went wrong
    pub error: LowerError,
}

impl Diagnostic {
    /// Creates a diagnostic for the node covering `span`
    pub fn new(span: Span, error: LowerError) -> Self {
        Self { span, error }
    }

    /// Human readable message
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// Turns the diagnostic into a renderable report over the file text
    pub fn with_source(self, name: impl AsRef<str>, source: impl Into<String>) -> Report {
        Report::new(self.error).with_source_code(NamedSource::new(name, source.into()))
    }
}

/// Receives diagnostics as they are raised.
///
/// Implementations must not abort lowering; delivery and rendering are up to
/// them.
pub trait DiagnosticSink {
    /// Accepts one diagnostic
    fn diagnose(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Collects diagnostics in the order they were raised
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics collected so far
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Number of diagnostics
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Takes the collected diagnostics
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl DiagnosticSink for Diagnostics {
    fn diagnose(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }
}

/// Fallback resolution of a keyword token against a closed set.
///
/// Returns the mapped value, or `fallback` together with the error to report
/// when the token is not part of the set.
pub fn resolve_enumerant<T>(
    token: &Token,
    expected: &'static str,
    accepted: &'static str,
    fallback: T,
    map: impl FnOnce(TokenKind) -> Option<T>,
) -> (T, Option<LowerError>) {
    match map(token.kind) {
        Some(value) => (value, None),
        None => (
            fallback,
            Some(LowerError::unexpected_token_kind(expected, accepted, token)),
        ),
    }
}

//! Translation from token positions to AST locations
//!
//! A token is located at the start of its text, after its leading trivia.
//! Absent tokens translate to absent locations, never to a placeholder.

use crate::AstGen;
use ag_ast::LocatedIdentifier;
use ag_intern::Identifier;
use ag_span::{SourceLoc, SourceRange};
use ag_syntax::{Token, TokenKind};

impl AstGen<'_> {
    /// Location of the start of `token`'s text
    pub fn loc(&self, token: &Token) -> SourceLoc {
        self.base.advanced_by(token.position_after_leading_trivia())
    }

    /// Location of `token`, absent when the token is absent
    pub fn loc_opt(&self, token: Option<&Token>) -> Option<SourceLoc> {
        token.map(|token| self.loc(token))
    }

    /// Range from the start of `start` to the start of `end`
    pub fn range(&self, start: &Token, end: &Token) -> SourceRange {
        SourceRange::new(self.loc(start), self.loc(end))
    }

    /// Interned name spelled by `token`, absent for `_`
    pub fn identifier(&self, token: &Token) -> Option<Identifier> {
        match token.kind {
            TokenKind::Wildcard => None,
            _ => Some(self.interner.intern(identifier_text(&token.text))),
        }
    }

    /// Interned name and location of a declaration name
    pub fn identifier_and_loc(&self, token: &Token) -> (Identifier, SourceLoc) {
        (
            self.interner.intern(identifier_text(&token.text)),
            self.loc(token),
        )
    }

    /// Name and location packed for bridging into an array
    pub fn located_identifier(&self, token: &Token) -> LocatedIdentifier {
        let (name, loc) = self.identifier_and_loc(token);
        LocatedIdentifier { name, loc }
    }
}

/// Identifier text without the backticks of an escaped name
fn identifier_text(text: &str) -> &str {
    text.strip_prefix('`')
        .and_then(|inner| inner.strip_suffix('`'))
        .unwrap_or(text)
}

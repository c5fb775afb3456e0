//! The error type carried by lowering diagnostics
//!
//! Fields are read by the `thiserror` and `miette` derives only, which the
//! unused-assignment lint cannot see through.

#![allow(unused_assignments, reason = "fields are consumed by derive macros")]

use ag_syntax::{Token, TokenKind};
use miette::SourceSpan;
use thiserror::Error;

/// Problems found while lowering
#[derive(Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum LowerError {
    /// A keyword position holds a token outside the accepted set
    #[error("unexpected token kind for {expected}: {kind}")]
    #[diagnostic(code(lower::unexpected_token_kind), help("expected {accepted}"))]
    UnexpectedTokenKind {
        /// What the token should have been
        expected: &'static str,
        /// Human readable list of accepted spellings
        accepted: &'static str,
        /// Text of the offending token
        token: String,
        /// Kind of the offending token
        kind: TokenKind,
        /// Location of the offending token
        #[label("`{token}` is not accepted here")]
        span: SourceSpan,
    },
}

impl LowerError {
    /// Builds an [`LowerError::UnexpectedTokenKind`] pointing at `token`
    pub fn unexpected_token_kind(
        expected: &'static str,
        accepted: &'static str,
        token: &Token,
    ) -> Self {
        Self::UnexpectedTokenKind {
            expected,
            accepted,
            token: token.text.clone(),
            kind: token.kind,
            span: token.span().range().into(),
        }
    }
}

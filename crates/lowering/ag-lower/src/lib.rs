//! Declaration lowering - converts the syntax tree into the semantic AST
//!
//! This crate handles:
//! - Dispatch from every syntax kind to its lowering routine ([`Lower`])
//! - The current declaration context and its scoped replacement
//! - Translation of token positions into AST source locations
//! - Freezing lowered lists into arrays owned by the AST
//! - Diagnostics for keywords outside their closed set, with a fallback
//!
//! One [`AstGen`] lowers one file. Files are independent, so a driver may
//! lower several at once as long as each gets its own `AstGen`.

mod astgen;
mod bridge;
mod context;
mod decls;
mod diagnostics;
mod error;
mod exprs;
mod generics;
mod location;
mod params;
mod patterns;
mod stmts;
#[cfg(test)]
mod test_support;
mod types;

pub use astgen::{AstGen, Lower};
pub use context::DeclContextGuard;
pub use decls::{resolve_fixity, resolve_import_kind};
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, resolve_enumerant};
pub use error::LowerError;

use ag_arena::ArrayRef;
use ag_ast::{AstContext, AstNode};
use ag_intern::Interner;
use ag_span::SourceFile;
use ag_syntax::SourceFileSyntax;
use tracing::debug_span;

/// Lowers the top level of `syntax` into `ast`, reporting to `sink`.
///
/// Returns the top-level items in source order. Declarations land in the
/// context of `file`, their members in the context of their owner.
pub fn lower_source_file(
    ast: &mut AstContext,
    interner: &Interner,
    file: &SourceFile,
    syntax: &SourceFileSyntax,
    sink: &mut dyn DiagnosticSink,
) -> ArrayRef<AstNode> {
    let _span = debug_span!("lower_source_file", file = %file.name, items = syntax.statements.len())
        .entered();
    AstGen::new(ast, interner, file, sink).visit(syntax)
}

//! The dispatcher and the state it threads through every lowering routine

use crate::{Diagnostic, DiagnosticSink, LowerError};
use ag_arena::ArrayRef;
use ag_ast::{AstContext, DeclContext, DeclId, DeclKind, StmtId};
use ag_intern::Interner;
use ag_span::{SourceFile, SourceLoc};
use ag_syntax::Token;
use std::fmt;
use tracing::{debug, trace};

/// A syntax node that lowers to some AST value.
///
/// Every syntax kind has exactly one implementation, so dispatch is a
/// compile-time match over closed sum types: there is no "unknown node" case
/// to recover from.
pub trait Lower {
    /// What the node lowers to
    type Output;

    /// Lowers the node in the ambient state of `astgen`
    fn lower(&self, astgen: &mut AstGen<'_>) -> Self::Output;
}

/// An absent clause lowers to an absent result.
impl<N: Lower> Lower for Option<N> {
    type Output = Option<N::Output>;

    fn lower(&self, astgen: &mut AstGen<'_>) -> Self::Output {
        self.as_ref().map(|node| node.lower(astgen))
    }
}

impl<N: Lower + ?Sized> Lower for Box<N> {
    type Output = N::Output;

    fn lower(&self, astgen: &mut AstGen<'_>) -> Self::Output {
        (**self).lower(astgen)
    }
}

impl<N: Lower + ?Sized> Lower for &N {
    type Output = N::Output;

    fn lower(&self, astgen: &mut AstGen<'_>) -> Self::Output {
        (**self).lower(astgen)
    }
}

/// Lowering state for one source file.
///
/// Owns nothing: the target [`AstContext`], the interner and the diagnostic
/// sink are borrowed, so one file can be lowered per `AstGen` while the
/// caller keeps the results. The current declaration context changes only
/// through [`AstGen::with_decl_context`] and its guard.
pub struct AstGen<'ctx> {
    pub(crate) ast: &'ctx mut AstContext,
    pub(crate) interner: &'ctx Interner,
    pub(crate) base: SourceLoc,
    pub(crate) decl_context: DeclContext,
    pub(crate) depth: usize,
    sink: &'ctx mut dyn DiagnosticSink,
}

impl<'ctx> AstGen<'ctx> {
    /// Creates the lowering state for `file`, starting at file scope
    pub fn new(
        ast: &'ctx mut AstContext,
        interner: &'ctx Interner,
        file: &SourceFile,
        sink: &'ctx mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            ast,
            interner,
            base: file.base,
            decl_context: DeclContext::SourceFile(file.id),
            depth: 0,
            sink,
        }
    }

    /// Lowers any node through its [`Lower`] implementation
    pub fn visit<N: Lower + ?Sized>(&mut self, node: &N) -> N::Output {
        node.lower(self)
    }

    /// The context new declarations are registered in
    pub fn decl_context(&self) -> DeclContext {
        self.decl_context
    }

    /// Number of contexts pushed on top of file scope
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The AST built so far
    pub fn ast(&self) -> &AstContext {
        &*self.ast
    }

    /// Creates a declaration in the current context
    pub fn alloc_decl(&mut self, kind: DeclKind) -> DeclId {
        let kind_name = kind.name();
        let decl = self.ast.alloc_decl(self.decl_context, kind);
        trace!(
            kind = kind_name,
            context = %self.decl_context,
            depth = self.depth,
            "allocated declaration"
        );
        decl
    }

    /// Reports `error` for `token` and carries on
    pub fn diagnose(&mut self, token: &Token, error: LowerError) {
        debug!(token = %token.text, span = ?token.span(), %error, "lowering diagnostic");
        self.sink.diagnose(Diagnostic::new(token.span(), error));
    }

    /// Attaches `members` lowered inside the context of `decl`
    pub(crate) fn set_parsed_members(&mut self, decl: DeclId, members: ArrayRef<DeclId>) {
        self.ast.set_parsed_members(decl, members);
    }

    /// Attaches `body` to `decl`
    pub(crate) fn set_body(&mut self, decl: DeclId, body: StmtId) {
        self.ast.set_body(decl, body);
    }
}

impl fmt::Debug for AstGen<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AstGen")
            .field("base", &self.base)
            .field("decl_context", &self.decl_context)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}

//! Scoped replacement of the current declaration context

use crate::AstGen;
use ag_ast::DeclContext;
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Makes a declaration context current until dropped.
///
/// Dropping restores the context that was current when the guard was
/// created, whether the scope is left normally or by unwinding. Guards nest:
/// the number of live guards is the syntactic nesting depth.
pub struct DeclContextGuard<'guard, 'ctx> {
    astgen: &'guard mut AstGen<'ctx>,
    previous: DeclContext,
}

impl<'ctx> Deref for DeclContextGuard<'_, 'ctx> {
    type Target = AstGen<'ctx>;

    fn deref(&self) -> &Self::Target {
        self.astgen
    }
}

impl DerefMut for DeclContextGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.astgen
    }
}

impl Drop for DeclContextGuard<'_, '_> {
    fn drop(&mut self) {
        trace!(
            from = %self.astgen.decl_context,
            to = %self.previous,
            depth = self.astgen.depth,
            "pop decl context"
        );
        self.astgen.decl_context = self.previous;
        self.astgen.depth -= 1;
    }
}

impl<'ctx> AstGen<'ctx> {
    /// Makes `context` current until the returned guard is dropped
    pub fn push_decl_context(&mut self, context: DeclContext) -> DeclContextGuard<'_, 'ctx> {
        let previous = self.decl_context;
        self.depth += 1;
        trace!(from = %previous, to = %context, depth = self.depth, "push decl context");
        self.decl_context = context;
        DeclContextGuard {
            astgen: self,
            previous,
        }
    }

    /// Runs `body` with `context` as the current declaration context and
    /// restores the previous context afterwards
    pub fn with_decl_context<R>(
        &mut self,
        context: DeclContext,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        let mut guard = self.push_decl_context(context);
        body(&mut *guard)
    }
}

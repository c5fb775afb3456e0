//! Statements, code blocks and the source file root

use crate::{AstGen, Lower};
use ag_arena::ArrayRef;
use ag_ast::{AstNode, Stmt, StmtId};
use ag_syntax::{CodeBlockItem, CodeBlockItemSyntax, CodeBlockSyntax, SourceFileSyntax, StmtSyntax};

impl Lower for StmtSyntax {
    type Output = StmtId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> StmtId {
        let stmt = match self {
            Self::Return(node) => Stmt::Return {
                return_loc: astgen.loc(&node.return_keyword),
                value: astgen.visit(&node.expression),
            },
        };
        astgen.ast.alloc_stmt(stmt)
    }
}

impl Lower for CodeBlockItem {
    type Output = AstNode;

    fn lower(&self, astgen: &mut AstGen<'_>) -> AstNode {
        match self {
            Self::Decl(decl) => AstNode::Decl(astgen.visit(decl)),
            Self::Stmt(stmt) => AstNode::Stmt(astgen.visit(stmt)),
            Self::Expr(expr) => AstNode::Expr(astgen.visit(expr)),
        }
    }
}

impl Lower for CodeBlockItemSyntax {
    type Output = AstNode;

    fn lower(&self, astgen: &mut AstGen<'_>) -> AstNode {
        astgen.visit(&self.item)
    }
}

/// A body lowers to a brace statement over its items
impl Lower for CodeBlockSyntax {
    type Output = StmtId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> StmtId {
        let elements = astgen.lower_list(&self.statements);
        let braces = astgen.range(&self.left_brace, &self.right_brace);
        astgen.ast.alloc_stmt(Stmt::Brace { elements, braces })
    }
}

impl Lower for SourceFileSyntax {
    type Output = ArrayRef<AstNode>;

    fn lower(&self, astgen: &mut AstGen<'_>) -> ArrayRef<AstNode> {
        astgen.lower_list(&self.statements)
    }
}

//! Expression lowering
//!
//! Expressions only appear as initializers, raw values, default arguments
//! and in bodies, so the supported shapes stay small.

use crate::{AstGen, Lower};
use ag_ast::{CallArgument, Expr, ExprId, Literal};
use ag_syntax::{ExprSyntax, InitializerClauseSyntax, Keyword, LabeledExprSyntax, Token};

impl Lower for ExprSyntax {
    type Output = ExprId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> ExprId {
        let expr = match self {
            Self::IntegerLiteral(token) => literal(astgen, token, Literal::Integer(token.text.clone())),
            Self::FloatLiteral(token) => literal(astgen, token, Literal::Float(token.text.clone())),
            Self::StringLiteral(token) => {
                let contents = token
                    .text
                    .strip_prefix('"')
                    .and_then(|inner| inner.strip_suffix('"'))
                    .unwrap_or(&token.text);
                literal(astgen, token, Literal::String(contents.to_string()))
            }
            Self::BooleanLiteral(token) => {
                let value = token.is_keyword(Keyword::True);
                literal(astgen, token, Literal::Boolean(value))
            }
            Self::NilLiteral(token) => literal(astgen, token, Literal::Nil),
            Self::DeclReference(token) => {
                let (name, loc) = astgen.identifier_and_loc(token);
                Expr::DeclRef { name, loc }
            }
            Self::MemberAccess(node) => {
                let base = astgen.visit(&node.base);
                let (name, name_loc) = astgen.identifier_and_loc(&node.name);
                Expr::Member {
                    base,
                    dot_loc: astgen.loc(&node.period),
                    name,
                    name_loc,
                }
            }
            Self::Tuple(node) => Expr::Tuple {
                elements: astgen.lower_list(&node.elements),
                parens: astgen.range(&node.left_paren, &node.right_paren),
            },
            Self::FunctionCall(node) => {
                let callee = astgen.visit(&node.callee);
                Expr::Call {
                    callee,
                    arguments: astgen.lower_list(&node.arguments),
                    parens: astgen.range(&node.left_paren, &node.right_paren),
                }
            }
        };
        astgen.ast.alloc_expr(expr)
    }
}

fn literal(astgen: &AstGen<'_>, token: &Token, value: Literal) -> Expr {
    Expr::Literal {
        value,
        loc: astgen.loc(token),
    }
}

impl Lower for LabeledExprSyntax {
    type Output = CallArgument;

    fn lower(&self, astgen: &mut AstGen<'_>) -> CallArgument {
        CallArgument {
            label: self.label.as_ref().and_then(|label| astgen.identifier(label)),
            label_loc: astgen.loc_opt(self.label.as_ref()),
            value: astgen.visit(&self.expression),
        }
    }
}

/// `= value` lowers to the value; the `=` location is read by the caller
impl Lower for InitializerClauseSyntax {
    type Output = ExprId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> ExprId {
        astgen.visit(&self.value)
    }
}

//! Expression nodes

use crate::Token;
use crate::walk::{syntax_enum, syntax_struct};

/// Any expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprSyntax {
    /// `42`
    IntegerLiteral(Token),
    /// `4.2`
    FloatLiteral(Token),
    /// `"text"`
    StringLiteral(Token),
    /// `true` or `false`
    BooleanLiteral(Token),
    /// `nil`
    NilLiteral(Token),
    /// A bare name
    DeclReference(Token),
    /// `base.name`
    MemberAccess(MemberAccessExprSyntax),
    /// `(a, label: b)`
    Tuple(TupleExprSyntax),
    /// `callee(a, label: b)`
    FunctionCall(FunctionCallExprSyntax),
}

/// `base.name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAccessExprSyntax {
    /// Accessed expression
    pub base: Box<ExprSyntax>,
    /// `.`
    pub period: Token,
    /// Member name
    pub name: Token,
}

/// `(a, label: b)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleExprSyntax {
    /// `(`
    pub left_paren: Token,
    /// Elements in source order
    pub elements: Vec<LabeledExprSyntax>,
    /// `)`
    pub right_paren: Token,
}

/// `callee(a, label: b)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCallExprSyntax {
    /// Called expression
    pub callee: Box<ExprSyntax>,
    /// `(`
    pub left_paren: Token,
    /// Arguments in source order
    pub arguments: Vec<LabeledExprSyntax>,
    /// `)`
    pub right_paren: Token,
}

/// `label: expr` inside a tuple or argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledExprSyntax {
    /// Optional label
    pub label: Option<Token>,
    /// `:` after the label
    pub colon: Option<Token>,
    /// The value
    pub expression: ExprSyntax,
    /// `,` separating it from the next element
    pub trailing_comma: Option<Token>,
}

syntax_enum!(ExprSyntax {
    IntegerLiteral,
    FloatLiteral,
    StringLiteral,
    BooleanLiteral,
    NilLiteral,
    DeclReference,
    MemberAccess,
    Tuple,
    FunctionCall,
});
syntax_struct!(MemberAccessExprSyntax { base, period, name });
syntax_struct!(TupleExprSyntax { left_paren, elements, right_paren });
syntax_struct!(FunctionCallExprSyntax { callee, left_paren, arguments, right_paren });
syntax_struct!(LabeledExprSyntax { label, colon, expression, trailing_comma });

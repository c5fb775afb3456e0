//! Pattern nodes

use crate::Token;
use crate::walk::{syntax_enum, syntax_struct};

/// Any pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSyntax {
    /// A name being bound
    Identifier(Token),
    /// `_`
    Wildcard(Token),
    /// `(a, b)`
    Tuple(TuplePatternSyntax),
}

/// `(a, b)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuplePatternSyntax {
    /// `(`
    pub left_paren: Token,
    /// Elements in source order
    pub elements: Vec<TuplePatternElementSyntax>,
    /// `)`
    pub right_paren: Token,
}

/// One element of a tuple pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuplePatternElementSyntax {
    /// Element pattern
    pub pattern: PatternSyntax,
    /// `,` separating it from the next element
    pub trailing_comma: Option<Token>,
}

syntax_enum!(PatternSyntax { Identifier, Wildcard, Tuple });
syntax_struct!(TuplePatternSyntax { left_paren, elements, right_paren });
syntax_struct!(TuplePatternElementSyntax { pattern, trailing_comma });

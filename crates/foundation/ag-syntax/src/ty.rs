//! Type nodes

use crate::Token;
use crate::walk::{syntax_enum, syntax_struct};

/// Any type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSyntax {
    /// `Name` or `Name<Args>`
    Identifier(IdentifierTypeSyntax),
    /// `Base.Name`
    Member(MemberTypeSyntax),
    /// `Wrapped?`
    Optional(OptionalTypeSyntax),
    /// `[Element]`
    Array(ArrayTypeSyntax),
    /// `(A, B)`
    Tuple(TupleTypeSyntax),
}

/// `Name<Args>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierTypeSyntax {
    /// Type name
    pub name: Token,
    /// `<Args>`
    pub generic_argument_clause: Option<GenericArgumentClauseSyntax>,
}

/// `<A, B>` after a type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericArgumentClauseSyntax {
    /// `<`
    pub left_angle: Token,
    /// Arguments in source order
    pub arguments: Vec<GenericArgumentSyntax>,
    /// `>`
    pub right_angle: Token,
}

/// One generic argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericArgumentSyntax {
    /// Argument type
    pub argument: TypeSyntax,
    /// `,` separating it from the next argument
    pub trailing_comma: Option<Token>,
}

/// `Base.Name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTypeSyntax {
    /// Qualifying type
    pub base: Box<TypeSyntax>,
    /// `.`
    pub period: Token,
    /// Member name
    pub name: Token,
}

/// `Wrapped?`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalTypeSyntax {
    /// Wrapped type
    pub wrapped: Box<TypeSyntax>,
    /// `?`
    pub question_mark: Token,
}

/// `[Element]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTypeSyntax {
    /// `[`
    pub left_square: Token,
    /// Element type
    pub element: Box<TypeSyntax>,
    /// `]`
    pub right_square: Token,
}

/// `(A, B)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleTypeSyntax {
    /// `(`
    pub left_paren: Token,
    /// Elements in source order
    pub elements: Vec<TupleTypeElementSyntax>,
    /// `)`
    pub right_paren: Token,
}

/// One element of a tuple type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleTypeElementSyntax {
    /// Element type
    pub ty: TypeSyntax,
    /// `,` separating it from the next element
    pub trailing_comma: Option<Token>,
}

syntax_enum!(TypeSyntax { Identifier, Member, Optional, Array, Tuple });
syntax_struct!(IdentifierTypeSyntax { name, generic_argument_clause });
syntax_struct!(GenericArgumentClauseSyntax { left_angle, arguments, right_angle });
syntax_struct!(GenericArgumentSyntax { argument, trailing_comma });
syntax_struct!(MemberTypeSyntax { base, period, name });
syntax_struct!(OptionalTypeSyntax { wrapped, question_mark });
syntax_struct!(ArrayTypeSyntax { left_square, element, right_square });
syntax_struct!(TupleTypeSyntax { left_paren, elements, right_paren });
syntax_struct!(TupleTypeElementSyntax { ty, trailing_comma });

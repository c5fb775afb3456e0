//! Types, expressions, statements, patterns and declaration clauses

use crate::{AstNode, DeclId, ExprId, PatternId, TypeReprId};
use ag_arena::ArrayRef;
use ag_intern::Identifier;
use ag_span::{SourceLoc, SourceRange};

/// A type as written in source
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRepr {
    /// `Name` or `Name<Args>`
    Ident {
        /// Type name
        name: Identifier,
        /// Location of the name
        name_loc: SourceLoc,
        /// Generic arguments with their angle brackets
        generic_args: Option<(ArrayRef<TypeReprId>, SourceRange)>,
    },
    /// `Base.Name`
    Member {
        /// Qualifying type
        base: TypeReprId,
        /// Member name
        name: Identifier,
        /// Location of the member name
        name_loc: SourceLoc,
    },
    /// `Wrapped?`
    Optional {
        /// Wrapped type
        wrapped: TypeReprId,
        /// `?`
        question_loc: SourceLoc,
    },
    /// `[Element]`
    Array {
        /// Element type
        element: TypeReprId,
        /// `[` .. `]`
        brackets: SourceRange,
    },
    /// `(A, B)`
    Tuple {
        /// Element types
        elements: ArrayRef<TypeReprId>,
        /// `(` .. `)`
        parens: SourceRange,
    },
}

/// Literal kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal text
    Integer(String),
    /// Float literal text
    Float(String),
    /// String literal without its quotes
    String(String),
    /// `true` / `false`
    Boolean(bool),
    /// `nil`
    Nil,
}

/// One argument of a call or element of a tuple
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallArgument {
    /// Argument label
    pub label: Option<Identifier>,
    /// Location of the label
    pub label_loc: Option<SourceLoc>,
    /// The value
    pub value: ExprId,
}

/// An expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal
    Literal {
        /// The value
        value: Literal,
        /// Location of the literal
        loc: SourceLoc,
    },
    /// A bare name, unresolved
    DeclRef {
        /// Referenced name
        name: Identifier,
        /// Location of the name
        loc: SourceLoc,
    },
    /// `base.name`
    Member {
        /// Accessed expression
        base: ExprId,
        /// `.`
        dot_loc: SourceLoc,
        /// Member name
        name: Identifier,
        /// Location of the member name
        name_loc: SourceLoc,
    },
    /// `(a, label: b)`
    Tuple {
        /// Elements
        elements: ArrayRef<CallArgument>,
        /// `(` .. `)`
        parens: SourceRange,
    },
    /// `callee(a, label: b)`
    Call {
        /// Called expression
        callee: ExprId,
        /// Arguments
        arguments: ArrayRef<CallArgument>,
        /// `(` .. `)`
        parens: SourceRange,
    },
}

/// A statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `{ elements }`
    Brace {
        /// Declarations, statements and expressions in source order
        elements: ArrayRef<AstNode>,
        /// `{` .. `}`
        braces: SourceRange,
    },
    /// `return value`
    Return {
        /// `return`
        return_loc: SourceLoc,
        /// Returned value
        value: Option<ExprId>,
    },
}

/// A pattern
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// A name being bound
    Named {
        /// Bound name
        name: Identifier,
        /// Location of the name
        loc: SourceLoc,
    },
    /// `_`
    Any {
        /// Location of `_`
        loc: SourceLoc,
    },
    /// `(a, b)`
    Tuple {
        /// Elements
        elements: ArrayRef<PatternId>,
        /// `(` .. `)`
        parens: SourceRange,
    },
}

/// `<T, U: P>`
#[derive(Debug, Clone, PartialEq)]
pub struct GenericParamList {
    /// `<`
    pub left_angle_loc: SourceLoc,
    /// Generic parameter declarations
    pub params: ArrayRef<DeclId>,
    /// `>`
    pub right_angle_loc: SourceLoc,
}

/// `(a: Int, b: String)`
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterList {
    /// `(`
    pub left_paren_loc: SourceLoc,
    /// Parameter declarations
    pub params: ArrayRef<DeclId>,
    /// `)`
    pub right_paren_loc: SourceLoc,
}

/// Shape of a where-clause requirement
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RequirementKind {
    /// `T: P`
    Conformance,
    /// `T == U`
    SameType,
}

/// One where-clause requirement
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RequirementRepr {
    /// Requirement shape
    pub kind: RequirementKind,
    /// Left-hand type
    pub first: TypeReprId,
    /// `:` or `==`
    pub separator_loc: SourceLoc,
    /// Right-hand type
    pub second: TypeReprId,
}

/// `where T: P, T == U`
#[derive(Debug, Clone, PartialEq)]
pub struct TrailingWhereClause {
    /// `where`
    pub where_loc: SourceLoc,
    /// Requirements in source order
    pub requirements: ArrayRef<RequirementRepr>,
}

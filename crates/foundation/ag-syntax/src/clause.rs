//! Sub-shapes shared between declarations

use crate::walk::{syntax_enum, syntax_struct};
use crate::{DeclSyntax, ExprSyntax, Token, TypeSyntax};

/// `<T, U: P>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParameterClauseSyntax {
    /// `<`
    pub left_angle: Token,
    /// Parameters in source order
    pub parameters: Vec<GenericParameterSyntax>,
    /// `>`
    pub right_angle: Token,
}

/// One generic parameter, `U: P`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericParameterSyntax {
    /// Parameter name
    pub name: Token,
    /// `:` before the inherited type
    pub colon: Option<Token>,
    /// Constraint written inline
    pub inherited_type: Option<TypeSyntax>,
    /// `,` separating it from the next parameter
    pub trailing_comma: Option<Token>,
}

/// `: A, B`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritanceClauseSyntax {
    /// `:`
    pub colon: Token,
    /// Inherited types in source order
    pub inherited_types: Vec<InheritedTypeSyntax>,
}

/// One entry of an inheritance clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedTypeSyntax {
    /// The inherited type
    pub ty: TypeSyntax,
    /// `,` separating it from the next entry
    pub trailing_comma: Option<Token>,
}

/// `where T: P, T == U`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericWhereClauseSyntax {
    /// `where`
    pub where_keyword: Token,
    /// Requirements in source order
    pub requirements: Vec<GenericRequirementSyntax>,
}

/// One requirement of a where clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericRequirementSyntax {
    /// The requirement itself
    pub requirement: RequirementSyntax,
    /// `,` separating it from the next requirement
    pub trailing_comma: Option<Token>,
}

/// Shape of a where-clause requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementSyntax {
    /// `T: P`
    Conformance(ConformanceRequirementSyntax),
    /// `T == U`
    SameType(SameTypeRequirementSyntax),
}

/// `T: P`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceRequirementSyntax {
    /// Constrained type
    pub left_type: TypeSyntax,
    /// `:`
    pub colon: Token,
    /// Required protocol or superclass
    pub right_type: TypeSyntax,
}

/// `T == U`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SameTypeRequirementSyntax {
    /// Left-hand type
    pub left_type: TypeSyntax,
    /// `==`, a binary operator token
    pub equal: Token,
    /// Right-hand type
    pub right_type: TypeSyntax,
}

/// `{ members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBlockSyntax {
    /// `{`
    pub left_brace: Token,
    /// Members in source order
    pub members: Vec<MemberBlockItemSyntax>,
    /// `}`
    pub right_brace: Token,
}

/// One member of a member block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberBlockItemSyntax {
    /// The member declaration
    pub decl: DeclSyntax,
    /// Optional `;` after it
    pub semicolon: Option<Token>,
}

/// `= Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInitializerClauseSyntax {
    /// `=`
    pub equal: Token,
    /// The type on the right
    pub value: TypeSyntax,
}

/// `= expr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerClauseSyntax {
    /// `=`
    pub equal: Token,
    /// The expression on the right
    pub value: ExprSyntax,
}

/// `: Type` after a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotationSyntax {
    /// `:`
    pub colon: Token,
    /// Annotated type
    pub ty: TypeSyntax,
}

/// `(a: Int, _ b: String = "")`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParameterClauseSyntax {
    /// `(`
    pub left_paren: Token,
    /// Parameters in source order
    pub parameters: Vec<FunctionParameterSyntax>,
    /// `)`
    pub right_paren: Token,
}

/// One function or initializer parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParameterSyntax {
    /// Argument label, or the name when no second name follows
    pub first_name: Token,
    /// Parameter name used inside the body
    pub second_name: Option<Token>,
    /// `:`
    pub colon: Token,
    /// Parameter type
    pub ty: TypeSyntax,
    /// `= default`
    pub default_value: Option<InitializerClauseSyntax>,
    /// `,` separating it from the next parameter
    pub trailing_comma: Option<Token>,
}

/// `(Int, label: String)` after an enum case name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCaseParameterClauseSyntax {
    /// `(`
    pub left_paren: Token,
    /// Associated values in source order
    pub parameters: Vec<EnumCaseParameterSyntax>,
    /// `)`
    pub right_paren: Token,
}

/// One associated value of an enum case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCaseParameterSyntax {
    /// Optional label
    pub first_name: Option<Token>,
    /// Optional internal name
    pub second_name: Option<Token>,
    /// `:` after the names
    pub colon: Option<Token>,
    /// Associated value type
    pub ty: TypeSyntax,
    /// `= default`
    pub default_value: Option<InitializerClauseSyntax>,
    /// `,` separating it from the next parameter
    pub trailing_comma: Option<Token>,
}

/// `async throws -> Result` part of a function signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignatureSyntax {
    /// Parameter list
    pub parameter_clause: FunctionParameterClauseSyntax,
    /// `async` / `throws`
    pub effect_specifiers: Option<FunctionEffectSpecifiersSyntax>,
    /// `-> Type`
    pub return_clause: Option<ReturnClauseSyntax>,
}

/// `async throws`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEffectSpecifiersSyntax {
    /// `async`
    pub async_specifier: Option<Token>,
    /// `throws` or `rethrows`
    pub throws_specifier: Option<Token>,
}

/// `-> Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnClauseSyntax {
    /// `->`
    pub arrow: Token,
    /// Result type
    pub ty: TypeSyntax,
}

/// A declaration modifier such as `static` or `public`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclModifierSyntax {
    /// The modifier keyword
    pub name: Token,
}

syntax_struct!(GenericParameterClauseSyntax { left_angle, parameters, right_angle });
syntax_struct!(GenericParameterSyntax { name, colon, inherited_type, trailing_comma });
syntax_struct!(InheritanceClauseSyntax { colon, inherited_types });
syntax_struct!(InheritedTypeSyntax { ty, trailing_comma });
syntax_struct!(GenericWhereClauseSyntax { where_keyword, requirements });
syntax_struct!(GenericRequirementSyntax { requirement, trailing_comma });
syntax_enum!(RequirementSyntax { Conformance, SameType });
syntax_struct!(ConformanceRequirementSyntax { left_type, colon, right_type });
syntax_struct!(SameTypeRequirementSyntax { left_type, equal, right_type });
syntax_struct!(MemberBlockSyntax { left_brace, members, right_brace });
syntax_struct!(MemberBlockItemSyntax { decl, semicolon });
syntax_struct!(TypeInitializerClauseSyntax { equal, value });
syntax_struct!(InitializerClauseSyntax { equal, value });
syntax_struct!(TypeAnnotationSyntax { colon, ty });
syntax_struct!(FunctionParameterClauseSyntax { left_paren, parameters, right_paren });
syntax_struct!(FunctionParameterSyntax { first_name, second_name, colon, ty, default_value, trailing_comma });
syntax_struct!(EnumCaseParameterClauseSyntax { left_paren, parameters, right_paren });
syntax_struct!(EnumCaseParameterSyntax { first_name, second_name, colon, ty, default_value, trailing_comma });
syntax_struct!(FunctionSignatureSyntax { parameter_clause, effect_specifiers, return_clause });
syntax_struct!(FunctionEffectSpecifiersSyntax { async_specifier, throws_specifier });
syntax_struct!(ReturnClauseSyntax { arrow, ty });
syntax_struct!(DeclModifierSyntax { name });

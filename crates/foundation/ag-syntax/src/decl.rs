//! Declaration nodes

use crate::walk::{syntax_enum, syntax_struct};
use crate::{
    CodeBlockSyntax, DeclModifierSyntax, EnumCaseParameterClauseSyntax,
    FunctionSignatureSyntax, GenericParameterClauseSyntax, GenericWhereClauseSyntax,
    InheritanceClauseSyntax, InitializerClauseSyntax, MemberBlockSyntax, PatternSyntax, Token,
    TypeAnnotationSyntax, TypeInitializerClauseSyntax, TypeSyntax,
};

/// Any declaration
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs, reason = "each variant wraps the node of the same name")]
pub enum DeclSyntax {
    TypeAlias(TypeAliasDeclSyntax),
    Enum(EnumDeclSyntax),
    Struct(StructDeclSyntax),
    Class(ClassDeclSyntax),
    Actor(ActorDeclSyntax),
    Protocol(ProtocolDeclSyntax),
    AssociatedType(AssociatedTypeDeclSyntax),
    Extension(ExtensionDeclSyntax),
    EnumCase(EnumCaseDeclSyntax),
    Variable(VariableDeclSyntax),
    Function(FunctionDeclSyntax),
    Initializer(InitializerDeclSyntax),
    Deinitializer(DeinitializerDeclSyntax),
    Operator(OperatorDeclSyntax),
    Import(ImportDeclSyntax),
}

impl DeclSyntax {
    /// Human readable name of the declaration kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::TypeAlias(_) => "typealias",
            Self::Enum(_) => "enum",
            Self::Struct(_) => "struct",
            Self::Class(_) => "class",
            Self::Actor(_) => "actor",
            Self::Protocol(_) => "protocol",
            Self::AssociatedType(_) => "associatedtype",
            Self::Extension(_) => "extension",
            Self::EnumCase(_) => "case",
            Self::Variable(_) => "variable",
            Self::Function(_) => "func",
            Self::Initializer(_) => "init",
            Self::Deinitializer(_) => "deinit",
            Self::Operator(_) => "operator",
            Self::Import(_) => "import",
        }
    }
}

/// `typealias Name<T> = Type where ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDeclSyntax {
    /// `typealias`
    pub typealias_keyword: Token,
    /// Alias name
    pub name: Token,
    /// `<T>`
    pub generic_parameter_clause: Option<GenericParameterClauseSyntax>,
    /// `= Type`
    pub initializer: TypeInitializerClauseSyntax,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
}

/// `enum Name<T>: Raw where ... { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclSyntax {
    /// `enum`
    pub enum_keyword: Token,
    /// Type name
    pub name: Token,
    /// `<T>`
    pub generic_parameter_clause: Option<GenericParameterClauseSyntax>,
    /// `: A, B`
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ members }`
    pub member_block: MemberBlockSyntax,
}

/// `struct Name<T>: P where ... { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDeclSyntax {
    /// `struct`
    pub struct_keyword: Token,
    /// Type name
    pub name: Token,
    /// `<T>`
    pub generic_parameter_clause: Option<GenericParameterClauseSyntax>,
    /// `: A, B`
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ members }`
    pub member_block: MemberBlockSyntax,
}

/// `class Name<T>: Super where ... { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclSyntax {
    /// `class`
    pub class_keyword: Token,
    /// Type name
    pub name: Token,
    /// `<T>`
    pub generic_parameter_clause: Option<GenericParameterClauseSyntax>,
    /// `: A, B`
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ members }`
    pub member_block: MemberBlockSyntax,
}

/// `actor Name<T>: P where ... { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorDeclSyntax {
    /// `actor`
    pub actor_keyword: Token,
    /// Type name
    pub name: Token,
    /// `<T>`
    pub generic_parameter_clause: Option<GenericParameterClauseSyntax>,
    /// `: A, B`
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ members }`
    pub member_block: MemberBlockSyntax,
}

/// `protocol Name<Element>: P where ... { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolDeclSyntax {
    /// `protocol`
    pub protocol_keyword: Token,
    /// Protocol name
    pub name: Token,
    /// `<Element, Index>`
    pub primary_associated_type_clause: Option<PrimaryAssociatedTypeClauseSyntax>,
    /// `: A, B`
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ members }`
    pub member_block: MemberBlockSyntax,
}

/// `<Element, Index>` after a protocol name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryAssociatedTypeClauseSyntax {
    /// `<`
    pub left_angle: Token,
    /// Names in source order
    pub primary_associated_types: Vec<PrimaryAssociatedTypeSyntax>,
    /// `>`
    pub right_angle: Token,
}

/// One primary associated type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryAssociatedTypeSyntax {
    /// Associated type name
    pub name: Token,
    /// `,` separating it from the next name
    pub trailing_comma: Option<Token>,
}

/// `associatedtype Name: P = Default where ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociatedTypeDeclSyntax {
    /// `associatedtype`
    pub associatedtype_keyword: Token,
    /// Associated type name
    pub name: Token,
    /// `: A, B`
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    /// `= Default`
    pub initializer: Option<TypeInitializerClauseSyntax>,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
}

/// `extension Type: P where ... { members }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDeclSyntax {
    /// `extension`
    pub extension_keyword: Token,
    /// The extended type
    pub extended_type: TypeSyntax,
    /// `: A, B`
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ members }`
    pub member_block: MemberBlockSyntax,
}

/// `case a, b(Int), c = 3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCaseDeclSyntax {
    /// `case`
    pub case_keyword: Token,
    /// Elements in source order, never empty
    pub elements: Vec<EnumCaseElementSyntax>,
}

/// One element of a `case` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCaseElementSyntax {
    /// Element name
    pub name: Token,
    /// `(Int, label: String)`
    pub parameter_clause: Option<EnumCaseParameterClauseSyntax>,
    /// `= 3`
    pub raw_value: Option<InitializerClauseSyntax>,
    /// `,` separating it from the next element
    pub trailing_comma: Option<Token>,
}

/// `let x: Int = 1, y = 2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclSyntax {
    /// Modifiers such as `static`
    pub modifiers: Vec<DeclModifierSyntax>,
    /// `let` or `var`
    pub binding_specifier: Token,
    /// Bindings in source order, never empty
    pub bindings: Vec<PatternBindingSyntax>,
}

/// One binding of a variable declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternBindingSyntax {
    /// Bound pattern
    pub pattern: PatternSyntax,
    /// `: Type`
    pub type_annotation: Option<TypeAnnotationSyntax>,
    /// `= value`
    pub initializer: Option<InitializerClauseSyntax>,
    /// `,` separating it from the next binding
    pub trailing_comma: Option<Token>,
}

/// `func name<T>(params) async throws -> R where ... { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclSyntax {
    /// Modifiers such as `static`
    pub modifiers: Vec<DeclModifierSyntax>,
    /// `func`
    pub func_keyword: Token,
    /// Function name (identifier or operator)
    pub name: Token,
    /// `<T>`
    pub generic_parameter_clause: Option<GenericParameterClauseSyntax>,
    /// Parameters, effects and result type
    pub signature: FunctionSignatureSyntax,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ body }`, absent in protocol requirements
    pub body: Option<CodeBlockSyntax>,
}

/// `init?<T>(params) async throws where ... { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializerDeclSyntax {
    /// `init`
    pub init_keyword: Token,
    /// `?` or `!` marking a failable initializer
    pub optional_mark: Option<Token>,
    /// `<T>`
    pub generic_parameter_clause: Option<GenericParameterClauseSyntax>,
    /// Parameters and effects
    pub signature: FunctionSignatureSyntax,
    /// `where ...`
    pub generic_where_clause: Option<GenericWhereClauseSyntax>,
    /// `{ body }`
    pub body: Option<CodeBlockSyntax>,
}

/// `deinit { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeinitializerDeclSyntax {
    /// `deinit`
    pub deinit_keyword: Token,
    /// `{ body }`
    pub body: Option<CodeBlockSyntax>,
}

/// `infix operator <+> : AdditionPrecedence`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorDeclSyntax {
    /// Expected to be `prefix`, `infix` or `postfix`
    pub fixity_specifier: Token,
    /// `operator`
    pub operator_keyword: Token,
    /// The operator being declared
    pub name: Token,
    /// `: PrecedenceGroup`
    pub operator_precedence_and_types: Option<OperatorPrecedenceAndTypesSyntax>,
}

/// `: PrecedenceGroup` after an operator name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorPrecedenceAndTypesSyntax {
    /// `:`
    pub colon: Token,
    /// Precedence group name
    pub precedence_group: Token,
}

/// `import struct Foo.Bar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclSyntax {
    /// `import`
    pub import_keyword: Token,
    /// Optional kind keyword restricting what is imported
    pub import_kind_specifier: Option<Token>,
    /// Path components in source order, never empty
    pub path: Vec<ImportPathComponentSyntax>,
}

/// One component of an import path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPathComponentSyntax {
    /// Module or declaration name
    pub name: Token,
    /// `.` leading to the next component
    pub trailing_period: Option<Token>,
}

syntax_enum!(DeclSyntax {
    TypeAlias,
    Enum,
    Struct,
    Class,
    Actor,
    Protocol,
    AssociatedType,
    Extension,
    EnumCase,
    Variable,
    Function,
    Initializer,
    Deinitializer,
    Operator,
    Import,
});
syntax_struct!(TypeAliasDeclSyntax { typealias_keyword, name, generic_parameter_clause, initializer, generic_where_clause });
syntax_struct!(EnumDeclSyntax { enum_keyword, name, generic_parameter_clause, inheritance_clause, generic_where_clause, member_block });
syntax_struct!(StructDeclSyntax { struct_keyword, name, generic_parameter_clause, inheritance_clause, generic_where_clause, member_block });
syntax_struct!(ClassDeclSyntax { class_keyword, name, generic_parameter_clause, inheritance_clause, generic_where_clause, member_block });
syntax_struct!(ActorDeclSyntax { actor_keyword, name, generic_parameter_clause, inheritance_clause, generic_where_clause, member_block });
syntax_struct!(ProtocolDeclSyntax { protocol_keyword, name, primary_associated_type_clause, inheritance_clause, generic_where_clause, member_block });
syntax_struct!(PrimaryAssociatedTypeClauseSyntax { left_angle, primary_associated_types, right_angle });
syntax_struct!(PrimaryAssociatedTypeSyntax { name, trailing_comma });
syntax_struct!(AssociatedTypeDeclSyntax { associatedtype_keyword, name, inheritance_clause, initializer, generic_where_clause });
syntax_struct!(ExtensionDeclSyntax { extension_keyword, extended_type, inheritance_clause, generic_where_clause, member_block });
syntax_struct!(EnumCaseDeclSyntax { case_keyword, elements });
syntax_struct!(EnumCaseElementSyntax { name, parameter_clause, raw_value, trailing_comma });
syntax_struct!(VariableDeclSyntax { modifiers, binding_specifier, bindings });
syntax_struct!(PatternBindingSyntax { pattern, type_annotation, initializer, trailing_comma });
syntax_struct!(FunctionDeclSyntax { modifiers, func_keyword, name, generic_parameter_clause, signature, generic_where_clause, body });
syntax_struct!(InitializerDeclSyntax { init_keyword, optional_mark, generic_parameter_clause, signature, generic_where_clause, body });
syntax_struct!(DeinitializerDeclSyntax { deinit_keyword, body });
syntax_struct!(OperatorDeclSyntax { fixity_specifier, operator_keyword, name, operator_precedence_and_types });
syntax_struct!(OperatorPrecedenceAndTypesSyntax { colon, precedence_group });
syntax_struct!(ImportDeclSyntax { import_keyword, import_kind_specifier, path });
syntax_struct!(ImportPathComponentSyntax { name, trailing_period });

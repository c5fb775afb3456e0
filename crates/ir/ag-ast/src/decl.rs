//! Declarations

use crate::{
    DeclId, ExprId, GenericParamListId, ParameterListId, PatternId, StmtId, TypeReprId,
    WhereClauseId,
};
use ag_arena::ArrayRef;
use ag_intern::Identifier;
use ag_span::{FileId, SourceLoc, SourceRange};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// The declaration a nested declaration belongs to
#[derive(Copy, Clone, Debug, Display, Hash, Eq, PartialEq, From)]
pub enum DeclContext {
    /// Top level of a source file
    #[display("{_0}")]
    SourceFile(FileId),
    /// Members or body of another declaration
    #[display("decl#{}", u32::from(_0.into_raw()))]
    Decl(DeclId),
}

/// An identifier together with the location it was written at
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct LocatedIdentifier {
    /// The identifier
    pub name: Identifier,
    /// Where it was written
    pub loc: SourceLoc,
}

/// A declaration and the context it was declared in
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    /// Context that was current when the declaration was created
    pub context: DeclContext,
    /// What kind of declaration this is
    pub kind: DeclKind,
}

impl Decl {
    /// Whether this declaration can own nested declarations
    pub fn is_decl_context(&self) -> bool {
        matches!(
            self.kind,
            DeclKind::Enum(_)
                | DeclKind::Struct(_)
                | DeclKind::Class(_)
                | DeclKind::Protocol(_)
                | DeclKind::Extension(_)
                | DeclKind::Func(_)
                | DeclKind::Constructor(_)
                | DeclKind::Destructor(_)
                | DeclKind::EnumElement(_)
        )
    }

    /// Declared name, if the declaration has one
    pub fn name(&self) -> Option<Identifier> {
        match &self.kind {
            DeclKind::TypeAlias(decl) => Some(decl.name),
            DeclKind::Enum(decl) | DeclKind::Struct(decl) => Some(decl.name),
            DeclKind::Class(decl) => Some(decl.nominal.name),
            DeclKind::Protocol(decl) => Some(decl.nominal.name),
            DeclKind::AssociatedType(decl) => Some(decl.name),
            DeclKind::EnumElement(decl) => Some(decl.name),
            DeclKind::Func(decl) => Some(decl.name),
            DeclKind::Operator(decl) => Some(decl.name),
            DeclKind::GenericTypeParam(decl) => Some(decl.name),
            DeclKind::Param(decl) => decl.param_name,
            DeclKind::Extension(_)
            | DeclKind::EnumCase(_)
            | DeclKind::Var(_)
            | DeclKind::Constructor(_)
            | DeclKind::Destructor(_)
            | DeclKind::Import(_) => None,
        }
    }
}

/// Every kind of declaration
#[derive(Debug, Clone, PartialEq)]
pub enum DeclKind {
    /// `typealias`
    TypeAlias(TypeAliasDecl),
    /// `enum`
    Enum(NominalTypeDecl),
    /// `struct`
    Struct(NominalTypeDecl),
    /// `class` or `actor`
    Class(ClassDecl),
    /// `protocol`
    Protocol(ProtocolDecl),
    /// `associatedtype`
    AssociatedType(AssociatedTypeDecl),
    /// `extension`
    Extension(ExtensionDecl),
    /// `case a, b`
    EnumCase(EnumCaseDecl),
    /// One element of a `case`
    EnumElement(EnumElementDecl),
    /// `var` or `let`
    Var(VarDecl),
    /// `func`
    Func(FuncDecl),
    /// `init`
    Constructor(ConstructorDecl),
    /// `deinit`
    Destructor(DestructorDecl),
    /// `operator`
    Operator(OperatorDecl),
    /// `import`
    Import(ImportDecl),
    /// A generic parameter
    GenericTypeParam(GenericTypeParamDecl),
    /// A function, initializer or enum element parameter
    Param(ParamDecl),
}

impl DeclKind {
    /// Short name of the kind, as shown in dumps and logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::TypeAlias(_) => "typealias",
            Self::Enum(_) => "enum",
            Self::Struct(_) => "struct",
            Self::Class(decl) if decl.is_actor => "actor",
            Self::Class(_) => "class",
            Self::Protocol(_) => "protocol",
            Self::AssociatedType(_) => "associatedtype",
            Self::Extension(_) => "extension",
            Self::EnumCase(_) => "enum_case",
            Self::EnumElement(_) => "enum_element",
            Self::Var(_) => "var",
            Self::Func(_) => "func",
            Self::Constructor(_) => "constructor",
            Self::Destructor(_) => "destructor",
            Self::Operator(_) => "operator",
            Self::Import(_) => "import",
            Self::GenericTypeParam(_) => "generic_type_param",
            Self::Param(_) => "param",
        }
    }
}

/// `typealias Name<T> = Type where ...`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    /// `typealias`
    pub typealias_loc: SourceLoc,
    /// Alias name
    pub name: Identifier,
    /// Location of the name
    pub name_loc: SourceLoc,
    /// Generic parameters
    pub generic_params: Option<GenericParamListId>,
    /// `=`
    pub equal_loc: SourceLoc,
    /// The aliased type
    pub underlying: TypeReprId,
    /// Trailing where clause
    pub where_clause: Option<WhereClauseId>,
}

/// Shape shared by enums, structs, classes and protocols
#[derive(Debug, Clone, PartialEq)]
pub struct NominalTypeDecl {
    /// Introducer keyword
    pub intro_loc: SourceLoc,
    /// Type name
    pub name: Identifier,
    /// Location of the name
    pub name_loc: SourceLoc,
    /// Generic parameters, never present on protocols
    pub generic_params: Option<GenericParamListId>,
    /// Inheritance clause
    pub inherited: Option<ArrayRef<TypeReprId>>,
    /// Trailing where clause
    pub where_clause: Option<WhereClauseId>,
    /// `{` .. `}`
    pub braces: SourceRange,
    /// Members, attached after the declaration is created
    pub members: Option<ArrayRef<DeclId>>,
}

/// `class` or `actor`
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Common nominal type shape
    pub nominal: NominalTypeDecl,
    /// Set for `actor`
    pub is_actor: bool,
}

/// `protocol`
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolDecl {
    /// Common nominal type shape
    pub nominal: NominalTypeDecl,
    /// `protocol P<Element>` names, empty when none are written
    pub primary_associated_types: ArrayRef<LocatedIdentifier>,
}

/// `associatedtype Name: P = Default where ...`
#[derive(Debug, Clone, PartialEq)]
pub struct AssociatedTypeDecl {
    /// `associatedtype`
    pub associatedtype_loc: SourceLoc,
    /// Name
    pub name: Identifier,
    /// Location of the name
    pub name_loc: SourceLoc,
    /// Constraints
    pub inherited: Option<ArrayRef<TypeReprId>>,
    /// Default type
    pub default_type: Option<TypeReprId>,
    /// Trailing where clause
    pub where_clause: Option<WhereClauseId>,
}

/// `extension Type: P where ... { members }`
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionDecl {
    /// `extension`
    pub extension_loc: SourceLoc,
    /// The extended type
    pub extended_type: TypeReprId,
    /// Added conformances
    pub inherited: Option<ArrayRef<TypeReprId>>,
    /// Trailing where clause
    pub where_clause: Option<WhereClauseId>,
    /// `{` .. `}`
    pub braces: SourceRange,
    /// Members, attached after the declaration is created
    pub members: Option<ArrayRef<DeclId>>,
}

/// `case a, b(Int), c = 3`
#[derive(Debug, Clone, PartialEq)]
pub struct EnumCaseDecl {
    /// `case`
    pub case_loc: SourceLoc,
    /// Element declarations in source order
    pub elements: ArrayRef<DeclId>,
}

/// One element of a `case` declaration
#[derive(Debug, Clone, PartialEq)]
pub struct EnumElementDecl {
    /// Element name
    pub name: Identifier,
    /// Location of the name
    pub name_loc: SourceLoc,
    /// Associated values
    pub params: Option<ParameterListId>,
    /// `=` before the raw value
    pub equals_loc: Option<SourceLoc>,
    /// Raw value literal
    pub raw_value: Option<ExprId>,
}

/// `let pattern = initializer`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// `let` or `var`
    pub binding_loc: SourceLoc,
    /// Bound pattern of the first binding
    pub pattern: PatternId,
    /// Initializer of the first binding
    pub initializer: Option<ExprId>,
    /// Always `false`; `static` is not looked at yet
    pub is_static: bool,
    /// Whether the binding was introduced by `let`
    pub is_let: bool,
}

/// `func name<T>(params) async throws -> R where ... { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDecl {
    /// `static`, never filled in yet
    pub static_loc: Option<SourceLoc>,
    /// `func`
    pub func_loc: SourceLoc,
    /// Function name
    pub name: Identifier,
    /// Location of the name
    pub name_loc: SourceLoc,
    /// Generic parameters
    pub generic_params: Option<GenericParamListId>,
    /// Parameters
    pub params: ParameterListId,
    /// `async`
    pub async_loc: Option<SourceLoc>,
    /// `throws`
    pub throws_loc: Option<SourceLoc>,
    /// Explicit result type
    pub result_type: Option<TypeReprId>,
    /// Trailing where clause
    pub where_clause: Option<WhereClauseId>,
    /// Body, attached after the declaration is created
    pub body: Option<StmtId>,
}

/// `init?<T>(params) async throws where ... { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    /// `init`
    pub init_loc: SourceLoc,
    /// `?` or `!` after `init`
    pub failability_loc: Option<SourceLoc>,
    /// Set when the failability mark is `!`
    pub is_iuo: bool,
    /// Generic parameters
    pub generic_params: Option<GenericParamListId>,
    /// Parameters
    pub params: ParameterListId,
    /// `async`
    pub async_loc: Option<SourceLoc>,
    /// `throws`
    pub throws_loc: Option<SourceLoc>,
    /// Trailing where clause
    pub where_clause: Option<WhereClauseId>,
    /// Body, attached after the declaration is created
    pub body: Option<StmtId>,
}

/// `deinit { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct DestructorDecl {
    /// `deinit`
    pub deinit_loc: SourceLoc,
    /// Body, attached after the declaration is created
    pub body: Option<StmtId>,
}

/// How an operator is applied
#[derive(Copy, Clone, Debug, Display, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum OperatorFixity {
    /// `infix`
    #[display("infix")]
    Infix,
    /// `prefix`
    #[display("prefix")]
    Prefix,
    /// `postfix`
    #[display("postfix")]
    Postfix,
}

/// `infix operator <+> : AdditionPrecedence`
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorDecl {
    /// Fixity
    pub fixity: OperatorFixity,
    /// `operator`
    pub operator_loc: SourceLoc,
    /// Operator spelling
    pub name: Identifier,
    /// Location of the operator spelling
    pub name_loc: SourceLoc,
    /// `:` before the precedence group
    pub colon_loc: Option<SourceLoc>,
    /// Precedence group
    pub precedence_group_name: Option<Identifier>,
    /// Location of the precedence group
    pub precedence_group_loc: Option<SourceLoc>,
}

/// What an import brings into scope
#[derive(Copy, Clone, Debug, Display, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ImportKind {
    /// The whole module
    #[display("module")]
    Module,
    /// `import typealias`
    #[display("type")]
    Type,
    /// `import struct`
    #[display("struct")]
    Struct,
    /// `import class`
    #[display("class")]
    Class,
    /// `import enum`
    #[display("enum")]
    Enum,
    /// `import protocol`
    #[display("protocol")]
    Protocol,
    /// `import var` / `import let`
    #[display("var")]
    Var,
    /// `import func`
    #[display("func")]
    Func,
}

/// `import kind A.B.C`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    /// `import`
    pub import_loc: SourceLoc,
    /// What the import is restricted to
    pub kind: ImportKind,
    /// Location of the kind keyword
    pub kind_loc: Option<SourceLoc>,
    /// Path components in source order, never empty
    pub path: ArrayRef<LocatedIdentifier>,
}

/// One generic parameter `T: P`
#[derive(Debug, Clone, PartialEq)]
pub struct GenericTypeParamDecl {
    /// Parameter name
    pub name: Identifier,
    /// Location of the name
    pub name_loc: SourceLoc,
    /// Position in its parameter list
    pub index: u32,
    /// Inline constraint
    pub inherited: Option<TypeReprId>,
}

/// One parameter `label name: Type = default`
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    /// Argument label, absent for `_` or unlabelled enum payloads
    pub argument_name: Option<Identifier>,
    /// Location of the argument label
    pub argument_name_loc: Option<SourceLoc>,
    /// Name used inside the body, absent for `_`
    pub param_name: Option<Identifier>,
    /// Location of the parameter name
    pub param_name_loc: Option<SourceLoc>,
    /// Parameter type
    pub type_repr: TypeReprId,
    /// Default value
    pub default_value: Option<ExprId>,
}

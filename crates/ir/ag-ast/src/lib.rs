//! Semantic abstract syntax tree
//!
//! The AST is what later stages (name binding, type checking) consume. It is
//! smaller and more regular than the syntax tree: trivia and punctuation are
//! gone, and only the source locations downstream diagnostics need remain.
//! Every node lives in an arena owned by an [`AstContext`]; nodes refer to
//! each other through typed indices and variable-length lists are frozen
//! [`ArrayRef`](ag_arena::ArrayRef)s.

mod context;
mod decl;
mod dump;
mod repr;

pub use context::{ArrayElement, Arrays, AstContext};
pub use decl::{
    AssociatedTypeDecl, ClassDecl, ConstructorDecl, Decl, DeclContext, DeclKind, DestructorDecl,
    EnumCaseDecl, EnumElementDecl, ExtensionDecl, FuncDecl, GenericTypeParamDecl, ImportDecl,
    ImportKind, LocatedIdentifier, NominalTypeDecl, OperatorDecl, OperatorFixity, ParamDecl,
    ProtocolDecl, TypeAliasDecl, VarDecl,
};
pub use dump::AstDumper;
pub use repr::{
    CallArgument, Expr, GenericParamList, Literal, ParameterList, Pattern, RequirementKind,
    RequirementRepr, Stmt, TrailingWhereClause, TypeRepr,
};

use ag_arena::Idx;

/// Declaration handle
pub type DeclId = Idx<Decl>;
/// Type representation handle
pub type TypeReprId = Idx<TypeRepr>;
/// Expression handle
pub type ExprId = Idx<Expr>;
/// Statement handle
pub type StmtId = Idx<Stmt>;
/// Pattern handle
pub type PatternId = Idx<Pattern>;
/// Generic parameter list handle
pub type GenericParamListId = Idx<GenericParamList>;
/// Parameter list handle
pub type ParameterListId = Idx<ParameterList>;
/// Trailing where clause handle
pub type WhereClauseId = Idx<TrailingWhereClause>;

/// Any AST node, tagged by family
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum AstNode {
    /// A declaration
    Decl(DeclId),
    /// A type representation
    Type(TypeReprId),
    /// An expression
    Expr(ExprId),
    /// A statement
    Stmt(StmtId),
    /// A pattern
    Pattern(PatternId),
}

impl AstNode {
    /// The declaration handle, if this is a declaration
    pub fn as_decl(self) -> Option<DeclId> {
        match self {
            Self::Decl(decl) => Some(decl),
            Self::Type(_) | Self::Expr(_) | Self::Stmt(_) | Self::Pattern(_) => None,
        }
    }
}

impl From<DeclId> for AstNode {
    fn from(decl: DeclId) -> Self {
        Self::Decl(decl)
    }
}

impl From<TypeReprId> for AstNode {
    fn from(ty: TypeReprId) -> Self {
        Self::Type(ty)
    }
}

impl From<PatternId> for AstNode {
    fn from(pattern: PatternId) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<StmtId> for AstNode {
    fn from(stmt: StmtId) -> Self {
        Self::Stmt(stmt)
    }
}

impl From<ExprId> for AstNode {
    fn from(expr: ExprId) -> Self {
        Self::Expr(expr)
    }
}

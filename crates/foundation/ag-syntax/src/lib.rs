//! Trivia-preserving concrete syntax tree
//!
//! The tree keeps every token, including whitespace and comments attached as
//! trivia, so any node prints back to its exact source text. Nodes are plain
//! typed structs; the [`Syntax`] trait gives uniform token traversal on top.
//! Trees are produced by a parser outside this workspace, or by hand through
//! [`SyntaxBuilder`].

mod builder;
mod clause;
mod decl;
mod expr;
mod pattern;
mod stmt;
mod token;
mod ty;
mod walk;

pub use builder::SyntaxBuilder;
pub use clause::{
    ConformanceRequirementSyntax, DeclModifierSyntax, EnumCaseParameterClauseSyntax,
    EnumCaseParameterSyntax, FunctionEffectSpecifiersSyntax, FunctionParameterClauseSyntax,
    FunctionParameterSyntax, FunctionSignatureSyntax, GenericParameterClauseSyntax,
    GenericParameterSyntax, GenericRequirementSyntax, GenericWhereClauseSyntax,
    InheritanceClauseSyntax, InheritedTypeSyntax, InitializerClauseSyntax,
    MemberBlockItemSyntax, MemberBlockSyntax, RequirementSyntax, ReturnClauseSyntax,
    SameTypeRequirementSyntax, TypeAnnotationSyntax, TypeInitializerClauseSyntax,
};
pub use decl::{
    ActorDeclSyntax, AssociatedTypeDeclSyntax, ClassDeclSyntax, DeclSyntax,
    DeinitializerDeclSyntax, EnumCaseDeclSyntax, EnumCaseElementSyntax, EnumDeclSyntax,
    ExtensionDeclSyntax, FunctionDeclSyntax, ImportDeclSyntax, ImportPathComponentSyntax,
    InitializerDeclSyntax, OperatorDeclSyntax, OperatorPrecedenceAndTypesSyntax,
    PatternBindingSyntax, PrimaryAssociatedTypeClauseSyntax, PrimaryAssociatedTypeSyntax,
    ProtocolDeclSyntax, StructDeclSyntax, TypeAliasDeclSyntax, VariableDeclSyntax,
};
pub use expr::{
    ExprSyntax, FunctionCallExprSyntax, LabeledExprSyntax, MemberAccessExprSyntax,
    TupleExprSyntax,
};
pub use pattern::{PatternSyntax, TuplePatternElementSyntax, TuplePatternSyntax};
pub use stmt::{
    CodeBlockItem, CodeBlockItemSyntax, CodeBlockSyntax, ReturnStmtSyntax, SourceFileSyntax,
    StmtSyntax,
};
pub use token::{Keyword, Token, TokenKind, Trivia, TriviaPiece};
pub use ty::{
    ArrayTypeSyntax, GenericArgumentClauseSyntax, GenericArgumentSyntax, IdentifierTypeSyntax,
    MemberTypeSyntax, OptionalTypeSyntax, TupleTypeElementSyntax, TupleTypeSyntax, TypeSyntax,
};
pub use walk::Syntax;

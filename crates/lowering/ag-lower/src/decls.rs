//! Per-kind declaration lowering
//!
//! Every routine translates the clauses that are present, creates exactly
//! one declaration in the current context and then, for kinds that own a
//! member list or a body, lowers that inside the new declaration's context.

use crate::{AstGen, Lower, LowerError, resolve_enumerant};
use ag_arena::ArrayRef;
use ag_ast::{
    AssociatedTypeDecl, ClassDecl, ConstructorDecl, DeclContext, DeclId, DeclKind,
    DestructorDecl, EnumCaseDecl, EnumElementDecl, ExtensionDecl, FuncDecl, ImportDecl,
    ImportKind, NominalTypeDecl, OperatorDecl, OperatorFixity, ProtocolDecl, TypeAliasDecl,
    TypeReprId, VarDecl,
};
use ag_span::SourceLoc;
use ag_syntax::{
    ActorDeclSyntax, AssociatedTypeDeclSyntax, ClassDeclSyntax, CodeBlockSyntax, DeclSyntax,
    DeinitializerDeclSyntax, EnumCaseDeclSyntax, EnumCaseElementSyntax, EnumDeclSyntax,
    ExtensionDeclSyntax, FunctionDeclSyntax, FunctionSignatureSyntax,
    GenericParameterClauseSyntax, GenericWhereClauseSyntax, ImportDeclSyntax,
    InheritanceClauseSyntax, InitializerDeclSyntax, Keyword, MemberBlockSyntax,
    OperatorDeclSyntax, ProtocolDeclSyntax, ReturnClauseSyntax, StructDeclSyntax, Token,
    TokenKind, TypeAliasDeclSyntax, TypeInitializerClauseSyntax, VariableDeclSyntax,
};

impl Lower for DeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        match self {
            Self::TypeAlias(node) => astgen.visit(node),
            Self::Enum(node) => astgen.visit(node),
            Self::Struct(node) => astgen.visit(node),
            Self::Class(node) => astgen.visit(node),
            Self::Actor(node) => astgen.visit(node),
            Self::Protocol(node) => astgen.visit(node),
            Self::AssociatedType(node) => astgen.visit(node),
            Self::Extension(node) => astgen.visit(node),
            Self::EnumCase(node) => astgen.visit(node),
            Self::Variable(node) => astgen.visit(node),
            Self::Function(node) => astgen.visit(node),
            Self::Initializer(node) => astgen.visit(node),
            Self::Deinitializer(node) => astgen.visit(node),
            Self::Operator(node) => astgen.visit(node),
            Self::Import(node) => astgen.visit(node),
        }
    }
}

impl Lower for MemberBlockSyntax {
    type Output = ArrayRef<DeclId>;

    fn lower(&self, astgen: &mut AstGen<'_>) -> ArrayRef<DeclId> {
        astgen.lower_list(self.members.iter().map(|item| &item.decl))
    }
}

impl AstGen<'_> {
    /// Lowers `block` with `decl` as the current context and attaches the
    /// result as its parsed members
    fn lower_members(&mut self, decl: DeclId, block: &MemberBlockSyntax) {
        self.with_decl_context(DeclContext::Decl(decl), |astgen| {
            let members = astgen.visit(block);
            astgen.set_parsed_members(decl, members);
        });
    }

    /// Same as [`Self::lower_members`] for bodies, which are optional
    fn lower_body(&mut self, decl: DeclId, body: Option<&CodeBlockSyntax>) {
        let Some(body) = body else {
            return;
        };
        self.with_decl_context(DeclContext::Decl(decl), |astgen| {
            let body = astgen.visit(body);
            astgen.set_body(decl, body);
        });
    }
}

/// The clauses shared by enums, structs, classes, actors and protocols
struct NominalParts<'node> {
    intro: &'node Token,
    name: &'node Token,
    generics: Option<&'node GenericParameterClauseSyntax>,
    inheritance: Option<&'node InheritanceClauseSyntax>,
    where_clause: Option<&'node GenericWhereClauseSyntax>,
    member_block: &'node MemberBlockSyntax,
}

impl NominalParts<'_> {
    /// Everything but the members, which need the declaration to exist first
    fn lower(&self, astgen: &mut AstGen<'_>) -> NominalTypeDecl {
        let (name, name_loc) = astgen.identifier_and_loc(self.name);
        NominalTypeDecl {
            intro_loc: astgen.loc(self.intro),
            name,
            name_loc,
            generic_params: astgen.visit(&self.generics),
            inherited: astgen.visit(&self.inheritance),
            where_clause: astgen.visit(&self.where_clause),
            braces: astgen.range(&self.member_block.left_brace, &self.member_block.right_brace),
            members: None,
        }
    }
}

/// Generates the member-owning routine for a nominal type whose syntax
/// differs only in the introducer keyword
macro_rules! nominal_decl {
    ($syntax:ty, $keyword:ident, |$nominal:ident| $kind:expr) => {
        impl Lower for $syntax {
            type Output = DeclId;

            fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
                let $nominal = NominalParts {
                    intro: &self.$keyword,
                    name: &self.name,
                    generics: self.generic_parameter_clause.as_ref(),
                    inheritance: self.inheritance_clause.as_ref(),
                    where_clause: self.generic_where_clause.as_ref(),
                    member_block: &self.member_block,
                }
                .lower(astgen);
                let decl = astgen.alloc_decl($kind);
                astgen.lower_members(decl, &self.member_block);
                decl
            }
        }
    };
}

nominal_decl!(EnumDeclSyntax, enum_keyword, |nominal| DeclKind::Enum(nominal));
nominal_decl!(StructDeclSyntax, struct_keyword, |nominal| DeclKind::Struct(nominal));
nominal_decl!(ClassDeclSyntax, class_keyword, |nominal| DeclKind::Class(ClassDecl {
    nominal,
    is_actor: false,
}));
nominal_decl!(ActorDeclSyntax, actor_keyword, |nominal| DeclKind::Class(ClassDecl {
    nominal,
    is_actor: true,
}));

impl Lower for TypeAliasDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let (name, name_loc) = astgen.identifier_and_loc(&self.name);
        let kind = DeclKind::TypeAlias(TypeAliasDecl {
            typealias_loc: astgen.loc(&self.typealias_keyword),
            name,
            name_loc,
            generic_params: astgen.visit(&self.generic_parameter_clause),
            equal_loc: astgen.loc(&self.initializer.equal),
            underlying: astgen.visit(&self.initializer),
            where_clause: astgen.visit(&self.generic_where_clause),
        });
        astgen.alloc_decl(kind)
    }
}

impl Lower for TypeInitializerClauseSyntax {
    type Output = TypeReprId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> TypeReprId {
        astgen.visit(&self.value)
    }
}

/// Protocols take no generic parameters; their primary associated types are
/// plain names, and a missing clause means an empty list.
impl Lower for ProtocolDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let primary: Vec<_> = self
            .primary_associated_type_clause
            .iter()
            .flat_map(|clause| &clause.primary_associated_types)
            .map(|primary| astgen.located_identifier(&primary.name))
            .collect();
        let primary_associated_types = astgen.bridged_array(primary);

        let nominal = NominalParts {
            intro: &self.protocol_keyword,
            name: &self.name,
            generics: None,
            inheritance: self.inheritance_clause.as_ref(),
            where_clause: self.generic_where_clause.as_ref(),
            member_block: &self.member_block,
        }
        .lower(astgen);

        let decl = astgen.alloc_decl(DeclKind::Protocol(ProtocolDecl {
            nominal,
            primary_associated_types,
        }));
        astgen.lower_members(decl, &self.member_block);
        decl
    }
}

impl Lower for AssociatedTypeDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let (name, name_loc) = astgen.identifier_and_loc(&self.name);
        let kind = DeclKind::AssociatedType(AssociatedTypeDecl {
            associatedtype_loc: astgen.loc(&self.associatedtype_keyword),
            name,
            name_loc,
            inherited: astgen.visit(&self.inheritance_clause),
            default_type: astgen.visit(&self.initializer),
            where_clause: astgen.visit(&self.generic_where_clause),
        });
        astgen.alloc_decl(kind)
    }
}

impl Lower for ExtensionDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let kind = DeclKind::Extension(ExtensionDecl {
            extension_loc: astgen.loc(&self.extension_keyword),
            extended_type: astgen.visit(&self.extended_type),
            inherited: astgen.visit(&self.inheritance_clause),
            where_clause: astgen.visit(&self.generic_where_clause),
            braces: astgen.range(&self.member_block.left_brace, &self.member_block.right_brace),
            members: None,
        });
        let decl = astgen.alloc_decl(kind);
        astgen.lower_members(decl, &self.member_block);
        decl
    }
}

/// Elements are created before the case that groups them
impl Lower for EnumCaseDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let kind = DeclKind::EnumCase(EnumCaseDecl {
            case_loc: astgen.loc(&self.case_keyword),
            elements: astgen.lower_list(&self.elements),
        });
        astgen.alloc_decl(kind)
    }
}

impl Lower for EnumCaseElementSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let (name, name_loc) = astgen.identifier_and_loc(&self.name);
        let kind = DeclKind::EnumElement(EnumElementDecl {
            name,
            name_loc,
            params: astgen.visit(&self.parameter_clause),
            equals_loc: astgen.loc_opt(self.raw_value.as_ref().map(|raw_value| &raw_value.equal)),
            raw_value: astgen.visit(&self.raw_value),
        });
        astgen.alloc_decl(kind)
    }
}

/// Only the first binding is lowered: `let x = 1, y = 2` declares `x`.
impl Lower for VariableDeclSyntax {
    type Output = DeclId;

    #[allow(clippy::panic, reason = "the parser never produces a binding list without bindings")]
    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let Some(binding) = self.bindings.first() else {
            panic!("variable declaration without bindings");
        };
        let kind = DeclKind::Var(VarDecl {
            binding_loc: astgen.loc(&self.binding_specifier),
            pattern: astgen.visit(&binding.pattern),
            initializer: astgen.visit(&binding.initializer),
            // TODO: derive from a `static` entry in `self.modifiers`.
            is_static: false,
            is_let: self.binding_specifier.is_keyword(Keyword::Let),
        });
        astgen.alloc_decl(kind)
    }
}

/// `async` and `throws` locations of a signature
fn effect_locs(
    astgen: &AstGen<'_>,
    signature: &FunctionSignatureSyntax,
) -> (Option<SourceLoc>, Option<SourceLoc>) {
    let effects = signature.effect_specifiers.as_ref();
    (
        astgen.loc_opt(effects.and_then(|specifiers| specifiers.async_specifier.as_ref())),
        astgen.loc_opt(effects.and_then(|specifiers| specifiers.throws_specifier.as_ref())),
    )
}

impl Lower for ReturnClauseSyntax {
    type Output = TypeReprId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> TypeReprId {
        astgen.visit(&self.ty)
    }
}

impl Lower for FunctionDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let (name, name_loc) = astgen.identifier_and_loc(&self.name);
        let (async_loc, throws_loc) = effect_locs(astgen, &self.signature);
        let kind = DeclKind::Func(FuncDecl {
            static_loc: None,
            func_loc: astgen.loc(&self.func_keyword),
            name,
            name_loc,
            generic_params: astgen.visit(&self.generic_parameter_clause),
            params: astgen.visit(&self.signature.parameter_clause),
            async_loc,
            throws_loc,
            result_type: astgen.visit(&self.signature.return_clause),
            where_clause: astgen.visit(&self.generic_where_clause),
            body: None,
        });
        let decl = astgen.alloc_decl(kind);
        astgen.lower_body(decl, self.body.as_ref());
        decl
    }
}

impl Lower for InitializerDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let (async_loc, throws_loc) = effect_locs(astgen, &self.signature);
        let kind = DeclKind::Constructor(ConstructorDecl {
            init_loc: astgen.loc(&self.init_keyword),
            failability_loc: astgen.loc_opt(self.optional_mark.as_ref()),
            is_iuo: self
                .optional_mark
                .as_ref()
                .is_some_and(|mark| mark.kind == TokenKind::ExclamationMark),
            generic_params: astgen.visit(&self.generic_parameter_clause),
            params: astgen.visit(&self.signature.parameter_clause),
            async_loc,
            throws_loc,
            where_clause: astgen.visit(&self.generic_where_clause),
            body: None,
        });
        let decl = astgen.alloc_decl(kind);
        astgen.lower_body(decl, self.body.as_ref());
        decl
    }
}

impl Lower for DeinitializerDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let kind = DeclKind::Destructor(DestructorDecl {
            deinit_loc: astgen.loc(&self.deinit_keyword),
            body: None,
        });
        let decl = astgen.alloc_decl(kind);
        astgen.lower_body(decl, self.body.as_ref());
        decl
    }
}

/// Maps a fixity keyword, falling back to infix
pub fn resolve_fixity(token: &Token) -> (OperatorFixity, Option<LowerError>) {
    resolve_enumerant(
        token,
        "operator fixity",
        "`prefix`, `infix` or `postfix`",
        OperatorFixity::Infix,
        |kind| match kind {
            TokenKind::Keyword(Keyword::Prefix) => Some(OperatorFixity::Prefix),
            TokenKind::Keyword(Keyword::Infix) => Some(OperatorFixity::Infix),
            TokenKind::Keyword(Keyword::Postfix) => Some(OperatorFixity::Postfix),
            _ => None,
        },
    )
}

/// Maps an import kind keyword, falling back to a whole-module import
pub fn resolve_import_kind(token: &Token) -> (ImportKind, Option<LowerError>) {
    resolve_enumerant(
        token,
        "import kind",
        "`typealias`, `struct`, `class`, `enum`, `protocol`, `var`, `let` or `func`",
        ImportKind::Module,
        |kind| match kind {
            TokenKind::Keyword(Keyword::Typealias) => Some(ImportKind::Type),
            TokenKind::Keyword(Keyword::Struct) => Some(ImportKind::Struct),
            TokenKind::Keyword(Keyword::Class) => Some(ImportKind::Class),
            TokenKind::Keyword(Keyword::Enum) => Some(ImportKind::Enum),
            TokenKind::Keyword(Keyword::Protocol) => Some(ImportKind::Protocol),
            TokenKind::Keyword(Keyword::Var | Keyword::Let) => Some(ImportKind::Var),
            TokenKind::Keyword(Keyword::Func) => Some(ImportKind::Func),
            _ => None,
        },
    )
}

impl Lower for OperatorDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let (fixity, error) = resolve_fixity(&self.fixity_specifier);
        if let Some(error) = error {
            astgen.diagnose(&self.fixity_specifier, error);
        }

        let (name, name_loc) = astgen.identifier_and_loc(&self.name);
        let precedence = self.operator_precedence_and_types.as_ref();
        let group = precedence.map(|clause| astgen.identifier_and_loc(&clause.precedence_group));
        let kind = DeclKind::Operator(OperatorDecl {
            fixity,
            operator_loc: astgen.loc(&self.operator_keyword),
            name,
            name_loc,
            colon_loc: astgen.loc_opt(precedence.map(|clause| &clause.colon)),
            precedence_group_name: group.map(|(group_name, _)| group_name),
            precedence_group_loc: group.map(|(_, group_loc)| group_loc),
        });
        astgen.alloc_decl(kind)
    }
}

impl Lower for ImportDeclSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let import_kind = match &self.import_kind_specifier {
            Some(specifier) => {
                let (kind, error) = resolve_import_kind(specifier);
                if let Some(error) = error {
                    astgen.diagnose(specifier, error);
                }
                kind
            }
            None => ImportKind::Module,
        };

        let path: Vec<_> = self
            .path
            .iter()
            .map(|component| astgen.located_identifier(&component.name))
            .collect();
        let kind = DeclKind::Import(ImportDecl {
            import_loc: astgen.loc(&self.import_keyword),
            kind: import_kind,
            kind_loc: astgen.loc_opt(self.import_kind_specifier.as_ref()),
            path: astgen.bridged_array(path),
        });
        astgen.alloc_decl(kind)
    }
}

#[cfg(test)]
mod tests {
    use crate::Diagnostics;
    use crate::test_support::{TestFile, lower_decls};
    use ag_ast::{AstContext, AstNode, DeclContext, DeclKind, ImportKind, OperatorFixity, Stmt};
    use ag_intern::Interner;
    use ag_syntax::{
        AssociatedTypeDeclSyntax, CodeBlockItem, DeclSyntax, EnumCaseDeclSyntax,
        EnumCaseElementSyntax, EnumCaseParameterClauseSyntax, EnumCaseParameterSyntax,
        ExtensionDeclSyntax, FunctionDeclSyntax, FunctionEffectSpecifiersSyntax,
        FunctionSignatureSyntax, InheritanceClauseSyntax, InitializerClauseSyntax, Keyword,
        ReturnClauseSyntax, ReturnStmtSyntax, StmtSyntax, StructDeclSyntax, SyntaxBuilder,
        TokenKind, TypeAliasDeclSyntax, TypeInitializerClauseSyntax,
    };
    use expect_test::expect;

    fn empty_body(_: &mut SyntaxBuilder) -> Vec<CodeBlockItem> {
        Vec::new()
    }

    fn local_struct(builder: &mut SyntaxBuilder) -> Vec<CodeBlockItem> {
        vec![CodeBlockItem::Decl(builder.struct_decl("Local", |_| Vec::new()))]
    }

    /// `case A, B(Int), C = 3` on a new line
    fn shape_cases(builder: &mut SyntaxBuilder) -> DeclSyntax {
        let case_keyword = builder.newline().keyword(Keyword::Case);
        let first = EnumCaseElementSyntax {
            name: builder.ident("A"),
            parameter_clause: None,
            raw_value: None,
            trailing_comma: Some(builder.glue().punct(TokenKind::Comma)),
        };
        let second = EnumCaseElementSyntax {
            name: builder.ident("B"),
            parameter_clause: Some(EnumCaseParameterClauseSyntax {
                left_paren: builder.glue().punct(TokenKind::LeftParen),
                parameters: vec![EnumCaseParameterSyntax {
                    first_name: None,
                    second_name: None,
                    colon: None,
                    ty: builder.glue().ident_type("Int"),
                    default_value: None,
                    trailing_comma: None,
                }],
                right_paren: builder.glue().punct(TokenKind::RightParen),
            }),
            raw_value: None,
            trailing_comma: Some(builder.glue().punct(TokenKind::Comma)),
        };
        let third = EnumCaseElementSyntax {
            name: builder.ident("C"),
            parameter_clause: None,
            raw_value: Some(InitializerClauseSyntax {
                equal: builder.punct(TokenKind::Equal),
                value: builder.int_expr("3"),
            }),
            trailing_comma: None,
        };
        DeclSyntax::EnumCase(EnumCaseDeclSyntax {
            case_keyword,
            elements: vec![first, second, third],
        })
    }

    /// `func map<T: Equatable>(_ value: T) async throws -> T where T: Hashable { return value }`
    fn generic_function(builder: &mut SyntaxBuilder) -> DeclSyntax {
        DeclSyntax::Function(FunctionDeclSyntax {
            modifiers: Vec::new(),
            func_keyword: builder.keyword(Keyword::Func),
            name: builder.ident("map"),
            generic_parameter_clause: Some(
                builder.generic_parameter_clause(&[("T", Some("Equatable"))]),
            ),
            signature: FunctionSignatureSyntax {
                parameter_clause: builder.parameter_clause(&[("_", Some("value"), "T")]),
                effect_specifiers: Some(FunctionEffectSpecifiersSyntax {
                    async_specifier: Some(builder.keyword(Keyword::Async)),
                    throws_specifier: Some(builder.keyword(Keyword::Throws)),
                }),
                return_clause: Some(ReturnClauseSyntax {
                    arrow: builder.punct(TokenKind::Arrow),
                    ty: builder.ident_type("T"),
                }),
            },
            generic_where_clause: Some(builder.where_clause(&[("T", "Hashable")])),
            body: Some(builder.code_block(|block| {
                vec![CodeBlockItem::Stmt(StmtSyntax::Return(ReturnStmtSyntax {
                    return_keyword: block.newline().keyword(Keyword::Return),
                    expression: Some(block.decl_ref("value")),
                }))]
            })),
        })
    }

    /// `associatedtype Element: Hashable = Int where Element: Sendable`
    fn constrained_associated_type(builder: &mut SyntaxBuilder) -> DeclSyntax {
        DeclSyntax::AssociatedType(AssociatedTypeDeclSyntax {
            associatedtype_keyword: builder.keyword(Keyword::Associatedtype),
            name: builder.ident("Element"),
            inheritance_clause: Some(builder.inheritance_clause(&["Hashable"])),
            initializer: Some(TypeInitializerClauseSyntax {
                equal: builder.punct(TokenKind::Equal),
                value: builder.ident_type("Int"),
            }),
            generic_where_clause: Some(builder.where_clause(&[("Element", "Sendable")])),
        })
    }

    /// `extension Box: Equatable where T: Hashable { }`
    fn constrained_extension(builder: &mut SyntaxBuilder) -> DeclSyntax {
        DeclSyntax::Extension(ExtensionDeclSyntax {
            extension_keyword: builder.keyword(Keyword::Extension),
            extended_type: builder.ident_type("Box"),
            inheritance_clause: Some(builder.inheritance_clause(&["Equatable"])),
            generic_where_clause: Some(builder.where_clause(&[("T", "Hashable")])),
            member_block: builder.member_block(|_| Vec::new()),
        })
    }

    /// `typealias Pair<T> = Int where T: Hashable`
    fn generic_alias(builder: &mut SyntaxBuilder) -> DeclSyntax {
        DeclSyntax::TypeAlias(TypeAliasDeclSyntax {
            typealias_keyword: builder.keyword(Keyword::Typealias),
            name: builder.ident("Pair"),
            generic_parameter_clause: Some(builder.generic_parameter_clause(&[("T", None)])),
            initializer: TypeInitializerClauseSyntax {
                equal: builder.punct(TokenKind::Equal),
                value: builder.ident_type("Int"),
            },
            generic_where_clause: Some(builder.where_clause(&[("T", "Hashable")])),
        })
    }

    /// `struct Open: { }`, an inheritance clause with nothing after the colon
    fn empty_inheritance(builder: &mut SyntaxBuilder) -> DeclSyntax {
        DeclSyntax::Struct(StructDeclSyntax {
            struct_keyword: builder.keyword(Keyword::Struct),
            name: builder.ident("Open"),
            generic_parameter_clause: None,
            inheritance_clause: Some(InheritanceClauseSyntax {
                colon: builder.glue().punct(TokenKind::Colon),
                inherited_types: Vec::new(),
            }),
            generic_where_clause: None,
            member_block: builder.member_block(|_| Vec::new()),
        })
    }

    #[test]
    fn test_every_kind_lowers_to_one_declaration() {
        let lowered = lower_decls(|builder| {
            vec![
                builder.typealias_decl("Alias", "Int"),
                builder.enum_decl("Color", &[], |body| vec![body.case_decl(&[("red", None)])]),
                builder.struct_decl("Point", |body| {
                    vec![body.init_decl(None, &[], Some(&empty_body))]
                }),
                builder.class_decl("Node", &[], |body| vec![body.deinit_decl(None)]),
                builder.actor_decl("Counter", |_| Vec::new()),
                builder.protocol_decl("Sequence", &["Element"], |body| {
                    vec![body.associatedtype_decl("Element")]
                }),
                builder.extension_decl("Point", |_| Vec::new()),
                builder.var_decl(Keyword::Var, &[("count", None, Some("0"))]),
                builder.func_decl("run", &[], None, Some(&empty_body)),
                builder.operator_decl(TokenKind::Keyword(Keyword::Infix), "infix", "<+>", None),
                builder.import_decl(None, &["Foundation"]),
            ]
        });

        assert!(lowered.diagnostics.is_empty());
        let kinds: Vec<_> = (0..lowered.nodes().len())
            .map(|index| lowered.ast[lowered.decl(index)].kind.name())
            .collect();
        assert_eq!(
            kinds,
            [
                "typealias", "enum", "struct", "class", "actor", "protocol", "extension", "var",
                "func", "operator", "import",
            ]
        );

        let member_kinds = |index: usize| -> Vec<&'static str> {
            lowered
                .ast
                .members(lowered.decl(index))
                .unwrap_or_else(|| panic!("item {index} has no member list"))
                .iter()
                .map(|member| lowered.ast[*member].kind.name())
                .collect()
        };
        assert_eq!(member_kinds(1), ["enum_case"]);
        assert_eq!(member_kinds(2), ["constructor"]);
        assert_eq!(member_kinds(3), ["destructor"]);
        assert!(member_kinds(4).is_empty());
        assert_eq!(member_kinds(5), ["associatedtype"]);
        assert!(member_kinds(6).is_empty());

        // Eleven top-level declarations, the enum element, and one member
        // each for the enum, struct, class and protocol.
        assert_eq!(lowered.ast.decl_count(), 16);
    }

    #[test]
    fn test_context_is_restored_after_members_and_bodies() {
        let mut builder = SyntaxBuilder::new();
        let outer_syntax =
            builder.struct_decl("S", |body| vec![body.struct_decl("T", |_| Vec::new())]);
        let function_syntax = builder.func_decl("f", &[], None, Some(&local_struct));
        let file = TestFile::new(builder.text());

        let interner = Interner::new();
        let mut ast = AstContext::new();
        let mut sink = Diagnostics::new();
        let mut astgen = file.astgen(&mut ast, &interner, &mut sink);
        let file_context = astgen.decl_context();

        let outer = astgen.visit(&outer_syntax);
        assert_eq!(astgen.decl_context(), file_context);
        assert_eq!(astgen.depth(), 0);

        let function = astgen.visit(&function_syntax);
        assert_eq!(astgen.decl_context(), file_context);
        assert_eq!(astgen.depth(), 0);

        let lowered = astgen.ast();
        assert_eq!(lowered[outer].context, file_context);
        assert_eq!(lowered[function].context, file_context);

        let Some(body) = lowered.body(function) else {
            panic!("function body was not attached");
        };
        let Stmt::Brace { elements, .. } = &lowered[body] else {
            panic!("body is not a brace statement");
        };
        let [AstNode::Decl(local)] = lowered.array(*elements) else {
            panic!("body should hold exactly the local struct");
        };
        assert_eq!(lowered[*local].context, DeclContext::Decl(function));
    }

    #[test]
    fn test_nested_struct_is_a_member_of_its_parent() {
        let lowered = lower_decls(|builder| {
            vec![builder.struct_decl("S", |body| vec![body.struct_decl("T", |_| Vec::new())])]
        });

        let outer = lowered.decl(0);
        let members = lowered.ast.members(outer).unwrap_or_default();
        let [inner] = members else {
            panic!("expected exactly one member, found {members:?}");
        };
        assert_eq!(lowered.ast[*inner].context, DeclContext::Decl(outer));
        assert_eq!(lowered.ast[outer].context, DeclContext::SourceFile(lowered.file.file().id));
        assert_eq!(
            lowered.ast.decls_in(DeclContext::Decl(outer)).collect::<Vec<_>>(),
            [*inner]
        );

        expect![[r#"
            struct S @1 name=@8 braces=@10..@25
              members:
                struct T @12 name=@19 braces=@21..@23
                  members: []
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_enum_elements_keep_source_order() {
        let lowered =
            lower_decls(|builder| vec![builder.enum_decl("E", &[], |body| vec![shape_cases(body)])]);

        let members = lowered.ast.members(lowered.decl(0)).unwrap_or_default();
        let [case_decl] = members else {
            panic!("expected one case declaration, found {members:?}");
        };
        let DeclKind::EnumCase(case) = &lowered.ast[*case_decl].kind else {
            panic!("expected an enum case");
        };
        let names: Vec<_> = lowered
            .ast
            .array(case.elements)
            .iter()
            .map(|element| lowered.name(*element))
            .collect();
        assert_eq!(names, [Some("A"), Some("B"), Some("C")]);

        expect![[r#"
            enum E @1 name=@6 braces=@8..@32
              members:
                enum_case @10
                  enum_element A @15
                  enum_element B @18
                    params @19..@23
                      param _ _: Int
                  enum_element C @26 = 3 equals=@28
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_typealias_without_optional_clauses() {
        let lowered = lower_decls(|builder| vec![builder.typealias_decl("Alias", "Int")]);

        let DeclKind::TypeAlias(alias) = &lowered.ast[lowered.decl(0)].kind else {
            panic!("expected a type alias");
        };
        assert_eq!(alias.generic_params, None);
        assert_eq!(alias.where_clause, None);

        expect![[r#"
            typealias Alias @1 name=@11 equal=@17
              underlying: Int
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_typealias_with_generics_and_where_clause() {
        let lowered = lower_decls(|builder| vec![generic_alias(builder)]);

        assert!(lowered.diagnostics.is_empty());
        expect![[r#"
            typealias Pair @1 name=@11 equal=@20
              generic_params @15..@18
                generic_type_param T @17 index=0
              underlying: Int
              where @26 [T: Hashable]
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_associated_type_with_every_clause() {
        let lowered = lower_decls(|builder| vec![constrained_associated_type(builder)]);

        let DeclKind::AssociatedType(assoc) = &lowered.ast[lowered.decl(0)].kind else {
            panic!("expected an associated type");
        };
        assert!(assoc.default_type.is_some());
        assert!(assoc.where_clause.is_some());
        assert_eq!(assoc.inherited.map(|inherited| lowered.ast.array(inherited).len()), Some(1));

        expect![[r#"
            associatedtype Element @1 name=@16
              inherited: [Hashable]
              default: Int
              where @40 [Element: Sendable]
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_associated_type_without_optional_clauses() {
        let lowered = lower_decls(|builder| vec![builder.associatedtype_decl("Element")]);

        let DeclKind::AssociatedType(assoc) = &lowered.ast[lowered.decl(0)].kind else {
            panic!("expected an associated type");
        };
        assert_eq!(assoc.inherited, None);
        assert_eq!(assoc.default_type, None);
        assert_eq!(assoc.where_clause, None);
    }

    #[test]
    fn test_extension_with_inheritance_and_where_clause() {
        let lowered = lower_decls(|builder| {
            vec![constrained_extension(builder), builder.extension_decl("Box", |_| Vec::new())]
        });

        let clauses = |index| match &lowered.ast[lowered.decl(index)].kind {
            DeclKind::Extension(extension) => {
                (extension.inherited.is_some(), extension.where_clause.is_some())
            }
            other => panic!("expected an extension, found `{}`", other.name()),
        };
        assert_eq!(clauses(0), (true, true));
        assert_eq!(clauses(1), (false, false));

        expect![[r#"
            extension Box @1 braces=@44..@46
              inherited: [Equatable]
              where @26 [T: Hashable]
              members: []
            extension Box @48 braces=@62..@64
              members: []
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_empty_inheritance_differs_from_absent() {
        let lowered = lower_decls(|builder| {
            vec![empty_inheritance(builder), builder.struct_decl("Plain", |_| Vec::new())]
        });

        let inherited = |index| match &lowered.ast[lowered.decl(index)].kind {
            DeclKind::Struct(nominal) => nominal.inherited,
            other => panic!("expected a struct, found `{}`", other.name()),
        };
        let Some(open) = inherited(0) else {
            panic!("a written clause must stay present");
        };
        assert!(lowered.ast.array(open).is_empty());
        assert_eq!(inherited(1), None);

        expect![[r#"
            struct Open @1 name=@8 braces=@14..@16
              inherited: []
              members: []
            struct Plain @18 name=@25 braces=@31..@33
              members: []
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_unknown_fixity_falls_back_to_infix() {
        let lowered = lower_decls(|builder| {
            vec![
                builder.operator_decl(TokenKind::Identifier, "infx", "<+>", Some("AdditionPrecedence")),
                builder.import_decl(None, &["Swift"]),
            ]
        });

        let DeclKind::Operator(operator) = &lowered.ast[lowered.decl(0)].kind else {
            panic!("expected an operator");
        };
        assert_eq!(operator.fixity, OperatorFixity::Infix);
        assert_eq!(
            lowered.messages(),
            ["unexpected token kind for operator fixity: identifier"]
        );
        let diagnostic = lowered.diagnostics.iter().next().map(|diagnostic| diagnostic.span);
        assert_eq!(diagnostic.map(|span| span.range()), Some(0..4));

        expect![[r#"
            infix operator <+> @6 name=@15 : AdditionPrecedence@21 colon=@19
            import module @40 path=Swift@47
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_known_fixities_are_not_diagnosed() {
        let lowered = lower_decls(|builder| {
            vec![
                builder.operator_decl(TokenKind::Keyword(Keyword::Prefix), "prefix", "-!", None),
                builder.operator_decl(TokenKind::Keyword(Keyword::Postfix), "postfix", "!!", None),
            ]
        });

        assert!(lowered.diagnostics.is_empty());
        let fixities: Vec<_> = (0..2)
            .map(|index| match &lowered.ast[lowered.decl(index)].kind {
                DeclKind::Operator(operator) => operator.fixity,
                other => panic!("expected an operator, found `{}`", other.name()),
            })
            .collect();
        assert_eq!(fixities, [OperatorFixity::Prefix, OperatorFixity::Postfix]);
    }

    #[test]
    fn test_import_kinds() {
        let lowered = lower_decls(|builder| {
            vec![
                builder.import_decl(Some(Keyword::Deinit), &["Foundation", "Data"]),
                builder.import_decl(Some(Keyword::Let), &["Darwin", "errno"]),
                builder.import_decl(None, &["Swift"]),
            ]
        });

        let imports: Vec<_> = (0..3)
            .map(|index| match &lowered.ast[lowered.decl(index)].kind {
                DeclKind::Import(import) => (import.kind, import.kind_loc.is_some()),
                other => panic!("expected an import, found `{}`", other.name()),
            })
            .collect();
        assert_eq!(
            imports,
            [
                (ImportKind::Module, true),
                (ImportKind::Var, true),
                (ImportKind::Module, false),
            ]
        );
        assert_eq!(
            lowered.messages(),
            ["unexpected token kind for import kind: keyword `deinit`"]
        );

        let DeclKind::Import(first) = &lowered.ast[lowered.decl(0)].kind else {
            panic!("expected an import");
        };
        let path: Vec<_> = lowered
            .ast
            .array(first.path)
            .iter()
            .map(|component| lowered.interner.resolve(&component.name))
            .collect();
        assert_eq!(path, ["Foundation", "Data"]);
    }

    #[test]
    fn test_only_the_first_binding_is_lowered() {
        let lowered = lower_decls(|builder| {
            vec![builder.var_decl(Keyword::Let, &[("x", None, Some("1")), ("y", None, Some("2"))])]
        });

        assert_eq!(lowered.ast.decl_count(), 1);
        let DeclKind::Var(var) = &lowered.ast[lowered.decl(0)].kind else {
            panic!("expected a variable");
        };
        assert!(var.is_let);
        assert!(!var.is_static);

        expect![[r#"
            var let x @1 static=false init=1
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_binding_without_initializer() {
        let lowered =
            lower_decls(|builder| vec![builder.var_decl(Keyword::Var, &[("y", Some("Int"), None)])]);

        let DeclKind::Var(var) = &lowered.ast[lowered.decl(0)].kind else {
            panic!("expected a variable");
        };
        assert!(!var.is_let);
        assert_eq!(var.initializer, None);
    }

    #[test]
    fn test_initializer_failability() {
        let lowered = lower_decls(|builder| {
            vec![builder.struct_decl("Box", |body| {
                vec![
                    body.init_decl(Some(TokenKind::ExclamationMark), &[], None),
                    body.init_decl(Some(TokenKind::PostfixQuestionMark), &[], None),
                    body.init_decl(None, &[("value", None, "Int")], Some(&empty_body)),
                ]
            })]
        });

        let members = lowered.ast.members(lowered.decl(0)).unwrap_or_default();
        let marks: Vec<_> = members
            .iter()
            .map(|member| match &lowered.ast[*member].kind {
                DeclKind::Constructor(constructor) => (
                    constructor.failability_loc.is_some(),
                    constructor.is_iuo,
                    constructor.body.is_some(),
                ),
                other => panic!("expected a constructor, found `{}`", other.name()),
            })
            .collect();
        assert_eq!(marks, [(true, true, false), (true, false, false), (false, false, true)]);
    }

    #[test]
    fn test_protocol_primary_associated_types() {
        let lowered = lower_decls(|builder| {
            vec![
                builder.protocol_decl("Plain", &[], |_| Vec::new()),
                builder.protocol_decl("Collection", &["Element", "Index"], |_| Vec::new()),
            ]
        });

        let primary_count = |index: usize| match &lowered.ast[lowered.decl(index)].kind {
            DeclKind::Protocol(protocol) => lowered.ast.array(protocol.primary_associated_types).len(),
            other => panic!("expected a protocol, found `{}`", other.name()),
        };
        assert_eq!(primary_count(0), 0);
        assert_eq!(primary_count(1), 2);
        assert!(lowered.dump().starts_with("protocol Plain @1 name=@10 braces=@16..@18 primary=[]\n"));
    }

    #[test]
    fn test_function_with_every_clause() {
        let lowered = lower_decls(|builder| vec![generic_function(builder)]);

        assert!(lowered.diagnostics.is_empty());
        expect![[r#"
            func map @1 name=@6 async=@37 throws=@43 -> T
              generic_params @9..@23
                generic_type_param T @11 index=0 : Equatable
              params @24..@35
                param _@25 value@27: T
              where @55 [T: Hashable]
              brace @73..@88
                return value @75
        "#]]
        .assert_eq(&lowered.dump());
    }

    #[test]
    fn test_function_without_body() {
        let lowered = lower_decls(|builder| vec![builder.func_decl("f", &[], Some("Int"), None)]);
        let decl = lowered.decl(0);
        assert_eq!(lowered.ast.body(decl), None);
        assert_eq!(lowered.ast.decls_in(DeclContext::Decl(decl)).count(), 0);
    }
}

//! Hand construction of syntax trees with real source positions
//!
//! Tokens are appended to a growing text buffer, so every token knows its
//! absolute byte offset and the finished tree prints back to exactly the
//! buffer contents. Node fields must be built in source order; Rust
//! evaluates struct literal fields in the order they are written, so
//! writing a node literal field by field is enough.

use crate::{
    ActorDeclSyntax, AssociatedTypeDeclSyntax, ClassDeclSyntax, DeinitializerDeclSyntax,
    InitializerDeclSyntax, PrimaryAssociatedTypeClauseSyntax, PrimaryAssociatedTypeSyntax,
    ProtocolDeclSyntax, CodeBlockItem, CodeBlockItemSyntax, CodeBlockSyntax,
    ConformanceRequirementSyntax, DeclSyntax, EnumCaseDeclSyntax, EnumCaseElementSyntax,
    EnumDeclSyntax, ExprSyntax, ExtensionDeclSyntax, FunctionDeclSyntax,
    FunctionParameterClauseSyntax, FunctionParameterSyntax, FunctionSignatureSyntax,
    GenericArgumentClauseSyntax, GenericArgumentSyntax, GenericParameterClauseSyntax,
    GenericParameterSyntax, GenericRequirementSyntax, GenericWhereClauseSyntax,
    IdentifierTypeSyntax, ImportDeclSyntax, ImportPathComponentSyntax, InheritanceClauseSyntax,
    InheritedTypeSyntax, InitializerClauseSyntax, Keyword, MemberBlockItemSyntax,
    MemberBlockSyntax, OperatorDeclSyntax, OperatorPrecedenceAndTypesSyntax,
    PatternBindingSyntax, PatternSyntax, RequirementSyntax, ReturnClauseSyntax,
    SourceFileSyntax, StructDeclSyntax, Token, TokenKind, Trivia, TriviaPiece,
    TypeAliasDeclSyntax, TypeAnnotationSyntax, TypeInitializerClauseSyntax, TypeSyntax,
    VariableDeclSyntax,
};
use std::mem;

/// Builds tokens and common node shapes in source order.
#[derive(Debug, Default)]
pub struct SyntaxBuilder {
    text: String,
    pending: Vec<TriviaPiece>,
    glued: bool,
}

impl SyntaxBuilder {
    /// Creates a builder with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Source text produced so far
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Starts the next token on a new line
    pub fn newline(&mut self) -> &mut Self {
        self.pending.push(TriviaPiece::Newlines(1));
        self
    }

    /// Puts a line comment and a newline before the next token
    pub fn line_comment(&mut self, comment: &str) -> &mut Self {
        self.pending.push(TriviaPiece::LineComment(format!("// {comment}")));
        self.pending.push(TriviaPiece::Newlines(1));
        self
    }

    /// Puts a block comment before the next token
    pub fn block_comment(&mut self, comment: &str) -> &mut Self {
        self.pending.push(TriviaPiece::BlockComment(format!("/* {comment} */")));
        self.pending.push(TriviaPiece::Spaces(1));
        self
    }

    /// Attaches the next token directly to the previous one
    pub fn glue(&mut self) -> &mut Self {
        self.glued = true;
        self
    }

    /// Appends a token of the given kind and spelling.
    ///
    /// Unless trivia was requested explicitly, tokens are separated by one
    /// space; the very first token and glued tokens get none.
    pub fn token(&mut self, kind: TokenKind, text: &str) -> Token {
        let leading_trivia = if !self.pending.is_empty() {
            Trivia {
                pieces: mem::take(&mut self.pending),
            }
        } else if self.text.is_empty() || self.glued {
            Trivia::none()
        } else {
            Trivia::spaces(1)
        };
        self.glued = false;

        let position = self.text.len() as u32;
        leading_trivia.write_to(&mut self.text);
        self.text.push_str(text);

        Token {
            kind,
            text: text.to_string(),
            leading_trivia,
            trailing_trivia: Trivia::none(),
            position,
        }
    }

    /// Appends a keyword
    pub fn keyword(&mut self, keyword: Keyword) -> Token {
        self.token(TokenKind::Keyword(keyword), &keyword.to_string())
    }

    /// Appends an identifier
    pub fn ident(&mut self, name: &str) -> Token {
        self.token(TokenKind::Identifier, name)
    }

    /// Appends `_`
    pub fn wildcard(&mut self) -> Token {
        self.token(TokenKind::Wildcard, "_")
    }

    /// Appends a token whose spelling follows from its kind.
    ///
    /// # Panics
    ///
    /// Panics if `kind` has no fixed spelling.
    #[allow(clippy::panic, reason = "only callers passing a fixed spelling kind are meaningful")]
    pub fn punct(&mut self, kind: TokenKind) -> Token {
        let Some(text) = kind.fixed_text() else {
            panic!("{kind} has no fixed spelling");
        };
        self.token(kind, text)
    }

    /// Appends a binary operator such as `==` or `<+>`
    pub fn binary_operator(&mut self, text: &str) -> Token {
        self.token(TokenKind::BinaryOperator, text)
    }

    /// Appends an integer literal
    pub fn int(&mut self, text: &str) -> Token {
        self.token(TokenKind::IntegerLiteral, text)
    }

    /// Appends a string literal, adding the quotes
    pub fn string(&mut self, contents: &str) -> Token {
        self.token(TokenKind::StringLiteral, &format!("\"{contents}\""))
    }

    /// Appends `,` unless `index` is the last of `count` elements
    pub fn separator(&mut self, index: usize, count: usize) -> Option<Token> {
        (index + 1 < count).then(|| self.glue().punct(TokenKind::Comma))
    }

    /// `Name`
    pub fn ident_type(&mut self, name: &str) -> TypeSyntax {
        TypeSyntax::Identifier(IdentifierTypeSyntax {
            name: self.ident(name),
            generic_argument_clause: None,
        })
    }

    /// `Name<A, B>`
    pub fn generic_type(&mut self, name: &str, arguments: &[&str]) -> TypeSyntax {
        let name = self.ident(name);
        let left_angle = self.glue().punct(TokenKind::LeftAngle);
        let arguments = arguments
            .iter()
            .enumerate()
            .map(|(index, argument)| GenericArgumentSyntax {
                argument: self.ident_type(argument),
                trailing_comma: self.separator(index, arguments.len()),
            })
            .collect();
        let right_angle = self.glue().punct(TokenKind::RightAngle);
        TypeSyntax::Identifier(IdentifierTypeSyntax {
            name,
            generic_argument_clause: Some(GenericArgumentClauseSyntax {
                left_angle,
                arguments,
                right_angle,
            }),
        })
    }

    /// `<A, B: P>` from `(name, inherited type)` pairs
    pub fn generic_parameter_clause(
        &mut self,
        parameters: &[(&str, Option<&str>)],
    ) -> GenericParameterClauseSyntax {
        let left_angle = self.glue().punct(TokenKind::LeftAngle);
        let parameters = parameters
            .iter()
            .enumerate()
            .map(|(index, (name, inherited))| {
                let name = self.ident(name);
                let (colon, inherited_type) = match inherited {
                    Some(inherited) => (
                        Some(self.glue().punct(TokenKind::Colon)),
                        Some(self.ident_type(inherited)),
                    ),
                    None => (None, None),
                };
                GenericParameterSyntax {
                    name,
                    colon,
                    inherited_type,
                    trailing_comma: self.separator(index, parameters.len()),
                }
            })
            .collect();
        let right_angle = self.glue().punct(TokenKind::RightAngle);
        GenericParameterClauseSyntax {
            left_angle,
            parameters,
            right_angle,
        }
    }

    /// `: A, B`
    pub fn inheritance_clause(&mut self, inherited: &[&str]) -> InheritanceClauseSyntax {
        let colon = self.glue().punct(TokenKind::Colon);
        let inherited_types = inherited
            .iter()
            .enumerate()
            .map(|(index, name)| InheritedTypeSyntax {
                ty: self.ident_type(name),
                trailing_comma: self.separator(index, inherited.len()),
            })
            .collect();
        InheritanceClauseSyntax {
            colon,
            inherited_types,
        }
    }

    /// `where A: P, B: Q` from `(constrained, requirement)` pairs
    pub fn where_clause(&mut self, conformances: &[(&str, &str)]) -> GenericWhereClauseSyntax {
        let where_keyword = self.keyword(Keyword::Where);
        let requirements = conformances
            .iter()
            .enumerate()
            .map(|(index, (left, right))| GenericRequirementSyntax {
                requirement: RequirementSyntax::Conformance(ConformanceRequirementSyntax {
                    left_type: self.ident_type(left),
                    colon: self.glue().punct(TokenKind::Colon),
                    right_type: self.ident_type(right),
                }),
                trailing_comma: self.separator(index, conformances.len()),
            })
            .collect();
        GenericWhereClauseSyntax {
            where_keyword,
            requirements,
        }
    }

    /// `{ members }`, each member on its own line
    pub fn member_block(
        &mut self,
        members: impl FnOnce(&mut Self) -> Vec<DeclSyntax>,
    ) -> MemberBlockSyntax {
        let left_brace = self.punct(TokenKind::LeftBrace);
        let members = members(self)
            .into_iter()
            .map(|decl| MemberBlockItemSyntax {
                decl,
                semicolon: None,
            })
            .collect();
        let right_brace = self.newline().punct(TokenKind::RightBrace);
        MemberBlockSyntax {
            left_brace,
            members,
            right_brace,
        }
    }

    /// `{ items }`, each item on its own line
    pub fn code_block(
        &mut self,
        items: impl FnOnce(&mut Self) -> Vec<CodeBlockItem>,
    ) -> CodeBlockSyntax {
        let left_brace = self.punct(TokenKind::LeftBrace);
        let statements = items(self)
            .into_iter()
            .map(|item| CodeBlockItemSyntax {
                item,
                semicolon: None,
            })
            .collect();
        let right_brace = self.newline().punct(TokenKind::RightBrace);
        CodeBlockSyntax {
            left_brace,
            statements,
            right_brace,
        }
    }

    /// `(label name: Type, ...)` from `(first name, second name, type)`
    /// triples; a first name of `_` becomes a wildcard token
    pub fn parameter_clause(
        &mut self,
        parameters: &[(&str, Option<&str>, &str)],
    ) -> FunctionParameterClauseSyntax {
        let left_paren = self.glue().punct(TokenKind::LeftParen);
        let parameters = parameters
            .iter()
            .enumerate()
            .map(|(index, (first, second, ty))| {
                let first_name = match *first {
                    "_" => self.glue().wildcard(),
                    first => self.glue().ident(first),
                };
                FunctionParameterSyntax {
                    first_name,
                    second_name: second.map(|second| self.ident(second)),
                    colon: self.glue().punct(TokenKind::Colon),
                    ty: self.ident_type(ty),
                    default_value: None,
                    trailing_comma: self.separator(index, parameters.len()),
                }
            })
            .collect();
        let right_paren = self.glue().punct(TokenKind::RightParen);
        FunctionParameterClauseSyntax {
            left_paren,
            parameters,
            right_paren,
        }
    }

    /// `(params) -> Result` without effects
    pub fn signature(
        &mut self,
        parameters: &[(&str, Option<&str>, &str)],
        result: Option<&str>,
    ) -> FunctionSignatureSyntax {
        FunctionSignatureSyntax {
            parameter_clause: self.parameter_clause(parameters),
            effect_specifiers: None,
            return_clause: result.map(|result| ReturnClauseSyntax {
                arrow: self.punct(TokenKind::Arrow),
                ty: self.ident_type(result),
            }),
        }
    }

    /// Integer literal expression
    pub fn int_expr(&mut self, text: &str) -> ExprSyntax {
        ExprSyntax::IntegerLiteral(self.int(text))
    }

    /// Reference to a declaration by name
    pub fn decl_ref(&mut self, name: &str) -> ExprSyntax {
        ExprSyntax::DeclReference(self.ident(name))
    }

    /// `typealias Name = Type` on a new line
    pub fn typealias_decl(&mut self, name: &str, aliased: &str) -> DeclSyntax {
        self.start_line();
        DeclSyntax::TypeAlias(TypeAliasDeclSyntax {
            typealias_keyword: self.keyword(Keyword::Typealias),
            name: self.ident(name),
            generic_parameter_clause: None,
            initializer: TypeInitializerClauseSyntax {
                equal: self.punct(TokenKind::Equal),
                value: self.ident_type(aliased),
            },
            generic_where_clause: None,
        })
    }

    /// `struct Name { members }` on a new line
    pub fn struct_decl(
        &mut self,
        name: &str,
        members: impl FnOnce(&mut Self) -> Vec<DeclSyntax>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Struct(StructDeclSyntax {
            struct_keyword: self.keyword(Keyword::Struct),
            name: self.ident(name),
            generic_parameter_clause: None,
            inheritance_clause: None,
            generic_where_clause: None,
            member_block: self.member_block(members),
        })
    }

    /// `class Name: Inherited { members }` on a new line
    pub fn class_decl(
        &mut self,
        name: &str,
        inherited: &[&str],
        members: impl FnOnce(&mut Self) -> Vec<DeclSyntax>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Class(ClassDeclSyntax {
            class_keyword: self.keyword(Keyword::Class),
            name: self.ident(name),
            generic_parameter_clause: None,
            inheritance_clause: (!inherited.is_empty())
                .then(|| self.inheritance_clause(inherited)),
            generic_where_clause: None,
            member_block: self.member_block(members),
        })
    }

    /// `enum Name: Inherited { members }` on a new line
    pub fn enum_decl(
        &mut self,
        name: &str,
        inherited: &[&str],
        members: impl FnOnce(&mut Self) -> Vec<DeclSyntax>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Enum(EnumDeclSyntax {
            enum_keyword: self.keyword(Keyword::Enum),
            name: self.ident(name),
            generic_parameter_clause: None,
            inheritance_clause: (!inherited.is_empty())
                .then(|| self.inheritance_clause(inherited)),
            generic_where_clause: None,
            member_block: self.member_block(members),
        })
    }

    /// `actor Name { members }` on a new line
    pub fn actor_decl(
        &mut self,
        name: &str,
        members: impl FnOnce(&mut Self) -> Vec<DeclSyntax>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Actor(ActorDeclSyntax {
            actor_keyword: self.keyword(Keyword::Actor),
            name: self.ident(name),
            generic_parameter_clause: None,
            inheritance_clause: None,
            generic_where_clause: None,
            member_block: self.member_block(members),
        })
    }

    /// `protocol Name<Primary> { members }` on a new line; no angle
    /// brackets are written when `primary` is empty
    pub fn protocol_decl(
        &mut self,
        name: &str,
        primary: &[&str],
        members: impl FnOnce(&mut Self) -> Vec<DeclSyntax>,
    ) -> DeclSyntax {
        self.start_line();
        let protocol_keyword = self.keyword(Keyword::Protocol);
        let name = self.ident(name);
        let primary_associated_type_clause = (!primary.is_empty()).then(|| {
            let left_angle = self.glue().punct(TokenKind::LeftAngle);
            let primary_associated_types = primary
                .iter()
                .enumerate()
                .map(|(index, primary_name)| PrimaryAssociatedTypeSyntax {
                    name: if index == 0 {
                        self.glue().ident(primary_name)
                    } else {
                        self.ident(primary_name)
                    },
                    trailing_comma: self.separator(index, primary.len()),
                })
                .collect();
            PrimaryAssociatedTypeClauseSyntax {
                left_angle,
                primary_associated_types,
                right_angle: self.glue().punct(TokenKind::RightAngle),
            }
        });
        DeclSyntax::Protocol(ProtocolDeclSyntax {
            protocol_keyword,
            name,
            primary_associated_type_clause,
            inheritance_clause: None,
            generic_where_clause: None,
            member_block: self.member_block(members),
        })
    }

    /// `associatedtype Name` on a new line
    pub fn associatedtype_decl(&mut self, name: &str) -> DeclSyntax {
        self.start_line();
        DeclSyntax::AssociatedType(AssociatedTypeDeclSyntax {
            associatedtype_keyword: self.keyword(Keyword::Associatedtype),
            name: self.ident(name),
            inheritance_clause: None,
            initializer: None,
            generic_where_clause: None,
        })
    }

    /// `init(params) { body }` on a new line; `mark` is the optional `?` or
    /// `!` glued to `init`
    pub fn init_decl(
        &mut self,
        mark: Option<TokenKind>,
        parameters: &[(&str, Option<&str>, &str)],
        body: Option<&dyn Fn(&mut Self) -> Vec<CodeBlockItem>>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Initializer(InitializerDeclSyntax {
            init_keyword: self.keyword(Keyword::Init),
            optional_mark: mark.map(|kind| self.glue().punct(kind)),
            generic_parameter_clause: None,
            signature: self.signature(parameters, None),
            generic_where_clause: None,
            body: body.map(|body| self.code_block(body)),
        })
    }

    /// `deinit { body }` on a new line
    pub fn deinit_decl(
        &mut self,
        body: Option<&dyn Fn(&mut Self) -> Vec<CodeBlockItem>>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Deinitializer(DeinitializerDeclSyntax {
            deinit_keyword: self.keyword(Keyword::Deinit),
            body: body.map(|body| self.code_block(body)),
        })
    }

    /// `extension Type { members }` on a new line
    pub fn extension_decl(
        &mut self,
        extended: &str,
        members: impl FnOnce(&mut Self) -> Vec<DeclSyntax>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Extension(ExtensionDeclSyntax {
            extension_keyword: self.keyword(Keyword::Extension),
            extended_type: self.ident_type(extended),
            inheritance_clause: None,
            generic_where_clause: None,
            member_block: self.member_block(members),
        })
    }

    /// `case a, b = 1` from `(name, raw value)` pairs, on a new line
    pub fn case_decl(&mut self, elements: &[(&str, Option<&str>)]) -> DeclSyntax {
        self.start_line();
        let case_keyword = self.keyword(Keyword::Case);
        let elements = elements
            .iter()
            .enumerate()
            .map(|(index, (name, raw_value))| EnumCaseElementSyntax {
                name: self.ident(name),
                parameter_clause: None,
                raw_value: raw_value.map(|raw_value| InitializerClauseSyntax {
                    equal: self.punct(TokenKind::Equal),
                    value: self.int_expr(raw_value),
                }),
                trailing_comma: self.separator(index, elements.len()),
            })
            .collect();
        DeclSyntax::EnumCase(EnumCaseDeclSyntax {
            case_keyword,
            elements,
        })
    }

    /// `let a: T = 1, b = 2` from `(name, type, integer initializer)`
    /// triples, on a new line
    pub fn var_decl(
        &mut self,
        specifier: Keyword,
        bindings: &[(&str, Option<&str>, Option<&str>)],
    ) -> DeclSyntax {
        self.start_line();
        let binding_specifier = self.keyword(specifier);
        let bindings = bindings
            .iter()
            .enumerate()
            .map(|(index, (name, ty, value))| PatternBindingSyntax {
                pattern: PatternSyntax::Identifier(self.ident(name)),
                type_annotation: ty.map(|ty| TypeAnnotationSyntax {
                    colon: self.glue().punct(TokenKind::Colon),
                    ty: self.ident_type(ty),
                }),
                initializer: value.map(|value| InitializerClauseSyntax {
                    equal: self.punct(TokenKind::Equal),
                    value: self.int_expr(value),
                }),
                trailing_comma: self.separator(index, bindings.len()),
            })
            .collect();
        DeclSyntax::Variable(VariableDeclSyntax {
            modifiers: Vec::new(),
            binding_specifier,
            bindings,
        })
    }

    /// `func name(params) -> Result { body }` on a new line
    pub fn func_decl(
        &mut self,
        name: &str,
        parameters: &[(&str, Option<&str>, &str)],
        result: Option<&str>,
        body: Option<&dyn Fn(&mut Self) -> Vec<CodeBlockItem>>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Function(FunctionDeclSyntax {
            modifiers: Vec::new(),
            func_keyword: self.keyword(Keyword::Func),
            name: self.ident(name),
            generic_parameter_clause: None,
            signature: self.signature(parameters, result),
            generic_where_clause: None,
            body: body.map(|body| self.code_block(body)),
        })
    }

    /// `import kind A.B` on a new line
    pub fn import_decl(&mut self, kind: Option<Keyword>, path: &[&str]) -> DeclSyntax {
        self.start_line();
        let import_keyword = self.keyword(Keyword::Import);
        let import_kind_specifier = kind.map(|kind| self.keyword(kind));
        let path = path
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = if index == 0 {
                    self.ident(name)
                } else {
                    self.glue().ident(name)
                };
                ImportPathComponentSyntax {
                    name,
                    trailing_period: (index + 1 < path.len())
                        .then(|| self.glue().punct(TokenKind::Period)),
                }
            })
            .collect();
        DeclSyntax::Import(ImportDeclSyntax {
            import_keyword,
            import_kind_specifier,
            path,
        })
    }

    /// `fixity operator name : Group` on a new line; `fixity` is whatever
    /// token the caller wants in specifier position
    pub fn operator_decl(
        &mut self,
        fixity: TokenKind,
        fixity_text: &str,
        name: &str,
        group: Option<&str>,
    ) -> DeclSyntax {
        self.start_line();
        DeclSyntax::Operator(OperatorDeclSyntax {
            fixity_specifier: self.token(fixity, fixity_text),
            operator_keyword: self.keyword(Keyword::Operator),
            name: self.binary_operator(name),
            operator_precedence_and_types: group.map(|group| OperatorPrecedenceAndTypesSyntax {
                colon: self.punct(TokenKind::Colon),
                precedence_group: self.ident(group),
            }),
        })
    }

    /// Wraps declarations as code block items
    pub fn decl_items(decls: Vec<DeclSyntax>) -> Vec<CodeBlockItem> {
        decls.into_iter().map(CodeBlockItem::Decl).collect()
    }

    /// Closes the buffer with an end of file token and wraps `items` as the
    /// top level of a source file
    pub fn finish(mut self, items: Vec<CodeBlockItem>) -> SourceFileSyntax {
        self.newline();
        self.glued = true;
        let end_of_file = self.token(TokenKind::EndOfFile, "");
        SourceFileSyntax {
            statements: items
                .into_iter()
                .map(|item| CodeBlockItemSyntax {
                    item,
                    semicolon: None,
                })
                .collect(),
            end_of_file,
        }
    }

    fn start_line(&mut self) {
        if !self.text.is_empty() && self.pending.is_empty() {
            self.newline();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Syntax as _;

    #[test]
    fn test_tokens_carry_buffer_offsets() {
        let mut builder = SyntaxBuilder::new();
        let first = builder.keyword(Keyword::Struct);
        let second = builder.ident("Point");
        let third = builder.newline().punct(TokenKind::LeftBrace);

        assert_eq!(first.position, 0);
        assert_eq!(first.position_after_leading_trivia(), 0);
        assert_eq!(second.position, 6);
        assert_eq!(second.position_after_leading_trivia(), 7);
        assert_eq!(third.position_after_leading_trivia(), 13);
        assert_eq!(builder.text(), "struct Point\n{");
    }

    #[test]
    fn test_finished_tree_prints_back_to_buffer() {
        let mut builder = SyntaxBuilder::new();
        let decls = vec![
            builder.import_decl(Some(Keyword::Struct), &["Foundation", "Data"]),
            builder.struct_decl("Point", |b| {
                vec![
                    b.var_decl(Keyword::Let, &[("x", Some("Int"), None)]),
                    b.var_decl(Keyword::Var, &[("y", None, Some("0"))]),
                ]
            }),
        ];
        builder.line_comment("trailing");
        let text = builder.text().to_string();
        let file = builder.finish(SyntaxBuilder::decl_items(decls));

        assert!(file.source_text().starts_with(&text));
        assert_eq!(
            file.source_text(),
            "import struct Foundation.Data\nstruct Point {\nlet x: Int\nvar y = 0\n}// trailing\n\n"
        );
    }

    #[test]
    fn test_node_span_excludes_trivia() {
        let mut builder = SyntaxBuilder::new();
        builder.ident("padding");
        let decl = builder.typealias_decl("Alias", "Int");
        assert_eq!(decl.first_token().map(|token| token.text.as_str()), Some("typealias"));
        assert_eq!(decl.span().map(|span| span.start), Some(8));
        assert_eq!(decl.last_token().map(|token| token.text.as_str()), Some("Int"));
    }
}

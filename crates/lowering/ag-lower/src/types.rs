//! Type lowering

use crate::{AstGen, Lower};
use ag_ast::{TypeRepr, TypeReprId};
use ag_syntax::{GenericArgumentSyntax, TypeSyntax};

impl Lower for TypeSyntax {
    type Output = TypeReprId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> TypeReprId {
        let repr = match self {
            Self::Identifier(node) => {
                let (name, name_loc) = astgen.identifier_and_loc(&node.name);
                let generic_args = node.generic_argument_clause.as_ref().map(|clause| {
                    let arguments = astgen.lower_list(&clause.arguments);
                    (arguments, astgen.range(&clause.left_angle, &clause.right_angle))
                });
                TypeRepr::Ident {
                    name,
                    name_loc,
                    generic_args,
                }
            }
            Self::Member(node) => {
                let base = astgen.visit(&node.base);
                let (name, name_loc) = astgen.identifier_and_loc(&node.name);
                TypeRepr::Member {
                    base,
                    name,
                    name_loc,
                }
            }
            Self::Optional(node) => TypeRepr::Optional {
                wrapped: astgen.visit(&node.wrapped),
                question_loc: astgen.loc(&node.question_mark),
            },
            Self::Array(node) => TypeRepr::Array {
                element: astgen.visit(&node.element),
                brackets: astgen.range(&node.left_square, &node.right_square),
            },
            Self::Tuple(node) => TypeRepr::Tuple {
                elements: astgen.lower_list(node.elements.iter().map(|element| &element.ty)),
                parens: astgen.range(&node.left_paren, &node.right_paren),
            },
        };
        astgen.ast.alloc_type_repr(repr)
    }
}

impl Lower for GenericArgumentSyntax {
    type Output = TypeReprId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> TypeReprId {
        astgen.visit(&self.argument)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::lower_with;
    use ag_ast::TypeRepr;
    use ag_syntax::{
        ArrayTypeSyntax, MemberTypeSyntax, OptionalTypeSyntax, TokenKind, TupleTypeElementSyntax,
        TupleTypeSyntax, TypeSyntax,
    };

    #[test]
    fn test_generic_identifier_type() {
        let lowered = lower_with(|builder| builder.generic_type("Dictionary", &["String", "Int"]));
        assert_eq!(lowered.render(), "Dictionary<String, Int>");

        let TypeRepr::Ident {
            name_loc,
            generic_args: Some((arguments, angles)),
            ..
        } = &lowered.ast[lowered.output]
        else {
            panic!("expected a generic identifier type");
        };
        assert_eq!(*name_loc, lowered.file.loc(0));
        assert_eq!(lowered.ast.array(*arguments).len(), 2);
        assert_eq!(angles.start, lowered.file.loc(10));
        assert_eq!(angles.end, lowered.file.loc(23));
    }

    #[test]
    fn test_composite_types() {
        let lowered = lower_with(|builder| {
            let left_paren = builder.punct(TokenKind::LeftParen);
            let first = TupleTypeElementSyntax {
                ty: TypeSyntax::Optional(OptionalTypeSyntax {
                    wrapped: Box::new(TypeSyntax::Member(MemberTypeSyntax {
                        base: Box::new(builder.ident_type("Swift")),
                        period: builder.glue().punct(TokenKind::Period),
                        name: builder.glue().ident("Int"),
                    })),
                    question_mark: builder.glue().punct(TokenKind::PostfixQuestionMark),
                }),
                trailing_comma: Some(builder.glue().punct(TokenKind::Comma)),
            };
            let second = TupleTypeElementSyntax {
                ty: TypeSyntax::Array(ArrayTypeSyntax {
                    left_square: builder.punct(TokenKind::LeftSquare),
                    element: Box::new(builder.glue().ident_type("String")),
                    right_square: builder.glue().punct(TokenKind::RightSquare),
                }),
                trailing_comma: None,
            };
            TypeSyntax::Tuple(TupleTypeSyntax {
                left_paren,
                elements: vec![first, second],
                right_paren: builder.glue().punct(TokenKind::RightParen),
            })
        });
        assert_eq!(lowered.render(), "(Swift.Int?, [String])");
    }
}

//! Function, initializer and enum case parameter lists

use crate::{AstGen, Lower};
use ag_ast::{DeclId, DeclKind, ParamDecl, ParameterList, ParameterListId};
use ag_intern::Identifier;
use ag_syntax::{
    EnumCaseParameterClauseSyntax, EnumCaseParameterSyntax, FunctionParameterClauseSyntax,
    FunctionParameterSyntax, Token,
};

impl Lower for FunctionParameterClauseSyntax {
    type Output = ParameterListId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> ParameterListId {
        let list = ParameterList {
            left_paren_loc: astgen.loc(&self.left_paren),
            params: astgen.lower_list(&self.parameters),
            right_paren_loc: astgen.loc(&self.right_paren),
        };
        astgen.ast.alloc_params(list)
    }
}

/// `label name: Type = default`. Without a second name the first name is
/// both the argument label and the parameter name.
impl Lower for FunctionParameterSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let param_token = self.second_name.as_ref().unwrap_or(&self.first_name);
        let kind = DeclKind::Param(ParamDecl {
            argument_name: astgen.identifier(&self.first_name),
            argument_name_loc: Some(astgen.loc(&self.first_name)),
            param_name: astgen.identifier(param_token),
            param_name_loc: Some(astgen.loc(param_token)),
            type_repr: astgen.visit(&self.ty),
            default_value: astgen.visit(&self.default_value),
        });
        astgen.alloc_decl(kind)
    }
}

impl Lower for EnumCaseParameterClauseSyntax {
    type Output = ParameterListId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> ParameterListId {
        let list = ParameterList {
            left_paren_loc: astgen.loc(&self.left_paren),
            params: astgen.lower_list(&self.parameters),
            right_paren_loc: astgen.loc(&self.right_paren),
        };
        astgen.ast.alloc_params(list)
    }
}

/// Associated values may be unnamed, so every name is optional here
impl Lower for EnumCaseParameterSyntax {
    type Output = DeclId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> DeclId {
        let param_token = self.second_name.as_ref().or(self.first_name.as_ref());
        let kind = DeclKind::Param(ParamDecl {
            argument_name: optional_identifier(astgen, self.first_name.as_ref()),
            argument_name_loc: astgen.loc_opt(self.first_name.as_ref()),
            param_name: optional_identifier(astgen, param_token),
            param_name_loc: astgen.loc_opt(param_token),
            type_repr: astgen.visit(&self.ty),
            default_value: astgen.visit(&self.default_value),
        });
        astgen.alloc_decl(kind)
    }
}

fn optional_identifier(astgen: &AstGen<'_>, token: Option<&Token>) -> Option<Identifier> {
    token.and_then(|token| astgen.identifier(token))
}

#[cfg(test)]
mod tests {
    use crate::test_support::lower_with;
    use ag_ast::{DeclKind, ParamDecl};
    use ag_syntax::{
        EnumCaseParameterClauseSyntax, EnumCaseParameterSyntax, InitializerClauseSyntax,
        TokenKind,
    };

    fn param(kind: &DeclKind) -> &ParamDecl {
        match kind {
            DeclKind::Param(param) => param,
            other => panic!("expected a parameter, found `{}`", other.name()),
        }
    }

    #[test]
    fn test_function_parameter_names() {
        let lowered = lower_with(|builder| {
            builder.parameter_clause(&[
                ("_", Some("x"), "Int"),
                ("label", Some("y"), "String"),
                ("z", None, "Bool"),
            ])
        });

        let list = &lowered.ast[lowered.output];
        assert_eq!(list.left_paren_loc, lowered.file.loc(0));
        let params = lowered.ast.array(list.params);
        assert_eq!(params.len(), 3);

        let unlabeled = param(&lowered.ast[params[0]].kind);
        assert_eq!(unlabeled.argument_name, None);
        assert_eq!(unlabeled.argument_name_loc, Some(lowered.file.loc(1)));
        assert_eq!(unlabeled.param_name_loc, Some(lowered.file.loc(3)));
        assert_eq!(lowered.name(params[0]), Some("x"));

        let labeled = param(&lowered.ast[params[1]].kind);
        let label = labeled.argument_name.map(|name| lowered.interner.resolve(&name));
        assert_eq!(label, Some("label"));
        assert_eq!(lowered.name(params[1]), Some("y"));

        let single = param(&lowered.ast[params[2]].kind);
        assert_eq!(single.argument_name, single.param_name);
        assert_eq!(single.argument_name_loc, single.param_name_loc);
    }

    #[test]
    fn test_enum_case_parameters() {
        let lowered = lower_with(|builder| {
            let left_paren = builder.punct(TokenKind::LeftParen);
            let unnamed = EnumCaseParameterSyntax {
                first_name: None,
                second_name: None,
                colon: None,
                ty: builder.glue().ident_type("Int"),
                default_value: None,
                trailing_comma: Some(builder.glue().punct(TokenKind::Comma)),
            };
            let named = EnumCaseParameterSyntax {
                first_name: Some(builder.ident("count")),
                second_name: None,
                colon: Some(builder.glue().punct(TokenKind::Colon)),
                ty: builder.ident_type("Int"),
                default_value: Some(InitializerClauseSyntax {
                    equal: builder.punct(TokenKind::Equal),
                    value: builder.int_expr("1"),
                }),
                trailing_comma: None,
            };
            EnumCaseParameterClauseSyntax {
                left_paren,
                parameters: vec![unnamed, named],
                right_paren: builder.glue().punct(TokenKind::RightParen),
            }
        });

        let params = lowered.ast.array(lowered.ast[lowered.output].params);
        let unnamed = param(&lowered.ast[params[0]].kind);
        assert_eq!(unnamed.argument_name, None);
        assert_eq!(unnamed.param_name, None);
        assert_eq!(unnamed.argument_name_loc, None);

        let named = param(&lowered.ast[params[1]].kind);
        assert_eq!(lowered.name(params[1]), Some("count"));
        assert_eq!(named.param_name_loc, Some(lowered.file.loc(6)));
        assert!(named.default_value.is_some());
    }
}

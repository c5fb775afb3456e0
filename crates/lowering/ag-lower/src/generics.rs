//! Generic parameter lists, inheritance clauses and where clauses

use crate::{AstGen, Lower};
use ag_arena::ArrayRef;
use ag_ast::{
    DeclKind, GenericParamList, GenericParamListId, GenericTypeParamDecl, RequirementKind,
    RequirementRepr, TrailingWhereClause, TypeReprId, WhereClauseId,
};
use ag_syntax::{
    GenericParameterClauseSyntax, GenericRequirementSyntax, GenericWhereClauseSyntax,
    InheritanceClauseSyntax, InheritedTypeSyntax, RequirementSyntax,
};

/// Each parameter becomes a generic type parameter declaration in the
/// current context, numbered by its position in the list.
impl Lower for GenericParameterClauseSyntax {
    type Output = GenericParamListId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> GenericParamListId {
        let mut params = Vec::with_capacity(self.parameters.len());
        for (index, parameter) in (0_u32..).zip(&self.parameters) {
            let (name, name_loc) = astgen.identifier_and_loc(&parameter.name);
            let inherited = astgen.visit(&parameter.inherited_type);
            params.push(astgen.alloc_decl(DeclKind::GenericTypeParam(GenericTypeParamDecl {
                name,
                name_loc,
                index,
                inherited,
            })));
        }

        let list = GenericParamList {
            left_angle_loc: astgen.loc(&self.left_angle),
            params: astgen.bridged_array(params),
            right_angle_loc: astgen.loc(&self.right_angle),
        };
        astgen.ast.alloc_generic_params(list)
    }
}

impl Lower for InheritanceClauseSyntax {
    type Output = ArrayRef<TypeReprId>;

    fn lower(&self, astgen: &mut AstGen<'_>) -> ArrayRef<TypeReprId> {
        astgen.lower_list(&self.inherited_types)
    }
}

impl Lower for InheritedTypeSyntax {
    type Output = TypeReprId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> TypeReprId {
        astgen.visit(&self.ty)
    }
}

impl Lower for GenericWhereClauseSyntax {
    type Output = WhereClauseId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> WhereClauseId {
        let clause = TrailingWhereClause {
            where_loc: astgen.loc(&self.where_keyword),
            requirements: astgen.lower_list(&self.requirements),
        };
        astgen.ast.alloc_where_clause(clause)
    }
}

impl Lower for GenericRequirementSyntax {
    type Output = RequirementRepr;

    fn lower(&self, astgen: &mut AstGen<'_>) -> RequirementRepr {
        let (kind, left, separator, right) = match &self.requirement {
            RequirementSyntax::Conformance(node) => (
                RequirementKind::Conformance,
                &node.left_type,
                &node.colon,
                &node.right_type,
            ),
            RequirementSyntax::SameType(node) => (
                RequirementKind::SameType,
                &node.left_type,
                &node.equal,
                &node.right_type,
            ),
        };
        RequirementRepr {
            kind,
            first: astgen.visit(left),
            separator_loc: astgen.loc(separator),
            second: astgen.visit(right),
        }
    }
}

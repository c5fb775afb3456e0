//! Pattern lowering

use crate::{AstGen, Lower};
use ag_ast::{Pattern, PatternId};
use ag_syntax::{PatternSyntax, TuplePatternElementSyntax};

impl Lower for PatternSyntax {
    type Output = PatternId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> PatternId {
        let pattern = match self {
            Self::Identifier(token) => {
                let (name, loc) = astgen.identifier_and_loc(token);
                Pattern::Named { name, loc }
            }
            Self::Wildcard(token) => Pattern::Any {
                loc: astgen.loc(token),
            },
            Self::Tuple(node) => Pattern::Tuple {
                elements: astgen.lower_list(&node.elements),
                parens: astgen.range(&node.left_paren, &node.right_paren),
            },
        };
        astgen.ast.alloc_pattern(pattern)
    }
}

impl Lower for TuplePatternElementSyntax {
    type Output = PatternId;

    fn lower(&self, astgen: &mut AstGen<'_>) -> PatternId {
        astgen.visit(&self.pattern)
    }
}

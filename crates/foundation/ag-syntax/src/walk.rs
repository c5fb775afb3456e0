//! Uniform token traversal over every syntax node

use crate::Token;
use ag_span::Span;

/// Implemented by every node of the syntax tree.
///
/// The only required method visits the node's tokens in source order;
/// everything else (positions, source text) is derived from that.
pub trait Syntax {
    /// Calls `visit` for every token of the node, in source order
    fn walk_tokens<'tree>(&'tree self, visit: &mut dyn FnMut(&'tree Token));

    /// First token of the node, if it has any
    fn first_token(&self) -> Option<&Token> {
        let mut first = None;
        self.walk_tokens(&mut |token| {
            if first.is_none() {
                first = Some(token);
            }
        });
        first
    }

    /// Last token of the node, if it has any
    fn last_token(&self) -> Option<&Token> {
        let mut last = None;
        self.walk_tokens(&mut |token| last = Some(token));
        last
    }

    /// Span from the start of the first token's text to the end of the last
    /// token's text, trivia at both ends excluded
    fn span(&self) -> Option<Span> {
        let first = self.first_token()?;
        let last = self.last_token()?;
        Some(Span::new(first.span().start, last.span().end))
    }

    /// Exact source text of the node, trivia included
    fn source_text(&self) -> String {
        let mut text = String::new();
        self.walk_tokens(&mut |token| token.write_to(&mut text));
        text
    }
}

impl Syntax for Token {
    fn walk_tokens<'tree>(&'tree self, visit: &mut dyn FnMut(&'tree Token)) {
        visit(self);
    }
}

impl<T: Syntax> Syntax for Option<T> {
    fn walk_tokens<'tree>(&'tree self, visit: &mut dyn FnMut(&'tree Token)) {
        if let Some(node) = self {
            node.walk_tokens(visit);
        }
    }
}

impl<T: Syntax> Syntax for Vec<T> {
    fn walk_tokens<'tree>(&'tree self, visit: &mut dyn FnMut(&'tree Token)) {
        for node in self {
            node.walk_tokens(visit);
        }
    }
}

impl<T: Syntax> Syntax for Box<T> {
    fn walk_tokens<'tree>(&'tree self, visit: &mut dyn FnMut(&'tree Token)) {
        (**self).walk_tokens(visit);
    }
}

/// Implements [`Syntax`] for a struct by walking the listed fields in order.
/// The fields must be listed in source order.
macro_rules! syntax_struct {
    ($name:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Syntax for $name {
            fn walk_tokens<'tree>(
                &'tree self,
                visit: &mut dyn FnMut(&'tree $crate::Token),
            ) {
                $( $crate::Syntax::walk_tokens(&self.$field, visit); )*
            }
        }
    };
}

/// Implements [`Syntax`] for an enum whose variants each wrap one node
macro_rules! syntax_enum {
    ($name:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::Syntax for $name {
            fn walk_tokens<'tree>(
                &'tree self,
                visit: &mut dyn FnMut(&'tree $crate::Token),
            ) {
                match self {
                    $( Self::$variant(node) => $crate::Syntax::walk_tokens(node, visit), )*
                }
            }
        }
    };
}

pub(crate) use {syntax_enum, syntax_struct};

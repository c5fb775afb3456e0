//! Owner of every node of one lowered file

use crate::{
    AstNode, CallArgument, Decl, DeclContext, DeclId, DeclKind, Expr, ExprId, GenericParamList,
    GenericParamListId, LocatedIdentifier, ParameterList, ParameterListId, Pattern, PatternId,
    RequirementRepr, Stmt, StmtId, TrailingWhereClause, TypeRepr, TypeReprId, WhereClauseId,
};
use ag_arena::{Arena, ArrayArena, ArrayRef};
use rustc_hash::FxHashMap;
use std::ops::Index;

/// Element types that can be frozen into an array owned by an [`AstContext`]
pub trait ArrayElement: Sized {
    /// The arena holding arrays of this element type
    fn arena(arrays: &Arrays) -> &ArrayArena<Self>;
    /// Mutable access to the arena holding arrays of this element type
    fn arena_mut(arrays: &mut Arrays) -> &mut ArrayArena<Self>;
}

macro_rules! array_elements {
    ($($field:ident: $ty:ty),* $(,)?) => {
        /// One [`ArrayArena`] per bridged element type
        #[derive(Debug, Default)]
        pub struct Arrays {
            $($field: ArrayArena<$ty>,)*
        }

        $(
            impl ArrayElement for $ty {
                fn arena(arrays: &Arrays) -> &ArrayArena<Self> {
                    &arrays.$field
                }

                fn arena_mut(arrays: &mut Arrays) -> &mut ArrayArena<Self> {
                    &mut arrays.$field
                }
            }
        )*
    };
}

array_elements! {
    decls: DeclId,
    nodes: AstNode,
    type_reprs: TypeReprId,
    identifiers: LocatedIdentifier,
    requirements: RequirementRepr,
    arguments: CallArgument,
    patterns: PatternId,
}

/// Arena-backed storage for the AST of one file.
///
/// Nodes are created once and never removed. The only mutations after
/// creation are attaching parsed members to an iterable declaration and
/// attaching a body to a function-like declaration.
#[derive(Debug, Default)]
pub struct AstContext {
    decls: Arena<Decl>,
    type_reprs: Arena<TypeRepr>,
    exprs: Arena<Expr>,
    stmts: Arena<Stmt>,
    patterns: Arena<Pattern>,
    generic_params: Arena<GenericParamList>,
    params: Arena<ParameterList>,
    where_clauses: Arena<TrailingWhereClause>,
    arrays: Arrays,
    by_context: FxHashMap<DeclContext, Vec<DeclId>>,
}

impl AstContext {
    /// Creates an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a declaration registered in `context`
    pub fn alloc_decl(&mut self, context: DeclContext, kind: DeclKind) -> DeclId {
        let id = self.decls.alloc(Decl { context, kind });
        self.by_context.entry(context).or_default().push(id);
        id
    }

    /// Allocates a type representation
    pub fn alloc_type_repr(&mut self, repr: TypeRepr) -> TypeReprId {
        self.type_reprs.alloc(repr)
    }

    /// Allocates an expression
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        self.exprs.alloc(expr)
    }

    /// Allocates a statement
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        self.stmts.alloc(stmt)
    }

    /// Allocates a pattern
    pub fn alloc_pattern(&mut self, pattern: Pattern) -> PatternId {
        self.patterns.alloc(pattern)
    }

    /// Allocates a generic parameter list
    pub fn alloc_generic_params(&mut self, list: GenericParamList) -> GenericParamListId {
        self.generic_params.alloc(list)
    }

    /// Allocates a parameter list
    pub fn alloc_params(&mut self, list: ParameterList) -> ParameterListId {
        self.params.alloc(list)
    }

    /// Allocates a trailing where clause
    pub fn alloc_where_clause(&mut self, clause: TrailingWhereClause) -> WhereClauseId {
        self.where_clauses.alloc(clause)
    }

    /// Freezes `items` into an array owned by this context, keeping their
    /// order
    pub fn alloc_array<T, I>(&mut self, items: I) -> ArrayRef<T>
    where
        T: ArrayElement,
        I: IntoIterator<Item = T>,
    {
        T::arena_mut(&mut self.arrays).alloc(items)
    }

    /// Elements of an array owned by this context
    pub fn array<T: ArrayElement>(&self, array: ArrayRef<T>) -> &[T] {
        T::arena(&self.arrays).get(array)
    }

    /// Attaches the member list of an enum, struct, class, actor, protocol
    /// or extension.
    ///
    /// # Panics
    ///
    /// Panics if the declaration cannot have members or already has them.
    #[allow(clippy::panic, reason = "attaching members to a kind without a member list is a contract violation")]
    pub fn set_parsed_members(&mut self, decl: DeclId, members: ArrayRef<DeclId>) {
        let slot = match &mut self.decls[decl].kind {
            DeclKind::Enum(nominal) | DeclKind::Struct(nominal) => &mut nominal.members,
            DeclKind::Class(class) => &mut class.nominal.members,
            DeclKind::Protocol(protocol) => &mut protocol.nominal.members,
            DeclKind::Extension(extension) => &mut extension.members,
            other => panic!("`{}` declarations have no member list", other.name()),
        };
        assert!(slot.is_none(), "members of {decl:?} are already set");
        *slot = Some(members);
    }

    /// Attaches the body of a function, initializer or deinitializer.
    ///
    /// # Panics
    ///
    /// Panics if the declaration cannot have a body or already has one.
    #[allow(clippy::panic, reason = "attaching a body to a kind without one is a contract violation")]
    pub fn set_body(&mut self, decl: DeclId, body: StmtId) {
        let slot = match &mut self.decls[decl].kind {
            DeclKind::Func(func) => &mut func.body,
            DeclKind::Constructor(constructor) => &mut constructor.body,
            DeclKind::Destructor(destructor) => &mut destructor.body,
            other => panic!("`{}` declarations have no body", other.name()),
        };
        assert!(slot.is_none(), "body of {decl:?} is already set");
        *slot = Some(body);
    }

    /// Declarations registered in `context`, in allocation order
    pub fn decls_in(&self, context: DeclContext) -> impl Iterator<Item = DeclId> + '_ {
        self.by_context.get(&context).into_iter().flatten().copied()
    }

    /// Parsed members of an iterable declaration, if they have been attached
    pub fn members(&self, decl: DeclId) -> Option<&[DeclId]> {
        let members = match &self.decls[decl].kind {
            DeclKind::Enum(nominal) | DeclKind::Struct(nominal) => nominal.members,
            DeclKind::Class(class) => class.nominal.members,
            DeclKind::Protocol(protocol) => protocol.nominal.members,
            DeclKind::Extension(extension) => extension.members,
            _ => None,
        };
        members.map(|members| self.array(members))
    }

    /// Body of a function-like declaration, if one has been attached
    pub fn body(&self, decl: DeclId) -> Option<StmtId> {
        match &self.decls[decl].kind {
            DeclKind::Func(func) => func.body,
            DeclKind::Constructor(constructor) => constructor.body,
            DeclKind::Destructor(destructor) => destructor.body,
            _ => None,
        }
    }

    /// Every declaration with its id, in allocation order
    pub fn decls(&self) -> impl Iterator<Item = (DeclId, &Decl)> + '_ {
        self.decls.iter()
    }

    /// Number of declarations
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }
}

macro_rules! index_impls {
    ($($id:ty => $node:ty, $field:ident;)*) => {
        $(
            impl Index<$id> for AstContext {
                type Output = $node;

                fn index(&self, id: $id) -> &$node {
                    &self.$field[id]
                }
            }
        )*
    };
}

index_impls! {
    DeclId => Decl, decls;
    TypeReprId => TypeRepr, type_reprs;
    ExprId => Expr, exprs;
    StmtId => Stmt, stmts;
    PatternId => Pattern, patterns;
    GenericParamListId => GenericParamList, generic_params;
    ParameterListId => ParameterList, params;
    WhereClauseId => TrailingWhereClause, where_clauses;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DestructorDecl, EnumCaseDecl, NominalTypeDecl};
    use ag_intern::Interner;
    use ag_span::{FileId, SourceLoc, SourceRange};
    use std::iter;

    fn loc(raw: u32) -> SourceLoc {
        SourceLoc::from_raw(raw).unwrap_or_else(|| panic!("location {raw} is zero"))
    }

    fn nominal(interner: &Interner, name: &str) -> NominalTypeDecl {
        NominalTypeDecl {
            intro_loc: loc(1),
            name: interner.intern(name),
            name_loc: loc(8),
            generic_params: None,
            inherited: None,
            where_clause: None,
            braces: SourceRange::new(loc(10), loc(12)),
            members: None,
        }
    }

    #[test]
    fn test_decls_are_registered_in_their_context() {
        let interner = Interner::new();
        let mut ast = AstContext::new();
        let file = DeclContext::SourceFile(FileId(0));

        let outer = ast.alloc_decl(file, DeclKind::Struct(nominal(&interner, "S")));
        let inner = ast.alloc_decl(
            DeclContext::Decl(outer),
            DeclKind::Struct(nominal(&interner, "T")),
        );
        let second = ast.alloc_decl(file, DeclKind::Enum(nominal(&interner, "E")));

        assert_eq!(ast.decls_in(file).collect::<Vec<_>>(), vec![outer, second]);
        assert_eq!(ast.decls_in(DeclContext::Decl(outer)).collect::<Vec<_>>(), vec![inner]);
        assert_eq!(ast.decls_in(DeclContext::Decl(inner)).count(), 0);
        assert_eq!(ast[inner].context, DeclContext::Decl(outer));
        assert!(ast[outer].is_decl_context());
    }

    #[test]
    fn test_set_parsed_members() {
        let interner = Interner::new();
        let mut ast = AstContext::new();
        let file = DeclContext::SourceFile(FileId(0));
        let decl = ast.alloc_decl(file, DeclKind::Struct(nominal(&interner, "S")));
        assert_eq!(ast.members(decl), None);

        let member = ast.alloc_decl(
            DeclContext::Decl(decl),
            DeclKind::Destructor(DestructorDecl {
                deinit_loc: loc(11),
                body: None,
            }),
        );
        let members = ast.alloc_array([member]);
        ast.set_parsed_members(decl, members);
        assert_eq!(ast.members(decl), Some(&[member][..]));
    }

    #[test]
    fn test_empty_member_list_is_present() {
        let interner = Interner::new();
        let mut ast = AstContext::new();
        let decl = ast.alloc_decl(
            DeclContext::SourceFile(FileId(0)),
            DeclKind::Enum(nominal(&interner, "E")),
        );
        let members = ast.alloc_array(iter::empty::<DeclId>());
        ast.set_parsed_members(decl, members);
        assert_eq!(ast.members(decl), Some(&[][..]));
    }

    #[test]
    #[should_panic(expected = "`enum_case` declarations have no member list")]
    fn test_set_parsed_members_on_wrong_kind_panics() {
        let mut ast = AstContext::new();
        let elements = ast.alloc_array(iter::empty::<DeclId>());
        let decl = ast.alloc_decl(
            DeclContext::SourceFile(FileId(0)),
            DeclKind::EnumCase(EnumCaseDecl {
                case_loc: loc(1),
                elements,
            }),
        );
        let members = ast.alloc_array(iter::empty::<DeclId>());
        ast.set_parsed_members(decl, members);
    }

    #[test]
    #[should_panic(expected = "`struct` declarations have no body")]
    fn test_set_body_on_wrong_kind_panics() {
        let interner = Interner::new();
        let mut ast = AstContext::new();
        let decl = ast.alloc_decl(
            DeclContext::SourceFile(FileId(0)),
            DeclKind::Struct(nominal(&interner, "S")),
        );
        let elements = ast.alloc_array(iter::empty::<AstNode>());
        let body = ast.alloc_stmt(Stmt::Brace {
            elements,
            braces: SourceRange::single(loc(3)),
        });
        ast.set_body(decl, body);
    }

    #[test]
    fn test_set_body() {
        let mut ast = AstContext::new();
        let decl = ast.alloc_decl(
            DeclContext::SourceFile(FileId(0)),
            DeclKind::Destructor(DestructorDecl {
                deinit_loc: loc(1),
                body: None,
            }),
        );
        let elements = ast.alloc_array(iter::empty::<AstNode>());
        let body = ast.alloc_stmt(Stmt::Brace {
            elements,
            braces: SourceRange::new(loc(8), loc(10)),
        });
        ast.set_body(decl, body);
        assert_eq!(ast.body(decl), Some(body));
    }
}

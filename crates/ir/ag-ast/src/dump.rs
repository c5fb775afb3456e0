//! Deterministic text rendering of an AST, used by snapshot tests

use crate::{
    AstContext, AstNode, CallArgument, DeclId, DeclKind, Expr, ExprId, GenericParamListId,
    Literal, NominalTypeDecl, ParameterListId, Pattern, PatternId, RequirementKind, Stmt, StmtId,
    TypeRepr, TypeReprId, WhereClauseId,
};
use ag_arena::ArrayRef;
use ag_intern::{Identifier, Interner};
use ag_span::SourceLoc;

/// Renders nodes as an indented tree, one declaration or statement per line.
///
/// Types, expressions and patterns are printed inline in source-like form.
/// Absent clauses are left out entirely; present but empty lists print as
/// `[]`, so the two stay distinguishable.
pub struct AstDumper<'ast> {
    ast: &'ast AstContext,
    interner: &'ast Interner,
    out: String,
    depth: usize,
}

impl<'ast> AstDumper<'ast> {
    /// Creates a dumper resolving identifiers through `interner`
    pub fn new(ast: &'ast AstContext, interner: &'ast Interner) -> Self {
        Self {
            ast,
            interner,
            out: String::new(),
            depth: 0,
        }
    }

    /// Renders a list of top-level nodes
    pub fn dump_nodes(mut self, nodes: &[AstNode]) -> String {
        for node in nodes {
            self.node(*node);
        }
        self.out
    }

    /// Renders a single declaration and everything below it
    pub fn dump_decl(mut self, decl: DeclId) -> String {
        self.decl(decl);
        self.out
    }

    fn line(&mut self, text: impl AsRef<str>) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn nested(&mut self, render: impl FnOnce(&mut Self)) {
        self.depth += 1;
        render(self);
        self.depth -= 1;
    }

    fn name(&self, ident: Identifier) -> &'ast str {
        self.interner.resolve(&ident)
    }

    fn node(&mut self, node: AstNode) {
        match node {
            AstNode::Decl(decl) => self.decl(decl),
            AstNode::Stmt(stmt) => self.stmt(stmt),
            AstNode::Expr(expr) => {
                let text = format!("expr {}", self.expr(expr));
                self.line(text);
            }
            AstNode::Type(ty) => {
                let text = format!("type {}", self.type_repr(ty));
                self.line(text);
            }
            AstNode::Pattern(pattern) => {
                let text = format!("pattern {}", self.pattern(pattern));
                self.line(text);
            }
        }
    }

    fn decl(&mut self, id: DeclId) {
        let ast = self.ast;
        let decl = &ast[id];
        let kind = decl.kind.name();
        match &decl.kind {
            DeclKind::TypeAlias(alias) => {
                let header = format!(
                    "{kind} {} {} name={} equal={}",
                    self.name(alias.name),
                    alias.typealias_loc,
                    alias.name_loc,
                    alias.equal_loc,
                );
                self.line(header);
                self.nested(|this| {
                    this.generic_params(alias.generic_params);
                    let underlying = format!("underlying: {}", this.type_repr(alias.underlying));
                    this.line(underlying);
                    this.where_clause(alias.where_clause);
                });
            }
            DeclKind::Enum(nominal) | DeclKind::Struct(nominal) => {
                self.nominal(kind, nominal, String::new());
            }
            DeclKind::Class(class) => self.nominal(kind, &class.nominal, String::new()),
            DeclKind::Protocol(protocol) => {
                let primary = ast
                    .array(protocol.primary_associated_types)
                    .iter()
                    .map(|ident| format!("{}{}", self.name(ident.name), ident.loc))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.nominal(kind, &protocol.nominal, format!(" primary=[{primary}]"));
            }
            DeclKind::AssociatedType(assoc) => {
                let header = format!(
                    "{kind} {} {} name={}",
                    self.name(assoc.name),
                    assoc.associatedtype_loc,
                    assoc.name_loc,
                );
                self.line(header);
                self.nested(|this| {
                    this.inherited(assoc.inherited);
                    if let Some(default) = assoc.default_type {
                        let text = format!("default: {}", this.type_repr(default));
                        this.line(text);
                    }
                    this.where_clause(assoc.where_clause);
                });
            }
            DeclKind::Extension(extension) => {
                let header = format!(
                    "{kind} {} {} braces={}..{}",
                    self.type_repr(extension.extended_type),
                    extension.extension_loc,
                    extension.braces.start,
                    extension.braces.end,
                );
                self.line(header);
                self.nested(|this| {
                    this.inherited(extension.inherited);
                    this.where_clause(extension.where_clause);
                    this.members(extension.members);
                });
            }
            DeclKind::EnumCase(case) => {
                self.line(format!("{kind} {}", case.case_loc));
                self.nested(|this| {
                    for element in ast.array(case.elements) {
                        this.decl(*element);
                    }
                });
            }
            DeclKind::EnumElement(element) => {
                let mut header = format!("{kind} {} {}", self.name(element.name), element.name_loc);
                if let Some(raw_value) = element.raw_value {
                    let equals = opt_loc(element.equals_loc);
                    header.push_str(&format!(" = {} equals={equals}", self.expr(raw_value)));
                }
                self.line(header);
                self.nested(|this| this.params(element.params));
            }
            DeclKind::Var(var) => {
                let specifier = if var.is_let { "let" } else { "var" };
                let mut header = format!(
                    "{kind} {specifier} {} {} static={}",
                    self.pattern(var.pattern),
                    var.binding_loc,
                    var.is_static,
                );
                if let Some(initializer) = var.initializer {
                    header.push_str(&format!(" init={}", self.expr(initializer)));
                }
                self.line(header);
            }
            DeclKind::Func(func) => {
                let mut header = format!(
                    "{kind} {} {} name={}",
                    self.name(func.name),
                    func.func_loc,
                    func.name_loc,
                );
                push_effects(&mut header, func.async_loc, func.throws_loc);
                if let Some(result) = func.result_type {
                    header.push_str(&format!(" -> {}", self.type_repr(result)));
                }
                self.line(header);
                self.nested(|this| {
                    this.generic_params(func.generic_params);
                    this.params(Some(func.params));
                    this.where_clause(func.where_clause);
                    this.body(func.body);
                });
            }
            DeclKind::Constructor(constructor) => {
                let mut header = format!("{kind} {}", constructor.init_loc);
                if let Some(mark) = constructor.failability_loc {
                    header.push_str(&format!(" failable={mark} iuo={}", constructor.is_iuo));
                }
                push_effects(&mut header, constructor.async_loc, constructor.throws_loc);
                self.line(header);
                self.nested(|this| {
                    this.generic_params(constructor.generic_params);
                    this.params(Some(constructor.params));
                    this.where_clause(constructor.where_clause);
                    this.body(constructor.body);
                });
            }
            DeclKind::Destructor(destructor) => {
                self.line(format!("{kind} {}", destructor.deinit_loc));
                self.nested(|this| this.body(destructor.body));
            }
            DeclKind::Operator(operator) => {
                let mut header = format!(
                    "{} {kind} {} {} name={}",
                    operator.fixity,
                    self.name(operator.name),
                    operator.operator_loc,
                    operator.name_loc,
                );
                if let Some(group) = operator.precedence_group_name {
                    header.push_str(&format!(
                        " : {}{} colon={}",
                        self.name(group),
                        opt_loc(operator.precedence_group_loc),
                        opt_loc(operator.colon_loc),
                    ));
                }
                self.line(header);
            }
            DeclKind::Import(import) => {
                let path = ast
                    .array(import.path)
                    .iter()
                    .map(|component| format!("{}{}", self.name(component.name), component.loc))
                    .collect::<Vec<_>>()
                    .join(".");
                let mut header = format!("{kind} {} {}", import.kind, import.import_loc);
                if let Some(kind_loc) = import.kind_loc {
                    header.push_str(&format!(" kind={kind_loc}"));
                }
                header.push_str(&format!(" path={path}"));
                self.line(header);
            }
            DeclKind::GenericTypeParam(param) => {
                let mut header = format!(
                    "{kind} {} {} index={}",
                    self.name(param.name),
                    param.name_loc,
                    param.index,
                );
                if let Some(inherited) = param.inherited {
                    header.push_str(&format!(" : {}", self.type_repr(inherited)));
                }
                self.line(header);
            }
            DeclKind::Param(param) => {
                let argument = param.argument_name.map_or("_", |name| self.name(name));
                let name = param.param_name.map_or("_", |name| self.name(name));
                let mut header = format!(
                    "{kind} {argument}{} {name}{}: {}",
                    opt_loc(param.argument_name_loc),
                    opt_loc(param.param_name_loc),
                    self.type_repr(param.type_repr),
                );
                if let Some(default) = param.default_value {
                    header.push_str(&format!(" = {}", self.expr(default)));
                }
                self.line(header);
            }
        }
    }

    fn nominal(&mut self, kind: &str, nominal: &NominalTypeDecl, extra: String) {
        let header = format!(
            "{kind} {} {} name={} braces={}..{}{extra}",
            self.name(nominal.name),
            nominal.intro_loc,
            nominal.name_loc,
            nominal.braces.start,
            nominal.braces.end,
        );
        self.line(header);
        self.nested(|this| {
            this.generic_params(nominal.generic_params);
            this.inherited(nominal.inherited);
            this.where_clause(nominal.where_clause);
            this.members(nominal.members);
        });
    }

    fn members(&mut self, members: Option<ArrayRef<DeclId>>) {
        let Some(members) = members else {
            return;
        };
        let ast = self.ast;
        let members = ast.array(members);
        if members.is_empty() {
            self.line("members: []");
            return;
        }
        self.line("members:");
        self.nested(|this| {
            for member in members {
                this.decl(*member);
            }
        });
    }

    fn inherited(&mut self, inherited: Option<ArrayRef<TypeReprId>>) {
        if let Some(inherited) = inherited {
            let types = self.type_list(inherited, ", ");
            self.line(format!("inherited: [{types}]"));
        }
    }

    fn generic_params(&mut self, list: Option<GenericParamListId>) {
        let Some(list) = list else {
            return;
        };
        let ast = self.ast;
        let list = &ast[list];
        self.line(format!("generic_params {}..{}", list.left_angle_loc, list.right_angle_loc));
        let params = ast.array(list.params);
        self.nested(|this| {
            for param in params {
                this.decl(*param);
            }
        });
    }

    fn params(&mut self, list: Option<ParameterListId>) {
        let Some(list) = list else {
            return;
        };
        let ast = self.ast;
        let list = &ast[list];
        let params = ast.array(list.params);
        let parens = format!("{}..{}", list.left_paren_loc, list.right_paren_loc);
        if params.is_empty() {
            self.line(format!("params {parens} []"));
            return;
        }
        self.line(format!("params {parens}"));
        self.nested(|this| {
            for param in params {
                this.decl(*param);
            }
        });
    }

    fn where_clause(&mut self, clause: Option<WhereClauseId>) {
        let Some(clause) = clause else {
            return;
        };
        let ast = self.ast;
        let clause = &ast[clause];
        let requirements = ast
            .array(clause.requirements)
            .iter()
            .map(|requirement| {
                let separator = match requirement.kind {
                    RequirementKind::Conformance => ":",
                    RequirementKind::SameType => " ==",
                };
                format!(
                    "{}{separator} {}",
                    self.type_repr(requirement.first),
                    self.type_repr(requirement.second),
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        self.line(format!("where {} [{requirements}]", clause.where_loc));
    }

    fn body(&mut self, body: Option<StmtId>) {
        if let Some(body) = body {
            self.stmt(body);
        }
    }

    fn stmt(&mut self, id: StmtId) {
        let ast = self.ast;
        match &ast[id] {
            Stmt::Brace { elements, braces } => {
                let elements = ast.array(*elements);
                if elements.is_empty() {
                    self.line(format!("brace {}..{} []", braces.start, braces.end));
                    return;
                }
                self.line(format!("brace {}..{}", braces.start, braces.end));
                self.nested(|this| {
                    for element in elements {
                        this.node(*element);
                    }
                });
            }
            Stmt::Return { return_loc, value } => {
                let text = match value {
                    Some(value) => format!("return {} {return_loc}", self.expr(*value)),
                    None => format!("return {return_loc}"),
                };
                self.line(text);
            }
        }
    }

    fn type_list(&self, types: ArrayRef<TypeReprId>, separator: &str) -> String {
        self.ast
            .array(types)
            .iter()
            .map(|ty| self.type_repr(*ty))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn type_repr(&self, id: TypeReprId) -> String {
        match &self.ast[id] {
            TypeRepr::Ident {
                name, generic_args, ..
            } => match generic_args {
                Some((args, _)) => format!("{}<{}>", self.name(*name), self.type_list(*args, ", ")),
                None => self.name(*name).to_string(),
            },
            TypeRepr::Member { base, name, .. } => {
                format!("{}.{}", self.type_repr(*base), self.name(*name))
            }
            TypeRepr::Optional { wrapped, .. } => format!("{}?", self.type_repr(*wrapped)),
            TypeRepr::Array { element, .. } => format!("[{}]", self.type_repr(*element)),
            TypeRepr::Tuple { elements, .. } => format!("({})", self.type_list(*elements, ", ")),
        }
    }

    fn arguments(&self, arguments: ArrayRef<CallArgument>) -> String {
        self.ast
            .array(arguments)
            .iter()
            .map(|argument| match argument.label {
                Some(label) => format!("{}: {}", self.name(label), self.expr(argument.value)),
                None => self.expr(argument.value),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn expr(&self, id: ExprId) -> String {
        match &self.ast[id] {
            Expr::Literal { value, .. } => match value {
                Literal::Integer(text) | Literal::Float(text) => text.clone(),
                Literal::String(text) => format!("{text:?}"),
                Literal::Boolean(value) => value.to_string(),
                Literal::Nil => "nil".to_string(),
            },
            Expr::DeclRef { name, .. } => self.name(*name).to_string(),
            Expr::Member { base, name, .. } => {
                format!("{}.{}", self.expr(*base), self.name(*name))
            }
            Expr::Tuple { elements, .. } => format!("({})", self.arguments(*elements)),
            Expr::Call {
                callee, arguments, ..
            } => format!("{}({})", self.expr(*callee), self.arguments(*arguments)),
        }
    }

    fn pattern(&self, id: PatternId) -> String {
        match &self.ast[id] {
            Pattern::Named { name, .. } => self.name(*name).to_string(),
            Pattern::Any { .. } => "_".to_string(),
            Pattern::Tuple { elements, .. } => {
                let elements = self
                    .ast
                    .array(*elements)
                    .iter()
                    .map(|element| self.pattern(*element))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({elements})")
            }
        }
    }
}

fn push_effects(header: &mut String, async_loc: Option<SourceLoc>, throws_loc: Option<SourceLoc>) {
    if let Some(loc) = async_loc {
        header.push_str(&format!(" async={loc}"));
    }
    if let Some(loc) = throws_loc {
        header.push_str(&format!(" throws={loc}"));
    }
}

fn opt_loc(loc: Option<SourceLoc>) -> String {
    loc.map(|loc| loc.to_string()).unwrap_or_default()
}

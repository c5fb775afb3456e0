//! Fixtures shared by the unit tests

use crate::{AstGen, DiagnosticSink, Diagnostics, Lower, lower_source_file};
use ag_arena::ArrayRef;
use ag_ast::{AstContext, AstDumper, AstNode, DeclId};
use ag_intern::Interner;
use ag_span::{FileId, SourceFile, SourceLoc, SourceMap};
use ag_syntax::{DeclSyntax, Syntax as _, SyntaxBuilder};

/// A single registered source file
pub(crate) struct TestFile {
    sources: SourceMap,
    id: FileId,
}

impl TestFile {
    pub(crate) fn empty() -> Self {
        Self::new("")
    }

    pub(crate) fn new(text: &str) -> Self {
        let mut sources = SourceMap::new();
        let id = sources.add("test.swift", text);
        Self { sources, id }
    }

    pub(crate) fn file(&self) -> &SourceFile {
        self.sources.file(self.id)
    }

    /// Location of byte `offset` of the file
    pub(crate) fn loc(&self, offset: u32) -> SourceLoc {
        self.file().loc(offset)
    }

    pub(crate) fn astgen<'ctx>(
        &'ctx self,
        ast: &'ctx mut AstContext,
        interner: &'ctx Interner,
        sink: &'ctx mut dyn DiagnosticSink,
    ) -> AstGen<'ctx> {
        AstGen::new(ast, interner, self.file(), sink)
    }
}

/// Everything produced by lowering one built node
pub(crate) struct Lowered<T> {
    pub(crate) file: TestFile,
    pub(crate) interner: Interner,
    pub(crate) ast: AstContext,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) output: T,
}

impl<T> Lowered<T> {
    pub(crate) fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|diagnostic| diagnostic.message()).collect()
    }

    pub(crate) fn name(&self, decl: DeclId) -> Option<&str> {
        self.ast[decl]
            .name()
            .map(|name| self.interner.resolve(&name))
    }
}

impl<T: Copy + Into<AstNode>> Lowered<T> {
    /// Inline rendering of the lowered node, without the family prefix
    pub(crate) fn render(&self) -> String {
        let dump = AstDumper::new(&self.ast, &self.interner).dump_nodes(&[self.output.into()]);
        let line = dump.trim_end();
        line.split_once(' ')
            .map_or(line, |(_, rest)| rest)
            .to_string()
    }
}

impl Lowered<ArrayRef<AstNode>> {
    pub(crate) fn nodes(&self) -> &[AstNode] {
        self.ast.array(self.output)
    }

    /// The `index`th top-level item, which must be a declaration
    pub(crate) fn decl(&self, index: usize) -> DeclId {
        self.nodes()
            .get(index)
            .and_then(|node| node.as_decl())
            .unwrap_or_else(|| panic!("top-level item {index} is not a declaration"))
    }

    pub(crate) fn dump(&self) -> String {
        AstDumper::new(&self.ast, &self.interner).dump_nodes(self.nodes())
    }
}

/// Lowers whatever `build` produces, with the builder's text as the file
pub(crate) fn lower_with<N: Lower>(
    build: impl FnOnce(&mut SyntaxBuilder) -> N,
) -> Lowered<N::Output> {
    let mut builder = SyntaxBuilder::new();
    let node = build(&mut builder);
    let file = TestFile::new(builder.text());

    let interner = Interner::new();
    let mut ast = AstContext::new();
    let mut diagnostics = Diagnostics::new();
    let output = file
        .astgen(&mut ast, &interner, &mut diagnostics)
        .visit(&node);

    Lowered {
        file,
        interner,
        ast,
        diagnostics,
        output,
    }
}

/// Lowers a source file made of the declarations `build` produces
pub(crate) fn lower_decls(
    build: impl FnOnce(&mut SyntaxBuilder) -> Vec<DeclSyntax>,
) -> Lowered<ArrayRef<AstNode>> {
    let mut builder = SyntaxBuilder::new();
    let decls = build(&mut builder);
    let syntax = builder.finish(SyntaxBuilder::decl_items(decls));
    let file = TestFile::new(&syntax.source_text());

    let interner = Interner::new();
    let mut ast = AstContext::new();
    let mut diagnostics = Diagnostics::new();
    let output = lower_source_file(&mut ast, &interner, file.file(), &syntax, &mut diagnostics);

    Lowered {
        file,
        interner,
        ast,
        diagnostics,
        output,
    }
}

//! Integration test utilities for declaration lowering
//!
//! A [`TestFixture`] collects hand-built files, runs them through the
//! driver, and hands back a [`LoweredProject`] with lookup helpers for the
//! resulting ASTs.

use ag_ast::{AstNode, DeclId, Stmt};
use ag_driver::{Driver, DriverConfig, LoweredFile, LoweringConfig, SourceInput};
use ag_lower::Diagnostic;
use ag_syntax::{DeclSyntax, SyntaxBuilder};
use anyhow::{Context, Result};
use std::io::Write;
use tempfile::NamedTempFile;

/// Test fixture helper
pub struct TestFixture {
    /// Configuration the driver is created with
    pub config: DriverConfig,
    /// Files registered in the fixture, in lowering order
    pub inputs: Vec<SourceInput>,
}

impl TestFixture {
    /// Creates a fixture that lowers its files sequentially
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DriverConfig {
            lowering: LoweringConfig { jobs: 1 },
            ..DriverConfig::default()
        })
    }

    /// Creates a fixture with an explicit configuration
    #[must_use]
    pub fn with_config(config: DriverConfig) -> Self {
        Self {
            config,
            inputs: Vec::new(),
        }
    }

    /// Creates a fixture configured by TOML text, loaded from a real file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written or parsed
    pub fn from_config_text(text: &str) -> Result<Self> {
        let mut file = NamedTempFile::new().context("Failed to create configuration file")?;
        file.write_all(text.as_bytes())
            .context("Failed to write configuration file")?;
        let config = DriverConfig::load(file.path())?;
        Ok(Self::with_config(config))
    }

    /// Adds a file made of the declarations `build` lays out
    pub fn add_file(
        &mut self,
        name: &str,
        build: impl FnOnce(&mut SyntaxBuilder) -> Vec<DeclSyntax>,
    ) -> &mut Self {
        let mut builder = SyntaxBuilder::new();
        let decls = build(&mut builder);
        let syntax = builder.finish(SyntaxBuilder::decl_items(decls));
        self.inputs.push(SourceInput::new(name, syntax));
        self
    }

    /// Lowers every registered file
    ///
    /// # Errors
    ///
    /// Returns an error if the driver cannot start its workers
    pub fn lower(self) -> Result<LoweredProject> {
        let mut driver = Driver::new(self.config);
        let files = driver.lower_files(self.inputs)?;
        Ok(LoweredProject { driver, files })
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the driver produced for a fixture
pub struct LoweredProject {
    /// Driver that lowered the files, owning the interner and source map
    pub driver: Driver,
    /// Lowered files in registration order
    pub files: Vec<LoweredFile>,
}

impl LoweredProject {
    /// Lowered file at `index`
    ///
    /// # Panics
    ///
    /// Panics if no file was registered at `index`
    #[must_use]
    pub fn file(&self, index: usize) -> &LoweredFile {
        &self.files[index]
    }

    /// Dump of the top level of file `index`
    #[must_use]
    pub fn dump(&self, index: usize) -> String {
        self.driver.dump(self.file(index))
    }

    /// Diagnostic messages of file `index`, in the order they were raised
    #[must_use]
    pub fn messages(&self, index: usize) -> Vec<String> {
        self.file(index)
            .diagnostics
            .iter()
            .map(Diagnostic::message)
            .collect()
    }

    /// Top-level declaration `item` of file `index`
    #[must_use]
    pub fn decl(&self, index: usize, item: usize) -> Option<DeclId> {
        self.file(index).items().get(item).copied().and_then(AstNode::as_decl)
    }

    /// Name of a declaration of file `index`
    #[must_use]
    pub fn name(&self, index: usize, decl: DeclId) -> Option<&str> {
        let name = self.file(index).ast[decl].name()?;
        Some(self.driver.interner().resolve(&name))
    }

    /// Kind names of the members of `decl`, empty without a member list
    #[must_use]
    pub fn member_kinds(&self, index: usize, decl: DeclId) -> Vec<&'static str> {
        let ast = &self.file(index).ast;
        ast.members(decl)
            .unwrap_or_default()
            .iter()
            .map(|member| ast[*member].kind.name())
            .collect()
    }

    /// Declarations written directly in the body of `decl`
    #[must_use]
    pub fn body_decls(&self, index: usize, decl: DeclId) -> Vec<DeclId> {
        let ast = &self.file(index).ast;
        let Some(body) = ast.body(decl) else {
            return Vec::new();
        };
        match &ast[body] {
            Stmt::Brace { elements, .. } => ast
                .array(*elements)
                .iter()
                .copied()
                .filter_map(AstNode::as_decl)
                .collect(),
            Stmt::Return { .. } => Vec::new(),
        }
    }
}

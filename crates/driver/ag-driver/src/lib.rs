//! Lowering driver
//!
//! Registers source files in one location space, lowers each of them with
//! its own [`AstGen`](ag_lower::AstGen) and collects what came out. Files are
//! independent, so with more than one job they are lowered on a `rayon`
//! thread pool; results always come back in input order.
//!
//! Configuration lives in [`DriverConfig`], tracing is set up by
//! [`init_tracing`].

mod config;
mod tracing_config;

pub use config::{
    DriverConfig, LOG_FILTER_VAR, LOG_FORMAT_VAR, LogConfig, LogFormat, LoweringConfig,
};
pub use tracing_config::init_tracing;

use ag_arena::ArrayRef;
use ag_ast::{AstContext, AstDumper, AstNode};
use ag_intern::Interner;
use ag_lower::{Diagnostic, Diagnostics, lower_source_file};
use ag_span::{FileId, SourceMap};
use ag_syntax::{SourceFileSyntax, Syntax as _};
use anyhow::{Context as _, Result};
use miette::Report;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::{debug, debug_span, info_span};

/// A parsed file handed to the driver
#[derive(Debug, Clone)]
pub struct SourceInput {
    /// Display name, usually a path
    pub name: String,
    /// Syntax tree of the whole file
    pub syntax: SourceFileSyntax,
}

impl SourceInput {
    /// Pairs a syntax tree with its file name
    pub fn new(name: impl Into<String>, syntax: SourceFileSyntax) -> Self {
        Self {
            name: name.into(),
            syntax,
        }
    }
}

/// Result of lowering one file
#[derive(Debug)]
pub struct LoweredFile {
    /// Id of the file in the driver's source map
    pub file: FileId,
    /// Display name
    pub name: String,
    /// AST owning every node of the file
    pub ast: AstContext,
    /// Top-level items in source order
    pub top_level: ArrayRef<AstNode>,
    /// Diagnostics in the order they were raised
    pub diagnostics: Vec<Diagnostic>,
}

impl LoweredFile {
    /// Top-level items in source order
    pub fn items(&self) -> &[AstNode] {
        self.ast.array(self.top_level)
    }
}

/// Lowers batches of files
#[derive(Debug, Default)]
pub struct Driver {
    config: DriverConfig,
    interner: Interner,
    sources: SourceMap,
}

impl Driver {
    /// Creates a driver with an empty source map
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            interner: Interner::new(),
            sources: SourceMap::new(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Interner shared by every lowered file
    pub fn interner(&self) -> &Interner {
        &self.interner
    }

    /// Every file registered so far
    pub fn sources(&self) -> &SourceMap {
        &self.sources
    }

    /// Registers and lowers `inputs`, returning one result per input in the
    /// same order.
    ///
    /// # Errors
    ///
    /// Returns an error if the lowering thread pool cannot be started.
    pub fn lower_files(&mut self, inputs: Vec<SourceInput>) -> Result<Vec<LoweredFile>> {
        let files: Vec<(FileId, SourceFileSyntax)> = inputs
            .into_iter()
            .map(|input| {
                let text = input.syntax.source_text();
                (self.sources.add(input.name, text), input.syntax)
            })
            .collect();

        let jobs = self.config.lowering.jobs;
        let _span = info_span!("lower_files", files = files.len(), jobs).entered();

        if !self.config.lowering.is_parallel() || files.len() < 2 {
            return Ok(files
                .iter()
                .map(|(file, syntax)| self.lower_file(*file, syntax))
                .collect());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(jobs)
            .thread_name(|index| format!("ag-lower-{index}"))
            .build()
            .context("Failed to start lowering thread pool")?;
        Ok(pool.install(|| {
            files
                .par_iter()
                .map(|(file, syntax)| self.lower_file(*file, syntax))
                .collect()
        }))
    }

    fn lower_file(&self, id: FileId, syntax: &SourceFileSyntax) -> LoweredFile {
        let file = self.sources.file(id);
        let _span = debug_span!("lower_file", file = %file.name).entered();

        let mut ast = AstContext::new();
        let mut diagnostics = Diagnostics::new();
        let top_level = lower_source_file(&mut ast, &self.interner, file, syntax, &mut diagnostics);
        debug!(
            decls = ast.decl_count(),
            diagnostics = diagnostics.len(),
            "lowered file"
        );

        LoweredFile {
            file: id,
            name: file.name.clone(),
            ast,
            top_level,
            diagnostics: diagnostics.into_vec(),
        }
    }

    /// Renderable reports for the diagnostics of `lowered`, with the file
    /// text attached
    pub fn reports(&self, lowered: &LoweredFile) -> Vec<Report> {
        let file = self.sources.file(lowered.file);
        lowered
            .diagnostics
            .iter()
            .cloned()
            .map(|diagnostic| diagnostic.with_source(&file.name, file.source.to_string()))
            .collect()
    }

    /// Debug dump of the top level of `lowered`
    pub fn dump(&self, lowered: &LoweredFile) -> String {
        AstDumper::new(&lowered.ast, &self.interner).dump_nodes(lowered.items())
    }
}

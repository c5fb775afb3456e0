//! Statements, code blocks and the source file root

use crate::walk::{syntax_enum, syntax_struct};
use crate::{DeclSyntax, ExprSyntax, Token};

/// Any statement that is neither a declaration nor an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtSyntax {
    /// `return value`
    Return(ReturnStmtSyntax),
}

/// `return value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmtSyntax {
    /// `return`
    pub return_keyword: Token,
    /// Returned value
    pub expression: Option<ExprSyntax>,
}

/// `{ statements }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockSyntax {
    /// `{`
    pub left_brace: Token,
    /// Items in source order
    pub statements: Vec<CodeBlockItemSyntax>,
    /// `}`
    pub right_brace: Token,
}

/// One item of a code block or source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlockItemSyntax {
    /// The item itself
    pub item: CodeBlockItem,
    /// Optional `;` after it
    pub semicolon: Option<Token>,
}

/// What a code block item holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeBlockItem {
    /// A declaration
    Decl(DeclSyntax),
    /// A statement
    Stmt(StmtSyntax),
    /// An expression evaluated for its effects
    Expr(ExprSyntax),
}

/// Root of a parsed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFileSyntax {
    /// Top-level items in source order
    pub statements: Vec<CodeBlockItemSyntax>,
    /// Zero-width end of file token carrying the trailing trivia of the file
    pub end_of_file: Token,
}

impl SourceFileSyntax {
    /// Byte length of the file
    pub fn len(&self) -> u32 {
        self.end_of_file.full_span().end
    }

    /// Whether the file contains no text at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

syntax_enum!(StmtSyntax { Return });
syntax_struct!(ReturnStmtSyntax { return_keyword, expression });
syntax_struct!(CodeBlockSyntax { left_brace, statements, right_brace });
syntax_struct!(CodeBlockItemSyntax { item, semicolon });
syntax_enum!(CodeBlockItem { Decl, Stmt, Expr });
syntax_struct!(SourceFileSyntax { statements, end_of_file });

//! Tokens and trivia

use ag_span::Span;
use derive_more::Display;
use std::fmt;
use std::iter;

/// Reserved words recognised by the lexer
#[derive(Debug, Clone, Copy, Display, PartialEq, Eq, Hash)]
#[allow(missing_docs, reason = "each variant is the keyword it spells")]
pub enum Keyword {
    #[display("typealias")]
    Typealias,
    #[display("enum")]
    Enum,
    #[display("struct")]
    Struct,
    #[display("class")]
    Class,
    #[display("actor")]
    Actor,
    #[display("protocol")]
    Protocol,
    #[display("associatedtype")]
    Associatedtype,
    #[display("extension")]
    Extension,
    #[display("case")]
    Case,
    #[display("var")]
    Var,
    #[display("let")]
    Let,
    #[display("func")]
    Func,
    #[display("init")]
    Init,
    #[display("deinit")]
    Deinit,
    #[display("operator")]
    Operator,
    #[display("precedencegroup")]
    Precedencegroup,
    #[display("import")]
    Import,
    #[display("prefix")]
    Prefix,
    #[display("infix")]
    Infix,
    #[display("postfix")]
    Postfix,
    #[display("async")]
    Async,
    #[display("throws")]
    Throws,
    #[display("rethrows")]
    Rethrows,
    #[display("where")]
    Where,
    #[display("static")]
    Static,
    #[display("public")]
    Public,
    #[display("private")]
    Private,
    #[display("inout")]
    Inout,
    #[display("return")]
    Return,
    #[display("true")]
    True,
    #[display("false")]
    False,
    #[display("nil")]
    Nil,
    #[display("Self")]
    CapitalSelf,
}

impl Keyword {
    /// Every keyword, in declaration order
    pub const ALL: [Self; 33] = [
        Self::Typealias,
        Self::Enum,
        Self::Struct,
        Self::Class,
        Self::Actor,
        Self::Protocol,
        Self::Associatedtype,
        Self::Extension,
        Self::Case,
        Self::Var,
        Self::Let,
        Self::Func,
        Self::Init,
        Self::Deinit,
        Self::Operator,
        Self::Precedencegroup,
        Self::Import,
        Self::Prefix,
        Self::Infix,
        Self::Postfix,
        Self::Async,
        Self::Throws,
        Self::Rethrows,
        Self::Where,
        Self::Static,
        Self::Public,
        Self::Private,
        Self::Inout,
        Self::Return,
        Self::True,
        Self::False,
        Self::Nil,
        Self::CapitalSelf,
    ];

    /// Looks a keyword up by its spelling
    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.to_string() == text)
    }
}

/// Kind tag of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A reserved word
    Keyword(Keyword),
    /// A plain or backticked identifier
    Identifier,
    /// `_`
    Wildcard,
    /// Integer literal
    IntegerLiteral,
    /// Floating point literal
    FloatLiteral,
    /// String literal including its quotes
    StringLiteral,
    /// Operator with whitespace on both or neither side
    BinaryOperator,
    /// Operator bound to the following token
    PrefixOperator,
    /// Operator bound to the preceding token
    PostfixOperator,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `<`
    LeftAngle,
    /// `>`
    RightAngle,
    /// `[`
    LeftSquare,
    /// `]`
    RightSquare,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `=`
    Equal,
    /// `->`
    Arrow,
    /// `!` directly after a keyword or type
    ExclamationMark,
    /// `?` directly after a keyword or type
    PostfixQuestionMark,
    /// `;`
    Semicolon,
    /// Zero-width end of input marker
    EndOfFile,
}

impl TokenKind {
    /// Spelling of tokens whose text is fully determined by their kind
    pub fn fixed_text(self) -> Option<&'static str> {
        Some(match self {
            Self::Wildcard => "_",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftAngle => "<",
            Self::RightAngle => ">",
            Self::LeftSquare => "[",
            Self::RightSquare => "]",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Period => ".",
            Self::Equal => "=",
            Self::Arrow => "->",
            Self::ExclamationMark => "!",
            Self::PostfixQuestionMark => "?",
            Self::Semicolon => ";",
            Self::EndOfFile => "",
            Self::Keyword(_)
            | Self::Identifier
            | Self::IntegerLiteral
            | Self::FloatLiteral
            | Self::StringLiteral
            | Self::BinaryOperator
            | Self::PrefixOperator
            | Self::PostfixOperator => return None,
        })
    }

    /// Whether this is the given keyword
    pub fn is_keyword(self, keyword: Keyword) -> bool {
        self == Self::Keyword(keyword)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(formatter, "keyword `{keyword}`"),
            Self::Identifier => write!(formatter, "identifier"),
            Self::IntegerLiteral => write!(formatter, "integer literal"),
            Self::FloatLiteral => write!(formatter, "float literal"),
            Self::StringLiteral => write!(formatter, "string literal"),
            Self::BinaryOperator => write!(formatter, "binary operator"),
            Self::PrefixOperator => write!(formatter, "prefix operator"),
            Self::PostfixOperator => write!(formatter, "postfix operator"),
            Self::EndOfFile => write!(formatter, "end of file"),
            other => write!(formatter, "`{}`", other.fixed_text().unwrap_or_default()),
        }
    }
}

/// One piece of trivia
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriviaPiece {
    /// Run of spaces
    Spaces(u32),
    /// Run of tabs
    Tabs(u32),
    /// Run of `\n`
    Newlines(u32),
    /// `// ...` without the terminating newline
    LineComment(String),
    /// `/* ... */`
    BlockComment(String),
}

impl TriviaPiece {
    /// Length in bytes
    pub fn len(&self) -> u32 {
        match self {
            Self::Spaces(count) | Self::Tabs(count) | Self::Newlines(count) => *count,
            Self::LineComment(text) | Self::BlockComment(text) => text.len() as u32,
        }
    }

    /// Whether the piece spans no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn write_to(&self, out: &mut String) {
        let repeat = |out: &mut String, ch: char, count: u32| {
            out.extend(iter::repeat_n(ch, count as usize));
        };
        match self {
            Self::Spaces(count) => repeat(out, ' ', *count),
            Self::Tabs(count) => repeat(out, '\t', *count),
            Self::Newlines(count) => repeat(out, '\n', *count),
            Self::LineComment(text) | Self::BlockComment(text) => out.push_str(text),
        }
    }
}

/// Whitespace and comments attached to a token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trivia {
    /// Pieces in source order
    pub pieces: Vec<TriviaPiece>,
}

impl Trivia {
    /// Trivia without any pieces
    pub fn none() -> Self {
        Self::default()
    }

    /// Trivia of `count` spaces
    pub fn spaces(count: u32) -> Self {
        Self {
            pieces: vec![TriviaPiece::Spaces(count)],
        }
    }

    /// Total length in bytes
    pub fn len(&self) -> u32 {
        self.pieces.iter().map(TriviaPiece::len).sum()
    }

    /// Whether the trivia spans no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the source text of the trivia to `out`
    pub fn write_to(&self, out: &mut String) {
        for piece in &self.pieces {
            piece.write_to(out);
        }
    }
}

/// A token with its surrounding trivia
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Kind tag
    pub kind: TokenKind,
    /// Source text of the token itself
    pub text: String,
    /// Trivia before the token
    pub leading_trivia: Trivia,
    /// Trivia after the token, up to the end of the line
    pub trailing_trivia: Trivia,
    /// Absolute byte offset of the start of the leading trivia
    pub position: u32,
}

impl Token {
    /// Absolute byte offset of the token text
    pub fn position_after_leading_trivia(&self) -> u32 {
        self.position + self.leading_trivia.len()
    }

    /// Span of the token text, trivia excluded
    pub fn span(&self) -> Span {
        let start = self.position_after_leading_trivia();
        Span::new(start, start + self.text.len() as u32)
    }

    /// Span of the token including its trivia
    pub fn full_span(&self) -> Span {
        let end = self.span().end + self.trailing_trivia.len();
        Span::new(self.position, end)
    }

    /// Whether the token is the given keyword
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind.is_keyword(keyword)
    }

    /// Appends the source text of the token, trivia included
    pub fn write_to(&self, out: &mut String) {
        self.leading_trivia.write_to(out);
        out.push_str(&self.text);
        self.trailing_trivia.write_to(out);
    }
}

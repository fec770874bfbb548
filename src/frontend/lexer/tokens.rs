//! Token types

use std::fmt;

use super::keywords::{BuiltinType, Keyword};
use crate::util::diagnostic::Diagnostic;
use crate::util::span::{SourceFile, Span};

/// Lexer error
///
/// Each variant carries the span the caret markup should cover.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("unterminated template literal")]
    UnterminatedTemplate { span: Span },
    #[error("invalid numeric syntax: {literal}")]
    InvalidNumber { literal: String, span: Span },
    #[error("unexpected character: {ch}")]
    UnexpectedChar { ch: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::UnterminatedTemplate { span }
            | LexError::InvalidNumber { span, .. }
            | LexError::UnexpectedChar { span, .. } => *span,
        }
    }

    /// Format as `File <name>, line <n>` + source line + carets + message
    pub fn render(
        &self,
        source: &SourceFile,
    ) -> String {
        Diagnostic::new(self.to_string(), self.span()).render(source)
    }
}

/// Token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Trivia
    Spacing,
    Newline,
    Comment,

    // Words
    Identifier,
    Keyword(Keyword),
    Type(BuiltinType),

    // Literals
    Integer,
    Float,
    String,
    Template,

    // Delimiters
    Colon,
    Comma,
    Dot,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Compound punctuation
    Arrow,
    BackArrow,
    FatArrow,
    Walrus,

    /// `= == + - * / % ^ < > <= >=`, text in the literal
    Operator,

    Eof,
}

impl TokenKind {
    /// Spacing, newlines and comments
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Spacing | TokenKind::Newline | TokenKind::Comment
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            TokenKind::Spacing => write!(f, "spacing"),
            TokenKind::Newline => write!(f, "newline"),
            TokenKind::Comment => write!(f, "comment"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Keyword(kw) => write!(f, "keyword '{}'", kw),
            TokenKind::Type(ty) => write!(f, "type '{}'", ty),
            TokenKind::Integer => write!(f, "integer"),
            TokenKind::Float => write!(f, "float"),
            TokenKind::String => write!(f, "string"),
            TokenKind::Template => write!(f, "template literal"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Dot => write!(f, "'.'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::BackArrow => write!(f, "'<-'"),
            TokenKind::FatArrow => write!(f, "'=>'"),
            TokenKind::Walrus => write!(f, "':='"),
            TokenKind::Operator => write!(f, "operator"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Token
///
/// `literal` is `None` only for [`TokenKind::Eof`].
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: Option<String>,
    pub span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            literal: Some(literal.into()),
            span,
        }
    }

    pub fn eof(span: Span) -> Self {
        Self {
            kind: TokenKind::Eof,
            literal: None,
            span,
        }
    }

    /// Literal text, empty for end-of-input
    pub fn text(&self) -> &str {
        self.literal.as_deref().unwrap_or("")
    }

    /// Operator token with exactly this text
    pub fn is_operator(
        &self,
        op: &str,
    ) -> bool {
        self.kind == TokenKind::Operator && self.text() == op
    }
}

//! Parser state and error handling

use crate::frontend::lexer::{Keyword, Token, TokenKind};
use crate::util::diagnostic::Diagnostic;
use crate::util::span::{Position, SourceFile, Span};

/// Parse error types
///
/// Spans are zero-width at the offending token, so diagnostics show one caret.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A token that cannot start a declaration
    #[error("unexpected token: {found}")]
    UnexpectedToken { found: TokenKind, span: Span },
    /// A keyword with no declaration form
    #[error("unexpected keyword: {keyword}")]
    UnexpectedKeyword { keyword: Keyword, span: Span },
    /// Expected a specific token
    #[error("expected {expected}, got {found}")]
    ExpectedToken {
        expected: String,
        found: TokenKind,
        span: Span,
    },
    /// Malformed include list
    #[error("invalid import syntax: {reason}")]
    InvalidImport { reason: String, span: Span },
    /// Grammar slot reserved for a later revision
    #[error("{feature} are not implemented yet")]
    NotImplemented { feature: &'static str, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedKeyword { span, .. }
            | ParseError::ExpectedToken { span, .. }
            | ParseError::InvalidImport { span, .. }
            | ParseError::NotImplemented { span, .. } => *span,
        }
    }

    /// Format as `File <name>, line <n>` + source line + caret + message
    pub fn render(
        &self,
        source: &SourceFile,
    ) -> String {
        Diagnostic::new(self.to_string(), self.span()).render(source)
    }
}

/// Tokens skipped by [`ParserState::peek`] unless told otherwise
pub const DEFAULT_PEEK_EXCLUDE: &[TokenKind] =
    &[TokenKind::Eof, TokenKind::Comment, TokenKind::Spacing];

/// Cursor over the token sequence
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Returned once the cursor runs past the last token
    eof: Token,
}

impl<'a> ParserState<'a> {
    pub fn new(
        source: &'a SourceFile,
        tokens: &'a [Token],
    ) -> Self {
        let end = source.position_from_offset(source.content.len());
        Self {
            tokens,
            pos: 0,
            eof: Token::eof(Span::point(end)),
        }
    }

    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    pub fn kind(&self) -> TokenKind {
        self.current().kind
    }

    pub fn at(
        &self,
        kind: TokenKind,
    ) -> bool {
        self.kind() == kind
    }

    pub fn at_end(&self) -> bool {
        self.at(TokenKind::Eof)
    }

    /// Step past the current token
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Jump to an index returned by [`peek`](Self::peek)
    pub fn advance_to(
        &mut self,
        index: usize,
    ) {
        self.pos = index.min(self.tokens.len());
    }

    /// Advance past a token of exactly `kind`, or fail
    pub fn consume(
        &mut self,
        kind: TokenKind,
    ) -> Result<Token, ParseError> {
        if self.at(kind) {
            let token = self.current().clone();
            self.advance();
            Ok(token)
        } else {
            Err(self.expected(kind.to_string()))
        }
    }

    /// The `skip`-th next token (0 = first) not in `exclude`, with its index
    ///
    /// The cursor does not move.
    pub fn peek(
        &self,
        skip: usize,
        exclude: &[TokenKind],
    ) -> Option<(usize, &'a Token)> {
        self.tokens
            .iter()
            .enumerate()
            .skip(self.pos)
            .filter(|(_, token)| !exclude.contains(&token.kind))
            .nth(skip)
    }

    /// Next meaningful token: past spacing and comments, not past newlines
    pub fn peek_meaningful(&self) -> Option<(usize, &'a Token)> {
        self.peek(0, DEFAULT_PEEK_EXCLUDE)
    }

    pub fn skip_spacing(&mut self) {
        while self.at(TokenKind::Spacing) {
            self.advance();
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.at(TokenKind::Newline) {
            self.advance();
        }
    }

    pub fn skip_spacing_newlines(&mut self) {
        while matches!(self.kind(), TokenKind::Spacing | TokenKind::Newline) {
            self.advance();
        }
    }

    /// Skip spacing, newlines and comments
    pub fn skip_trivia(&mut self) {
        while self.kind().is_trivia() {
            self.advance();
        }
    }

    /// Start of the current token
    pub fn start(&self) -> Position {
        self.current().span.start
    }

    /// From `start` to the end of the last consumed token
    pub fn span_from(
        &self,
        start: Position,
    ) -> Span {
        let end = self
            .pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map(|t| t.span.end)
            .unwrap_or(start);
        Span::new(start, end)
    }

    /// Zero-width span at the current token
    pub fn here(&self) -> Span {
        Span::point(self.start())
    }

    pub fn unexpected(&self) -> ParseError {
        match self.kind() {
            TokenKind::Keyword(keyword) => ParseError::UnexpectedKeyword {
                keyword,
                span: self.here(),
            },
            found => ParseError::UnexpectedToken {
                found,
                span: self.here(),
            },
        }
    }

    pub fn expected(
        &self,
        what: impl Into<String>,
    ) -> ParseError {
        ParseError::ExpectedToken {
            expected: what.into(),
            found: self.kind(),
            span: self.here(),
        }
    }
}

//! Tokenizer implementation
//! Main lexer structure and token generation logic

use std::iter::Peekable;
use std::str::CharIndices;

use super::keywords::is_operator_char;
use super::literals::{
    is_digit, is_identifier_start, scan_comment, scan_number, scan_string, scan_template,
    scan_word,
};
use super::tokens::{LexError, Token, TokenKind};
use crate::util::span::{Position, SourceFile, Span};

/// Main lexer structure
///
/// Trivia is significant: spaces, tabs, newlines and comments all become tokens.
pub struct Lexer<'a> {
    source: &'a SourceFile,
    chars: Peekable<CharIndices<'a>>,
    offset: usize,
    start_offset: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source
    pub fn new(source: &'a SourceFile) -> Self {
        Self {
            source,
            chars: source.content.char_indices().peekable(),
            offset: 0,
            start_offset: 0,
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        self.source.position_from_offset(self.offset)
    }

    /// Get start position of current token
    pub fn start_position(&self) -> Position {
        self.source.position_from_offset(self.start_offset)
    }

    /// Span from the start of the current token to the current position
    pub fn span(&self) -> Span {
        self.source.span_from_range(self.start_offset, self.offset)
    }

    /// Source text consumed for the current token
    pub fn lexeme(&self) -> &'a str {
        &self.source.content[self.start_offset..self.offset]
    }

    /// Advance to next character
    pub fn advance(&mut self) -> Option<char> {
        let (i, c) = self.chars.next()?;
        self.offset = i + c.len_utf8();
        Some(c)
    }

    /// Peek at next character
    pub fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Consume the next character if it equals `expected`
    fn eat(
        &mut self,
        expected: char,
    ) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Generate next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.start_offset = self.offset;

        let Some(c) = self.advance() else {
            return Ok(None);
        };

        let token = match c {
            ' ' | '\t' => self.make_token(TokenKind::Spacing),
            '\n' => self.make_token(TokenKind::Newline),
            '\r' if self.peek() == Some('\n') => {
                self.advance();
                Token::new(TokenKind::Newline, "\n", self.span())
            }
            '#' => scan_comment(self),
            '{' => self.make_token(TokenKind::LBrace),
            '}' => self.make_token(TokenKind::RBrace),
            '(' => self.make_token(TokenKind::LParen),
            ')' => self.make_token(TokenKind::RParen),
            '[' => self.make_token(TokenKind::LBracket),
            ']' => self.make_token(TokenKind::RBracket),
            ',' => self.make_token(TokenKind::Comma),
            '.' => {
                if self.peek().is_some_and(is_digit) {
                    // Leading decimal point: .5
                    scan_number(self)?
                } else {
                    self.make_token(TokenKind::Dot)
                }
            }
            ':' => {
                if self.eat('=') {
                    self.make_token(TokenKind::Walrus)
                } else {
                    self.make_token(TokenKind::Colon)
                }
            }
            '=' => {
                if self.eat('>') {
                    self.make_token(TokenKind::FatArrow)
                } else {
                    // `==` or bare `=`
                    self.eat('=');
                    self.make_token(TokenKind::Operator)
                }
            }
            c if is_operator_char(c) => self.scan_operator(c),
            '\'' => scan_string(self)?,
            '"' => scan_template(self)?,
            c if is_identifier_start(c) => scan_word(self),
            c if is_digit(c) => scan_number(self)?,
            ch => {
                return Err(LexError::UnexpectedChar {
                    ch,
                    span: Span::point(self.start_position()),
                })
            }
        };

        Ok(Some(token))
    }

    /// Operators with two-character lookahead: `->`, `<-`, `<=`, `>=`
    fn scan_operator(
        &mut self,
        first: char,
    ) -> Token {
        match (first, self.peek()) {
            ('-', Some('>')) => {
                self.advance();
                self.make_token(TokenKind::Arrow)
            }
            ('<', Some('-')) => {
                self.advance();
                self.make_token(TokenKind::BackArrow)
            }
            ('<', Some('=')) | ('>', Some('=')) => {
                self.advance();
                self.make_token(TokenKind::Operator)
            }
            _ => self.make_token(TokenKind::Operator),
        }
    }

    /// Create token whose literal is the consumed source text
    pub fn make_token(
        &self,
        kind: TokenKind,
    ) -> Token {
        Token::new(kind, self.lexeme(), self.span())
    }
}

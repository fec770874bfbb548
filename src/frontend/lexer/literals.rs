//! Literal scanning implementations
//! Handles comments, strings, template literals, numbers and words

use super::keywords::{BuiltinType, Keyword};
use super::tokenizer::Lexer;
use super::tokens::{LexError, Token, TokenKind};

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan `#` through end of line; the literal keeps the `#` and is trimmed
pub fn scan_comment(lexer: &mut Lexer<'_>) -> Token {
    while let Some(c) = lexer.peek() {
        if c == '\n' {
            break;
        }
        lexer.advance();
    }
    Token::new(TokenKind::Comment, lexer.lexeme().trim(), lexer.span())
}

/// Scan a single-quoted string; it may not cross a line break
pub fn scan_string(lexer: &mut Lexer<'_>) -> Result<Token, LexError> {
    let mut value = String::new();

    loop {
        match lexer.peek() {
            None | Some('\n') | Some('\r') => {
                return Err(LexError::UnterminatedString { span: lexer.span() });
            }
            Some('\'') => {
                lexer.advance();
                break;
            }
            Some(c) => {
                value.push(c);
                lexer.advance();
            }
        }
    }

    Ok(Token::new(TokenKind::String, value, lexer.span()))
}

/// Scan a double-quoted template literal
///
/// Interpolation is not evaluated; the body is carried as one opaque string.
pub fn scan_template(lexer: &mut Lexer<'_>) -> Result<Token, LexError> {
    let mut value = String::new();

    loop {
        match lexer.advance() {
            None => return Err(LexError::UnterminatedTemplate { span: lexer.span() }),
            Some('"') => break,
            Some(c) => value.push(c),
        }
    }

    Ok(Token::new(TokenKind::Template, value, lexer.span()))
}

/// Scan a run of digits and dots
///
/// One dot makes a float, none an integer. A run without digits or with
/// several dots is rejected. The tokenizer only enters here at a digit or at
/// a `.` followed by a digit.
pub fn scan_number(lexer: &mut Lexer<'_>) -> Result<Token, LexError> {
    while lexer.peek().is_some_and(|c| is_digit(c) || c == '.') {
        lexer.advance();
    }

    let run = lexer.lexeme();
    let dots = run.chars().filter(|&c| c == '.').count();
    let has_digits = run.chars().any(is_digit);

    if !has_digits || dots > 1 {
        return Err(LexError::InvalidNumber {
            literal: run.to_string(),
            span: lexer.span(),
        });
    }

    let kind = if dots == 1 {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };
    Ok(lexer.make_token(kind))
}

/// Scan identifier, keyword or built-in type name
pub fn scan_word(lexer: &mut Lexer<'_>) -> Token {
    while lexer.peek().is_some_and(is_identifier_char) {
        lexer.advance();
    }

    let word = lexer.lexeme();
    let kind = if let Some(kw) = Keyword::from_word(word) {
        TokenKind::Keyword(kw)
    } else if let Some(ty) = BuiltinType::from_word(word) {
        TokenKind::Type(ty)
    } else {
        TokenKind::Identifier
    };
    lexer.make_token(kind)
}

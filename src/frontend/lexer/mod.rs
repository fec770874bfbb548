//! Lexer module
//!
//! Turns a [`SourceFile`] into the complete token sequence in one pass. Trivia
//! (spacing, newlines, comments) is kept; the parser decides where it matters.

pub mod keywords;
pub mod literals;
pub mod tokenizer;
pub mod tokens;
#[cfg(test)]
mod tests;

pub use keywords::{BuiltinType, Keyword};
pub use tokenizer::Lexer;
pub use tokens::{LexError, Token, TokenKind};

use crate::util::span::{SourceFile, Span};

/// Tokenize a whole source file
///
/// Returns every token followed by exactly one [`TokenKind::Eof`], or the first
/// error. Nothing partial is returned.
pub fn tokenize(source: &SourceFile) -> Result<Vec<Token>, LexError> {
    tracing::debug!(
        "lexing {} ({} bytes)",
        source.name,
        source.content.len()
    );

    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        tracing::trace!("token {} {:?} at {}", token.kind, token.text(), token.span.start);
        tokens.push(token);
    }

    tokens.push(Token::eof(Span::point(lexer.position())));
    tracing::debug!("lexing complete: {} tokens", tokens.len());
    Ok(tokens)
}

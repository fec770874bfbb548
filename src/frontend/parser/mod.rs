//! Parser module
//!
//! Recursive-descent parser from the token sequence to a [`Program`].
//! Parsing stops at the first error; there is no recovery.

pub mod ast;
pub mod declarations;
pub mod parser_state;
#[cfg(test)]
mod tests;

pub use ast::*;
pub use parser_state::{ParseError, ParserState, DEFAULT_PEEK_EXCLUDE};

use crate::frontend::lexer::Token;
use crate::util::span::SourceFile;

/// Parse tokens into a program
///
/// # Arguments
/// * `source` - The source the tokens came from, used for names and positions
/// * `tokens` - Token stream from the lexer, ending in `Eof`
///
/// # Example
/// ```text
/// use 'math':{*}
///
/// fn main() str {}
/// ```
pub fn parse(
    source: &SourceFile,
    tokens: &[Token],
) -> Result<Program, ParseError> {
    tracing::debug!("parsing {} ({} tokens)", source.name, tokens.len());

    let mut state = ParserState::new(source, tokens);
    let mut children = Vec::new();

    while !state.at_end() {
        children.push(declarations::parse_item(&mut state)?);
    }

    tracing::debug!("parsing complete: {} top-level nodes", children.len());
    Ok(Program {
        source: source.name.clone(),
        children,
    })
}

//! Frontend pipeline
//!
//! Source text → tokens → declaration tree → canonical text. Each stage takes
//! the complete output of the previous one; the first error ends the run.

use thiserror::Error;
use tracing::debug;

use crate::util::config::FmtConfig;
use crate::util::span::SourceFile;

pub mod format;
pub mod lexer;
pub mod parser;

use format::Formatter;
use lexer::{LexError, Token};
use parser::{ParseError, Program};

/// Frontend context
#[derive(Debug, Clone, Default)]
pub struct Frontend {
    formatter: Formatter,
}

impl Frontend {
    /// Create a frontend with the default two-space formatter
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fmt_config(config: FmtConfig) -> Self {
        Self {
            formatter: Formatter::with_config(config),
        }
    }

    /// Lexical analysis only
    pub fn lex(
        &self,
        source: &SourceFile,
    ) -> Result<Vec<Token>, Error> {
        Ok(lexer::tokenize(source)?)
    }

    /// Lex and parse, keeping trivia nodes
    pub fn parse(
        &self,
        source: &SourceFile,
    ) -> Result<Program, Error> {
        debug!("Parsing {} ({} bytes)", source.name, source.content.len());
        let tokens = lexer::tokenize(source)?;
        let program = parser::parse(source, &tokens)?;
        debug!(
            "Parsing successful, got {} top-level declarations",
            program.declarations().count()
        );
        Ok(program)
    }

    /// Lex, parse, strip trivia and print canonical text
    pub fn format(
        &self,
        source: &SourceFile,
    ) -> Result<String, Error> {
        let program = self.parse(source)?.without_trivia();
        let text = self.formatter.format_program(&program);
        debug!("Formatted {} into {} bytes", source.name, text.len());
        Ok(text)
    }
}

/// Frontend errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Positioned diagnostic with caret markup
    pub fn render(
        &self,
        source: &SourceFile,
    ) -> String {
        match self {
            Error::Lex(e) => e.render(source),
            Error::Parse(e) => e.render(source),
        }
    }
}

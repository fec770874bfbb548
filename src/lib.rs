//! Cool Programming Language - frontend
//!
//! Lexer, parser and canonical formatter for a small curly-brace language in
//! which spaces and newlines are tokens of their own.
//!
//! # Example
//!
//! ```
//! use cool::{format_source, SourceFile};
//!
//! let src = SourceFile::repl("fn hi() str {}");
//! assert_eq!(format_source(&src).unwrap(), "fn hi() str {}\n\n");
//! ```

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod repl;

// Utility modules
pub mod util;

// Re-exports
pub use frontend::{Error, Frontend};
pub use frontend::format::Formatter;
pub use frontend::lexer::{tokenize, Token, TokenKind};
pub use frontend::parser::{parse, Node, Program};
pub use util::span::SourceFile;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Cool";

/// Lex and parse a source, keeping trivia nodes
pub fn parse_source(source: &SourceFile) -> Result<Program, Error> {
    Frontend::new().parse(source)
}

/// Format a source with the default two-space layout
pub fn format_source(source: &SourceFile) -> Result<String, Error> {
    Frontend::new().format(source)
}

/// Check a source for syntax errors without producing output
pub fn check_source(source: &SourceFile) -> Result<(), Error> {
    parse_source(source).map(|_| ())
}

//! Error handling integration tests
//!
//! The first error from either stage replaces the result.

use cool::frontend::lexer::LexError;
use cool::frontend::parser::ParseError;
use cool::{check_source, format_source, Error, SourceFile};

#[test]
fn test_lex_error_surfaces_through_format() {
    let src = SourceFile::repl("use 'abc");
    let err = format_source(&src).unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::UnterminatedString { .. })));
    assert_eq!(
        err.render(&src),
        "  File <repl>, line 1\nuse 'abc\n    ^^^^\nunterminated string literal"
    );
}

#[test]
fn test_parse_error_surfaces_through_format() {
    let src = SourceFile::new("main.cool", "fn main() {\n  let x = 1\n}\n");
    let err = format_source(&src).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::NotImplemented { .. })));
    assert_eq!(
        err.render(&src),
        "  File main.cool, line 2\n  let x = 1\n  ^\nvariable declarations are not implemented yet"
    );
}

#[test]
fn test_mixed_wildcard_import() {
    let err = check_source(&SourceFile::repl("use 'math':{*, a}")).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::InvalidImport { .. })));
    assert_eq!(err.to_string(), "invalid import syntax: '*' must be the only entry");
}

#[test]
fn test_lex_error_wins_over_parse_error() {
    // `let` would fail parsing, but lexing fails first on the `@`
    let err = check_source(&SourceFile::repl("let x = 1 @")).unwrap_err();
    assert!(matches!(err, Error::Lex(LexError::UnexpectedChar { ch: '@', .. })));
}

#[test]
fn test_arrow_body_is_rejected() {
    let err = check_source(&SourceFile::repl("fn one() i8 -> 1")).unwrap_err();
    assert_eq!(err.to_string(), "arrow function bodies are not implemented yet");
}

#[test]
fn test_invalid_number() {
    let src = SourceFile::repl("enum A { X }\n1..2");
    let err = check_source(&src).unwrap_err();
    assert_eq!(err.to_string(), "invalid numeric syntax: 1..2");
    assert!(err.render(&src).starts_with("  File <repl>, line 2\n1..2\n^^^^\n"));
}

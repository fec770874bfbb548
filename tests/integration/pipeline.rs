//! End-to-end pipeline tests through the public API

use std::io::Write;

use cool::frontend::parser::{ImportSet, Node};
use cool::{format_source, parse_source, tokenize, Frontend, SourceFile, TokenKind};

#[test]
fn test_tokenize_ends_with_single_eof() {
    let src = SourceFile::repl("use 'math':{*}\n");
    let tokens = tokenize(&src).unwrap();
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
}

#[test]
fn test_parse_source_keeps_program_name() {
    let src = SourceFile::new("lib/math.cool", "use 'io'\n");
    let program = parse_source(&src).unwrap();
    assert_eq!(program.source, "lib/math.cool");
    let first = program.declarations().next();
    match first {
        Some(Node::Import(import)) => {
            assert_eq!(import.specifier, "io");
            assert!(import.includes.is_none());
        }
        other => panic!("Expected Import, got {:?}", other),
    }
}

#[test]
fn test_everything_import_end_to_end() {
    let program = parse_source(&SourceFile::repl("use 'math':{*}"))
        .unwrap()
        .without_trivia();
    match &program.children[0] {
        Node::Import(import) => assert_eq!(import.includes, Some(ImportSet::Everything)),
        other => panic!("Expected Import, got {:?}", other),
    }
}

#[test]
fn test_format_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "enum   Direction{{NORTH\nWEST}}").unwrap();

    let src = SourceFile::from_path(file.path()).unwrap();
    assert_eq!(src.name, file.path().display().to_string());
    assert_eq!(
        format_source(&src).unwrap(),
        "enum Direction {\n  NORTH\n  WEST\n}\n\n"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SourceFile::from_path(std::path::Path::new("/definitely/not/here.cool")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn test_frontend_with_wide_indent() {
    use cool::util::config::FmtConfig;

    let frontend = Frontend::with_fmt_config(FmtConfig {
        indent_width: 4,
        use_tabs: false,
    });
    let out = frontend
        .format(&SourceFile::repl("fn f(a str) {}"))
        .unwrap();
    assert_eq!(out, "fn f(\n    a str\n) {}\n\n");
}

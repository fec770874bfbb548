//! Parser tests
//!
//! - imports: `use` 声明
//! - enums: `enum` 声明
//! - fn_def: 函数声明与嵌套
//! - errors: 诊断信息
//! - state: 游标与前瞻


use crate::frontend::lexer::tokenize;
use crate::frontend::parser::{parse, FnDecl, Node, ParseError, Program};
use crate::util::span::SourceFile;

fn try_parse(source: &str) -> Result<Program, ParseError> {
    let src = SourceFile::repl(source);
    let tokens = tokenize(&src).unwrap();
    parse(&src, &tokens)
}

/// Parse and drop trivia
fn parse_ok(source: &str) -> Vec<Node> {
    try_parse(source).unwrap().without_trivia().children
}

/// Parse expecting failure; returns the error and its rendering
fn parse_err(source: &str) -> (ParseError, String) {
    let src = SourceFile::repl(source);
    let tokens = tokenize(&src).unwrap();
    let err = parse(&src, &tokens).unwrap_err();
    let rendered = err.render(&src);
    (err, rendered)
}

fn as_fn(node: &Node) -> &FnDecl {
    match node {
        Node::Fn(f) => f,
        other => panic!("Expected Fn node, got {:?}", other),
    }
}

//! Lexer tests module
//!
//! - basic: 基础测试（标识符、关键字、空白符、换行、注释）
//! - operators: 运算符与标点测试
//! - literals: 字面量测试（整数、浮点、字符串、模板）
//! - errors: 错误处理测试
//! - props: 属性测试


use crate::frontend::lexer::{tokenize, Token, TokenKind};
use crate::util::span::SourceFile;

/// Lex `<repl>` input, panicking on error
fn lex(source: &str) -> Vec<Token> {
    tokenize(&SourceFile::repl(source)).unwrap()
}

/// Kinds of all tokens, Eof included
fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

/// Kinds without trivia or Eof
fn meaningful_kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia() && *k != TokenKind::Eof)
        .collect()
}

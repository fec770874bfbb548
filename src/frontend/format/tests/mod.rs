//! Formatter tests

use crate::frontend::format::Formatter;
use crate::frontend::lexer::tokenize;
use crate::frontend::parser::{parse, Node, ParseError, Program};
use crate::util::config::FmtConfig;
use crate::util::span::{Position, SourceFile, Span};

fn program(source: &str) -> Program {
    let src = SourceFile::repl(source);
    let tokens = tokenize(&src).unwrap();
    parse(&src, &tokens).unwrap().without_trivia()
}

fn fmt(source: &str) -> String {
    Formatter::new().format_program(&program(source))
}

#[test]
fn test_empty_fn_with_return_type() {
    assert_eq!(fmt("fn hi() str {}"), "fn hi() str {}\n\n");
}

#[test]
fn test_empty_fn_without_return_type() {
    assert_eq!(fmt("fn  hi ( )   {   }"), "fn hi() {}\n\n");
}

#[test]
fn test_params_one_per_line() {
    assert_eq!(
        fmt("fn main (this str n i8) str {}"),
        "fn main(\n  this str\n  n i8\n) str {}\n\n"
    );
}

#[test]
fn test_import_forms() {
    assert_eq!(fmt("use 'math'"), "use 'math'\n\n");
    assert_eq!(fmt("use 'math':{\n  *\n}"), "use 'math':{*}\n\n");
    assert_eq!(fmt("use 'math':{a, b}"), "use 'math':{\n  a\n  b\n}\n\n");
}

#[test]
fn test_enum_forms() {
    assert_eq!(
        fmt("enum Direction { NORTH WEST SOUTH EAST }"),
        "enum Direction {\n  NORTH\n  WEST\n  SOUTH\n  EAST\n}\n\n"
    );
    assert_eq!(fmt("enum Empty {\n\n}"), "enum Empty {}\n\n");
}

#[test]
fn test_single_declaration_body_uses_arrow() {
    assert_eq!(
        fmt("fn outer() { fn inner() str {} }"),
        "fn outer() -> fn inner() str {}\n\n"
    );
}

#[test]
fn test_arrow_output_is_rejected_by_parser() {
    let formatted = fmt("fn a() { fn b() {} }");
    assert_eq!(formatted, "fn a() -> fn b() {}\n\n");

    let src = SourceFile::repl(formatted);
    let tokens = tokenize(&src).unwrap();
    let err = parse(&src, &tokens).unwrap_err();
    assert!(matches!(
        err,
        ParseError::NotImplemented {
            feature: "arrow function bodies",
            ..
        }
    ));
    assert_eq!(err.span().start.column, 8);
}

#[test]
fn test_multi_declaration_body_is_reindented() {
    let source = "fn a() {\n fn b() {\n fn c() {}\n fn d() {}\n }\n\n\n fn e() {}\n}";
    assert_eq!(
        fmt(source),
        "fn a() {\n  fn b() {\n    fn c() {}\n    fn d() {}\n  }\n  fn e() {}\n}\n\n"
    );
}

#[test]
fn test_nested_lists_are_reindented() {
    let source = "fn a() {\n  enum E { X Y }\n  use 'm':{p}\n}";
    assert_eq!(
        fmt(source),
        "fn a() {\n  enum E {\n    X\n    Y\n  }\n  use 'm':{\n    p\n  }\n}\n\n"
    );
}

#[test]
fn test_full_example() {
    let source = "
#this is crazy

use 'math':{
  *
}

enum Direction {
  NORTH
  WEST
  SOUTH
  EAST
}

fn main (this str) str {
  fn name() str {
    fn age() i8 {
      fn hello() str {

      }
    }
  }
  fn hi() str {

  }
}

";
    let expected = "use 'math':{*}\n\n\
enum Direction {\n  NORTH\n  WEST\n  SOUTH\n  EAST\n}\n\n\
fn main(\n  this str\n) str {\n  fn name() str -> fn age() i8 -> fn hello() str {}\n  fn hi() str {}\n}\n\n";
    assert_eq!(fmt(source), expected);
}

#[test]
fn test_trivia_nodes_are_skipped() {
    let span = Span::point(Position::default());
    let nodes = vec![Node::Newline(span), Node::Spacing(span)];
    assert_eq!(Formatter::new().format_nodes(&nodes), "");
}

#[test]
fn test_unstripped_body_counts_only_declarations() {
    let src = SourceFile::repl("fn a() {\n  fn b() {}\n}");
    let tokens = tokenize(&src).unwrap();
    let raw = parse(&src, &tokens).unwrap();
    let out = Formatter::new().format_program(&raw);
    assert_eq!(out, "fn a() -> fn b() {}\n\n");
}

#[test]
fn test_tab_indentation() {
    let formatter = Formatter::with_config(FmtConfig {
        indent_width: 2,
        use_tabs: true,
    });
    let out = formatter.format_program(&program("enum E { A }"));
    assert_eq!(out, "enum E {\n\tA\n}\n\n");
}

#[test]
fn test_format_is_deterministic() {
    let tree = program("use 'a':{b c}\nfn f(x str) {}");
    let formatter = Formatter::new();
    assert_eq!(formatter.format_program(&tree), formatter.format_program(&tree));
}

#[test]
fn test_round_trip_is_idempotent() {
    let sources = [
        "use 'math':{*}",
        "use 'math':{a, b}",
        "enum Direction { NORTH WEST SOUTH EAST }",
        "enum Empty {}",
        "fn hi() str {}",
        "fn main(this str n i8) str {}",
        "fn a() { fn b() {} enum C { D } }",
        "fn a() { fn b() { fn c() {} fn d() {} } fn e() {} }",
    ];
    for source in sources {
        let once = fmt(source);
        let twice = fmt(&once);
        assert_eq!(once, twice, "{source}");
    }
}

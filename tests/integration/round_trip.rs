//! Format → parse → format round trips

use proptest::prelude::*;

use cool::{format_source, SourceFile};

fn fmt(text: &str) -> String {
    format_source(&SourceFile::repl(text)).unwrap()
}

#[test]
fn test_program_round_trip() {
    let source = "# header\nuse 'math':{*}\nuse 'io':{read, write}\n\nenum Direction { NORTH WEST }\n\nfn main (this str) str {\n  fn a() {}\n  fn b() i8 {}\n}\n";
    let once = fmt(source);
    assert_eq!(fmt(&once), once);
}

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("keywords and type names are reserved", |s| {
        cool::frontend::lexer::Keyword::from_word(s).is_none()
            && cool::frontend::lexer::BuiltinType::from_word(s).is_none()
    })
}

/// Functions whose bodies have zero or at least two declarations round-trip
fn fn_decl() -> impl Strategy<Value = String> {
    let leaf = (ident(), prop::option::of(ident()))
        .prop_map(|(name, ret)| format!("fn {}() {} {{}}", name, ret.unwrap_or_default()));
    leaf.prop_recursive(3, 16, 4, |inner| {
        (ident(), prop::collection::vec(inner, 2..4)).prop_map(|(name, body)| {
            format!("fn {}() {{\n{}\n}}", name, body.join("\n"))
        })
    })
}

proptest! {
    #[test]
    fn formatting_is_idempotent(decls in prop::collection::vec(fn_decl(), 1..4)) {
        let source = decls.join("\n");
        let once = fmt(&source);
        prop_assert_eq!(fmt(&once), once);
    }
}

//! Abstract Syntax Tree
//!
//! Nodes are built once by the parser. [`Program::without_trivia`] rebuilds a
//! tree without whitespace and comment nodes for the formatter.

use crate::util::span::Span;

/// Root of a parsed source
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Display name of the source (`<repl>` or a path)
    pub source: String,
    /// Top-level declarations and trivia, in source order
    pub children: Vec<Node>,
}

impl Program {
    /// Same program with trivia removed at every nesting level
    pub fn without_trivia(self) -> Program {
        Program {
            source: self.source,
            children: strip_trivia(self.children),
        }
    }

    /// Top-level declarations, skipping trivia
    pub fn declarations(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|node| !node.is_trivia())
    }
}

/// A declaration or a piece of trivia
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Comment(Comment),
    Newline(Span),
    Spacing(Span),
    Import(Import),
    Fn(FnDecl),
    Enum(EnumDecl),
}

impl Node {
    /// Newline, spacing and comment nodes
    pub fn is_trivia(&self) -> bool {
        matches!(self, Node::Comment(_) | Node::Newline(_) | Node::Spacing(_))
    }

    pub fn span(&self) -> Span {
        match self {
            Node::Comment(c) => c.span,
            Node::Newline(span) | Node::Spacing(span) => *span,
            Node::Import(i) => i.span,
            Node::Fn(f) => f.span,
            Node::Enum(e) => e.span,
        }
    }
}

/// Drop trivia nodes, recursing into function bodies
pub fn strip_trivia(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .filter(|node| !node.is_trivia())
        .map(|node| match node {
            Node::Fn(f) => Node::Fn(FnDecl {
                body: strip_trivia(f.body),
                ..f
            }),
            other => other,
        })
        .collect()
}

/// `# ...` comment, text includes the `#`
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
    pub span: Span,
}

/// `use 'specifier'` with an optional include list
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub specifier: String,
    pub includes: Option<ImportSet>,
    pub span: Span,
}

/// What an import brings into scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSet {
    /// `{*}`
    Everything,
    /// Non-empty, in source order. Duplicates are kept.
    Names(Vec<String>),
}

/// `fn name(params) [ret] body`
#[derive(Debug, Clone, PartialEq)]
pub struct FnDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub return_type: Option<String>,
    /// `-> expr` body form; always `false` until arrow bodies parse
    pub is_arrow: bool,
    /// Nested declarations (and trivia) of a block body
    pub body: Vec<Node>,
    pub span: Span,
}

/// `name type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

/// `enum Name { VALUE* }`
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: String,
    pub values: Vec<EnumValue>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub span: Span,
}

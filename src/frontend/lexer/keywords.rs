//! Keyword, built-in type and operator tables
//!
//! Words are classified keyword first, then built-in type, then identifier.

use std::fmt;

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Use,
    Let,
    Mut,
    Fn,
    True,
    False,
    Nil,
    Defer,
    Class,
    SelfValue,
    Struct,
    Enum,
    Union,
    If,
    Elif,
    Else,
    Match,
    For,
    Return,
    Typeof,
    Del,
}

/// Every keyword paired with its source spelling
pub const KEYWORDS: &[(&str, Keyword)] = &[
    ("use", Keyword::Use),
    ("let", Keyword::Let),
    ("mut", Keyword::Mut),
    ("fn", Keyword::Fn),
    ("true", Keyword::True),
    ("false", Keyword::False),
    ("nil", Keyword::Nil),
    ("defer", Keyword::Defer),
    ("class", Keyword::Class),
    ("self", Keyword::SelfValue),
    ("struct", Keyword::Struct),
    ("enum", Keyword::Enum),
    ("union", Keyword::Union),
    ("if", Keyword::If),
    ("elif", Keyword::Elif),
    ("else", Keyword::Else),
    ("match", Keyword::Match),
    ("for", Keyword::For),
    ("return", Keyword::Return),
    ("typeof", Keyword::Typeof),
    ("del", Keyword::Del),
];

impl Keyword {
    pub fn from_word(word: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == word)
            .map(|&(_, kw)| kw)
    }

    pub fn as_str(self) -> &'static str {
        KEYWORDS
            .iter()
            .find(|&&(_, kw)| kw == self)
            .map(|&(text, _)| text)
            .unwrap_or_default()
    }
}

impl fmt::Display for Keyword {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Str,
    I8,
    I16,
    I32,
    I64,
    /// decimal
    F32,
    /// float
    F64,
    Rune,
}

pub const BUILTIN_TYPES: &[(&str, BuiltinType)] = &[
    ("str", BuiltinType::Str),
    ("i8", BuiltinType::I8),
    ("i16", BuiltinType::I16),
    ("i32", BuiltinType::I32),
    ("i64", BuiltinType::I64),
    ("f32", BuiltinType::F32),
    ("f64", BuiltinType::F64),
    ("rune", BuiltinType::Rune),
];

impl BuiltinType {
    pub fn from_word(word: &str) -> Option<Self> {
        BUILTIN_TYPES
            .iter()
            .find(|(text, _)| *text == word)
            .map(|&(_, ty)| ty)
    }

    pub fn as_str(self) -> &'static str {
        BUILTIN_TYPES
            .iter()
            .find(|&&(_, ty)| ty == self)
            .map(|&(text, _)| text)
            .unwrap_or_default()
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-character arithmetic and comparison operators
pub const OPERATORS: &[char] = &['-', '+', '*', '/', '%', '^', '<', '>'];

#[inline]
pub fn is_operator_char(c: char) -> bool {
    OPERATORS.contains(&c)
}

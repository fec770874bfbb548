//! Declaration parsing - imports, enums, functions, variables
//!
//! Implements parsing for:
//! - Imports: `use 'path'` or `use 'path':{a b}` / `use 'path':{*}`
//! - Enums: `enum Name { A B C }`
//! - Functions: `fn name(a str b i8) ret { ... }`
//! - Variables: `let ...` (reserved, always an error)
//!
//! The same item rule is used at top level and inside function bodies, so
//! declarations nest to any depth.

use crate::frontend::lexer::{Keyword, TokenKind};
use crate::frontend::parser::ast::*;
use crate::frontend::parser::{ParseError, ParserState};

/// Parse one item: trivia, a comment, or a keyword-led declaration
pub fn parse_item(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let token = state.current();
    let node = match token.kind {
        TokenKind::Newline => Node::Newline(token.span),
        TokenKind::Spacing => Node::Spacing(token.span),
        TokenKind::Comment => Node::Comment(Comment {
            text: token.text().to_string(),
            span: token.span,
        }),
        TokenKind::Keyword(Keyword::Use) => return parse_import(state).map(Node::Import),
        TokenKind::Keyword(Keyword::Enum) => return parse_enum(state).map(Node::Enum),
        TokenKind::Keyword(Keyword::Fn) => return parse_fn(state).map(Node::Fn),
        TokenKind::Keyword(Keyword::Let) => return Err(parse_variable(state)),
        _ => return Err(state.unexpected()),
    };
    state.advance();
    Ok(node)
}

/// `let` is reserved but not implemented
fn parse_variable(state: &mut ParserState<'_>) -> ParseError {
    ParseError::NotImplemented {
        feature: "variable declarations",
        span: state.here(),
    }
}

/// Identifier text at the cursor
fn expect_identifier(
    state: &mut ParserState<'_>,
    what: &str,
) -> Result<String, ParseError> {
    if !state.at(TokenKind::Identifier) {
        return Err(state.expected(what));
    }
    let name = state.current().text().to_string();
    state.advance();
    Ok(name)
}

/// Parse `use STRING [':' '{' entries '}']`
pub fn parse_import(state: &mut ParserState<'_>) -> Result<Import, ParseError> {
    let start = state.start();
    state.consume(TokenKind::Keyword(Keyword::Use))?;
    state.skip_spacing();

    let specifier = match state.peek_meaningful() {
        Some((index, token)) if token.kind == TokenKind::String => {
            state.advance_to(index + 1);
            token.text().to_string()
        }
        _ => return Err(state.expected("string")),
    };

    let includes = match state.peek_meaningful() {
        Some((index, token)) if token.kind == TokenKind::Colon => {
            state.advance_to(index + 1);
            state.skip_spacing();
            if !state.at(TokenKind::LBrace) {
                return Err(state.expected(TokenKind::LBrace.to_string()));
            }
            Some(parse_include_list(state)?)
        }
        _ => None,
    };

    tracing::debug!("parsed import '{}'", specifier);
    Ok(Import {
        specifier,
        includes,
        span: state.span_from(start),
    })
}

/// Parse `{ (IDENT | '*')* }`; entries may be separated by commas or whitespace
fn parse_include_list(state: &mut ParserState<'_>) -> Result<ImportSet, ParseError> {
    let open = state.here();
    state.consume(TokenKind::LBrace)?;

    let mut names = Vec::new();
    let mut everything = false;

    loop {
        while state.kind().is_trivia() || state.at(TokenKind::Comma) {
            state.advance();
        }

        match state.kind() {
            TokenKind::RBrace => break,
            TokenKind::Operator if state.current().is_operator("*") => {
                if everything || !names.is_empty() {
                    return Err(mixed_wildcard(state));
                }
                everything = true;
                state.advance();
            }
            TokenKind::Identifier => {
                if everything {
                    return Err(mixed_wildcard(state));
                }
                names.push(state.current().text().to_string());
                state.advance();
            }
            TokenKind::Eof => return Err(state.expected(TokenKind::RBrace.to_string())),
            _ => return Err(state.unexpected()),
        }
    }
    state.consume(TokenKind::RBrace)?;

    if everything {
        Ok(ImportSet::Everything)
    } else if names.is_empty() {
        Err(ParseError::InvalidImport {
            reason: "empty include list".to_string(),
            span: open,
        })
    } else {
        Ok(ImportSet::Names(names))
    }
}

fn mixed_wildcard(state: &ParserState<'_>) -> ParseError {
    ParseError::InvalidImport {
        reason: "'*' must be the only entry".to_string(),
        span: state.here(),
    }
}

/// Parse `enum IDENT { IDENT* }`
pub fn parse_enum(state: &mut ParserState<'_>) -> Result<EnumDecl, ParseError> {
    let start = state.start();
    state.consume(TokenKind::Keyword(Keyword::Enum))?;
    state.skip_spacing();
    let name = expect_identifier(state, "enum name")?;
    state.skip_spacing();
    state.consume(TokenKind::LBrace)?;

    let mut values = Vec::new();
    loop {
        state.skip_trivia();
        match state.kind() {
            TokenKind::RBrace => break,
            TokenKind::Identifier => {
                let token = state.current();
                values.push(EnumValue {
                    name: token.text().to_string(),
                    span: token.span,
                });
                state.advance();
            }
            TokenKind::Eof => return Err(state.expected(TokenKind::RBrace.to_string())),
            _ => return Err(state.unexpected()),
        }
    }
    state.consume(TokenKind::RBrace)?;

    tracing::debug!("parsed enum {} with {} values", name, values.len());
    Ok(EnumDecl {
        name,
        values,
        span: state.span_from(start),
    })
}

/// Identifier or built-in type name at the cursor
fn parse_type_name(state: &mut ParserState<'_>) -> Option<String> {
    match state.kind() {
        TokenKind::Identifier | TokenKind::Type(_) => {
            let ty = state.current().text().to_string();
            state.advance();
            Some(ty)
        }
        _ => None,
    }
}

/// Parse `fn IDENT ( (IDENT TYPE)* ) [TYPE] body`
pub fn parse_fn(state: &mut ParserState<'_>) -> Result<FnDecl, ParseError> {
    let start = state.start();
    state.consume(TokenKind::Keyword(Keyword::Fn))?;
    state.skip_spacing();
    let name = expect_identifier(state, "function name")?;
    state.skip_spacing();
    state.consume(TokenKind::LParen)?;

    let mut params = Vec::new();
    loop {
        state.skip_trivia();
        if state.at(TokenKind::RParen) {
            break;
        }
        let param_name = expect_identifier(state, "parameter name")?;
        state.skip_spacing();
        let ty = parse_type_name(state).ok_or_else(|| state.expected("parameter type"))?;
        params.push(Param {
            name: param_name,
            ty,
        });
    }
    state.consume(TokenKind::RParen)?;
    state.skip_spacing();

    let return_type = parse_type_name(state);
    if return_type.is_some() {
        state.skip_spacing();
    }

    let body = match state.kind() {
        TokenKind::LBrace => parse_block(state)?,
        TokenKind::Arrow => {
            // `-> expr` needs expressions, which this grammar does not have yet
            return Err(ParseError::NotImplemented {
                feature: "arrow function bodies",
                span: state.here(),
            });
        }
        _ => return Err(state.expected(TokenKind::LBrace.to_string())),
    };

    tracing::debug!(
        "parsed fn {} ({} params, {} body items)",
        name,
        params.len(),
        body.len()
    );
    Ok(FnDecl {
        name,
        params,
        return_type,
        is_arrow: false,
        body,
        span: state.span_from(start),
    })
}

/// Parse `{ item* }`
pub fn parse_block(state: &mut ParserState<'_>) -> Result<Vec<Node>, ParseError> {
    state.consume(TokenKind::LBrace)?;

    let mut items = Vec::new();
    loop {
        match state.kind() {
            TokenKind::RBrace => break,
            TokenKind::Eof => return Err(state.expected(TokenKind::RBrace.to_string())),
            _ => items.push(parse_item(state)?),
        }
    }
    state.consume(TokenKind::RBrace)?;

    Ok(items)
}

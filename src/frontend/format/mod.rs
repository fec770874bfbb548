//! Canonical source formatter
//!
//! Re-serializes a declaration tree. The input is expected to be trivia-free
//! (see [`Program::without_trivia`]); trivia nodes that slip through are
//! skipped.
//!
//! Layout rules:
//! - every declaration ends with a blank separator line (`"\n\n"`)
//! - lists (include names, enum values, parameters) go one per line, indented
//! - a function body with one declaration is written `-> <declaration>`

use crate::frontend::parser::{EnumDecl, FnDecl, Import, ImportSet, Node, Program};
use crate::util::config::FmtConfig;

/// Source formatter
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FmtConfig,
}

impl Formatter {
    /// Two-space indentation
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FmtConfig) -> Self {
        Self { config }
    }

    pub fn format_program(
        &self,
        program: &Program,
    ) -> String {
        self.format_nodes(&program.children)
    }

    /// Format a declaration list starting at column zero
    pub fn format_nodes(
        &self,
        nodes: &[Node],
    ) -> String {
        let mut out = Printer::new(self.config.indent_unit());
        for node in nodes {
            match node {
                Node::Import(import) => self.write_import(&mut out, import),
                Node::Enum(decl) => self.write_enum(&mut out, decl),
                Node::Fn(decl) => self.write_fn(&mut out, decl),
                Node::Comment(_) | Node::Newline(_) | Node::Spacing(_) => continue,
            }
            out.blank_line();
        }
        out.finish()
    }

    fn write_import(
        &self,
        out: &mut Printer,
        import: &Import,
    ) {
        out.push("use '");
        out.push(&import.specifier);
        out.push("'");
        match &import.includes {
            Some(ImportSet::Everything) => out.push(":{*}"),
            Some(ImportSet::Names(names)) => {
                out.push(":{");
                out.indented_lines(names.iter().map(String::as_str));
                out.push("}");
            }
            None => {}
        }
    }

    fn write_enum(
        &self,
        out: &mut Printer,
        decl: &EnumDecl,
    ) {
        out.push("enum ");
        out.push(&decl.name);
        out.push(" {");
        out.indented_lines(decl.values.iter().map(|v| v.name.as_str()));
        out.push("}");
    }

    fn write_fn(
        &self,
        out: &mut Printer,
        decl: &FnDecl,
    ) {
        out.push("fn ");
        out.push(&decl.name);
        out.push("(");
        let params: Vec<String> = decl
            .params
            .iter()
            .map(|p| format!("{} {}", p.name, p.ty))
            .collect();
        out.indented_lines(params.iter().map(String::as_str));
        out.push(") ");

        if let Some(ret) = &decl.return_type {
            out.push(ret);
            out.push(" ");
        }

        let body_len = decl.body.iter().filter(|n| !n.is_trivia()).count();
        match body_len {
            0 => out.push("{}"),
            1 => {
                out.push("-> ");
                out.push(self.format_nodes(&decl.body).trim_end());
            }
            _ => {
                out.push("{");
                out.newline();
                out.indent();
                for line in self.format_nodes(&decl.body).lines() {
                    if !line.is_empty() {
                        out.push(line);
                        out.newline();
                    }
                }
                out.dedent();
                out.push("}");
            }
        }
    }
}

/// Indentation-aware string builder
struct Printer {
    code: String,
    unit: String,
    depth: usize,
    at_line_start: bool,
}

impl Printer {
    fn new(unit: String) -> Self {
        Self {
            code: String::new(),
            unit,
            depth: 0,
            at_line_start: true,
        }
    }

    /// Append text; indentation is written before the first text on a line
    fn push(
        &mut self,
        text: &str,
    ) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            for _ in 0..self.depth {
                self.code.push_str(&self.unit);
            }
            self.at_line_start = false;
        }
        self.code.push_str(text);
    }

    fn newline(&mut self) {
        self.code.push('\n');
        self.at_line_start = true;
    }

    /// End the current declaration and leave one empty line
    fn blank_line(&mut self) {
        self.newline();
        self.newline();
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Newline, then each item on its own indented line; nothing when empty
    fn indented_lines<'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a str>,
    ) {
        let mut items = items.into_iter().peekable();
        if items.peek().is_none() {
            return;
        }
        self.newline();
        self.indent();
        for item in items {
            self.push(item);
            self.newline();
        }
        self.dedent();
    }

    fn finish(self) -> String {
        self.code
    }
}

#[cfg(test)]
mod tests;

//! Positioned diagnostics
//!
//! Every lexer and parser error is rendered through [`DiagnosticRenderer`]:
//!
//! ```text
//!   File <name>, line <n>
//! <source line>
//!     ^^^^
//! <message>
//! ```
//!
//! The caret run covers `[span.start, span.end)`. An empty span yields a
//! single caret at the start column.

use crate::util::span::{SourceFile, Span};

/// A message anchored to a source span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Render with the default renderer
    pub fn render(
        &self,
        source: &SourceFile,
    ) -> String {
        DiagnosticRenderer::new().render(self, source)
    }
}

/// 渲染器配置
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 指示字符 (默认: "^")
    pub indicator: char,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self { indicator: '^' }
    }
}

/// 诊断渲染器
#[derive(Debug, Clone, Default)]
pub struct DiagnosticRenderer {
    config: EmitterConfig,
}

impl DiagnosticRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    pub fn render(
        &self,
        diagnostic: &Diagnostic,
        source: &SourceFile,
    ) -> String {
        let span = diagnostic.span;
        let line = source.line_text(span.start.line);

        let mut output = format!("  File {}, line {}\n", source.name, span.start.line);
        output.push_str(line);
        output.push('\n');
        output.push_str(&self.caret_markup(span, line));
        output.push('\n');
        output.push_str(&diagnostic.message);
        output
    }

    /// Spaces up to the start column followed by the indicator run
    fn caret_markup(
        &self,
        span: Span,
        line: &str,
    ) -> String {
        let start_column = span.start.column.max(1);
        let width = if span.end.line == span.start.line {
            span.end.column.saturating_sub(start_column)
        } else {
            // Spans that cross a line end are clipped to the first line
            (line.chars().count() + 1).saturating_sub(start_column)
        }
        .max(1);

        let mut markup = " ".repeat(start_column - 1);
        markup.extend(std::iter::repeat(self.config.indicator).take(width));
        markup
    }
}

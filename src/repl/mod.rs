//! Line-based REPL with rustyline
//!
//! Each submitted block is parsed as `<repl>` and echoed back in canonical
//! form. A block is submitted once its braces balance, or on an empty line.

use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::frontend::lexer::{tokenize, LexError, TokenKind};
use crate::frontend::Frontend;
use crate::util::config::ReplConfig;
use crate::util::span::SourceFile;

/// Result of evaluating one block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalResult {
    /// Canonical text of the block
    Formatted(String),
    /// Rendered diagnostic
    Error(String),
}

/// Parse and format one block of input typed at the prompt
pub fn eval_block(
    frontend: &Frontend,
    input: &str,
) -> EvalResult {
    let source = SourceFile::repl(input);
    match frontend.format(&source) {
        Ok(text) => EvalResult::Formatted(text),
        Err(e) => EvalResult::Error(e.render(&source)),
    }
}

/// Whether `input` can be submitted: braces balance and no template is open
///
/// Lexing errors other than an open template count as complete so the
/// diagnostic is shown right away.
pub fn is_complete(input: &str) -> bool {
    match tokenize(&SourceFile::repl(input)) {
        Ok(tokens) => {
            let depth: i64 = tokens
                .iter()
                .map(|t| match t.kind {
                    TokenKind::LBrace => 1,
                    TokenKind::RBrace => -1,
                    _ => 0,
                })
                .sum();
            depth <= 0
        }
        Err(LexError::UnterminatedTemplate { .. }) => false,
        Err(_) => true,
    }
}

/// Line REPL
pub struct LineRepl {
    config: ReplConfig,
    editor: DefaultEditor,
    frontend: Frontend,
}

impl LineRepl {
    pub fn new(
        config: ReplConfig,
        frontend: Frontend,
    ) -> Result<Self, ReadlineError> {
        let rl_config = Config::builder()
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .build();
        let mut editor = DefaultEditor::with_config(rl_config)?;

        if let Some(history_file) = &config.history_file {
            if history_file.exists() {
                if let Err(e) = editor.load_history(history_file) {
                    tracing::warn!("could not load history {}: {}", history_file.display(), e);
                }
            }
        }

        Ok(Self {
            config,
            editor,
            frontend,
        })
    }

    /// Run until Ctrl-D or `:quit`
    pub fn run(&mut self) -> Result<(), ReadlineError> {
        println!("{} {} REPL - blocks are echoed in canonical form", crate::NAME, crate::VERSION);
        println!("Press Ctrl+D or type :quit to exit\n");

        let mut buffer = String::new();

        loop {
            let prompt = if buffer.is_empty() {
                &self.config.prompt
            } else {
                &self.config.continuation_prompt
            };

            match self.editor.readline(prompt) {
                Ok(line) => {
                    if buffer.is_empty() && line.trim() == ":quit" {
                        break;
                    }
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }

                    let submit = line.trim().is_empty();
                    buffer.push_str(&line);
                    buffer.push('\n');

                    if buffer.trim().is_empty() {
                        buffer.clear();
                        continue;
                    }
                    if !submit && !is_complete(&buffer) {
                        continue;
                    }

                    match eval_block(&self.frontend, &buffer) {
                        EvalResult::Formatted(text) => print!("{}", text),
                        EvalResult::Error(diagnostic) => eprintln!("{}", diagnostic),
                    }
                    buffer.clear();
                }
                Err(ReadlineError::Eof) => break,
                Err(ReadlineError::Interrupted) => {
                    println!("(Interrupted)");
                    buffer.clear();
                }
                Err(e) => return Err(e),
            }
        }

        if let Some(history_file) = &self.config.history_file {
            if let Err(e) = self.editor.save_history(history_file) {
                tracing::warn!("could not save history {}: {}", history_file.display(), e);
            }
        }

        Ok(())
    }
}

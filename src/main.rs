//! Cool Programming Language - CLI

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use cool::repl::LineRepl;
use cool::util::config::{load_config_from, load_user_config, UserConfig};
use cool::util::logger::{self, LogLevel};
use cool::{Frontend, SourceFile, NAME, VERSION};

/// Lexer, parser and formatter for the Cool language
#[derive(Parser, Debug)]
#[command(name = "cool")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Use this config file instead of ~/.config/cool/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    Lex {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a source file and print its tree
    Parse {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Format source file
    Fmt {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Fail instead of rewriting when the file is not formatted
        #[arg(short, long)]
        check: bool,
    },

    /// Format code given on the command line
    Eval {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Interactive session
    Repl,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => load_user_config().unwrap_or_else(|e| {
            eprintln!("warning: ignoring user config: {}", e);
            UserConfig::default()
        }),
    };

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.log.level
    };
    logger::init_with_level(level);

    let frontend = Frontend::with_fmt_config(config.fmt.clone());

    match args.command {
        Commands::Lex { file } => {
            let source = read_source(&file)?;
            let tokens = frontend
                .lex(&source)
                .map_err(|e| diagnostic_error(e.render(&source)))?;
            for token in tokens {
                println!(
                    "{:>4}:{:<3} {:<16} {:?}",
                    token.span.start.line,
                    token.span.start.column,
                    token.kind.to_string(),
                    token.text()
                );
            }
        }
        Commands::Parse { file } => {
            let source = read_source(&file)?;
            let program = frontend
                .parse(&source)
                .map_err(|e| diagnostic_error(e.render(&source)))?;
            println!("{:#?}", program.without_trivia());
        }
        Commands::Fmt { file, check } => {
            let source = read_source(&file)?;
            let formatted = frontend
                .format(&source)
                .map_err(|e| diagnostic_error(e.render(&source)))?;
            if check {
                if formatted != source.content {
                    bail!("{} is not formatted", file.display());
                }
            } else if formatted != source.content {
                fs::write(&file, formatted)
                    .with_context(|| format!("Failed to write: {}", file.display()))?;
            }
        }
        Commands::Eval { code } => {
            let source = SourceFile::repl(code);
            let formatted = frontend
                .format(&source)
                .map_err(|e| diagnostic_error(e.render(&source)))?;
            print!("{}", formatted);
        }
        Commands::Repl => {
            let mut repl =
                LineRepl::new(config.repl, frontend).context("Failed to start REPL")?;
            repl.run().context("REPL failed")?;
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<SourceFile> {
    SourceFile::from_path(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Print the rendered diagnostic and turn it into a short error
fn diagnostic_error(rendered: String) -> anyhow::Error {
    eprintln!("{}", rendered);
    anyhow::anyhow!("aborting due to previous error")
}

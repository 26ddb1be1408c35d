use std::env;
use std::io::{self, Write};
use std::process::exit;

use lox_tokenizer::{Scanner, Stderr};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("Usage: {0} tokenize <filename>")]
    Usage(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Could not read file '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("Could not write tokens: {0}")]
    Write(#[from] io::Error),
    #[error("{0} lexical error(s).")]
    Lexical(usize),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) | CliError::UnknownCommand(_) => 64,
            CliError::Lexical(_) => 65,
            CliError::Write(_) => 70,
            CliError::Read { .. } => 74,
        }
    }
}

fn main() {
    init_tracing();
    let args = env::args().collect::<Vec<String>>();

    if let Err(err) = run(&args) {
        // diagnostics were already written while scanning
        if !matches!(err, CliError::Lexical(_)) {
            eprintln!("{err}");
        }
        exit(err.exit_code())
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let program = args.first().map_or("lox-tokenizer", String::as_str);
    match args {
        [_, command, path] if command == "tokenize" => tokenize(path),
        [_, command, _] => Err(CliError::UnknownCommand(command.clone())),
        _ => Err(CliError::Usage(program.to_owned())),
    }
}

fn tokenize(path: &str) -> Result<(), CliError> {
    let source = std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    let scan = Scanner::with_reporter(&source, Stderr).scan_tokens();

    let mut stdout = io::stdout().lock();
    for token in &scan.tokens {
        token.write_to(&mut stdout)?;
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;

    match scan.had_error() {
        true => Err(CliError::Lexical(scan.error_count())),
        false => Ok(()),
    }
}

/// Enable with `RUST_LOG=lox_tokenizer=debug` or `RUST_LOG=lox_tokenizer=trace`.
fn init_tracing() {
    // Only initialize if RUST_LOG is set, keeping stderr clean for diagnostics
    if env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .with_target(true)
            .init();
    }
}

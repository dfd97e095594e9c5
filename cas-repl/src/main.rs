mod error;

use anyhow::{Context, Result};
use cas_assistant::{response::{EXAMPLES, GREETING}, Assistant};
use clap::Parser;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Ask math questions, such as `derivative of x^2` or `solve 2 + 2`.
///
/// With no arguments and a terminal on stdin, questions are read interactively, one per line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Read the whole file as one question.
    file: Option<PathBuf>,

    /// Ask a single question.
    #[arg(short, long, conflicts_with = "file")]
    question: Option<String>,

    /// Print the underlying error report to stderr when a question cannot be answered.
    #[arg(long)]
    diagnostics: bool,

    /// Increase logging verbosity (-v, -vv, -vvv). Ignored if `RUST_LOG` is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs the stderr logger, with the level chosen by the verbosity flag unless `RUST_LOG` is
/// set.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Submits the question and prints the response, if there is one.
fn answer(assistant: &mut Assistant, question: &str, diagnostics: bool) {
    let response = assistant.submit(question);
    if !response.is_empty() {
        println!("{}", response);
    }

    if diagnostics {
        if let Some(failure) = assistant.last_failure() {
            if let Err(err) = error::report_to_stderr(failure) {
                warn!(%err, "could not write the error report");
            }
        }
    }
}

/// Reads questions from the terminal until Ctrl-C or Ctrl-D.
fn interactive(assistant: &mut Assistant, diagnostics: bool) -> Result<()> {
    let mut rl = DefaultEditor::new().context("could not start the line editor")?;

    println!("{}", GREETING);
    for example in EXAMPLES {
        println!("  - {}", example);
    }

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => return Err(err).context("could not read the question"),
        };

        if !input.trim().is_empty() {
            rl.add_history_entry(&input)?;
        }

        answer(assistant, &input, diagnostics);
    }

    debug!("leaving interactive mode");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut assistant: Assistant = Assistant::default();

    if let Some(question) = &cli.question {
        answer(&mut assistant, question, cli.diagnostics);
    } else if let Some(path) = &cli.file {
        let input = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        answer(&mut assistant, &input, cli.diagnostics);
    } else if !io::stdin().is_terminal() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).context("could not read stdin")?;
        answer(&mut assistant, &input, cli.diagnostics);
    } else {
        interactive(&mut assistant, cli.diagnostics)?;
    }

    Ok(())
}

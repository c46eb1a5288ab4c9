use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lainoa::{Environment, Value, error::ParseError, format_parse_errors, run};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing_subscriber::EnvFilter;

const PROMPT: &str = ">> ";

/// lainoa is a small expression-oriented language with closures and
/// automatic currying.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log filter for diagnostics on stderr, e.g. `debug` or `lainoa=trace`.
    #[arg(long, env = "LAINOA_LOG", default_value = "warn", global = true)]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs a source file.
    Run {
        /// Path of the file; its name shows up in error positions.
        file: PathBuf,
    },
    /// Starts an interactive session. Bindings persist between lines.
    Repl,
    /// Evaluates source given on the command line and prints the result.
    Eval {
        /// The source to evaluate.
        source: String,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(&args.log)?;

    match args.command {
        Command::Run { file } => run_file(&file),
        Command::Repl => repl(),
        Command::Eval { source } => {
            let env = Environment::new();
            Ok(exit_code(print_outcome(run(&source, "eval", &env))))
        },
    }
}

fn init_logging(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .try_init()
                             .map_err(anyhow::Error::msg)
}

/// Runs a whole file in a fresh environment. Only failures are printed.
fn run_file(path: &Path) -> Result<ExitCode> {
    let source = fs::read_to_string(path).with_context(|| {
                                             format!("failed to read the input file `{}`",
                                                     path.display())
                                         })?;
    let file = path.display().to_string();
    tracing::info!(file = %file, "running");

    let env = Environment::new();
    let succeeded = match run(&source, &file, &env) {
        Err(errors) => {
            eprint!("{}", format_parse_errors(&errors));
            false
        },
        Ok(value @ Value::Error(_)) => {
            eprintln!("{value}");
            false
        },
        Ok(_) => true,
    };

    Ok(exit_code(succeeded))
}

fn repl() -> Result<ExitCode> {
    let mut editor = DefaultEditor::new().context("failed to open the terminal")?;
    let env = Environment::new();
    tracing::info!("starting repl");
    println!("lainoa {} (Ctrl-D to exit)", env!("CARGO_PKG_VERSION"));

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(err) = editor.add_history_entry(line.as_str()) {
                    tracing::debug!(%err, "failed to record history entry");
                }
                print_outcome(run(&line, "repl", &env));
            },
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Prints a result the way the console shows it: nothing for `nil`, the
/// inspection form otherwise. Returns whether the run succeeded.
fn print_outcome(outcome: Result<Value, Vec<ParseError>>) -> bool {
    match outcome {
        Err(errors) => {
            eprint!("{}", format_parse_errors(&errors));
            false
        },
        Ok(value @ Value::Error(_)) => {
            eprintln!("{value}");
            false
        },
        Ok(Value::Nil) => true,
        Ok(value) => {
            println!("{value}");
            true
        },
    }
}

const fn exit_code(succeeded: bool) -> ExitCode {
    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

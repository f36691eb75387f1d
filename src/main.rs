use std::process::ExitCode;

use calx::parse;
use clap::Parser;
use log::info;
use rustyline::{DefaultEditor, error::ReadlineError};

/// calx evaluates arithmetic expressions with `+`, `-`, `*`, `/`, unary minus
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text shown before each line in interactive mode.
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Evaluates this expression once and exits instead of starting the
    /// interactive prompt.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> Result<ExitCode, ReadlineError> {
    env_logger::init();
    let args = Args::parse();

    if let Some(expression) = args.expression {
        return Ok(match parse(&expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Syntax Error: {e}");
                ExitCode::FAILURE
            },
        });
    }

    repl(&args.prompt)?;
    Ok(ExitCode::SUCCESS)
}

/// Reads lines until end of input, printing each result or syntax error.
fn repl(prompt: &str) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    rl.add_history_entry(line.as_str())?;
                }
                match parse(&line) {
                    Ok(value) => println!("{value}"),
                    Err(e) => println!("Syntax Error: {e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                info!("session ended");
                return Ok(());
            },
            Err(e) => return Err(e),
        }
    }
}

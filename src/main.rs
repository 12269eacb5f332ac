use clap::Parser as ClapParser;
use env_logger::Builder;
use monkey_lang::environment::Environment;
use monkey_lang::evaluator::eval_program;
use monkey_lang::lexer::Lexer;
use monkey_lang::object::Value;
use monkey_lang::parser::Parser;
use monkey_lang::repl::repl;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

/// A tree-walking interpreter for the Monkey programming language.
#[derive(ClapParser, Debug)]
#[command(name = "monkey", version, about)]
struct Cli {
    /// Source file to run. Omit to start the REPL.
    file: Option<String>,

    /// Disable ANSI colors in the REPL banner and prompt.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    // Initialize logger (can be controlled via RUST_LOG environment variable)
    // Examples: RUST_LOG=debug, RUST_LOG=monkey_lang::parser=debug
    Builder::from_default_env().init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.file {
        Some(path) => run_file(&path),
        None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            match repl(stdin, stdout) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("repl error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Reads `path` as Monkey source, parses and evaluates it, and prints the
/// resulting value. Exits non-zero on a parse failure or a runtime error.
fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("could not read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        for error in parser.errors() {
            let _ = writeln!(handle, "{}", error);
        }
        return ExitCode::FAILURE;
    }

    let env = Environment::new();
    let result = eval_program(&program, &env);
    match result {
        Value::Error(_) => {
            eprintln!("{}", result);
            ExitCode::FAILURE
        }
        _ => {
            println!("{}", result);
            ExitCode::SUCCESS
        }
    }
}

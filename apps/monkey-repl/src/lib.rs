//! Thin shell around `monkey_lang`: an interactive prompt, a greeting, and
//! an optional script-execution mode for running a `.monkey` file
//! non-interactively. None of this is part of the language core — it is
//! the external collaborator the core is meant to be driven by.

pub mod cli;
pub mod repl;

use clap::Parser;
use cli::Cli;
use monkey_lang::environment::Environment;
use monkey_lang::evaluator::eval_source;
use repl::Repl;
use std::io;

pub fn run_cli() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.trace {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
            .init();
    } else {
        env_logger::init();
    }

    match &cli.script {
        Some(path) => run_script(path),
        None => {
            if !cli.no_banner {
                print_banner();
            }
            let stdin = io::stdin();
            let stdout = io::stdout();
            Repl::new().run(stdin.lock(), stdout.lock())
        }
    }
}

fn print_banner() {
    let user = std::env::var("USER").unwrap_or_else(|_| "friend".to_string());
    println!("Hello {}! This is the Monkey programming language!", user);
    println!("Feel free to type in commands");
}

fn run_script(path: &std::path::Path) -> io::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let env = Environment::new();
    match eval_source(&source, &env) {
        Ok(result) => {
            println!("{}", result);
            if result.is_error() {
                std::process::exit(1);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

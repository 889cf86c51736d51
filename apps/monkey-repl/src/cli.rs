//! Command-line surface, kept thin and separate from [`crate::run_cli`] so
//! argument parsing can be tested without touching stdin/stdout.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "monkey", about = "The Monkey programming language")]
pub struct Cli {
    /// Run a script file instead of starting the interactive prompt.
    pub script: Option<PathBuf>,

    /// Suppress the startup greeting.
    #[arg(long)]
    pub no_banner: bool,

    /// Log parser/evaluator trace output to stderr.
    #[arg(long)]
    pub trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_no_arguments() {
        let cli = Cli::parse_from(["monkey"]);
        assert!(cli.script.is_none());
        assert!(!cli.no_banner);
    }

    #[test]
    fn parses_a_script_path() {
        let cli = Cli::parse_from(["monkey", "program.monkey"]);
        assert_eq!(cli.script, Some(PathBuf::from("program.monkey")));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["monkey", "--no-banner", "--trace"]);
        assert!(cli.no_banner);
        assert!(cli.trace);
    }
}

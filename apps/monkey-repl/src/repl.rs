//! The interactive prompt loop.
//!
//! One persistent [`Environment`] lives for the whole session, so a
//! binding made on one line is visible on the next — mirroring the
//! reference REPL's single long-lived environment passed to every
//! `eval_source` call.

use monkey_lang::environment::Environment;
use monkey_lang::evaluator::eval_source;
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">> ";

pub struct Repl {
    env: Environment,
}

impl Repl {
    pub fn new() -> Self {
        Repl {
            env: Environment::new(),
        }
    }

    /// Evaluates one line of input against the session's environment and
    /// returns its pretty-printed result.
    pub fn execute(&mut self, input: &str) -> String {
        match eval_source(input, &self.env) {
            Ok(result) => result.to_string(),
            Err(err) => format!("Error: {}", err),
        }
    }

    /// Drives the prompt loop against `input`/`output`, stopping at EOF.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            writeln!(output, "{}", self.execute(&line))?;
        }
    }
}

impl Default for Repl {
    fn default() -> Self {
        Repl::new()
    }
}

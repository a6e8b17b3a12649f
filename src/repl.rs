use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{Config, error::Error, evaluate, interpreter::registry::Registry, util::num::format_number};

const HELP: &str = "\
Enter a prefix expression such as (+ 1 (* 2 pi)) to evaluate it.
Commands:
  :help   show this message
  :ops    list the available operators and constants
  :quit   leave (end of input works too)";

/// The outcome of one line of input.
#[derive(Debug)]
pub enum Reply {
    /// The expression evaluated to this value.
    Value(f64),
    /// The expression failed.
    Error(Error),
    /// Output of a `:` command.
    Text(String),
    /// Blank line, nothing to do.
    Skip,
    /// The user asked to leave.
    Quit,
}

/// A read-eval-print loop over a fixed registry and configuration.
///
/// Every line is processed on its own: a failed line has no effect on the
/// ones after it.
#[derive(Debug, Clone, Copy)]
pub struct Session<'r> {
    registry: &'r Registry,
    config:   Config,
}

impl<'r> Session<'r> {
    /// Creates a session evaluating against `registry` with `config`.
    #[must_use]
    pub const fn new(registry: &'r Registry, config: Config) -> Self {
        Self { registry, config }
    }

    /// Processes one line of input.
    #[must_use]
    pub fn handle_line(&self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::Skip;
        }
        if let Some(command) = line.strip_prefix(':') {
            return self.run_command(command.trim());
        }

        match evaluate(line, self.registry, &self.config) {
            Ok(value) => Reply::Value(value),
            Err(e) => Reply::Error(e),
        }
    }

    fn run_command(&self, command: &str) -> Reply {
        match command {
            "q" | "quit" | "exit" => Reply::Quit,
            "help" | "h" => Reply::Text(HELP.to_string()),
            "ops" => Reply::Text(format!("operators: {}\nconstants: {}",
                                         self.registry.operator_names().join(" "),
                                         self.registry.constant_names().join(" "))),
            other => Reply::Text(format!("Unknown command ':{other}'. Type :help for a list of commands.")),
        }
    }

    /// Renders a reply the way the loop prints it, or `None` if nothing is
    /// printed.
    #[must_use]
    pub fn render(&self, reply: &Reply) -> Option<String> {
        match reply {
            Reply::Value(v) => Some(format_number(*v, self.config.precision)),
            Reply::Error(e) => Some(e.to_string()),
            Reply::Text(text) => Some(text.clone()),
            Reply::Skip | Reply::Quit => None,
        }
    }

    /// Reads lines from `input` until it is exhausted or the user quits,
    /// writing each result or error to `output`.
    ///
    /// When `prompt` is given it is written before every line is read.
    /// Returns the number of lines that failed.
    ///
    /// # Errors
    /// Returns any I/O error from reading `input` or writing `output`.
    pub fn run<R, W>(&self, input: R, output: &mut W, prompt: Option<&str>) -> io::Result<usize>
        where R: BufRead,
              W: Write
    {
        info!("session started with {} operators, {} constants",
              self.registry.operator_names().len(),
              self.registry.constant_names().len());

        let mut failures = 0;
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = prompt {
                write!(output, "{prompt}")?;
                output.flush()?;
            }

            let Some(line) = lines.next().transpose()? else {
                if prompt.is_some() {
                    writeln!(output)?;
                }
                break;
            };

            debug!("input line: {line:?}");
            let reply = self.handle_line(&line);
            if matches!(reply, Reply::Quit) {
                break;
            }
            if matches!(reply, Reply::Error(_)) {
                failures += 1;
            }
            if let Some(text) = self.render(&reply) {
                writeln!(output, "{text}")?;
            }
        }

        Ok(failures)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(input: &str, prompt: Option<&str>) -> (String, usize) {
        let registry = Registry::with_defaults();
        let session = Session::new(&registry, Config::default());
        let mut output = Vec::new();
        let failures = session.run(Cursor::new(input), &mut output, prompt).unwrap();
        (String::from_utf8(output).unwrap(), failures)
    }

    #[test]
    fn prints_one_result_per_line() {
        let (out, failures) = run("(+ 1 2)\n(/ 2)\n", None);
        assert_eq!(out, "3\n0.5\n");
        assert_eq!(failures, 0);
    }

    #[test]
    fn failed_lines_do_not_affect_later_ones() {
        let (out, failures) = run("(+ 1 2\n(* 2 3)\n", None);
        assert_eq!(out, "Error at column 1: '(' is never closed.\n6\n");
        assert_eq!(failures, 1);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (out, _) = run("\n   \n(cos 0)\n", None);
        assert_eq!(out, "1\n");
    }

    #[test]
    fn prompt_precedes_each_read() {
        let (out, _) = run("(^ 2 10)\n", Some("> "));
        assert_eq!(out, "> 1024\n> \n");
    }

    #[test]
    fn quit_stops_reading() {
        let (out, _) = run("1\n:quit\n2\n", None);
        assert_eq!(out, "1\n");
    }

    #[test]
    fn ops_lists_registry_contents() {
        let (out, _) = run(":ops\n", None);
        assert!(out.contains("constants: e pi tau"));
        assert!(out.starts_with("operators: % * + - / ^ abs"));
    }

    #[test]
    fn unknown_command_is_explained() {
        let registry = Registry::with_defaults();
        let session = Session::new(&registry, Config::default());
        let reply = session.handle_line(":frobnicate");
        assert_eq!(session.render(&reply).unwrap(),
                   "Unknown command ':frobnicate'. Type :help for a list of commands.");
    }

    #[test]
    fn precision_comes_from_config() {
        let registry = Registry::with_defaults();
        let session = Session::new(&registry, Config::default().with_precision(3));
        let reply = session.handle_line("pi");
        assert_eq!(session.render(&reply).unwrap(), "3.14");
    }
}

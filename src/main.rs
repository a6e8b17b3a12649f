use std::{fs, io, path::PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use prefixa::{
    Config, Registry,
    config::{DEFAULT_MAX_DEPTH, DEFAULT_PRECISION},
    evaluate,
    repl::Session,
    util::num::format_number,
};

/// prefixa evaluates fully parenthesized prefix arithmetic expressions such
/// as `(+ 1 (* 2 pi))`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluates a single expression, prints the result and exits.
    #[arg(short, long, conflicts_with = "file")]
    expr: Option<String>,

    /// Evaluates every non-blank line of a file.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of significant digits to print.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// Maximum nesting depth of parentheses.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Prompt shown before each line in interactive mode.
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Do not show a prompt, for piping expressions in.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")?.start()?;
    let args = Args::parse();

    let registry = Registry::with_defaults();
    let config = Config::default().with_precision(args.precision)
                                  .with_max_depth(args.max_depth);

    if let Some(expr) = &args.expr {
        let value = evaluate(expr, &registry, &config)?;
        println!("{}", format_number(value, config.precision));
        return Ok(());
    }

    let session = Session::new(&registry, config);

    if let Some(path) = &args.file {
        let script = fs::read_to_string(path).with_context(|| {
                                                   format!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                           path.display())
                                               })?;
        let failures = session.run(script.as_bytes(), &mut io::stdout().lock(), None)?;
        if failures > 0 {
            bail!("{failures} expression(s) in '{}' failed", path.display());
        }
        return Ok(());
    }

    let prompt = (!args.quiet).then_some(args.prompt.as_str());
    session.run(io::stdin().lock(), &mut io::stdout().lock(), prompt)?;
    Ok(())
}


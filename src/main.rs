use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use netrun::console::Console;
use netrun::dispatch::{run_arg, run_arg_ret, run_ret, run_void};

/// Built-in stand-ins for the externally supplied target function, one
/// per call shape (plus float and string argument coverage).
#[derive(Debug, Clone, ValueEnum)]
enum Target {
    /// (i64) -> i64: double the input
    Double,
    /// (f64) -> f64: halve the input
    Halve,
    /// (String) -> String: uppercase the input
    Shout,
    /// (i64) -> (): consumes input, prints nothing itself
    Swallow,
    /// () -> String: takes no input
    Greet,
    /// () -> (): neither input nor output
    Noop,
}

#[derive(Parser)]
#[command(
    name = "netrun",
    version,
    about = "Run one function against the console."
)]
struct Cli {
    /// Target function to invoke
    #[arg(short, long, value_enum, default_value_t = Target::Double)]
    target: Target,

    /// Read input lines from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut console = Console::new(reader, io::stdout());

    // One dispatch per run; the process exits afterwards.
    match cli.target {
        Target::Double => run_arg_ret(&mut console, |x: i64| x * 2),
        Target::Halve => run_arg_ret(&mut console, |x: f64| x / 2.0),
        Target::Shout => run_arg_ret(&mut console, |s: String| s.to_uppercase()),
        Target::Swallow => run_arg(&mut console, |_x: i64| {}),
        Target::Greet => run_ret(&mut console, || "hello from netrun".to_string()),
        Target::Noop => run_void(|| {}),
    }

    Ok(())
}

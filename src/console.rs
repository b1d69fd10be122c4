//! The line source / message sink pair the harness talks to.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

/// Wraps the input and output streams for one run. The binary hands the
/// adapters real stdio; tests hand them in-memory buffers.
pub struct Console<In, Out> {
    input: In,
    output: Out,
}

impl Console<BufReader<Stdin>, Stdout> {
    /// A console backed by the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<In: BufRead, Out: Write> Console<In, Out> {
    pub fn new(input: In, output: Out) -> Self {
        Self { input, output }
    }

    /// Read one line, without the trailing newline. `None` on EOF or a
    /// read error — the caller degrades, it never aborts.
    pub fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while line.ends_with('\n') || line.ends_with('\r') {
                    line.pop();
                }
                Some(line)
            }
        }
    }

    /// Write one line. Output is best effort; a failed write is dropped
    /// rather than surfaced.
    pub fn say(&mut self, line: &str) {
        let _ = writeln!(self.output, "{line}");
    }

    /// Give back the output sink, consuming the console.
    pub fn into_output(self) -> Out {
        self.output
    }
}

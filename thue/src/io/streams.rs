//! Stream abstractions for directive I/O.
//!
//! The [`OutputStream`] and [`InputStream`] traits decouple the step engine
//! from process stdio. Tests use scripted streams that record writes and
//! serve predetermined lines without touching the terminal.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};

/// Prompt shown before a blocking input-directive read.
const INPUT_PROMPT: &str = ">";

/// Sink for output-directive text and the verbose rewrite trace.
pub trait OutputStream {
    /// Write `text` verbatim (no implicit line break).
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Source of lines for the input directive.
pub trait InputStream {
    /// Block until one line of input is available and return it without its
    /// trailing line break. Exhaustion is an error ([`InputExhaustedError`]),
    /// never an empty substitution.
    fn read_line(&mut self) -> Result<String>;
}

/// The three streams a run observes: directive output, directive input, and
/// the verbose rewrite trace.
///
/// Bundled so orchestration passes one value instead of three generics at
/// every call site. The trace stream only receives text when tracing is
/// enabled in the run configuration.
#[derive(Debug)]
pub struct StreamSet<O, I, T> {
    pub output: O,
    pub input: I,
    pub trace: T,
}

/// Stdio-backed stream set for the CLI: output and trace both go to stdout,
/// input reads from stdin with a prompt.
pub fn std_streams() -> StreamSet<StdStreams, StdStreams, StdStreams> {
    StreamSet {
        output: StdStreams,
        input: StdStreams,
        trace: StdStreams,
    }
}

/// The input stream ended while an input directive was waiting for a line.
///
/// Fatal for the whole run; callers distinguish it from other failures by
/// downcasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputExhaustedError;

impl fmt::Display for InputExhaustedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input stream exhausted while reading for input directive")
    }
}

impl std::error::Error for InputExhaustedError {}

/// Process stdio implementation: unbuffered prompt + blocking line read.
pub struct StdStreams;

impl OutputStream for StdStreams {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes()).context("write stdout")?;
        stdout.flush().context("flush stdout")?;
        Ok(())
    }
}

impl InputStream for StdStreams {
    fn read_line(&mut self) -> Result<String> {
        self.write_text(INPUT_PROMPT)?;
        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("read stdin")?;
        if read == 0 {
            return Err(anyhow!(InputExhaustedError));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}

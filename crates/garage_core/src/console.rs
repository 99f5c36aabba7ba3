//! Colored console feedback and line-based prompts.
//!
//! # Responsibility
//! - Render status messages in red (errors) or blue (success/info).
//! - Read one answer per prompt from any buffered reader.
//!
//! # Invariants
//! - Colored output is always terminated by the ANSI reset sequence.
//! - Console text never goes through the logger.

use std::io::{self, BufRead, Write};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_BLUE: &str = "\x1b[34m";
const ANSI_RESET: &str = "\x1b[0m";

/// Feedback color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Red,
    Blue,
}

impl Color {
    fn ansi_code(self) -> &'static str {
        match self {
            Self::Red => ANSI_RED,
            Self::Blue => ANSI_BLUE,
        }
    }
}

/// Wraps `message` in the ANSI sequence for `color`.
pub fn paint(message: &str, color: Color) -> String {
    format!("{}{message}{ANSI_RESET}", color.ansi_code())
}

/// Prompt/feedback pair over arbitrary input and output streams.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` and reads one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing line break is removed.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn print_color(&mut self, message: &str, color: Color) -> io::Result<()> {
        writeln!(self.output, "{}", paint(message, color))
    }

    /// Success/info line in blue.
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.print_color(message, Color::Blue)
    }

    /// Error line in red.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.print_color(message, Color::Red)
    }

    /// Uncolored line.
    pub fn plain(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

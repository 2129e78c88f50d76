//! Handles all user-facing output for the CLI.
//!
//! Results go to stdout through `termcolor`; diagnostics and logs go to stderr.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Printer {
    stdout: StandardStream,
}

impl Printer {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Prints a finished selector in bold green.
    pub fn selector(&mut self, text: &str) -> io::Result<()> {
        self.colored(text, ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))
    }

    /// Prints a computed value (area, JSON) in cyan.
    pub fn value(&mut self, text: &str) -> io::Result<()> {
        self.colored(text, ColorSpec::new().set_fg(Some(Color::Cyan)))
    }

    fn colored(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.stdout.set_color(spec)?;
        write!(self.stdout, "{text}")?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

use std::io::{BufRead, Write};

use rand::Rng;
use tracing::debug;

use crate::{banner::Banner, config::Config, error::Result, printer::Printer};

pub const PROMPT: &str = "Enter a phrase (or type 'exit' to quit):";
pub const FAREWELL: &str = "Goodbye!";
/// Input that ends the session, matched case-insensitively.
pub const SENTINEL: &str = "exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Prompting,
    Terminated,
}

/// Checks if an input line (without its terminator) ends the session.
pub fn is_sentinel(line: &str) -> bool {
    line.eq_ignore_ascii_case(SENTINEL)
}

/// Interactive read-render-animate loop.
pub struct Session<I, W, R> {
    input: I,
    printer: Printer<W, R>,
    config: Config,
    state: State,
}

impl<I: BufRead, W: Write, R: Rng> Session<I, W, R> {
    pub fn new(input: I, printer: Printer<W, R>, config: Config) -> Self {
        Self {
            input,
            printer,
            config,
            state: State::Prompting,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Runs one prompt/read cycle and returns the resulting state.
    /// End of input counts as the sentinel.
    pub fn step(&mut self) -> Result<State> {
        if self.state == State::Terminated {
            return Ok(self.state);
        }
        self.printer.message(PROMPT)?;

        // Bytes that are not UTF-8 decode to U+FFFD, which has no glyph
        let mut buf = Vec::new();
        let read = self.input.read_until(b'\n', &mut buf)?;
        let line = String::from_utf8_lossy(&buf);
        let phrase = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&*line);

        if read == 0 || is_sentinel(phrase) {
            debug!(eof = read == 0, "session terminated");
            self.printer.message(FAREWELL)?;
            self.state = State::Terminated;
            return Ok(self.state);
        }

        self.show(phrase)?;
        Ok(self.state)
    }

    /// Renders and reveals one phrase.
    pub fn show(&mut self, phrase: &str) -> Result<()> {
        let banner = Banner::render(phrase, self.config.max_width);
        self.printer.animate(&banner.to_string(), self.config.delay)
    }

    /// Loops until the session terminates.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == State::Prompting {}
        Ok(())
    }

    pub fn into_printer(self) -> Printer<W, R> {
        self.printer
    }
}

use std::io::{self, Write};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::trace;

use crate::{colors::Color4, delay::Delay, error::Result};

/// Writes text blocks line by line, each line in a random palette color,
/// pausing between lines.
#[derive(Debug)]
pub struct Printer<W, R> {
    out: W,
    rng: R,
}

impl Printer<io::Stdout, StdRng> {
    /// Printer on stdout; a seed makes the color sequence reproducible.
    pub fn stdout(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(io::stdout(), rng)
    }
}

impl<W: Write, R: Rng> Printer<W, R> {
    pub fn new(out: W, rng: R) -> Self {
        Self { out, rng }
    }

    /// Reveals a text block one line at a time.
    ///
    /// Each line is written as `color + line + reset` and flushed before the pause,
    /// so the terminal shows it immediately. The blank line that closes a group is
    /// printed like any other line.
    pub fn animate(&mut self, block: &str, delay: Delay) -> Result<()> {
        for (n, line) in block.lines().enumerate() {
            let color = Color4::random(&mut self.rng);
            trace!(line = n, %color, "frame");
            writeln!(self.out, "{}", color.paint(line))?;
            self.out.flush()?;
            delay.pause();
        }
        Ok(())
    }

    /// Writes an uncolored message line.
    pub fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the printer and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Reveals a text block on stdout with an unseeded color source.
pub fn animate(block: &str, delay: Delay) -> Result<()> {
    Printer::stdout(None).animate(block, delay)
}

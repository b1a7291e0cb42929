use core::fmt;
use std::{str::FromStr, thread, time::Duration};

use crate::error::{Error, Result};

/// Pause between two revealed lines, in milliseconds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Delay {
    pub millis: u64,
}

impl Default for Delay {
    fn default() -> Self {
        Self { millis: 200 }
    }
}

impl Delay {
    pub const NONE: Delay = Delay { millis: 0 };

    pub fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }

    /// Blocks the current thread for the delay.
    /// Zero delay returns immediately.
    pub fn pause(&self) {
        if self.millis > 0 {
            thread::sleep(self.duration());
        }
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.millis)
    }
}

/// Parses a plain millisecond count, optionally suffixed with `ms`.
impl FromStr for Delay {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix("ms").unwrap_or(trimmed).trim_end();
        digits
            .parse::<u64>()
            .map(Self::from_millis)
            .map_err(|err| Error::DelayParsing(String::from(s), err))
    }
}

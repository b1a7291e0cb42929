use crate::delay::Delay;

/// Default maximum banner width in columns.
pub const DEFAULT_MAX_WIDTH: usize = 150;

/// Rendering and animation settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Column budget a line group may fill before wrapping.
    pub max_width: usize,
    /// Pause after each revealed line.
    pub delay: Delay,
    /// Seed for the color source; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            delay: Delay::default(),
            seed: None,
        }
    }
}

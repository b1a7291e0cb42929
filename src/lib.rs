pub mod banner;
pub mod colors;
pub mod config;
pub mod delay;
pub mod error;
pub mod font;
pub mod printer;
pub mod session;

pub use banner::{render, Banner, LineGroup};
pub use colors::{Color4, PALETTE};
pub use config::Config;
pub use delay::Delay;
pub use error::{Error, Result};
pub use font::{Font, Glyph};
pub use printer::{animate, Printer};
pub use session::{Session, State};

/// Phrase exercising every glyph of the standard font.
pub const SAMPLE_PHRASE: &str = "The quick brown fox jumps over the lazy dog - ready? Go: now, go!.";

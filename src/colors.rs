use core::fmt;

use rand::Rng;

/// SGR sequence restoring default terminal attributes.
pub const RESET: &str = "\x1b[0m";

/// The non-bright ANSI colors a banner line can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color4 {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

/// Every `Color4`, in SGR code order. Line colors are drawn from here.
pub const PALETTE: [Color4; 6] = [
    Color4::Red,
    Color4::Green,
    Color4::Yellow,
    Color4::Blue,
    Color4::Magenta,
    Color4::Cyan,
];

impl Color4 {
    fn index(self) -> u8 {
        match self {
            Color4::Red => 1,
            Color4::Green => 2,
            Color4::Yellow => 3,
            Color4::Blue => 4,
            Color4::Magenta => 5,
            Color4::Cyan => 6,
        }
    }

    /// Return an ANSI SGR escape sequence setting this color as foreground.
    pub fn to_ansi(self) -> String {
        // Normal 4-bit colors: 31-36 fg
        format!("\x1b[{}m", 30 + self.index())
    }

    /// Picks a palette color uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PALETTE[rng.gen_range(0..PALETTE.len())]
    }

    /// Wraps text in this color and a trailing reset.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.to_ansi(), text, RESET)
    }
}

/// Formats the color as its lowercase name.
impl fmt::Display for Color4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Color4::Red => "red",
            Color4::Green => "green",
            Color4::Yellow => "yellow",
            Color4::Blue => "blue",
            Color4::Magenta => "magenta",
            Color4::Cyan => "cyan",
        })
    }
}

/// Removes CSI sequences from a string, leaving only printable text.
///
/// Turns captured `Printer` output back into the plain banner lines, e.g. to
/// compare a colored reveal with `render` or to save it without escapes.
pub fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut iter = line.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == '\x1b' && iter.peek() == Some(&'[') {
            iter.next(); // consume '['
            // skip parameters up to and including the final byte
            for c in iter.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

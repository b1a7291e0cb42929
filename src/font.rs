use std::sync::OnceLock;

use ordermap::OrderMap;

use crate::error::{Error, Result};

/// Number of rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// Every character the standard table can render, in table order.
/// Lowercase letters are accepted too and map to their uppercase glyphs.
pub const SUPPORTED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ -.,!?:";

/// Raw patterns of the standard star font.
#[rustfmt::skip]
const STANDARD: [(char, [&str; GLYPH_HEIGHT]); 33] = [
    ('A', ["  *  ", " * * ", "*****", "*   *", "*   *"]),
    ('B', ["**** ", "*   *", "**** ", "*   *", "**** "]),
    ('C', [" ****", "*    ", "*    ", "*    ", " ****"]),
    ('D', ["**** ", "*   *", "*   *", "*   *", "**** "]),
    ('E', ["*****", "*    ", "**** ", "*    ", "*****"]),
    ('F', ["*****", "*    ", "**** ", "*    ", "*    "]),
    ('G', [" ****", "*    ", "*  **", "*   *", "*****"]),
    ('H', ["*   *", "*   *", "*****", "*   *", "*   *"]),
    ('I', ["*****", "  *  ", "  *  ", "  *  ", "*****"]),
    ('J', ["*****", "   * ", "   * ", "*  * ", " *** "]),
    ('K', ["*   *", "*  * ", "***  ", "*  * ", "*   *"]),
    ('L', ["*    ", "*    ", "*    ", "*    ", "*****"]),
    ('M', ["*   *", "** **", "* * *", "*   *", "*   *"]),
    ('N', ["*   *", "**  *", "* * *", "*  **", "*   *"]),
    ('O', [" *** ", "*   *", "*   *", "*   *", " *** "]),
    ('P', ["**** ", "*   *", "**** ", "*    ", "*    "]),
    ('Q', [" **** ", "*    *", "* *  *", "*  * *", " ** * "]),
    ('R', ["**** ", "*   *", "**** ", "*  * ", "*   *"]),
    ('S', [" ****", "*    ", " *** ", "    *", "**** "]),
    ('T', ["*****", "  *  ", "  *  ", "  *  ", "  *  "]),
    ('U', ["*   *", "*   *", "*   *", "*   *", " *** "]),
    ('V', ["*   *", "*   *", "*   *", " * * ", "  *  "]),
    ('W', ["*   *   *", "*   *   *", "*   *   *", " * * * * ", "  *   *  "]),
    ('X', ["*   *", " * * ", "  *  ", " * * ", "*   *"]),
    ('Y', ["*   *", " * * ", "  *  ", "  *  ", "  *  "]),
    ('Z', ["*****", "   * ", "  *  ", " *   ", "*****"]),
    (' ', ["   ", "   ", "   ", "   ", "   "]),
    ('-', ["   ", "   ", "***", "   ", "   "]),
    ('.', [" ", " ", " ", " ", "*"]),
    (',', ["  ", "  ", "  ", " *", "* "]),
    ('!', [" * ", " * ", " * ", "   ", " * "]),
    ('?', [" *** ", "*   *", "  ** ", "     ", "  *  "]),
    (':', ["    ", "  * ", "    ", "  * ", "    "]),
];

/// A fixed-height bitmap for one character.
/// All rows share the same width.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [String; GLYPH_HEIGHT],
    width: usize,
}

impl Glyph {
    /// Creates a glyph from its rows, checking that every row has the width of the first one.
    pub fn new(ch: char, rows: &[&str]) -> Result<Self> {
        if rows.len() != GLYPH_HEIGHT {
            return Err(Error::HeightMismatch(ch, rows.len()));
        }
        let width = rows[0].chars().count();
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(Error::WidthMismatch {
                    glyph: ch,
                    row,
                    expected: width,
                    found,
                });
            }
        }
        Ok(Self::from_rows(rows))
    }

    fn from_rows(rows: &[&str]) -> Self {
        let rows: [String; GLYPH_HEIGHT] = std::array::from_fn(|i| String::from(rows[i]));
        let width = rows[0].chars().count();
        Self { rows, width }
    }

    /// Returns the glyph width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the glyph rows, top to bottom.
    pub fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }
}

/// A lookup table from characters to glyphs.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Font {
    glyphs: OrderMap<char, Glyph>,
}

impl Font {
    /// Returns the built-in star font.
    /// It is built on first use and never changes afterwards.
    pub fn standard() -> &'static Font {
        static FONT: OnceLock<Font> = OnceLock::new();
        FONT.get_or_init(|| Font {
            glyphs: STANDARD
                .iter()
                .map(|(ch, rows)| (*ch, Glyph::from_rows(rows)))
                .collect(),
        })
    }

    /// Builds a validated font from `(char, rows)` patterns.
    pub fn from_patterns(patterns: &[(char, [&str; GLYPH_HEIGHT])]) -> Result<Self> {
        let mut font = Self::default();
        for (ch, rows) in patterns {
            if font.glyphs.contains_key(ch) {
                return Err(Error::GlyphDup(*ch));
            }
            font.glyphs.insert(*ch, Glyph::new(*ch, rows)?);
        }
        Ok(font)
    }

    /// Returns the glyph for a character, if any.
    /// Letters are matched case-insensitively.
    pub fn lookup(&self, ch: char) -> Option<&Glyph> {
        self.glyphs
            .get(&ch)
            .or_else(|| self.glyphs.get(&ch.to_ascii_uppercase()))
    }

    /// Checks if a character can be rendered.
    pub fn supports(&self, ch: char) -> bool {
        self.lookup(ch).is_some()
    }

    /// Returns the number of glyphs in the font.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterates characters in table order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs.keys().copied()
    }
}

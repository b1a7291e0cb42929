use core::fmt;

use tracing::debug;

use crate::font::{Font, Glyph, GLYPH_HEIGHT};

/// Gap appended after every glyph in a group.
pub const SEPARATOR: &str = "  ";
const SEPARATOR_WIDTH: usize = SEPARATOR.len();

/// One wrapped segment of a banner: five rows holding the glyphs placed side by side.
#[derive(Default, Debug, Clone, Eq, PartialEq, Hash)]
pub struct LineGroup {
    rows: [String; GLYPH_HEIGHT],
    width: usize,
    glyphs: usize,
}

impl LineGroup {
    /// Returns the accumulated rows, top to bottom.
    pub fn rows(&self) -> &[String; GLYPH_HEIGHT] {
        &self.rows
    }

    /// Returns the running width: every placed glyph plus its separator.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of glyphs placed in the group.
    pub fn glyphs(&self) -> usize {
        self.glyphs
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs == 0
    }

    fn push(&mut self, glyph: &Glyph) {
        for (acc, row) in self.rows.iter_mut().zip(glyph.rows()) {
            acc.push_str(row);
            acc.push_str(SEPARATOR);
        }
        self.width += glyph.width() + SEPARATOR_WIDTH;
        self.glyphs += 1;
    }
}

/// Formats the group as its five rows followed by one blank line.
impl fmt::Display for LineGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        writeln!(f)
    }
}

/// A phrase rendered as star glyphs and wrapped into line groups.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Banner {
    groups: Vec<LineGroup>,
}

impl Banner {
    /// Renders a phrase with the standard font.
    pub fn render(phrase: &str, max_width: usize) -> Self {
        Self::render_with(Font::standard(), phrase, max_width)
    }

    /// Renders a phrase with the given font.
    ///
    /// Characters missing from the font are skipped. A new group is started when the
    /// next glyph's own width (separator excluded) would push the running width past
    /// `max_width`; a glyph wider than `max_width` still lands alone in its group.
    pub fn render_with(font: &Font, phrase: &str, max_width: usize) -> Self {
        let phrase = phrase.to_uppercase();
        let mut groups = Vec::new();
        let mut current = LineGroup::default();
        let mut skipped = 0usize;

        for ch in phrase.chars() {
            let glyph = match font.lookup(ch) {
                Some(glyph) => glyph,
                None => {
                    skipped += 1;
                    continue;
                }
            };
            if current.width + glyph.width() > max_width && !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
            current.push(glyph);
        }
        groups.push(current);

        debug!(
            chars = phrase.chars().count(),
            skipped,
            groups = groups.len(),
            max_width,
            "rendered banner"
        );
        Self { groups }
    }

    pub fn groups(&self) -> &[LineGroup] {
        &self.groups
    }

    /// Iterates every printable line: five rows per group plus the blank line after it.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.rows.iter().map(String::as_str).chain(std::iter::once("")))
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}

/// Renders a phrase with the standard font into a text block.
pub fn render(phrase: &str, max_width: usize) -> String {
    Banner::render(phrase, max_width).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_letter() {
        let expected = concat!(
            "  *    \n",
            " * *   \n",
            "*****  \n",
            "*   *  \n",
            "*   *  \n",
            "\n",
        );
        assert_eq!(render("A", 150), expected);
    }

    #[test]
    fn glyphs_joined_with_separator() {
        let expected = concat!(
            "*   *  *****  \n",
            "*   *    *    \n",
            "*****    *    \n",
            "*   *    *    \n",
            "*   *  *****  \n",
            "\n",
        );
        assert_eq!(render("HI", 150), expected);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(render("hello", 150), render("HELLO", 150));
        assert_eq!(render("Hello, World!", 150), render("HELLO, WORLD!", 150));
    }

    #[test]
    fn unsupported_chars_skipped() {
        assert_eq!(render("A#B", 150), render("AB", 150));
        assert_eq!(render("1A2B3\t", 150), render("AB", 150));
    }

    #[test]
    fn empty_phrase_is_one_blank_group() {
        assert_eq!(render("", 150), "\n\n\n\n\n\n");
        assert_eq!(render("#@$", 150), "\n\n\n\n\n\n");
        let banner = Banner::render("", 150);
        assert_eq!(banner.groups().len(), 1);
        assert!(banner.groups()[0].is_empty());
    }

    #[test]
    fn wraps_when_glyph_overflows() {
        // A: 0 + 5 <= 12 -> width 7; B: 7 + 5 = 12 stays; C: 14 + 5 > 12 wraps
        let banner = Banner::render("ABC", 12);
        let counts: Vec<usize> = banner.groups().iter().map(LineGroup::glyphs).collect();
        assert_eq!(counts, vec![2, 1]);
        assert_eq!(banner.groups()[0].width(), 14);
        assert_eq!(render("ABC", 12), render("AB", 12) + &render("C", 12));
    }

    #[test]
    fn stays_on_one_line_below_limit() {
        let banner = Banner::render("ABC", 19);
        assert_eq!(banner.groups().len(), 1);
        assert_eq!(banner.groups()[0].glyphs(), 3);

        let banner = Banner::render("ABC", 18);
        assert_eq!(banner.groups().len(), 2);
    }

    #[test]
    fn oversized_glyph_still_placed() {
        let banner = Banner::render("WW", 4);
        let counts: Vec<usize> = banner.groups().iter().map(LineGroup::glyphs).collect();
        assert_eq!(counts, vec![1, 1]);
        assert_eq!(banner.groups()[0].rows()[0], "*   *   *  ");
    }

    #[test]
    fn zero_width_puts_each_glyph_alone() {
        let banner = Banner::render("ABC", 0);
        assert_eq!(banner.groups().len(), 3);
    }

    #[test]
    fn trailing_skips_keep_last_group() {
        let banner = Banner::render("AB##", 12);
        assert_eq!(banner.groups().len(), 1);
        assert_eq!(banner.groups()[0].glyphs(), 2);
    }

    #[test]
    fn lines_match_serialized_block() {
        let banner = Banner::render("STAR CHALLENGE", 30);
        let text = banner.to_string();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines, text.lines().collect::<Vec<_>>());
        assert_eq!(lines.len(), banner.groups().len() * (GLYPH_HEIGHT + 1));
    }

    #[test]
    fn every_row_in_group_has_group_width() {
        let banner = Banner::render("Quick: wow, ok?", 40);
        for group in banner.groups() {
            for row in group.rows() {
                assert_eq!(row.chars().count(), group.width());
            }
        }
    }

    #[test]
    fn custom_font() {
        let font = Font::from_patterns(&[('I', ["*", "*", "*", "*", "*"])]).unwrap();
        let banner = Banner::render_with(&font, "iIx", 150);
        assert_eq!(banner.to_string(), "*  *  \n".repeat(5) + "\n");
    }
}

use std::{num::ParseIntError, sync::Arc};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building glyph tables or printing banners.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Glyph pattern does not have exactly five rows.
    #[error("glyph '{0}' has {1} rows, expected 5")]
    HeightMismatch(char, usize),
    /// Rows of a glyph pattern differ in width.
    #[error("row {row} of glyph '{glyph}' is {found} columns wide, expected {expected}")]
    WidthMismatch {
        glyph: char,
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Glyph defined multiple times in one table.
    #[error("glyph '{0}' duplicated")]
    GlyphDup(char),

    /// Failed to parse delay value.
    #[error("fail to parse delay '{0}': {1}")]
    DelayParsing(String, ParseIntError),

    /// I/O error occurred.
    #[error(transparent)]
    Io(Arc<std::io::Error>),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.into())
    }
}

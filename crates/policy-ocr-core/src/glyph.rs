//! Glyph geometry and signatures.
//!
//! A glyph is a 3x3 block of characters drawn with spaces, underscores and
//! pipes. Its signature is the nine characters read row by row.

use serde::{Serialize, Serializer};
use std::fmt;

/// Number of text rows a glyph occupies.
pub const LINE_HEIGHT: usize = 3;

/// Number of text columns a glyph occupies.
pub const DIGIT_WIDTH: usize = 3;

/// Number of glyphs on each line of a policy number.
pub const DIGITS_PER_LINE: usize = 9;

/// Characters in one glyph signature.
pub const SIGNATURE_LEN: usize = LINE_HEIGHT * DIGIT_WIDTH;

/// Character used for unreadable digits in rendered output and placeholders.
pub const UNREADABLE_CHAR: char = '?';

/// Row-major 3x3 glyph, exactly [`SIGNATURE_LEN`] characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([char; SIGNATURE_LEN]);

impl Signature {
    /// Signature used for positions of a group that could not be segmented.
    pub const PLACEHOLDER: Self = Self([UNREADABLE_CHAR; SIGNATURE_LEN]);

    pub const fn new(chars: [char; SIGNATURE_LEN]) -> Self {
        Self(chars)
    }

    /// Build a signature from an ASCII pattern in const context.
    pub const fn from_ascii(pattern: &[u8; SIGNATURE_LEN]) -> Self {
        let mut chars = [' '; SIGNATURE_LEN];
        let mut i = 0;
        while i < SIGNATURE_LEN {
            chars[i] = pattern[i] as char;
            i += 1;
        }
        Self(chars)
    }

    /// Parse a nine-character string. Returns `None` for any other length.
    ///
    /// ```
    /// use policy_ocr_core::Signature;
    ///
    /// assert!(Signature::parse(" _ | ||_|").is_some());
    /// assert!(Signature::parse(" _ ").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let mut chars = [' '; SIGNATURE_LEN];
        let mut count = 0;
        for c in text.chars() {
            if count == SIGNATURE_LEN {
                return None;
            }
            chars[count] = c;
            count += 1;
        }
        (count == SIGNATURE_LEN).then_some(Self(chars))
    }

    /// Assemble a signature from the three row slices of one glyph column.
    ///
    /// Returns `None` unless every row is exactly [`DIGIT_WIDTH`] characters.
    pub fn from_rows(rows: [&[char]; LINE_HEIGHT]) -> Option<Self> {
        let mut chars = [' '; SIGNATURE_LEN];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != DIGIT_WIDTH {
                return None;
            }
            chars[r * DIGIT_WIDTH..(r + 1) * DIGIT_WIDTH].copy_from_slice(row);
        }
        Some(Self(chars))
    }

    pub fn chars(&self) -> &[char; SIGNATURE_LEN] {
        &self.0
    }

    /// One row of the glyph (0 = top).
    pub fn row(&self, row: usize) -> &[char] {
        &self.0[row * DIGIT_WIDTH..(row + 1) * DIGIT_WIDTH]
    }

    /// Number of positions where `self` and `other` differ.
    pub fn distance(&self, other: &Self) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// True when the two signatures differ in exactly one position and one
    /// side of that position is blank (one stroke added or missing).
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        let mut diffs = self.0.iter().zip(other.0.iter()).filter(|(a, b)| a != b);
        match (diffs.next(), diffs.next()) {
            (Some((&a, &b)), None) => a == ' ' || b == ' ',
            _ => false,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

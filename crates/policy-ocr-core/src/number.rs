//! Policy numbers and their classification.

use crate::checksum::{self, Checksum};
use crate::digit::{Digit, DigitValue};
use crate::glyph::{Signature, DIGITS_PER_LINE, DIGIT_WIDTH, LINE_HEIGHT, UNREADABLE_CHAR};
use serde::Serialize;
use std::fmt;

/// Classification of a parsed policy number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Valid,
    ChecksumError,
    IllegibleDigits,
    /// More than one single-glyph correction restores the checksum.
    Ambiguous,
    /// The line group could not be segmented into nine glyphs.
    Unparseable,
}

impl Classification {
    /// Suffix written after the digits in rendered output.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Valid => "",
            Self::ChecksumError => "ERR",
            Self::IllegibleDigits | Self::Unparseable => "ILL",
            Self::Ambiguous => "AMB",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Valid => "valid",
            Self::ChecksumError => "checksum error",
            Self::IllegibleDigits => "illegible digits",
            Self::Ambiguous => "ambiguous",
            Self::Unparseable => "unparseable",
        };
        f.write_str(name)
    }
}

/// Nine digits read from one line group. Immutable; corrections produce
/// new numbers through [`PolicyNumber::with_digit`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PolicyNumber {
    digits: [Digit; DIGITS_PER_LINE],
    /// Raw lines of a group that failed segmentation.
    raw_lines: Option<Vec<String>>,
}

impl PolicyNumber {
    pub fn new(digits: [Digit; DIGITS_PER_LINE]) -> Self {
        Self {
            digits,
            raw_lines: None,
        }
    }

    /// Resolve nine glyph signatures, left to right.
    pub fn from_signatures(signatures: [Signature; DIGITS_PER_LINE]) -> Self {
        Self::new(signatures.map(Digit::resolve))
    }

    /// Build a number from known values. Returns `None` if any value is
    /// outside 0-9.
    ///
    /// ```
    /// use policy_ocr_core::{Classification, PolicyNumber};
    ///
    /// let number = PolicyNumber::from_values([7, 1, 1, 1, 1, 1, 1, 1, 1]).unwrap();
    /// assert_eq!(number.classify(), Classification::Valid);
    /// assert_eq!(number.to_string(), "711111111 ");
    /// ```
    pub fn from_values(values: [u8; DIGITS_PER_LINE]) -> Option<Self> {
        let mut digits = [Digit::Known(DigitValue::ZERO); DIGITS_PER_LINE];
        for (slot, value) in digits.iter_mut().zip(values) {
            *slot = Digit::from_value(value)?;
        }
        Some(Self::new(digits))
    }

    /// Placeholder for a group that failed segmentation. Every position is
    /// unreadable with the `?????????` signature.
    pub fn unparseable(raw_lines: Vec<String>) -> Self {
        Self {
            digits: [Digit::Unreadable(Signature::PLACEHOLDER); DIGITS_PER_LINE],
            raw_lines: Some(raw_lines),
        }
    }

    pub fn digits(&self) -> &[Digit; DIGITS_PER_LINE] {
        &self.digits
    }

    /// Raw lines of an unparseable group.
    pub fn raw_lines(&self) -> Option<&[String]> {
        self.raw_lines.as_deref()
    }

    pub fn is_unparseable(&self) -> bool {
        self.raw_lines.is_some()
    }

    /// Integer values when every digit is known.
    pub fn values(&self) -> Option<[u8; DIGITS_PER_LINE]> {
        let mut values = [0u8; DIGITS_PER_LINE];
        for (slot, digit) in values.iter_mut().zip(&self.digits) {
            *slot = digit.value()?;
        }
        Some(values)
    }

    pub fn all_digits_known(&self) -> bool {
        self.digits.iter().all(Digit::is_known)
    }

    pub fn checksum(&self) -> Checksum {
        checksum::evaluate(&self.digits)
    }

    /// Positions of unreadable digits, left to right.
    pub fn unreadable_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.digits
            .iter()
            .enumerate()
            .filter(|(_, digit)| !digit.is_known())
            .map(|(position, _)| position)
    }

    /// Classification from the digits alone, without attempting correction.
    /// Never returns [`Classification::Ambiguous`]; see
    /// [`crate::correction::resolve`] for that.
    pub fn classify(&self) -> Classification {
        if self.is_unparseable() {
            return Classification::Unparseable;
        }
        match self.checksum() {
            Checksum::NotApplicable => Classification::IllegibleDigits,
            Checksum::Invalid => Classification::ChecksumError,
            Checksum::Valid => Classification::Valid,
        }
    }

    /// A sibling number with `position` replaced by `digit`.
    pub fn with_digit(&self, position: usize, digit: Digit) -> Self {
        let mut digits = self.digits;
        if let Some(slot) = digits.get_mut(position) {
            *slot = digit;
        }
        Self {
            digits,
            raw_lines: self.raw_lines.clone(),
        }
    }

    /// The nine digits, with `?` for unreadable positions.
    pub fn digit_string(&self) -> String {
        self.digits.iter().map(ToString::to_string).collect()
    }

    /// Render the number back into its three-line glyph form.
    ///
    /// Unparseable numbers reproduce their raw lines, or three lines of `?`
    /// when none were kept.
    pub fn render_glyphs(&self) -> String {
        if let Some(lines) = &self.raw_lines {
            if !lines.is_empty() {
                return lines.iter().map(|line| format!("{line}\n")).collect();
            }
            let filler = UNREADABLE_CHAR
                .to_string()
                .repeat(DIGITS_PER_LINE * DIGIT_WIDTH);
            return format!("{filler}\n").repeat(LINE_HEIGHT);
        }

        let mut out = String::with_capacity((DIGITS_PER_LINE * DIGIT_WIDTH + 1) * LINE_HEIGHT);
        for row in 0..LINE_HEIGHT {
            for digit in &self.digits {
                out.extend(digit.signature().row(row));
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for PolicyNumber {
    /// `"<digits> <suffix>"` using the correction-free classification.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.digit_string(), self.classify().suffix())
    }
}

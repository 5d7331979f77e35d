//! Synthetic policy documents for demos, tests and benchmarks.
//!
//! Numbers are rendered in the input layout with one blank separator line
//! after each group.

use crate::catalog;
use crate::checksum;
use crate::digit::{Digit, DigitValue};
use crate::glyph::{Signature, DIGITS_PER_LINE, DIGIT_WIDTH, SIGNATURE_LEN};
use crate::number::PolicyNumber;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

/// Glyphs that are not in the catalog and not one stroke from any digit.
pub const MALFORMED_GLYPHS: [&str; 10] = [
    "|||   |||",
    " |    |  ",
    "___   ___",
    " _    _  ",
    "|_|   |_|",
    "| |   | |",
    "_|_   _|_",
    "__|   __|",
    "|__   |__",
    "_|    _| ",
];

/// How many numbers of each kind to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCounts {
    pub valid: usize,
    /// Valid numbers with one stroke missing from one glyph.
    pub correctable: usize,
    pub illegible: usize,
    pub checksum_errors: usize,
    pub unparseable: usize,
}

impl Default for SampleCounts {
    fn default() -> Self {
        Self {
            valid: 20,
            correctable: 0,
            illegible: 6,
            checksum_errors: 4,
            unparseable: 0,
        }
    }
}

impl SampleCounts {
    pub fn total(&self) -> usize {
        self.valid + self.correctable + self.illegible + self.checksum_errors + self.unparseable
    }
}

/// Random digit values with a valid checksum.
///
/// Eight trailing digits are drawn at random and the leading digit (weight
/// 9) is solved for; draws with no solution in 0-9 are retried.
pub fn valid_values<R: Rng + ?Sized>(rng: &mut R) -> [u8; DIGITS_PER_LINE] {
    loop {
        let mut values = [0u8; DIGITS_PER_LINE];
        for value in values.iter_mut().skip(1) {
            *value = rng.random_range(0..10);
        }
        // 9 * d1 = -rest (mod 11); 9 * 5 = 45 = 1 (mod 11), so d1 = 5 * -rest.
        let rest = checksum::weighted_sum(&values) % 11;
        let lead = (5 * (11 - rest)) % 11;
        if lead < 10 {
            values[0] = lead as u8;
            return values;
        }
    }
}

/// A random number with a valid checksum.
pub fn valid_number<R: Rng + ?Sized>(rng: &mut R) -> PolicyNumber {
    let values = valid_values(rng);
    PolicyNumber::new(values.map(|v| Digit::Known(DigitValue::wrapping(v))))
}

/// A valid number with one ink stroke erased from one glyph.
///
/// Only erasures that leave a glyph outside the catalog are used, so the
/// number parses as illegible and the correction search restores it.
pub fn broken_stroke_number<R: Rng + ?Sized>(rng: &mut R) -> PolicyNumber {
    let number = valid_number(rng);
    let position = rng.random_range(0..DIGITS_PER_LINE);
    let glyph = number.digits()[position].signature();

    let erased: Vec<Signature> = (0..SIGNATURE_LEN)
        .filter(|&i| glyph.chars()[i] != ' ')
        .map(|i| {
            let mut chars = *glyph.chars();
            chars[i] = ' ';
            Signature::new(chars)
        })
        .filter(|signature| catalog::lookup(signature).is_none())
        .collect();

    match erased.choose(rng) {
        Some(signature) => number.with_digit(position, Digit::Unreadable(*signature)),
        None => number,
    }
}

/// A random number with one to three malformed glyphs.
pub fn illegible_number<R: Rng + ?Sized>(rng: &mut R) -> PolicyNumber {
    let mut number = valid_number(rng);
    for _ in 0..rng.random_range(1..=3) {
        let position = rng.random_range(0..DIGITS_PER_LINE);
        let glyph = MALFORMED_GLYPHS
            .choose(rng)
            .and_then(|pattern| Signature::parse(pattern))
            .unwrap_or(Signature::PLACEHOLDER);
        number = number.with_digit(position, Digit::Unreadable(glyph));
    }
    number
}

/// A random number whose last digit breaks the checksum.
pub fn checksum_error_number<R: Rng + ?Sized>(rng: &mut R) -> PolicyNumber {
    let mut values = valid_values(rng);
    let last = DIGITS_PER_LINE - 1;
    // Shifts the weight-1 digit by -9..=5 and never by a multiple of 11.
    values[last] = (values[last] + rng.random_range(1..=5)) % 10;
    PolicyNumber::new(values.map(|v| Digit::Known(DigitValue::wrapping(v))))
}

/// Three lines that fail segmentation (first line one character short).
pub fn unparseable_lines<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut rendered = valid_number(rng).render_glyphs();
    if let Some(end) = rendered.find('\n') {
        rendered.remove(end - 1);
    }
    rendered
}

/// Render a complete sample document in shuffled order.
///
/// ```
/// use policy_ocr_core::{parse_document, sample::{generate_document, SampleCounts}};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let counts = SampleCounts {
///     valid: 3,
///     correctable: 2,
///     illegible: 0,
///     checksum_errors: 2,
///     unparseable: 1,
/// };
/// let document = parse_document(&generate_document(&counts, &mut rng))?;
/// assert_eq!(document.valid_count(), 5);
/// assert_eq!(document.corrected_count(), 2);
/// assert_eq!(document.checksum_error_count(), 2);
/// assert_eq!(document.unparseable_count(), 1);
/// # Ok::<(), policy_ocr_core::OcrError>(())
/// ```
pub fn generate_document<R: Rng + ?Sized>(counts: &SampleCounts, rng: &mut R) -> String {
    let mut groups: Vec<String> = Vec::with_capacity(counts.total());
    groups.extend((0..counts.valid).map(|_| valid_number(rng).render_glyphs()));
    groups.extend((0..counts.correctable).map(|_| broken_stroke_number(rng).render_glyphs()));
    groups.extend((0..counts.illegible).map(|_| illegible_number(rng).render_glyphs()));
    groups.extend((0..counts.checksum_errors).map(|_| checksum_error_number(rng).render_glyphs()));
    groups.extend((0..counts.unparseable).map(|_| unparseable_lines(rng)));
    groups.shuffle(rng);

    let mut out = String::with_capacity(groups.len() * (DIGITS_PER_LINE * DIGIT_WIDTH + 1) * 4);
    for group in groups {
        out.push_str(&group);
        out.push('\n');
    }
    out
}

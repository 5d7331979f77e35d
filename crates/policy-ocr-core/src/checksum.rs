//! Weighted mod-11 checksum.
//!
//! For digits `d1..d9` read left to right the number is valid when
//! `(9*d1 + 8*d2 + ... + 2*d8 + 1*d9) mod 11 == 0`.

use crate::digit::Digit;
use serde::Serialize;

const MODULUS: u32 = 11;

/// Outcome of checking a digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checksum {
    Valid,
    Invalid,
    /// At least one digit is unreadable; the checksum was never computed.
    NotApplicable,
}

impl Checksum {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Weighted sum used by the checksum. The rightmost digit has weight 1.
pub fn weighted_sum(values: &[u8]) -> u32 {
    values
        .iter()
        .rev()
        .zip(1u32..)
        .map(|(&value, weight)| u32::from(value) * weight)
        .sum()
}

/// Validate nine known digit values.
///
/// ```
/// use policy_ocr_core::checksum::is_valid;
///
/// assert!(is_valid(&[7, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!is_valid(&[1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// ```
pub fn is_valid(values: &[u8]) -> bool {
    weighted_sum(values) % MODULUS == 0
}

/// Evaluate the checksum of a digit sequence, or report it as not
/// applicable when any digit is unreadable.
pub fn evaluate(digits: &[Digit]) -> Checksum {
    let values: Option<Vec<u8>> = digits.iter().map(Digit::value).collect();
    match values {
        Some(values) if is_valid(&values) => Checksum::Valid,
        Some(_) => Checksum::Invalid,
        None => Checksum::NotApplicable,
    }
}

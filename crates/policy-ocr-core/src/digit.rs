//! Resolving glyph signatures into digits.

use crate::catalog::{self, CATALOG, DIGIT_COUNT};
use crate::glyph::{Signature, UNREADABLE_CHAR};
use std::fmt;

/// A digit value in `0..=9`, one per catalog entry.
///
/// ```
/// use policy_ocr_core::DigitValue;
///
/// assert_eq!(DigitValue::new(7).map(DigitValue::get), Some(7));
/// assert_eq!(DigitValue::new(42), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitValue(u8);

impl DigitValue {
    pub const ZERO: Self = Self(0);

    /// `None` outside 0-9.
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < DIGIT_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The value modulo 10.
    pub const fn wrapping(value: u8) -> Self {
        Self(value % DIGIT_COUNT as u8)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn signature(self) -> Signature {
        CATALOG[usize::from(self.0)]
    }
}

impl fmt::Display for DigitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One position of a policy number.
///
/// `Known` values correspond to exactly one catalog entry. `Unreadable`
/// keeps whatever glyph was found so that the correction search can compare
/// it against the catalog later.
///
/// Raw integers cannot be stored directly:
///
/// ```compile_fail
/// use policy_ocr_core::Digit;
///
/// let _ = Digit::Known(42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Digit {
    Known(DigitValue),
    Unreadable(Signature),
}

impl Digit {
    /// Resolve a glyph against the catalog. Never fails: a miss yields
    /// [`Digit::Unreadable`] carrying the original signature.
    pub fn resolve(signature: Signature) -> Self {
        match catalog::lookup(&signature).and_then(DigitValue::new) {
            Some(value) => Self::Known(value),
            None => {
                tracing::trace!("Unreadable glyph {:?}", signature.to_string());
                Self::Unreadable(signature)
            }
        }
    }

    /// Known digit for `value`, or `None` outside 0-9.
    pub fn from_value(value: u8) -> Option<Self> {
        DigitValue::new(value).map(Self::Known)
    }

    pub fn value(&self) -> Option<u8> {
        match self {
            Self::Known(value) => Some(value.get()),
            Self::Unreadable(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Canonical glyph for known digits, the raw glyph for unreadable ones.
    pub fn signature(&self) -> Signature {
        match self {
            Self::Known(value) => value.signature(),
            Self::Unreadable(signature) => *signature,
        }
    }

    /// Known digits one stroke away from this digit's glyph.
    ///
    /// For unreadable digits this compares the raw glyph against every
    /// canonical one.
    pub fn adjacent_values(&self) -> Vec<u8> {
        match self {
            Self::Known(value) => catalog::adjacent_digits(value.get()).to_vec(),
            Self::Unreadable(signature) => catalog::adjacent_to(signature),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => write!(f, "{value}"),
            Self::Unreadable(_) => write!(f, "{UNREADABLE_CHAR}"),
        }
    }
}

/// Resolve a signature into a [`Digit`].
pub fn resolve(signature: Signature) -> Digit {
    Digit::resolve(signature)
}

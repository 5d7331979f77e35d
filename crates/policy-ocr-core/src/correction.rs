//! Self-correction of illegible policy numbers.
//!
//! For every unreadable position the search tries each catalog digit whose
//! glyph is one stroke away from the raw glyph, keeping the substitutions
//! that produce a valid checksum. One survivor corrects the number; several
//! make it ambiguous.
//!
//! Every checksum weight is coprime with 11, so two different values at the
//! same position never both balance the sum. With a single unreadable
//! position the search therefore yields at most one candidate, and with two
//! or more it yields none. [`decide`] still applies the full policy to any
//! candidate list.

use crate::digit::Digit;
use crate::number::{Classification, PolicyNumber};
use std::fmt;

/// A policy number together with its final classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    classification: Classification,
    original: PolicyNumber,
    corrected: Option<PolicyNumber>,
    candidates: Vec<PolicyNumber>,
}

impl Resolution {
    /// Resolution that records the correction-free classification only.
    pub fn uncorrected(number: PolicyNumber) -> Self {
        Self {
            classification: number.classify(),
            original: number,
            corrected: None,
            candidates: Vec::new(),
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// The number as it was parsed.
    pub fn original(&self) -> &PolicyNumber {
        &self.original
    }

    /// The single correction that was applied, if any.
    pub fn corrected(&self) -> Option<&PolicyNumber> {
        self.corrected.as_ref()
    }

    /// Every checksum-valid candidate found by the search.
    pub fn candidates(&self) -> &[PolicyNumber] {
        &self.candidates
    }

    /// The number shown in output: the correction when exactly one was
    /// found, otherwise the original.
    pub fn display_number(&self) -> &PolicyNumber {
        self.corrected.as_ref().unwrap_or(&self.original)
    }

    pub fn was_corrected(&self) -> bool {
        self.corrected.is_some()
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}",
            self.display_number().digit_string(),
            self.classification.suffix()
        )
    }
}

/// All single-position substitutions of unreadable digits that yield a
/// valid checksum, ordered by position then digit value.
///
/// Returns nothing for numbers that are not classified as illegible.
pub fn candidates(number: &PolicyNumber) -> Vec<PolicyNumber> {
    if number.classify() != Classification::IllegibleDigits {
        return Vec::new();
    }

    number
        .unreadable_positions()
        .flat_map(|position| {
            number.digits()[position]
                .adjacent_values()
                .into_iter()
                .filter_map(Digit::from_value)
                .map(move |digit| number.with_digit(position, digit))
        })
        .filter(|candidate| candidate.checksum().is_valid())
        .collect()
}

/// Classify a number, attempting correction when it is illegible.
///
/// ```
/// use policy_ocr_core::{correction, Classification, PolicyNumber};
///
/// let number = PolicyNumber::from_values([7, 1, 1, 1, 1, 1, 1, 1, 1]).unwrap();
/// let resolution = correction::resolve(number);
/// assert_eq!(resolution.classification(), Classification::Valid);
/// assert_eq!(resolution.to_string(), "711111111 ");
/// ```
pub fn resolve(number: PolicyNumber) -> Resolution {
    if number.classify() != Classification::IllegibleDigits {
        return Resolution::uncorrected(number);
    }
    let found = candidates(&number);
    decide(number, found)
}

/// Apply the result policy to the candidates found for `original`:
/// none keeps the original classification, one replaces the displayed
/// digits and marks the number valid, several mark it ambiguous while
/// the original digits stay on display.
pub fn decide(original: PolicyNumber, mut found: Vec<PolicyNumber>) -> Resolution {
    if found.len() > 1 {
        tracing::debug!(
            "{} is ambiguous with {} candidate corrections",
            original.digit_string(),
            found.len()
        );
        return Resolution {
            classification: Classification::Ambiguous,
            original,
            corrected: None,
            candidates: found,
        };
    }

    match found.pop() {
        Some(corrected) => {
            tracing::debug!(
                "Corrected {} to {}",
                original.digit_string(),
                corrected.digit_string()
            );
            Resolution {
                classification: Classification::Valid,
                original,
                candidates: vec![corrected.clone()],
                corrected: Some(corrected),
            }
        }
        None => {
            tracing::debug!("No correction found for {}", original.digit_string());
            Resolution::uncorrected(original)
        }
    }
}

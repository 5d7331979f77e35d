//! The canonical glyph catalog for digits 0-9 and the adjacency relation.
//!
//! ```text
//!  _     _  _     _  _  _  _  _
//! | |  | _| _||_||_ |_   ||_||_|
//! |_|  ||_  _|  | _||_|  ||_| _|
//! ```

use crate::glyph::Signature;
use once_cell::sync::Lazy;

/// Number of entries in the catalog.
pub const DIGIT_COUNT: usize = 10;

/// Canonical signatures indexed by digit value.
pub const CATALOG: [Signature; DIGIT_COUNT] = [
    Signature::from_ascii(b" _ | ||_|"),
    Signature::from_ascii(b"     |  |"),
    Signature::from_ascii(b" _  _||_ "),
    Signature::from_ascii(b" _  _| _|"),
    Signature::from_ascii(b"   |_|  |"),
    Signature::from_ascii(b" _ |_  _|"),
    Signature::from_ascii(b" _ |_ |_|"),
    Signature::from_ascii(b" _   |  |"),
    Signature::from_ascii(b" _ |_||_|"),
    Signature::from_ascii(b" _ |_| _|"),
];

static ADJACENT: Lazy<[Vec<u8>; DIGIT_COUNT]> = Lazy::new(|| {
    std::array::from_fn(|value| adjacent_to(&CATALOG[value]))
});

/// Look up the digit whose canonical signature equals `signature` exactly.
///
/// ```
/// use policy_ocr_core::{catalog, Signature};
///
/// let seven = Signature::parse(" _   |  |").unwrap();
/// assert_eq!(catalog::lookup(&seven), Some(7));
/// ```
pub fn lookup(signature: &Signature) -> Option<u8> {
    CATALOG
        .iter()
        .position(|canonical| canonical == signature)
        .and_then(|value| u8::try_from(value).ok())
}

/// Canonical signature for `value`, or `None` outside 0-9.
pub fn canonical(value: u8) -> Option<Signature> {
    CATALOG.get(usize::from(value)).copied()
}

/// Digits whose canonical glyph is one blank/non-blank swap away from the
/// canonical glyph of `value`. Empty for values outside 0-9.
pub fn adjacent_digits(value: u8) -> &'static [u8] {
    ADJACENT
        .get(usize::from(value))
        .map_or(&[][..], Vec::as_slice)
}

/// Digits whose canonical glyph is one blank/non-blank swap away from an
/// arbitrary (possibly unreadable) signature, in ascending order.
pub fn adjacent_to(signature: &Signature) -> Vec<u8> {
    (0u8..)
        .zip(CATALOG.iter())
        .filter(|(_, canonical)| canonical.is_adjacent_to(signature))
        .map(|(value, _)| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_round_trips_every_digit() {
        for value in 0..10u8 {
            let sig = canonical(value).unwrap();
            assert_eq!(lookup(&sig), Some(value));
        }
    }

    #[test]
    fn test_catalog_entries_are_distinct() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_lookup_rejects_unknown_patterns() {
        assert_eq!(lookup(&Signature::PLACEHOLDER), None);
        assert_eq!(lookup(&Signature::from_ascii(b"|||   |||")), None);
        // A 1 with its top-right stroke missing.
        assert_eq!(lookup(&Signature::from_ascii(b"        |")), None);
    }

    #[test]
    fn test_canonical_out_of_range() {
        assert!(canonical(10).is_none());
        assert!(adjacent_digits(10).is_empty());
    }

    #[test]
    fn test_canonical_adjacency_table() {
        assert_eq!(adjacent_digits(0), &[8u8]);
        assert_eq!(adjacent_digits(1), &[7u8]);
        assert!(adjacent_digits(2).is_empty());
        assert_eq!(adjacent_digits(3), &[9u8]);
        assert!(adjacent_digits(4).is_empty());
        assert_eq!(adjacent_digits(5), &[6u8, 9u8]);
        assert_eq!(adjacent_digits(6), &[5u8, 8u8]);
        assert_eq!(adjacent_digits(7), &[1u8]);
        assert_eq!(adjacent_digits(8), &[0u8, 6u8, 9u8]);
        assert_eq!(adjacent_digits(9), &[3u8, 5u8, 8u8]);
    }

    #[test]
    fn test_adjacency_is_symmetric_between_canonical_glyphs() {
        for a in 0..10u8 {
            for &b in adjacent_digits(a) {
                assert!(adjacent_digits(b).contains(&a), "{a} -> {b}");
            }
        }
    }

    #[test]
    fn test_adjacent_to_raw_signature() {
        // A 1 with its top-right stroke missing is one stroke away from 1 only.
        let broken_one = Signature::from_ascii(b"        |");
        assert_eq!(adjacent_to(&broken_one), vec![1]);

        // Garbage is adjacent to nothing.
        assert!(adjacent_to(&Signature::from_ascii(b"|||   |||")).is_empty());
    }
}

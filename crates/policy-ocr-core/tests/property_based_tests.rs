//! Property-Based Tests
//!
//! Tests using property-based testing (proptest) to verify invariants:
//! - Parsing never panics on arbitrary text
//! - Rendered numbers parse back to the same digits
//! - Corrections always restore the checksum
//! - A single unreadable glyph has at most one valid correction

use policy_ocr_core::catalog;
use policy_ocr_core::correction;
use policy_ocr_core::{
    parse_document, parse_document_with, Classification, Digit, ParseOptions, PolicyNumber,
    Signature,
};
use proptest::prelude::*;

fn digit_values() -> impl Strategy<Value = [u8; 9]> {
    prop::array::uniform9(0u8..10)
}

fn glyph_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec![' ', '_', '|']), 9)
        .prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// Parsing Properties
// ============================================================================

/// Property: Arbitrary text either fails fast or yields a document
#[test]
fn proptest_parse_no_panic() {
    proptest!(|(text in "[ _|\\n]{0,400}")| {
        let _ = parse_document(&text);
    });
}

/// Property: Unicode text never panics the segmenter
#[test]
fn proptest_unicode_handling() {
    proptest!(|(text in "\\PC{0,200}")| {
        if let Ok(document) = parse_document(&text) {
            prop_assert_eq!(
                document.total_count(),
                document.render().lines().count()
            );
        }
    });
}

/// Property: Rendering then parsing gives the same digits back
#[test]
fn proptest_render_round_trip() {
    proptest!(|(values in digit_values())| {
        let number = PolicyNumber::from_values(values).unwrap();
        let document = parse_document(&number.render_glyphs()).unwrap();

        prop_assert_eq!(document.total_count(), 1);
        let record = &document.records()[0];
        prop_assert_eq!(record.original().values(), Some(values));
        prop_assert!(!record.was_corrected());
    });
}

/// Property: Serial and parallel parsing agree
#[test]
fn proptest_parallel_matches_serial() {
    proptest!(|(numbers in prop::collection::vec(digit_values(), 0..20))| {
        let text: String = numbers
            .iter()
            .map(|values| format!("{}\n", PolicyNumber::from_values(*values).unwrap().render_glyphs()))
            .collect();
        if text.is_empty() {
            return Ok(());
        }
        let serial = parse_document(&text).unwrap();
        let parallel = parse_document_with(&text, &ParseOptions::default().with_parallel(true)).unwrap();
        prop_assert_eq!(serial.render(), parallel.render());
    });
}

// ============================================================================
// Correction Properties
// ============================================================================

/// Property: Every correction restores a valid checksum
#[test]
fn proptest_corrections_are_valid() {
    proptest!(|(values in digit_values(), position in 0usize..9, glyph in glyph_text())| {
        let signature = Signature::parse(&glyph).unwrap();
        let number = PolicyNumber::from_values(values)
            .unwrap()
            .with_digit(position, Digit::resolve(signature));

        let resolution = correction::resolve(number);
        if let Some(corrected) = resolution.corrected() {
            prop_assert_eq!(corrected.classify(), Classification::Valid);
            prop_assert_eq!(resolution.classification(), Classification::Valid);
        }
    });
}

/// Property: One unreadable position yields at most one candidate
#[test]
fn proptest_single_position_has_unique_candidate() {
    proptest!(|(values in digit_values(), position in 0usize..9, glyph in glyph_text())| {
        let signature = Signature::parse(&glyph).unwrap();
        prop_assume!(catalog::lookup(&signature).is_none());

        let number = PolicyNumber::from_values(values)
            .unwrap()
            .with_digit(position, Digit::Unreadable(signature));
        prop_assert!(correction::candidates(&number).len() <= 1);
    });
}

/// Property: Correction is idempotent on already readable numbers
#[test]
fn proptest_readable_numbers_unchanged() {
    proptest!(|(values in digit_values())| {
        let number = PolicyNumber::from_values(values).unwrap();
        let expected = number.classify();
        let resolution = correction::resolve(number.clone());

        prop_assert_eq!(resolution.classification(), expected);
        prop_assert!(resolution.corrected().is_none());
        prop_assert_eq!(resolution.display_number(), &number);
    });
}

// ============================================================================
// Catalog Properties
// ============================================================================

/// Property: Adjacency only ever goes between glyphs one stroke apart
#[test]
fn proptest_adjacency_is_one_stroke() {
    proptest!(|(glyph in glyph_text())| {
        let signature = Signature::parse(&glyph).unwrap();
        for value in catalog::adjacent_to(&signature) {
            let canonical = catalog::canonical(value).unwrap();
            prop_assert_eq!(signature.distance(&canonical), 1);
        }
    });
}

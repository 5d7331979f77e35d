//! # policy-ocr-core
//!
//! Decoding of ASCII-art "digital" policy numbers, the 7-segment style
//! rendering produced by the scanning machines:
//!
//! ```text
//!     _  _     _  _  _  _  _
//!   | _| _||_||_ |_   ||_||_|
//!   ||_  _|  | _||_|  ||_| _|
//! ```
//!
//! Each policy number is a group of three lines holding nine 3x3 glyphs.
//! The crate cuts documents into groups and glyphs, resolves glyphs
//! against the digit catalog, validates the weighted mod-11 checksum and,
//! for numbers with unreadable glyphs, searches for the single-stroke
//! correction that makes the checksum pass.
//!
//! ## Quick Start
//!
//! ```
//! use policy_ocr_core::{parse_document, Classification};
//!
//! let text = concat!(
//!     "    _  _     _  _  _  _  _ \n",
//!     "  | _| _||_||_ |_   ||_||_|\n",
//!     "  ||_  _|  | _||_|  ||_| _|\n",
//! );
//! let document = parse_document(text)?;
//! assert_eq!(document.records()[0].classification(), Classification::Valid);
//! assert_eq!(document.render(), "123456789 \n");
//! # Ok::<(), policy_ocr_core::OcrError>(())
//! ```
//!
//! ## Output Format
//!
//! | Classification | Rendered as |
//! |----------------|-------------|
//! | Valid | `457508000 ` |
//! | Checksum error | `664371495 ERR` |
//! | Illegible digits | `86110??36 ILL` |
//! | Ambiguous correction | `8888?8888 AMB` |
//! | Unparseable group | `????????? ILL` |
//!
//! ## Modules
//!
//! - [`glyph`]: signatures and layout constants
//! - [`catalog`]: canonical glyphs and stroke adjacency
//! - [`digit`]: glyph to digit resolution
//! - [`checksum`]: weighted mod-11 validation
//! - [`number`]: policy numbers and classification
//! - [`correction`]: single-glyph correction search
//! - [`segment`]: line groups and glyph extraction
//! - [`document`]: aggregation, statistics and rendering
//! - [`sample`]: synthetic document generation

pub mod catalog;
pub mod checksum;
pub mod correction;
pub mod digit;
pub mod document;
pub mod error;
pub mod glyph;
pub mod number;
pub mod options;
pub mod sample;
pub mod segment;

pub use checksum::Checksum;
pub use correction::Resolution;
pub use digit::{Digit, DigitValue};
pub use document::{
    output_path_for, parse_document, parse_document_file, parse_document_with,
    read_document_text, Document, Statistics,
};
pub use error::{OcrError, Result, StructuralError};
pub use glyph::{Signature, DIGITS_PER_LINE, DIGIT_WIDTH, LINE_HEIGHT};
pub use number::{Classification, PolicyNumber};
pub use options::ParseOptions;

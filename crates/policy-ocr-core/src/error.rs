//! Error types for policy document parsing.
//!
//! Two layers of failure exist. [`OcrError`] aborts a whole parse run
//! (no input at all, unreadable file). [`StructuralError`] describes a single
//! line group that could not be cut into nine glyphs; the document keeps
//! going and records it next to an unparseable policy number.

use serde::Serialize;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Document-level failures that abort parsing before segmentation begins.
///
/// # Examples
///
/// ```
/// use policy_ocr_core::{parse_document, OcrError};
///
/// match parse_document("   \n\t  ") {
///     Err(OcrError::BlankInput) => {}
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum OcrError {
    /// The raw text was the empty string.
    #[error("Input text is empty")]
    EmptyInput,

    /// The raw text contained only whitespace.
    #[error("Input text is blank")]
    BlankInput,

    /// The input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other I/O failure while reading input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Per-group structural failure.
///
/// Group indices are zero-based positions of the line group within the
/// document. The offending raw lines are kept verbatim for reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuralError {
    /// The group did not contain exactly `expected` lines.
    #[error("group {group}: expected {expected} lines, found {found}")]
    LineCount {
        group: usize,
        expected: usize,
        found: usize,
        lines: Vec<String>,
    },

    /// One or more lines have a length that is not a multiple of the digit width.
    #[error("group {group}: line length not divisible by {width}: {lines:?}")]
    LineLength {
        group: usize,
        width: usize,
        lines: Vec<String>,
    },

    /// A line did not split into the expected number of glyph columns.
    #[error("group {group}: expected {expected} digits per line, found {found}: {line:?}")]
    DigitCount {
        group: usize,
        expected: usize,
        found: usize,
        line: String,
    },

    /// A line in a separator slot after the group was not blank.
    #[error("group {group}: separator line is not blank: {line:?}")]
    SeparatorNotBlank { group: usize, line: String },
}

impl StructuralError {
    /// Zero-based index of the failing group.
    pub fn group(&self) -> usize {
        match self {
            Self::LineCount { group, .. }
            | Self::LineLength { group, .. }
            | Self::DigitCount { group, .. }
            | Self::SeparatorNotBlank { group, .. } => *group,
        }
    }

    /// The raw lines this error cites.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Self::LineCount { lines, .. } | Self::LineLength { lines, .. } => {
                lines.iter().map(String::as_str).collect()
            }
            Self::DigitCount { line, .. } | Self::SeparatorNotBlank { line, .. } => {
                vec![line.as_str()]
            }
        }
    }
}

/// Result type for document-level operations.
pub type Result<T> = std::result::Result<T, OcrError>;

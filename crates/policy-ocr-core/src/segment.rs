//! Block segmentation: raw text to line groups to glyph signatures.
//!
//! A document is a sequence of groups, each [`LINE_HEIGHT`] lines tall and
//! optionally followed by separator lines. Each line of a group is cut into
//! [`DIGIT_WIDTH`]-character chunks; chunk `i` of every row together forms
//! the glyph of digit `i`.

use crate::error::StructuralError;
use crate::glyph::{Signature, DIGITS_PER_LINE, DIGIT_WIDTH, LINE_HEIGHT};
use std::str::Lines;

/// One group of consecutive lines, expected to hold a single policy number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineGroup<'a> {
    /// Zero-based position of the group in the document.
    pub index: usize,
    pub lines: Vec<&'a str>,
    /// Separator lines absorbed after the group.
    pub separators: Vec<&'a str>,
}

impl LineGroup<'_> {
    pub fn owned_lines(&self) -> Vec<String> {
        self.lines.iter().map(|line| (*line).to_string()).collect()
    }
}

/// Lazy iterator over the line groups of a document.
///
/// A trailing group with fewer than [`LINE_HEIGHT`] lines is yielded as-is
/// so that segmentation reports it. Blank lines at the end of the input are
/// padding and never form a group. Separator lines are kept on the group
/// they follow so that non-blank ones fail that group.
pub struct LineGroups<'a> {
    lines: Lines<'a>,
    separator_lines: usize,
    index: usize,
}

impl<'a> LineGroups<'a> {
    pub fn new(text: &'a str, separator_lines: usize) -> Self {
        Self {
            lines: text.lines(),
            separator_lines,
            index: 0,
        }
    }
}

impl<'a> Iterator for LineGroups<'a> {
    type Item = LineGroup<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines: Vec<&'a str> = self.lines.by_ref().take(LINE_HEIGHT).collect();
        if lines.is_empty() {
            return None;
        }
        if lines.iter().all(|line| line.trim().is_empty())
            && self.lines.clone().all(|line| line.trim().is_empty())
        {
            return None;
        }

        let separators: Vec<&'a str> = self.lines.by_ref().take(self.separator_lines).collect();

        let group = LineGroup {
            index: self.index,
            lines,
            separators,
        };
        self.index += 1;
        Some(group)
    }
}

/// Cut a line group into its nine glyph signatures, left to right.
///
/// # Errors
///
/// - [`StructuralError::LineCount`] if the group is not [`LINE_HEIGHT`] lines
/// - [`StructuralError::LineLength`] if any line length is not a multiple of
///   [`DIGIT_WIDTH`] (every offending line is cited)
/// - [`StructuralError::DigitCount`] if a line does not hold
///   [`DIGITS_PER_LINE`] glyph columns
/// - [`StructuralError::SeparatorNotBlank`] if a separator line after the
///   group carries any ink
pub fn segment_group(group: &LineGroup<'_>) -> Result<[Signature; DIGITS_PER_LINE], StructuralError> {
    if group.lines.len() != LINE_HEIGHT {
        return Err(StructuralError::LineCount {
            group: group.index,
            expected: LINE_HEIGHT,
            found: group.lines.len(),
            lines: group.owned_lines(),
        });
    }

    let rows: Vec<Vec<char>> = group.lines.iter().map(|line| line.chars().collect()).collect();

    let bad_lengths: Vec<String> = rows
        .iter()
        .zip(&group.lines)
        .filter(|(row, _)| row.len() % DIGIT_WIDTH != 0)
        .map(|(_, line)| (*line).to_string())
        .collect();
    if !bad_lengths.is_empty() {
        return Err(StructuralError::LineLength {
            group: group.index,
            width: DIGIT_WIDTH,
            lines: bad_lengths,
        });
    }

    let chunked: Vec<Vec<&[char]>> = rows
        .iter()
        .map(|row| row.chunks(DIGIT_WIDTH).collect())
        .collect();
    if let Some((chunks, line)) = chunked
        .iter()
        .zip(&group.lines)
        .find(|(chunks, _)| chunks.len() != DIGITS_PER_LINE)
    {
        return Err(StructuralError::DigitCount {
            group: group.index,
            expected: DIGITS_PER_LINE,
            found: chunks.len(),
            line: (*line).to_string(),
        });
    }

    if let Some(line) = group.separators.iter().find(|line| !line.trim().is_empty()) {
        return Err(StructuralError::SeparatorNotBlank {
            group: group.index,
            line: (*line).to_string(),
        });
    }

    // Transpose rows of chunks into columns: glyph i is chunk i of each row.
    let mut signatures = [Signature::PLACEHOLDER; DIGITS_PER_LINE];
    for (i, slot) in signatures.iter_mut().enumerate() {
        let column = [chunked[0][i], chunked[1][i], chunked[2][i]];
        if let Some(signature) = Signature::from_rows(column) {
            *slot = signature;
        }
    }
    Ok(signatures)
}

//! Parser options.

use serde::{Deserialize, Serialize};

/// Separator lines after each glyph group in the default input layout.
pub const DEFAULT_SEPARATOR_LINES: usize = 1;

/// Options controlling how a document is parsed.
///
/// Deserializes from a partial table; missing fields take their defaults.
///
/// ```
/// use policy_ocr_core::ParseOptions;
///
/// let options = ParseOptions::default().with_parallel(true);
/// assert_eq!(options.separator_lines, 1);
/// assert!(options.correct);
/// assert!(options.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Lines absorbed after each group (0 for back-to-back groups).
    pub separator_lines: usize,
    /// Run the correction search on illegible numbers.
    pub correct: bool,
    /// Resolve groups on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator_lines: DEFAULT_SEPARATOR_LINES,
            correct: true,
            parallel: false,
        }
    }
}

impl ParseOptions {
    #[must_use]
    pub fn with_separator_lines(mut self, separator_lines: usize) -> Self {
        self.separator_lines = separator_lines;
        self
    }

    #[must_use]
    pub fn with_correction(mut self, correct: bool) -> Self {
        self.correct = correct;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

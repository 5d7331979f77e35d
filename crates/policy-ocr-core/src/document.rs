//! Document aggregation and the top-level parse entry points.

use crate::correction::{self, Resolution};
use crate::error::{OcrError, Result, StructuralError};
use crate::number::{Classification, PolicyNumber};
use crate::options::ParseOptions;
use crate::segment::{segment_group, LineGroup, LineGroups};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Record separator used by [`Document::render`].
pub const RECORD_SEPARATOR: &str = "\n";

/// Suffix appended to the input file stem by [`output_path_for`].
pub const OUTPUT_SUFFIX: &str = "_parsed";

/// Counts per classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    /// Includes numbers that became valid through correction.
    pub valid: usize,
    pub checksum_error: usize,
    /// Illegible numbers that parsed structurally and could not be corrected.
    pub illegible: usize,
    pub ambiguous: usize,
    pub unparseable: usize,
    /// Numbers made valid by a single-glyph correction.
    pub corrected: usize,
}

/// All policy numbers of one parse run, in input order, together with the
/// structural errors met along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    records: Vec<Resolution>,
    errors: Vec<StructuralError>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parsed number, resolving it with the correction search.
    pub fn add(&mut self, number: PolicyNumber, error: Option<StructuralError>) {
        self.push(correction::resolve(number), error);
    }

    /// Append an already resolved number.
    pub fn push(&mut self, resolution: Resolution, error: Option<StructuralError>) {
        self.records.push(resolution);
        if let Some(error) = error {
            self.errors.push(error);
        }
    }

    pub fn records(&self) -> &[Resolution] {
        &self.records
    }

    pub fn errors(&self) -> &[StructuralError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn count(&self, classification: Classification) -> usize {
        self.records
            .iter()
            .filter(|record| record.classification() == classification)
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn valid_count(&self) -> usize {
        self.count(Classification::Valid)
    }

    pub fn checksum_error_count(&self) -> usize {
        self.count(Classification::ChecksumError)
    }

    pub fn illegible_count(&self) -> usize {
        self.count(Classification::IllegibleDigits)
    }

    pub fn ambiguous_count(&self) -> usize {
        self.count(Classification::Ambiguous)
    }

    pub fn unparseable_count(&self) -> usize {
        self.count(Classification::Unparseable)
    }

    pub fn corrected_count(&self) -> usize {
        self.records.iter().filter(|record| record.was_corrected()).count()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            total: self.total_count(),
            valid: self.valid_count(),
            checksum_error: self.checksum_error_count(),
            illegible: self.illegible_count(),
            ambiguous: self.ambiguous_count(),
            unparseable: self.unparseable_count(),
            corrected: self.corrected_count(),
        }
    }

    /// One `"<digits> <suffix>"` line per record, each terminated by the
    /// record separator.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("{record}{RECORD_SEPARATOR}"))
            .collect()
    }
}

fn parse_group(group: &LineGroup<'_>, options: &ParseOptions) -> (Resolution, Option<StructuralError>) {
    let (number, error) = match segment_group(group) {
        Ok(signatures) => (PolicyNumber::from_signatures(signatures), None),
        Err(err) => {
            tracing::warn!("Unparseable policy number: {}", err);
            (PolicyNumber::unparseable(group.owned_lines()), Some(err))
        }
    };
    tracing::debug!("Group {}: {}", group.index, number);

    let resolution = if options.correct {
        correction::resolve(number)
    } else {
        Resolution::uncorrected(number)
    };
    (resolution, error)
}

/// Parse raw text with the default [`ParseOptions`].
///
/// ```
/// use policy_ocr_core::parse_document;
///
/// let text = concat!(
///     " _  _  _  _  _  _  _  _  _ \n",
///     "| || || || || || || || || |\n",
///     "|_||_||_||_||_||_||_||_||_|\n",
///     "\n",
///     "                           \n",
///     "  |  |  |  |  |  |  |  |  |\n",
///     "  |  |  |  |  |  |  |  |  |\n",
/// );
/// let document = parse_document(text)?;
/// assert_eq!(document.render(), "000000000 \n111111111 ERR\n");
/// # Ok::<(), policy_ocr_core::OcrError>(())
/// ```
///
/// # Errors
///
/// Returns [`OcrError::EmptyInput`] or [`OcrError::BlankInput`] when there
/// is nothing to parse. Structural problems inside the text never fail the
/// call; they are recorded on the returned [`Document`].
pub fn parse_document(raw_text: &str) -> Result<Document> {
    parse_document_with(raw_text, &ParseOptions::default())
}

/// Parse raw text into a [`Document`].
///
/// # Errors
///
/// See [`parse_document`].
pub fn parse_document_with(raw_text: &str, options: &ParseOptions) -> Result<Document> {
    if raw_text.is_empty() {
        return Err(OcrError::EmptyInput);
    }
    if raw_text.trim().is_empty() {
        return Err(OcrError::BlankInput);
    }

    let groups: Vec<LineGroup<'_>> = LineGroups::new(raw_text, options.separator_lines).collect();
    let parsed: Vec<(Resolution, Option<StructuralError>)> = if options.parallel {
        groups.par_iter().map(|group| parse_group(group, options)).collect()
    } else {
        groups.iter().map(|group| parse_group(group, options)).collect()
    };

    let mut document = Document::new();
    for (resolution, error) in parsed {
        document.push(resolution, error);
    }

    let stats = document.statistics();
    tracing::info!(
        "Parsed {} policy numbers ({} valid, {} ERR, {} ILL, {} AMB, {} unparseable)",
        stats.total,
        stats.valid,
        stats.checksum_error,
        stats.illegible,
        stats.ambiguous,
        stats.unparseable
    );
    Ok(document)
}

/// Read a document file into memory.
///
/// # Errors
///
/// Returns [`OcrError::NotFound`] when the file does not exist and
/// [`OcrError::Io`] for any other read failure.
pub fn read_document_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => OcrError::NotFound(path.to_path_buf()),
        _ => OcrError::Io(err),
    })
}

/// Read and parse a document file.
///
/// # Errors
///
/// See [`read_document_text`] and [`parse_document`].
pub fn parse_document_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Document> {
    let path = path.as_ref();
    tracing::info!("Reading policy document file: {}", path.display());
    let text = read_document_text(path)?;
    parse_document_with(&text, options)
}

/// `<output_dir>/<input stem>_parsed.txt`
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{stem}{OUTPUT_SUFFIX}.txt"))
}

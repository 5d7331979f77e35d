//! Terminal and JSON reports for parsed documents.

use colored::Colorize;
use policy_ocr_core::{Classification, Document, Resolution, Statistics, StructuralError};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct RecordOutput {
    pub line: String,
    pub classification: Classification,
    pub digits: String,
    pub corrected: Option<String>,
    pub candidates: Vec<String>,
}

impl From<&Resolution> for RecordOutput {
    fn from(record: &Resolution) -> Self {
        Self {
            line: record.to_string(),
            classification: record.classification(),
            digits: record.original().digit_string(),
            corrected: record.corrected().map(|number| number.digit_string()),
            candidates: record
                .candidates()
                .iter()
                .map(|number| number.digit_string())
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ParseReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub statistics: Statistics,
    pub records: Vec<RecordOutput>,
    pub errors: &'a [StructuralError],
}

impl<'a> ParseReport<'a> {
    pub fn new(input: &'a Path, output: &'a Path, document: &'a Document) -> Self {
        Self {
            input,
            output,
            statistics: document.statistics(),
            records: document.records().iter().map(RecordOutput::from).collect(),
            errors: document.errors(),
        }
    }
}

fn colored_line(record: &Resolution) -> String {
    let line = record.to_string();
    match record.classification() {
        Classification::Valid if record.was_corrected() => line.cyan().to_string(),
        Classification::Valid => line.green().to_string(),
        Classification::ChecksumError => line.red().to_string(),
        Classification::IllegibleDigits | Classification::Ambiguous => line.yellow().to_string(),
        Classification::Unparseable => line.red().bold().to_string(),
    }
}

pub fn print_parse_report(input: &Path, output: &Path, document: &Document) {
    let stats = document.statistics();

    println!("{}", "━".repeat(50).dimmed());
    println!("{}", "            Policy Number Report".cyan().bold());
    println!("{}", "━".repeat(50).dimmed());
    println!();

    println!("{}", "Files".white().bold());
    println!("  Input:   {}", input.display().to_string().cyan());
    println!("  Output:  {}", output.display().to_string().cyan());
    println!();

    println!("{}", "Statistics".white().bold());
    println!("  Total:        {}", stats.total.to_string().cyan());
    println!("  Valid:        {}", stats.valid.to_string().green());
    println!("  Corrected:    {}", stats.corrected.to_string().cyan());
    println!("  Checksum ERR: {}", stats.checksum_error.to_string().red());
    println!("  Illegible:    {}", stats.illegible.to_string().yellow());
    println!("  Ambiguous:    {}", stats.ambiguous.to_string().yellow());
    println!("  Unparseable:  {}", stats.unparseable.to_string().red());
    println!();

    if document.has_errors() {
        println!("{}", "Structural errors".white().bold());
        for error in document.errors() {
            println!("  {}", error.to_string().red());
            for line in error.lines() {
                println!("    {}", format!("{line:?}").dimmed());
            }
        }
        println!();
    }

    println!("{}", "Results".white().bold());
    for record in document.records() {
        println!("  {}", colored_line(record));
    }
}

pub fn print_parse_json(input: &Path, output: &Path, document: &Document) -> anyhow::Result<()> {
    let report = ParseReport::new(input, output, document);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Each group as decoded glyphs followed by its result line.
pub fn print_glyphs(document: &Document) {
    for (index, record) in document.records().iter().enumerate() {
        println!("{}", format!("#{}", index + 1).dimmed());
        print!("{}", record.display_number().render_glyphs());
        println!("{}", colored_line(record));
        println!();
    }
}

//! policy-ocr - ASCII-art policy number parser
//!
//! Usage:
//!   policy-ocr parse FILE        Parse a document and write `<stem>_parsed.txt`
//!   policy-ocr generate          Write a synthetic sample document
//!   policy-ocr show FILE         Print decoded glyphs next to each result

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use policy_ocr_core::sample::{generate_document, SampleCounts};
use policy_ocr_core::{output_path_for, parse_document_file, Document, ParseOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use config::{default_config_path, load_config, Config};

#[derive(Parser)]
#[command(name = "policy-ocr")]
#[command(about = "Parse ASCII-art policy number documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and write the results file
    Parse {
        /// Document to parse
        file: PathBuf,

        /// Directory for the results file (default: parsed_files)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        parser: ParserArgs,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Write log output to this file instead of stderr
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,

        /// Config file (default: platform config dir)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
    /// Write a synthetic document with a known mix of numbers
    #[command(alias = "gen")]
    Generate {
        #[arg(long, default_value = "20")]
        valid: usize,

        /// Valid numbers with one stroke missing
        #[arg(long, default_value = "0")]
        correctable: usize,

        #[arg(long, default_value = "6")]
        illegible: usize,

        #[arg(long, default_value = "4")]
        checksum_errors: usize,

        #[arg(long, default_value = "0")]
        unparseable: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print each group's decoded glyphs next to its result
    Show {
        /// Document to parse
        file: PathBuf,

        #[command(flatten)]
        parser: ParserArgs,

        /// Config file (default: platform config dir)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
struct ParserArgs {
    /// Report illegible numbers without trying corrections
    #[arg(long = "no-correct")]
    no_correct: bool,

    /// Resolve groups in parallel
    #[arg(long)]
    parallel: bool,

    /// Lines between glyph groups (0 for back-to-back groups)
    #[arg(long, value_name = "N")]
    separator_lines: Option<usize>,
}

impl ParserArgs {
    /// Apply command-line overrides on top of configured options.
    fn apply(&self, mut options: ParseOptions) -> ParseOptions {
        if self.no_correct {
            options.correct = false;
        }
        if self.parallel {
            options.parallel = true;
        }
        if let Some(lines) = self.separator_lines {
            options.separator_lines = lines;
        }
        options
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).context("Failed to create log directory")?;
            }
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn resolved_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load_config(path),
        None => {
            let path = match default_config_path() {
                Ok(path) => path,
                Err(_) => return Ok(Config::default()),
            };
            match load_config(&path) {
                Ok(config) => Ok(config),
                Err(err) => {
                    tracing::warn!(
                        "Failed to load config from {}: {}. Using defaults.",
                        path.display(),
                        err
                    );
                    Ok(Config::default())
                }
            }
        }
    }
}

fn load_document(file: &Path, options: &ParseOptions) -> Result<Document> {
    parse_document_file(file, options)
        .with_context(|| format!("Failed to parse policy document: {}", file.display()))
}

fn cmd_parse(
    file: &Path,
    output_dir: Option<PathBuf>,
    parser: &ParserArgs,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = resolved_config(config_path)?;
    let options = parser.apply(config.parse_options());
    let output_dir = output_dir.unwrap_or_else(|| config.output_dir());

    let document = load_document(file, &options)?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;
    let output_path = output_path_for(file, &output_dir);
    fs::write(&output_path, document.render())
        .with_context(|| format!("Failed to write results: {}", output_path.display()))?;
    tracing::info!("Wrote results to {}", output_path.display());

    if json {
        report::print_parse_json(file, &output_path, &document)
    } else {
        report::print_parse_report(file, &output_path, &document);
        Ok(())
    }
}

fn cmd_generate(counts: &SampleCounts, seed: Option<u64>, output: Option<&Path>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let text = generate_document(counts, &mut rng);

    match output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write sample document: {}", path.display()))?;
            eprintln!(
                "{} {} policy numbers to {}",
                "Generated".green(),
                counts.total(),
                path.display()
            );
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_show(file: &Path, parser: &ParserArgs, config_path: Option<&Path>) -> Result<()> {
    let config = resolved_config(config_path)?;
    let options = parser.apply(config.parse_options());
    let document = load_document(file, &options)?;
    report::print_glyphs(&document);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = match &cli.command {
        Commands::Parse { log_file, .. } => log_file.as_deref(),
        _ => None,
    };
    init_logging(cli.verbose, log_file)?;

    match cli.command {
        Commands::Parse {
            file,
            output_dir,
            parser,
            json,
            log_file: _,
            config,
        } => cmd_parse(&file, output_dir, &parser, json, config.as_deref()),
        Commands::Generate {
            valid,
            correctable,
            illegible,
            checksum_errors,
            unparseable,
            seed,
            output,
        } => {
            let counts = SampleCounts {
                valid,
                correctable,
                illegible,
                checksum_errors,
                unparseable,
            };
            cmd_generate(&counts, seed, output.as_deref())
        }
        Commands::Show {
            file,
            parser,
            config,
        } => cmd_show(&file, &parser, config.as_deref()),
    }
}

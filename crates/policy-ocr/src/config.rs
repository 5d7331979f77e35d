//! Configuration loading for policy-ocr.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use policy_ocr_core::ParseOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    pub parser: Option<ParseOptions>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

/// Directory parsed documents are written to when nothing else is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "parsed_files";

impl Config {
    pub fn parse_options(&self) -> ParseOptions {
        self.parser.unwrap_or_default()
    }

    /// Configured output directory or `parsed_files`.
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .as_ref()
            .and_then(|output| output.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "policy-ocr").context("Could not determine config directory")?;
    Ok(dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).context("Failed to parse config file as TOML")?;
    Ok(config)
}

//! Export Module
//!
//! Writes the Assets table's current filtered+sorted rows (all pages) to a
//! timestamped CSV or JSON file.
//!
//! - `e` exports CSV, `E` exports JSON
//! - Files land in `[export] dir` from the config, or the platform data dir

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::config;
use crate::domain::assets::Asset;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export io: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv write: {0}")]
    Csv(#[from] csv::Error),

    #[error("json write: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no export directory available")]
    NoDirectory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `rows` to a timestamped file, returning its path.
pub fn export_assets(
    rows: &[&Asset],
    format: ExportFormat,
    dir_override: Option<&Path>,
) -> Result<PathBuf, ExportError> {
    let dir = match dir_override {
        Some(dir) => dir.to_path_buf(),
        None => default_export_dir().ok_or(ExportError::NoDirectory)?,
    };
    fs::create_dir_all(&dir)?;

    let path = dir.join(generate_filename("assets", format.extension()));
    match format {
        ExportFormat::Csv => csv_export::write_assets(&path, rows)?,
        ExportFormat::Json => json_export::write_assets(&path, rows)?,
    };
    Ok(path)
}

fn default_export_dir() -> Option<PathBuf> {
    config::data_dir().map(|dir| dir.join("exports"))
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::assets::query::{normalize_rows_per_page, ROWS_PER_PAGE_CHOICES};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableConfig {
    /// One of 10/25/50; anything else falls back to the default.
    pub rows_per_page: Option<usize>,

    /// Simulated latency for table transitions, in milliseconds.
    /// 0 disables the loading state entirely.
    pub latency_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportConfig {
    /// Directory for CSV/JSON exports; defaults to the platform data dir.
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub table: TableConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    pub fn rows_per_page(&self) -> usize {
        self.table
            .rows_per_page
            .map(normalize_rows_per_page)
            .unwrap_or(ROWS_PER_PAGE_CHOICES[0])
    }

    /// `None` means the loading simulation is off.
    pub fn latency_ms(&self) -> Option<u64> {
        match self.table.latency_ms {
            Some(0) => None,
            Some(ms) => Some(ms),
            None => Some(DEFAULT_LATENCY_MS),
        }
    }

    pub fn export_dir(&self) -> Option<PathBuf> {
        self.export
            .dir
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }
}

pub const DEFAULT_LATENCY_MS: u64 = 500;

pub fn load(explicit: Option<PathBuf>) -> Config {
    let Some(path) = explicit.or_else(config_path) else {
        return Config::default();
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };
    toml::from_str::<Config>(&content).unwrap_or_default()
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("GRIDWATCH_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("gridwatch").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("gridwatch").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "gridwatch", "gridwatch")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("gridwatch"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("gridwatch"));
    }
    directories::ProjectDirs::from("io", "gridwatch", "gridwatch")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

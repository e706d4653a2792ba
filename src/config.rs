//! Environment-driven settings. Every value has a default, so a bare run
//! crawls books.toscrape.com into the current directory.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use tracing::Level;

pub const DEFAULT_BASE_URL: &str = "http://books.toscrape.com/";
pub const DEFAULT_LOG_FILE: &str = "scrap.log";

#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Site root, always ending with `/`
    pub base_url: String,
    /// Directory receiving category folders
    pub output_dir: PathBuf,
    /// Append-only log file
    pub log_file: PathBuf,
    pub log_level: Level,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from("."),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: Level::DEBUG,
        }
    }
}

impl CrawlerConfig {
    /// Read `CATALOG_BASE_URL`, `CATALOG_OUTPUT_DIR`, `CATALOG_LOG_FILE` and
    /// `CATALOG_LOG_LEVEL`, falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let base_url = lookup("CATALOG_BASE_URL").map_or(defaults.base_url, |url| with_trailing_slash(url.trim()));
        let output_dir = lookup("CATALOG_OUTPUT_DIR").map_or(defaults.output_dir, PathBuf::from);
        let log_file = lookup("CATALOG_LOG_FILE").map_or(defaults.log_file, PathBuf::from);
        let log_level = match lookup("CATALOG_LOG_LEVEL") {
            Some(level) => Level::from_str(level.trim())
                .map_err(|_| anyhow!("Invalid CATALOG_LOG_LEVEL: {level}"))?,
            None => defaults.log_level,
        };

        Ok(Self {
            base_url,
            output_dir,
            log_file,
            log_level,
        })
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

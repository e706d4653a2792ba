//! File logging: `<timestamp> <LEVEL> <message>` lines appended to one file

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CrawlerConfig;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Install the global subscriber writing to `config.log_file`
pub fn init(config: &CrawlerConfig) -> Result<()> {
    let file = open_log_file(&config.log_file)?;

    subscriber(config.log_level, Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {e}"))
}

/// Open the log for appending, creating it on first use. Earlier runs are kept.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Plain-text subscriber: local timestamp, level, message
pub fn subscriber<W>(level: Level, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

//! Per-category CSV output

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

use crate::models::{CSV_HEADERS, CsvRow, ProductRecord};

/// Write the records of one category to `<output_dir>/<name>/<name>.csv`.
///
/// `name` is trimmed before use. An existing file is overwritten. The header
/// row is always written, so a category without products gets a header-only file.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written file
pub fn write_category_csv(output_dir: &Path, category_name: &str, records: &[ProductRecord]) -> Result<PathBuf> {
    let folder_name = category_name.trim();
    let folder = output_dir.join(folder_name);
    fs::create_dir_all(&folder).with_context(|| format!("Failed to create {}", folder.display()))?;

    let path = folder.join(format!("{folder_name}.csv"));
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_path(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer.flush()?;

    Ok(path)
}

//! CSV serialization of article records
//!
//! Records are heterogeneous: article rows and error rows carry different keys.
//! The header is the union of keys in first-seen order, and a row leaves empty
//! the cells for keys it lacks.

use crate::article::ArticleRecord;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing the export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Escapes a column name so only printable ASCII reaches the sink
///
/// Backslashes are doubled, so distinct keys always stay distinct.
///
/// # Examples
///
/// ```
/// use news_frontier::output::escape_column;
///
/// assert_eq!(escape_column("title"), "title");
/// assert_eq!(escape_column("título"), "t\\u{ed}tulo");
/// ```
pub fn escape_column(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ' '..='~' => escaped.push(c),
            _ => escaped.extend(c.escape_default()),
        }
    }
    escaped
}

/// Union of record keys, in the order they are first seen
pub fn header_for(records: &[ArticleRecord]) -> Vec<&'static str> {
    let mut header: Vec<&'static str> = Vec::new();
    for record in records {
        for (key, _) in record.fields() {
            if !header.contains(&key) {
                header.push(key);
            }
        }
    }
    header
}

/// Writes `records` as CSV to `path`, creating parent directories
///
/// Returns the number of data rows written.
pub fn write_table(path: &Path, records: &[ArticleRecord]) -> Result<usize, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let header = header_for(records);
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(header.iter().map(|key| escape_column(key)))?;

    for record in records {
        let fields = record.fields();
        let row = header.iter().map(|key| {
            fields
                .iter()
                .find(|(field, _)| field == key)
                .map(|(_, value)| value.as_str())
                .unwrap_or("")
        });
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(records.len())
}

//! Numeric series ingestion from CSV or plain-text files
//!
//! Accepts either a bare list of numbers (one per line) or a CSV with a
//! header row. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! hour,vehicles            # header detected, last column used by default
//! 0,412
//! 1,398
//! ```
//!
//! Length checks are left to the scoring pipeline; this module only turns
//! text into `Vec<f64>`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("column '{column}' not found in {} (available: {available})", .path.display())]
    MissingColumn {
        path: PathBuf,
        column: String,
        available: String,
    },

    #[error("{}:{line}: cannot parse '{value}' as a number", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("{} contains no samples", .path.display())]
    Empty { path: PathBuf },
}

/// Read one numeric column from `path`.
///
/// With `column` set, the first data line must be a header containing that
/// name (matched case-insensitively, surrounding whitespace ignored). Without
/// it, a header is detected when the first field of the first line is not a
/// number, and the last column is used.
pub fn read_series(path: &Path, column: Option<&str>) -> Result<Vec<f64>, IngestError> {
    let io_err = |source: std::io::Error| IngestError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    let mut selected: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let fields = csv_split(trimmed);

        let col = match selected {
            Some(col) => col,
            None => {
                let (col, is_header) = select_column(path, &fields, column)?;
                selected = Some(col);
                if is_header {
                    debug!(path = %path.display(), column = col, "Header row detected");
                    continue;
                }
                col
            }
        };

        let raw = fields.get(col).map_or("", |f| f.trim());
        let value = raw.parse::<f64>().map_err(|_| IngestError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            value: raw.to_string(),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), samples = values.len(), "Series loaded");
    Ok(values)
}

/// Decide which column to read from the first data line.
/// Returns the column index and whether that line is a header.
fn select_column(
    path: &Path,
    fields: &[String],
    column: Option<&str>,
) -> Result<(usize, bool), IngestError> {
    match column {
        Some(wanted) => {
            let wanted = wanted.trim();
            fields
                .iter()
                .position(|f| f.trim().eq_ignore_ascii_case(wanted))
                .map(|col| (col, true))
                .ok_or_else(|| IngestError::MissingColumn {
                    path: path.to_path_buf(),
                    column: wanted.to_string(),
                    available: fields
                        .iter()
                        .map(|f| f.trim())
                        .collect::<Vec<_>>()
                        .join(", "),
                })
        }
        None => {
            let is_header = fields
                .first()
                .is_some_and(|f| f.trim().parse::<f64>().is_err());
            Ok((fields.len().saturating_sub(1), is_header))
        }
    }
}

/// Split a CSV line on commas outside double quotes. `""` inside a quoted
/// field is a literal quote.
fn csv_split(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

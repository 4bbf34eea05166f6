use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;

use reader::open_maybe_gz;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: line {line}, column {column}: '{value}' is not a number")]
    Parse {
        line: u64,
        column: usize,
        value: String,
    },
}

/// Reads a `thickness,trial1,...,trialN` file (optionally gzip-compressed).
///
/// Only cell syntax is checked here; table shape is validated by the reducer.
pub fn load_measurements(path: &Path) -> Result<Vec<Vec<f64>>, InputError> {
    let reader = open_maybe_gz(path)?;
    let rows = parse_measurements(reader)?;
    tracing::info!(
        path = %path.display(),
        samples = rows.len(),
        "loaded measurement rows"
    );
    Ok(rows)
}

/// Blank lines and lines starting with `#` are ignored. Cells are trimmed.
pub fn parse_measurements<R: Read>(reader: R) -> Result<Vec<Vec<f64>>, InputError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        if record.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let mut row = Vec::with_capacity(record.len());
        for (idx, cell) in record.iter().enumerate() {
            let value = cell.parse::<f64>().map_err(|_| InputError::Parse {
                line,
                column: idx + 1,
                value: cell.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Default plot label: the file name without its extension(s).
pub fn dataset_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let name = name
        .strip_suffix(".gz")
        .or_else(|| name.strip_suffix(".GZ"))
        .unwrap_or(name.as_str());
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    if stem.is_empty() {
        "measurements".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

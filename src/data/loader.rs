use std::fs::File;
use std::io::{self, ErrorKind};
use std::path::Path;

use log::{debug, info};

use super::error::{QueryError, Result};
use super::model::{Dataset, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited text file into a [`Dataset`].
///
/// Layout: first record is the header, every following record is zipped
/// against it into a [`Row`]. All values stay text.
///
/// * a missing file is [`QueryError::FileNotFound`]
/// * a directory, or any other open failure, is [`QueryError::Io`]
/// * records shorter than the header yield rows without the trailing keys
pub fn load_file(path: &Path, delimiter: u8) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => QueryError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => QueryError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let metadata = file.metadata().map_err(|source| QueryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.is_dir() {
        return Err(QueryError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("is a directory"),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let column_names = unique_in_order(&headers);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Row = headers.iter().zip(record.iter()).collect();
        if record.len() != headers.len() {
            debug!(
                "record {} has {} fields, header has {}",
                rows.len() + 1,
                record.len(),
                headers.len()
            );
        }
        rows.push(row);
    }

    info!(
        "loaded {} rows x {} columns from {}",
        rows.len(),
        column_names.len(),
        path.display()
    );
    Ok(Dataset::new(column_names, rows))
}

fn unique_in_order(headers: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(headers.len());
    for h in headers {
        if !seen.contains(h) {
            seen.push(h.clone());
        }
    }
    seen
}

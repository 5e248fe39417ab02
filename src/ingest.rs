// src/ingest.rs
//! Loads habitat patches from a delimited table.
//!
//! Expects a header row naming `id`, `x`, `y` and `quality` columns (any
//! order, any case). Extra columns are ignored.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{RankError, Result};
use crate::types::Patch;

const REQUIRED: [&str; 4] = ["id", "x", "y", "quality"];

/// Column positions of the required attributes.
struct Columns {
    id: usize,
    x: usize,
    y: usize,
    quality: usize,
}

/// Reads all patches from the CSV file at `path`.
///
/// # Errors
/// Returns `SourceUnavailable` if the file cannot be opened or read,
/// `SchemaViolation` for missing or invalid attributes and
/// `DuplicateIdentifier` for a repeated id.
pub fn load_patches(path: &Path) -> Result<Vec<Patch>> {
    let file = File::open(path).map_err(|source| RankError::SourceUnavailable {
        source,
        path: path.to_path_buf(),
    })?;
    let patches = parse(file, path)?;
    info!(path = %path.display(), patches = patches.len(), "loaded habitat patches");
    Ok(patches)
}

/// Reads patches from any CSV reader.
///
/// # Errors
/// See [`load_patches`].
pub fn read_patches<R: Read>(reader: R) -> Result<Vec<Patch>> {
    parse(reader, Path::new("<reader>"))
}

fn parse<R: Read>(reader: R, origin: &Path) -> Result<Vec<Patch>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| csv_failure(e, origin, 0))?
        .clone();
    let columns = locate_columns(&headers)?;
    debug!(columns = headers.len(), "patch table header parsed");

    let mut patches = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (i, row) in reader.records().enumerate() {
        let record = i + 1;
        let row = row.map_err(|e| csv_failure(e, origin, record))?;
        let patch = parse_row(&row, &columns, record)?;

        if let Some(&first_record) = seen.get(patch.id().as_str()) {
            return Err(RankError::DuplicateIdentifier {
                id: patch.id().to_string(),
                first_record,
                record,
            });
        }
        seen.insert(patch.id().to_string(), record);
        patches.push(patch);
    }

    Ok(patches)
}

fn locate_columns(headers: &csv::StringRecord) -> Result<Columns> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| RankError::SchemaViolation {
                record: 0,
                id: "<header>".to_string(),
                reason: format!(
                    "missing required column '{name}' (need {})",
                    REQUIRED.join(", ")
                ),
            })
    };
    Ok(Columns {
        id: find("id")?,
        x: find("x")?,
        y: find("y")?,
        quality: find("quality")?,
    })
}

fn parse_row(row: &csv::StringRecord, columns: &Columns, record: usize) -> Result<Patch> {
    let id = match row.get(columns.id) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            return Err(RankError::SchemaViolation {
                record,
                id: "<missing>".to_string(),
                reason: "missing attribute 'id'".to_string(),
            })
        }
    };

    let x = parse_number(row, columns.x, "x", &id, record)?;
    let y = parse_number(row, columns.y, "y", &id, record)?;
    let quality = parse_number(row, columns.quality, "quality", &id, record)?;

    Patch::new(id, x, y, quality).map_err(|e| at_record(e, record))
}

fn parse_number(
    row: &csv::StringRecord,
    column: usize,
    name: &str,
    id: &str,
    record: usize,
) -> Result<f64> {
    let violation = |reason: String| RankError::SchemaViolation {
        record,
        id: id.to_string(),
        reason,
    };
    let raw = row
        .get(column)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| violation(format!("missing attribute '{name}'")))?;
    raw.parse::<f64>()
        .map_err(|_| violation(format!("attribute '{name}' is not a number: '{raw}'")))
}

fn at_record(err: RankError, record: usize) -> RankError {
    match err {
        RankError::SchemaViolation { id, reason, .. } => RankError::SchemaViolation {
            record,
            id,
            reason,
        },
        other => other,
    }
}

fn csv_failure(err: csv::Error, origin: &Path, record: usize) -> RankError {
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => RankError::SourceUnavailable {
            source,
            path: PathBuf::from(origin),
        },
        _ => RankError::SchemaViolation {
            record,
            id: "<unreadable>".to_string(),
            reason,
        },
    }
}

//! CSV loading of the marketplace export into raw records.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::RawRecord;
use crate::error::{DashboardError, DashboardResult};

/// Reads headed CSV from any reader.
///
/// Unknown columns are ignored and missing ones become empty strings; rows
/// may be shorter than the header. Malformed CSV is a load error.
pub fn load_csv_reader<R: Read>(reader: R) -> DashboardResult<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result.map_err(|e| {
            DashboardError::Load(format!("failed to parse CSV row {}: {e}", index + 1))
        })?;
        records.push(record);
    }
    debug!(record_count = records.len(), "loaded CSV records");
    Ok(records)
}

pub fn load_csv_str(input: &str) -> DashboardResult<Vec<RawRecord>> {
    load_csv_reader(input.as_bytes())
}

pub fn load_csv_path(path: impl AsRef<Path>) -> DashboardResult<Vec<RawRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        DashboardError::Load(format!("failed to open {}: {e}", path.display()))
    })?;
    load_csv_reader(file)
}

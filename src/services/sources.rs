//! Data-sources manifest: which upstream file backed each report date.
//!
//! Purely presentational; rendered as a clickable reference table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::error::{DataError, DataResult};

/// One `(report_date, source_url)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub report_date: chrono::NaiveDate,
    pub source_url: String,
}

/// Load the sources manifest CSV.
pub fn load_sources(path: impl AsRef<Path>) -> DataResult<Vec<SourceEntry>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| DataError::io(&label, e))?;
    let mut rdr = csv::Reader::from_reader(file);
    rdr.deserialize()
        .map(|r| r.map_err(|e| DataError::parse(&label, e)))
        .collect()
}

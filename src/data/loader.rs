//! Strict-typed loading of the weekly CBSA time-series CSV.

use log::debug;
use std::io::Read;
use std::path::Path;

use crate::data::error::{DataError, DataResult};
use crate::models::RawObservation;

/// Rows reported at or before this date are discarded at load time. The
/// upstream feed restates early-2021 weeks with a different schema.
const CUTOFF_YMD: (i32, u32, u32) = (2021, 1, 11);

/// Earliest report date retained by the loader (exclusive bound).
pub fn report_date_cutoff() -> chrono::NaiveDate {
    let (y, m, d) = CUTOFF_YMD;
    chrono::NaiveDate::from_ymd_opt(y, m, d).expect("static cutoff date is valid")
}

/// Read the raw time-series CSV from a file.
///
/// # Errors
/// Missing or unreadable file, or any row failing its declared column types,
/// fails the whole load. There is no partial result.
pub fn load_raw(path: impl AsRef<Path>) -> DataResult<Vec<RawObservation>> {
    let path = path.as_ref();
    let label = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| DataError::io(&label, e))?;
    parse_raw(file, &label)
}

/// Parse raw rows from any reader.
///
/// Strict typing: every row must satisfy [`RawObservation`]'s declared types;
/// a coercion failure surfaces as [`DataError::Parse`] rather than being
/// dropped. Rows with an empty report date are dropped, and rows dated at or
/// before the cutoff are discarded.
pub fn parse_raw(reader: impl Read, label: &str) -> DataResult<Vec<RawObservation>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let cutoff = report_date_cutoff();
    let mut rows = Vec::new();
    let mut dropped_dateless = 0usize;
    let mut dropped_cutoff = 0usize;

    for record in rdr.deserialize::<RawObservation>() {
        let record = record.map_err(|e| DataError::parse(label, e))?;
        match record.report_date {
            None => dropped_dateless += 1,
            Some(date) if date <= cutoff => dropped_cutoff += 1,
            Some(_) => rows.push(record),
        }
    }

    if dropped_dateless > 0 || dropped_cutoff > 0 {
        debug!(
            "{}: dropped {} dateless and {} pre-cutoff rows",
            label, dropped_dateless, dropped_cutoff
        );
    }
    Ok(rows)
}

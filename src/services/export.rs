//! CSV export of the display table.

use crate::data::error::{DataError, DataResult};

use super::views::TableRow;

/// Serialize table rows to CSV, preserving the table view's ordering.
///
/// Dates format as `%Y-%m-%d`, so re-parsing the export reproduces the same
/// (cbsa, report_date) pairs and numeric values.
pub fn export_csv(rows: &[TableRow]) -> DataResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| DataError::Export(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| DataError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DataError::Export(e.to_string()))
}

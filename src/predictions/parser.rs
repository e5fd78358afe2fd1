use crate::error::{DashboardError, DashboardResult};
use crate::table::{self, ReadingTable};

pub const TIME: &str = "Time";
pub const PREDICTED_VALUE: &str = "Predicted Value";

/// Parse a prediction CSV into a table keyed on its `Time` column.
///
/// The `Predicted Value` column is carried when present; other columns are
/// ignored. A file without it still parses, and the gap surfaces as a
/// `DashboardError::Column` once a chart asks for it.
///
/// # Errors
///
/// Returns `DashboardError::Parse` if the CSV is malformed, has no `Time`
/// column, or contains an unparsable timestamp or value.
pub fn parse_predictions(body: &str) -> DashboardResult<ReadingTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DashboardError::Parse(format!("prediction CSV header: {e}")))?
        .clone();

    let time_idx = headers
        .iter()
        .position(|h| h == TIME)
        .ok_or_else(|| {
            DashboardError::Parse(format!(
                "prediction CSV has no '{TIME}' column (found: {})",
                headers.iter().collect::<Vec<_>>().join(", ")
            ))
        })?;
    let value_idx = headers.iter().position(|h| h == PREDICTED_VALUE);

    let mut table = ReadingTable::new(TIME, value_idx.map(|_| PREDICTED_VALUE));

    for (line, record) in reader.records().enumerate() {
        let record = record
            .map_err(|e| DashboardError::Parse(format!("prediction CSV row {}: {e}", line + 1)))?;

        let raw_time = record.get(time_idx).unwrap_or_default();
        let time = table::parse_timestamp(raw_time).ok_or_else(|| {
            DashboardError::Parse(format!(
                "prediction CSV row {}: invalid {TIME} '{raw_time}'",
                line + 1
            ))
        })?;

        let values = match value_idx {
            Some(idx) => vec![table::parse_value(
                PREDICTED_VALUE,
                record.get(idx).unwrap_or_default(),
            )?],
            None => Vec::new(),
        };

        table.push_row(time, values)?;
    }

    Ok(table)
}

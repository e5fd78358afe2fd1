//! Column-oriented reading tables shared by the telemetry and prediction fetchers.
//!
//! A table owns one time column and any number of numeric columns of the same
//! length. Rows keep the order the source returned them in; nothing is sorted
//! or deduplicated.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingTable {
    time_column: String,
    times: Vec<DateTime<Utc>>,
    columns: Vec<Column>,
}

impl ReadingTable {
    /// Create an empty table with the given time column and value column names.
    pub fn new<I, S>(time_column: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            time_column: time_column.into(),
            times: Vec::new(),
            columns: columns
                .into_iter()
                .map(|name| Column {
                    name: name.into(),
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    /// Append a row. `values` must hold one cell per column, in column order.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Parse` if the number of cells does not match
    /// the number of columns.
    pub fn push_row(
        &mut self,
        time: DateTime<Utc>,
        values: Vec<Option<f64>>,
    ) -> DashboardResult<()> {
        if values.len() != self.columns.len() {
            return Err(DashboardError::Parse(format!(
                "row has {} values, table has {} columns",
                values.len(),
                self.columns.len()
            )));
        }

        self.times.push(time);
        for (column, value) in self.columns.iter_mut().zip(values) {
            column.values.push(value);
        }
        Ok(())
    }

    #[must_use]
    pub fn time_column(&self) -> &str {
        &self.time_column
    }

    #[must_use]
    pub fn times(&self) -> &[DateTime<Utc>] {
        &self.times
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Look up a value column by name.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Column` if the table has no such column.
    pub fn column(&self, name: &str) -> DashboardResult<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
            .ok_or_else(|| DashboardError::Column {
                column: name.to_string(),
                available: self.column_names().collect::<Vec<_>>().join(", "),
            })
    }
}

/// Naive layouts tried after RFC 3339, most specific first.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Parse a timestamp as found in ThingSpeak feeds and prediction CSVs.
///
/// Zone-less timestamps are taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // "2025-03-01 12:00:00+00:00" style, as written by dataframe exports
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Cell contents read as missing values, as dataframe CSV readers do by default.
const MISSING_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Parse a numeric cell. Empty cells, NA markers and NaN are missing values.
///
/// # Errors
///
/// Returns `DashboardError::Parse` if a non-empty cell is not a number.
pub fn parse_value(column: &str, raw: &str) -> DashboardResult<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() || MISSING_VALUE_TOKENS.contains(&raw) {
        return Ok(None);
    }

    raw.parse::<f64>()
        .map(|v| (!v.is_nan()).then_some(v))
        .map_err(|e| DashboardError::Parse(format!("{column}: invalid number '{raw}': {e}")))
}

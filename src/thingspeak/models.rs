use serde::Deserialize;
use std::collections::HashMap;

use crate::channels::SensorChannel;
use crate::error::{DashboardError, DashboardResult};
use crate::table::{self, ReadingTable};

/// Time column of the actual readings table, named after the feed attribute.
pub const CREATED_AT: &str = "created_at";

/// Response from `/channels/{channel_id}/feeds.json`
#[derive(Debug, Clone, Deserialize)]
pub struct FeedsResponse {
    #[serde(default)]
    pub channel: Option<ChannelInfo>,
    pub feeds: Vec<FeedEntry>,
}

/// Channel metadata echoed back with every feeds request
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_entry_id: Option<i64>,
}

/// One timestamped record. Field values arrive as numeric strings, but
/// numbers and nulls are accepted as well.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEntry {
    pub created_at: String,
    #[serde(default)]
    pub entry_id: Option<i64>,
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl FeedEntry {
    /// Numeric value of `field`, `None` if absent, null or empty.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Parse` if the value is present but not numeric.
    pub fn value(&self, field: &str) -> DashboardResult<Option<f64>> {
        match self.fields.get(field) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::String(s)) => table::parse_value(field, s),
            Some(serde_json::Value::Number(n)) => Ok(n.as_f64().filter(|v| !v.is_nan())),
            Some(other) => Err(DashboardError::Parse(format!(
                "{field}: expected a numeric string, got {other}"
            ))),
        }
    }
}

impl FeedsResponse {
    /// Convert the feed list into the actual readings table.
    ///
    /// Columns are `field1`..`field4` in channel order, whether or not any
    /// entry carries them; fields beyond the four channels are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Parse` if a `created_at` or field value does not parse.
    pub fn to_table(&self) -> DashboardResult<ReadingTable> {
        let mut table =
            ReadingTable::new(CREATED_AT, SensorChannel::ALL.iter().map(|c| c.field()));

        for entry in &self.feeds {
            let time = table::parse_timestamp(&entry.created_at).ok_or_else(|| {
                DashboardError::Parse(format!(
                    "{CREATED_AT}: invalid timestamp '{}'",
                    entry.created_at
                ))
            })?;

            let values = SensorChannel::ALL
                .iter()
                .map(|channel| entry.value(channel.field()))
                .collect::<DashboardResult<Vec<_>>>()?;

            table.push_row(time, values)?;
        }

        Ok(table)
    }
}

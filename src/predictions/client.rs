use reqwest::Client;

use crate::channels::SensorChannel;
use crate::common::http;
use crate::error::DashboardResult;
use crate::predictions::parser::parse_predictions;
use crate::table::ReadingTable;

/// Downloads the pre-computed prediction CSVs.
///
/// Redirects are followed, which file hosts like Google Drive rely on.
pub struct PredictionClient {
    http_client: Client,
}

impl PredictionClient {
    /// # Errors
    ///
    /// Returns `DashboardError::Network` if the HTTP client cannot be built.
    pub fn new() -> DashboardResult<Self> {
        Ok(Self {
            http_client: http::build_client()?,
        })
    }

    /// Download and parse the prediction CSV of one channel.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Network` if the download fails,
    /// `DashboardError::Parse` if the CSV cannot be parsed.
    pub async fn fetch_predicted_readings(
        &self,
        channel: SensorChannel,
        url: &str,
    ) -> DashboardResult<ReadingTable> {
        tracing::info!(%channel, "Downloading prediction CSV");

        let source = format!("{channel} predictions");
        let body = http::get_text(&self.http_client, url, &source).await?;
        let table = parse_predictions(&body)?;

        tracing::info!(%channel, rows = table.len(), "Predicted readings loaded");
        Ok(table)
    }
}

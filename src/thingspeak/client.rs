use reqwest::Client;

use crate::common::http;
use crate::config::Config;
use crate::error::{DashboardError, DashboardResult};
use crate::table::ReadingTable;
use crate::thingspeak::models::FeedsResponse;

pub struct ThingSpeakClient {
    http_client: Client,
    base_url: String,
    channel_id: String,
    api_key: String,
    results: u32,
}

impl ThingSpeakClient {
    /// # Errors
    ///
    /// Returns `DashboardError::Network` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> DashboardResult<Self> {
        Ok(Self {
            http_client: http::build_client()?,
            base_url: config.thingspeak_base_url.trim_end_matches('/').to_string(),
            channel_id: config.thingspeak_channel_id.clone(),
            api_key: config.thingspeak_api_key.clone(),
            results: config.thingspeak_results,
        })
    }

    /// Get the most recent feed entries of the configured channel.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Network` if the request fails or returns an error status,
    /// `DashboardError::Parse` if the body is not a feeds response.
    pub async fn get_feeds(&self) -> DashboardResult<FeedsResponse> {
        let url = format!(
            "{}/channels/{}/feeds.json?api_key={}&results={}",
            self.base_url, self.channel_id, self.api_key, self.results
        );

        let text = http::get_text(&self.http_client, &url, "ThingSpeak").await?;
        parse_feeds(&text)
    }

    /// Fetch the feed and convert it into the actual readings table.
    ///
    /// # Errors
    ///
    /// Same as [`ThingSpeakClient::get_feeds`], plus `DashboardError::Parse`
    /// for unparsable timestamps or values.
    pub async fn fetch_actual_readings(&self) -> DashboardResult<ReadingTable> {
        tracing::info!(
            channel_id = %self.channel_id,
            results = self.results,
            "Fetching ThingSpeak feed"
        );

        let feeds = self.get_feeds().await?;

        if let Some(channel) = &feeds.channel {
            tracing::debug!(
                id = ?channel.id,
                name = ?channel.name,
                last_entry_id = ?channel.last_entry_id,
                "ThingSpeak channel metadata"
            );
        }

        let table = feeds.to_table()?;
        tracing::info!(rows = table.len(), "Actual readings loaded");
        Ok(table)
    }
}

/// Parse a `feeds.json` body.
///
/// # Errors
///
/// Returns `DashboardError::Parse` if the body is not JSON, lacks the `feeds`
/// list, or an entry lacks `created_at`.
pub fn parse_feeds(body: &str) -> DashboardResult<FeedsResponse> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body_preview = %body.chars().take(500).collect::<String>(),
            "Failed to parse ThingSpeak feeds response"
        );
        DashboardError::Parse(format!("ThingSpeak feeds response: {e}"))
    })
}

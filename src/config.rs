use std::env;

use crate::channels::SensorChannel;

const DEFAULT_PREDICTION_URLS: [&str; SensorChannel::COUNT] = [
    "https://drive.google.com/uc?export=download&id=1-bNzPoA-2VWE1vpka4vy4vUXxI17MqPb",
    "https://drive.google.com/uc?export=download&id=1-6yBJmU4Iz2wfwg_opJdKgQVu4tLEALb",
    "https://drive.google.com/uc?export=download&id=1-U0-uaAyyoRo4gVM-tzyFypL1nNtINKQ",
    "https://drive.google.com/uc?export=download&id=1-A3_3DvK0eVOotIlZq5jyEl-lM0AWn27",
];

pub const DEFAULT_TITLE: &str = "Greenhouse Monitoring Dashboard";

#[derive(Debug, Clone)]
pub struct Config {
    // ThingSpeak API
    pub thingspeak_base_url: String,
    pub thingspeak_channel_id: String,
    pub thingspeak_api_key: String,
    pub thingspeak_results: u32,

    // Prediction downloads, indexed by `SensorChannel::index`
    pub prediction_urls: [String; SensorChannel::COUNT],

    // Page
    pub dashboard_title: String,

    // Server settings
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from `lookup`, which maps a variable name to its value.
    ///
    /// Unset or unparsable optional settings fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if `THINGSPEAK_API_KEY` is not set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let prediction_urls = SensorChannel::ALL.map(|channel| {
            lookup(channel.prediction_url_var())
                .unwrap_or_else(|| DEFAULT_PREDICTION_URLS[channel.index()].to_string())
        });

        Ok(Self {
            // ThingSpeak API
            thingspeak_base_url: lookup("THINGSPEAK_BASE_URL")
                .unwrap_or_else(|| "https://api.thingspeak.com".to_string()),
            thingspeak_channel_id: lookup("THINGSPEAK_CHANNEL_ID")
                .unwrap_or_else(|| "2867238".to_string()),
            thingspeak_api_key: lookup("THINGSPEAK_API_KEY")
                .ok_or(ConfigError::Missing("THINGSPEAK_API_KEY"))?,
            thingspeak_results: lookup("THINGSPEAK_RESULTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),

            prediction_urls,

            dashboard_title: lookup("DASHBOARD_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string()),

            // Server settings
            api_host: lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            api_port: lookup("API_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8050),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }

    #[must_use]
    pub fn prediction_url(&self, channel: SensorChannel) -> &str {
        &self.prediction_urls[channel.index()]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

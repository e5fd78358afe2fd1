//! Startup: one-shot data loading, then binding the listener.
//!
//! Every fetch is awaited in turn: the ThingSpeak feed first, then the
//! prediction CSVs in channel order. Any failure aborts startup.

use tokio::net::TcpListener;

use crate::channels::SensorChannel;
use crate::common::DashboardState;
use crate::config::Config;
use crate::error::{DashboardError, DashboardResult};
use crate::layout;
use crate::predictions::PredictionClient;
use crate::thingspeak::ThingSpeakClient;

/// Fetch all data, build the charts and render the page.
///
/// # Errors
///
/// Returns the first `Network`, `Parse`, `Column` or `Render` error encountered.
pub async fn load_dashboard(config: &Config) -> DashboardResult<DashboardState> {
    let thingspeak = ThingSpeakClient::new(config)?;
    let actual = thingspeak.fetch_actual_readings().await?;

    let predictions = PredictionClient::new()?;
    let mut predicted = Vec::with_capacity(SensorChannel::COUNT);
    for channel in SensorChannel::ALL {
        let table = predictions
            .fetch_predicted_readings(channel, config.prediction_url(channel))
            .await?;
        predicted.push((channel, table));
    }

    let layout = layout::assemble(
        &config.dashboard_title,
        &SensorChannel::ALL,
        &actual,
        &predicted,
    )?;
    tracing::info!(charts = layout.charts().count(), "Dashboard layout assembled");

    DashboardState::new(layout)
}

/// Bind the dashboard listener.
///
/// # Errors
///
/// Returns `DashboardError::Bind` if the address is unavailable.
pub async fn bind(addr: &str) -> DashboardResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| DashboardError::Bind {
            addr: addr.to_string(),
            source,
        })
}

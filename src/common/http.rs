use reqwest::Client;

use crate::error::{DashboardError, DashboardResult};

/// Build the outbound HTTP client. No timeout beyond reqwest's default.
///
/// # Errors
///
/// Returns `DashboardError::Network` if the TLS backend cannot be initialized.
pub fn build_client() -> DashboardResult<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DashboardError::Network(format!("Failed to create HTTP client: {e}")))
}

/// GET `url` and return the body as text.
///
/// Error messages never include the URL, which may carry an API key.
///
/// # Errors
///
/// Returns `DashboardError::Network` if the request fails or returns an error status.
pub async fn get_text(client: &Client, url: &str, source: &str) -> DashboardResult<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| DashboardError::Network(format!("{source}: request failed: {}", e.without_url())))?;

    if !response.status().is_success() {
        return Err(DashboardError::Network(format!(
            "{source}: HTTP {}: {}",
            response.status(),
            response.text().await.unwrap_or_default()
        )));
    }

    response.text().await.map_err(|e| {
        DashboardError::Network(format!(
            "{source}: failed to read response body: {}",
            e.without_url()
        ))
    })
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Column '{column}' not found in table (available: {available})")]
    Column { column: String, available: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

use axum::body::Bytes;
use std::sync::Arc;

use crate::error::DashboardResult;
use crate::layout::Layout;
use crate::routes::dashboard::render_page;

/// Everything the server needs, built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub layout: Arc<Layout>,
    /// Pre-rendered HTML served on every request.
    pub page: Bytes,
}

impl DashboardState {
    /// Render `layout` and freeze it.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Render` if a chart cannot be serialized.
    pub fn new(layout: Layout) -> DashboardResult<Self> {
        let page = render_page(&layout)?;
        Ok(Self {
            layout: Arc::new(layout),
            page: Bytes::from(page),
        })
    }
}

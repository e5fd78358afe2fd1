use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::charts::Figure;
use crate::common::DashboardState;
use crate::config::DEFAULT_TITLE;
use crate::error::{DashboardError, DashboardResult};
use crate::layout::{Layout, Node};

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub async fn dashboard(State(state): State<DashboardState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Html(state.page),
    )
}

/// Render the layout as a standalone HTML page.
///
/// Charts become `div.dash-graph` placeholders which Plotly fills in on load
/// from the figures embedded at the bottom of the page.
///
/// # Errors
///
/// Returns `DashboardError::Render` if the figures cannot be serialized.
pub fn render_page(layout: &Layout) -> DashboardResult<String> {
    let title = layout
        .nodes()
        .iter()
        .find_map(|node| match node {
            Node::Heading(text) => Some(text.as_str()),
            _ => None,
        })
        .unwrap_or(DEFAULT_TITLE);

    let mut body = String::new();
    let mut figures: Vec<Figure> = Vec::new();

    for node in layout.nodes() {
        let line = match node {
            Node::Heading(text) => format!("<h1>{}</h1>\n", escape_html(text)),
            Node::SubHeading(text) => format!("<h2>{}</h2>\n", escape_html(text)),
            Node::Chart(chart) => {
                let id = figures.len();
                figures.push(chart.figure());
                format!("<div class=\"dash-graph\" id=\"graph-{id}\"></div>\n")
            }
        };
        body.push_str(&line);
    }

    let figures_json = serde_json::to_string(&figures)
        .map_err(|e| DashboardError::Render(format!("Failed to serialize figures: {e}")))?
        // Keep the payload from closing the surrounding <script>
        .replace("</", "<\\/");

    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{PLOTLY_JS}" charset="utf-8"></script>
    <style>
        body {{ margin: 0; font-family: system-ui, -apple-system, sans-serif; }}
        .dashboard {{ background-color: #f0fff0; padding: 10px; min-height: 100vh; }}
        h1, h2 {{ text-align: center; }}
        .dash-graph {{ height: 450px; margin-bottom: 1rem; }}
    </style>
</head>
<body>
<div class="dashboard">
{body}</div>
<script>
const figures = {figures_json};
figures.forEach((figure, i) => {{
    Plotly.newPlot('graph-' + i, figure.data, figure.layout, {{ responsive: true }});
}});
</script>
</body>
</html>
"##,
        title = escape_html(title),
    ))
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

//! Line+marker chart specifications and their Plotly figure form.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::DashboardResult;
use crate::table::ReadingTable;

/// Plotly date axis format.
const PLOTLY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Actual,
    Predicted,
}

impl ChartKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Actual => "Actual",
            Self::Predicted => "Predicted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub x: Vec<DateTime<Utc>>,
    pub y: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Series,
}

/// Build the chart of one table column against the table's time column.
///
/// # Errors
///
/// Returns `DashboardError::Column` if the table has no `column`.
pub fn build_chart(
    table: &ReadingTable,
    column: &str,
    label: &str,
    kind: ChartKind,
) -> DashboardResult<ChartSpec> {
    let values = table.column(column)?;

    Ok(ChartSpec {
        title: format!("{} - {label}", kind.as_str()),
        x_title: "Time".to_string(),
        y_title: label.to_string(),
        series: Series {
            name: kind.as_str().to_string(),
            x: table.times().to_vec(),
            y: values.to_vec(),
        },
    })
}

#[derive(Debug, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

#[derive(Debug, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
}

#[derive(Debug, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl ChartSpec {
    /// Plotly figure (`data` + `layout`) for this chart.
    #[must_use]
    pub fn figure(&self) -> Figure {
        Figure {
            data: vec![Trace {
                trace_type: "scatter",
                mode: "lines+markers",
                name: self.series.name.clone(),
                x: self
                    .series
                    .x
                    .iter()
                    .map(|t| t.format(PLOTLY_DATE_FORMAT).to_string())
                    .collect(),
                y: self.series.y.clone(),
            }],
            layout: FigureLayout {
                title: Title::new(&self.title),
                xaxis: Axis {
                    title: Title::new(&self.x_title),
                },
                yaxis: Axis {
                    title: Title::new(&self.y_title),
                },
            },
        }
    }
}

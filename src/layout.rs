//! Page layout as a flat tree of typed nodes.

use crate::channels::SensorChannel;
use crate::charts::{self, ChartKind, ChartSpec};
use crate::error::DashboardResult;
use crate::predictions::parser::PREDICTED_VALUE;
use crate::table::ReadingTable;

pub const ACTUAL_SECTION: &str = "Actual Sensor Readings";
pub const PREDICTED_SECTION: &str = "AI Predicted Sensor Values";

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading(String),
    SubHeading(String),
    Chart(ChartSpec),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    nodes: Vec<Node>,
}

impl Layout {
    #[must_use]
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder::default()
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Chart(chart) => Some(chart),
            _ => None,
        })
    }
}

#[derive(Debug, Default)]
pub struct LayoutBuilder {
    nodes: Vec<Node>,
}

impl LayoutBuilder {
    #[must_use]
    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::Heading(text.into()));
        self
    }

    #[must_use]
    pub fn sub_heading(mut self, text: impl Into<String>) -> Self {
        self.nodes.push(Node::SubHeading(text.into()));
        self
    }

    #[must_use]
    pub fn chart(mut self, chart: ChartSpec) -> Self {
        self.nodes.push(Node::Chart(chart));
        self
    }

    #[must_use]
    pub fn charts(mut self, charts: impl IntoIterator<Item = ChartSpec>) -> Self {
        self.nodes.extend(charts.into_iter().map(Node::Chart));
        self
    }

    #[must_use]
    pub fn build(self) -> Layout {
        Layout { nodes: self.nodes }
    }
}

/// Compose the dashboard page: the title, one actual chart per channel taken
/// from the shared actual table, then one predicted chart per channel taken
/// from that channel's own table.
///
/// # Errors
///
/// Returns `DashboardError::Column` if a table lacks the column a chart needs.
pub fn assemble(
    title: &str,
    channels: &[SensorChannel],
    actual: &ReadingTable,
    predicted: &[(SensorChannel, ReadingTable)],
) -> DashboardResult<Layout> {
    let actual_charts = channels
        .iter()
        .map(|channel| {
            charts::build_chart(actual, channel.field(), &channel.label(), ChartKind::Actual)
        })
        .collect::<DashboardResult<Vec<_>>>()?;

    let predicted_charts = predicted
        .iter()
        .map(|(channel, table)| {
            charts::build_chart(table, PREDICTED_VALUE, &channel.label(), ChartKind::Predicted)
        })
        .collect::<DashboardResult<Vec<_>>>()?;

    Ok(Layout::builder()
        .heading(title)
        .sub_heading(ACTUAL_SECTION)
        .charts(actual_charts)
        .sub_heading(PREDICTED_SECTION)
        .charts(predicted_charts)
        .build())
}

//! Unit tests for chart building, layout assembly and page rendering.
//!
//! Run with: cargo test --test charts_layout_test

use chrono::{TimeZone, Utc};
use greenhouse_dashboard::channels::SensorChannel;
use greenhouse_dashboard::charts::{build_chart, ChartKind};
use greenhouse_dashboard::error::DashboardError;
use greenhouse_dashboard::layout::{self, Layout, Node, ACTUAL_SECTION, PREDICTED_SECTION};
use greenhouse_dashboard::predictions::parser::PREDICTED_VALUE;
use greenhouse_dashboard::routes::dashboard::render_page;
use greenhouse_dashboard::table::ReadingTable;
use tokio_test::{assert_err, assert_ok};

fn actual_table() -> ReadingTable {
    let mut table = ReadingTable::new(
        "created_at",
        SensorChannel::ALL.iter().map(|c| c.field()),
    );
    table
        .push_row(
            Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap(),
            vec![Some(20.1), Some(18.0), Some(55.0), Some(1200.0)],
        )
        .unwrap();
    table
        .push_row(
            Utc.with_ymd_and_hms(2025, 3, 1, 12, 1, 0).unwrap(),
            vec![Some(20.3), None, Some(56.0), Some(1190.0)],
        )
        .unwrap();
    table
}

fn predicted_table(value: f64) -> ReadingTable {
    let mut table = ReadingTable::new("Time", [PREDICTED_VALUE]);
    table
        .push_row(
            Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap(),
            vec![Some(value)],
        )
        .unwrap();
    table
}

fn predicted_tables() -> Vec<(SensorChannel, ReadingTable)> {
    SensorChannel::ALL
        .iter()
        .map(|&c| (c, predicted_table(c.index() as f64)))
        .collect()
}

#[test]
fn channel_labels_carry_units() {
    let labels: Vec<String> = SensorChannel::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(
        labels,
        [
            "Air Temperature (°C)",
            "Soil Temperature (°C)",
            "Humidity (%)",
            "Light Intensity (lux)",
        ]
    );
}

#[test]
fn chart_uses_time_column_and_named_field() {
    let table = actual_table();
    let chart = assert_ok!(build_chart(&table, "field1", "Air Temperature (°C)", ChartKind::Actual));

    assert_eq!(chart.title, "Actual - Air Temperature (°C)");
    assert_eq!(chart.x_title, "Time");
    assert_eq!(chart.y_title, "Air Temperature (°C)");
    assert_eq!(chart.series.name, "Actual");
    assert_eq!(chart.series.x, table.times());
    assert_eq!(chart.series.y, [Some(20.1), Some(20.3)]);
}

#[test]
fn predicted_chart_title() {
    let chart = assert_ok!(build_chart(
        &predicted_table(3.0),
        PREDICTED_VALUE,
        "Humidity (%)",
        ChartKind::Predicted
    ));

    assert_eq!(chart.title, "Predicted - Humidity (%)");
    assert_eq!(chart.series.name, "Predicted");
}

#[test]
fn chart_building_is_idempotent() {
    let table = actual_table();
    let first = build_chart(&table, "field2", "Soil Temperature (°C)", ChartKind::Actual);
    let second = build_chart(&table, "field2", "Soil Temperature (°C)", ChartKind::Actual);

    assert_eq!(assert_ok!(first), assert_ok!(second));
}

#[test]
fn chart_of_missing_column_fails() {
    let err = assert_err!(build_chart(
        &predicted_table(1.0),
        "field1",
        "Air Temperature (°C)",
        ChartKind::Predicted
    ));
    assert!(matches!(err, DashboardError::Column { .. }));
}

#[test]
fn figure_is_a_plotly_scatter() {
    let chart = assert_ok!(build_chart(&actual_table(), "field2", "Soil", ChartKind::Actual));
    let figure = serde_json::to_value(chart.figure()).unwrap();

    assert_eq!(figure["data"][0]["type"], "scatter");
    assert_eq!(figure["data"][0]["mode"], "lines+markers");
    assert_eq!(figure["data"][0]["name"], "Actual");
    assert_eq!(
        figure["data"][0]["x"],
        serde_json::json!(["2025-03-01 12:00:00", "2025-03-01 12:01:00"])
    );
    assert_eq!(figure["data"][0]["y"], serde_json::json!([18.0, null]));
    assert_eq!(figure["layout"]["title"]["text"], "Actual - Soil");
    assert_eq!(figure["layout"]["xaxis"]["title"]["text"], "Time");
    assert_eq!(figure["layout"]["yaxis"]["title"]["text"], "Soil");
}

#[test]
fn layout_orders_sections_and_channels() {
    let layout = assert_ok!(layout::assemble(
        "Greenhouse Monitoring Dashboard",
        &SensorChannel::ALL,
        &actual_table(),
        &predicted_tables(),
    ));
    let nodes = layout.nodes();

    assert_eq!(nodes.len(), 11);
    assert_eq!(
        nodes[0],
        Node::Heading("Greenhouse Monitoring Dashboard".to_string())
    );
    assert_eq!(nodes[1], Node::SubHeading(ACTUAL_SECTION.to_string()));
    assert_eq!(nodes[6], Node::SubHeading(PREDICTED_SECTION.to_string()));

    let titles: Vec<&str> = layout.charts().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Actual - Air Temperature (°C)",
            "Actual - Soil Temperature (°C)",
            "Actual - Humidity (%)",
            "Actual - Light Intensity (lux)",
            "Predicted - Air Temperature (°C)",
            "Predicted - Soil Temperature (°C)",
            "Predicted - Humidity (%)",
            "Predicted - Light Intensity (lux)",
        ]
    );

    // each predicted chart comes from its own channel's table
    let predicted_values: Vec<Option<f64>> = layout
        .charts()
        .skip(4)
        .map(|c| c.series.y[0])
        .collect();
    assert_eq!(predicted_values, [Some(0.0), Some(1.0), Some(2.0), Some(3.0)]);
}

#[test]
fn empty_actual_table_still_lays_out() {
    let empty = ReadingTable::new("created_at", SensorChannel::ALL.iter().map(|c| c.field()));
    let layout = assert_ok!(layout::assemble(
        "Dashboard",
        &SensorChannel::ALL,
        &empty,
        &predicted_tables(),
    ));

    assert_eq!(layout.charts().count(), 8);
    assert!(layout.charts().take(4).all(|c| c.series.x.is_empty()));
}

#[test]
fn layout_propagates_column_errors() {
    let mut predicted = predicted_tables();
    predicted[2].1 = ReadingTable::new("Time", ["Forecast"]);

    let err = assert_err!(layout::assemble(
        "Dashboard",
        &SensorChannel::ALL,
        &actual_table(),
        &predicted,
    ));
    assert!(matches!(err, DashboardError::Column { column, .. } if column == PREDICTED_VALUE));
}

#[test]
fn page_renders_one_graph_per_chart() {
    let layout = assert_ok!(layout::assemble(
        "Greenhouse <Main>",
        &SensorChannel::ALL,
        &actual_table(),
        &predicted_tables(),
    ));
    let page = assert_ok!(render_page(&layout));

    assert_eq!(page.matches(r#"class="dash-graph""#).count(), 8);
    assert!(page.contains("<title>Greenhouse &lt;Main&gt;</title>"));
    assert!(page.contains("<h1>Greenhouse &lt;Main&gt;</h1>"));
    assert!(page.contains(&format!("<h2>{ACTUAL_SECTION}</h2>")));
    assert!(page.contains(&format!("<h2>{PREDICTED_SECTION}</h2>")));
    assert!(page.contains("cdn.plot.ly"));
    assert!(page.contains(r#""text":"Predicted - Light Intensity (lux)""#));
}

#[test]
fn embedded_figures_cannot_close_the_script() {
    let table = predicted_table(1.0);
    let chart = assert_ok!(build_chart(&table, PREDICTED_VALUE, "</script><b>", ChartKind::Predicted));
    let layout = Layout::builder().heading("Test").chart(chart).build();

    let page = assert_ok!(render_page(&layout));
    assert!(!page.contains("</script><b>"));
    assert!(page.contains(r"<\/script><b>"));
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plotly figures for dashboard charts.
//!
//! Figures are serialized to JSON here and drawn in the browser by plotly.js.

use crate::models::{Chart, ChartKind};
use crate::time_utils::format_chart_timestamp;
use plotly::{
    common::{Mode, Title},
    layout::{Axis, BarMode, Margin},
    Bar, Layout, Plot, Scatter,
};
use serde_json::Value;

/// Build the Plotly figure for a chart: one trace per series.
pub fn chart_figure(chart: &Chart, x_label: &str) -> Plot {
    let mut plot = Plot::new();

    for series in &chart.series {
        let x: Vec<String> = series
            .points
            .iter()
            .map(|p| format_chart_timestamp(p.timestamp))
            .collect();
        let y: Vec<f64> = series.points.iter().map(|p| p.value).collect();

        match chart.kind {
            ChartKind::Line => {
                plot.add_trace(
                    Scatter::new(x, y)
                        .name(series.name.as_str())
                        .mode(Mode::Lines),
                );
            }
            ChartKind::Bar => {
                plot.add_trace(Bar::new(x, y).name(series.name.as_str()));
            }
        }
    }

    let mut layout = Layout::new()
        .title(Title::from(chart.title.as_str()))
        .margin(Margin::new().left(50).right(30).top(60).bottom(50))
        .show_legend(true)
        .x_axis(Axis::new().title(Title::from(x_label)))
        .y_axis(Axis::new().title(Title::from(chart.value_column.as_str())));

    // Bars for different categories on the same date stack, negatives below zero.
    if chart.kind == ChartKind::Bar {
        layout = layout.bar_mode(BarMode::Relative);
    }
    plot.set_layout(layout);

    plot
}

/// Figure as a JSON value with `data`, `layout` and `config` members.
pub fn chart_figure_json(chart: &Chart, x_label: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&chart_figure(chart, x_label).to_json())
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filter → sort → project pipeline from records to a [`DashboardView`].
//!
//! Pure functions only: no I/O and no HTTP types, so every route and test
//! calls the same code.

use crate::models::{
    Chart, ChartSpec, ColumnFormat, DashboardView, Point, Record, Schema, Series, Summary,
    TableRow, TableView, Total,
};
use crate::time_utils::{format_date, format_duration_clock};
use std::collections::HashMap;

/// Build every output region for one filter selection.
///
/// An empty selection keeps all records; otherwise only records whose
/// category is selected survive.
pub fn build_view(schema: &Schema, records: &[Record], selection: &[String]) -> DashboardView {
    let retained = filter_records(records, selection);

    // Stable sorts: equal timestamps keep their fetched order.
    let mut ascending = retained.clone();
    ascending.sort_by_key(|r| r.timestamp);

    let mut descending = retained.clone();
    descending.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let charts = schema
        .charts
        .iter()
        .map(|spec| project_chart(spec, &ascending))
        .collect();

    DashboardView {
        charts,
        summary: summarize(schema, &retained),
        table: project_table(schema, &descending),
    }
}

/// Keep records whose category is in `selection`; empty keeps everything.
pub fn filter_records<'a>(records: &'a [Record], selection: &[String]) -> Vec<&'a Record> {
    if selection.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|r| {
            r.category
                .as_ref()
                .is_some_and(|category| selection.contains(category))
        })
        .collect()
}

/// Round half-to-even at the given number of decimals.
pub fn round_half_even(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Group sorted records into one series per category, in first-seen order.
fn project_chart(spec: &ChartSpec, sorted: &[&Record]) -> Chart {
    let mut series: Vec<Series> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in sorted {
        let name = record
            .category
            .as_deref()
            .unwrap_or(spec.value_column.as_str());

        let slot = *index.entry(name).or_insert_with(|| {
            series.push(Series {
                name: name.to_string(),
                points: Vec::new(),
            });
            series.len() - 1
        });

        series[slot].points.push(Point {
            timestamp: record.timestamp,
            value: record.metric(&spec.value_column),
        });
    }

    Chart {
        title: spec.title.clone(),
        kind: spec.kind,
        value_column: spec.value_column.clone(),
        series,
    }
}

fn summarize(schema: &Schema, retained: &[&Record]) -> Summary {
    let totals = schema
        .summary
        .iter()
        .map(|spec| Total {
            label: spec.label.clone(),
            // Fold from +0.0 so an empty set renders "0", not "-0".
            value: retained
                .iter()
                .fold(0.0, |acc, r| acc + r.metric(&spec.column)),
            decimals: spec.decimals,
            unit: spec.unit.clone(),
        })
        .collect();

    Summary {
        heading: schema.summary_heading.clone(),
        count_label: schema.count_label.clone(),
        count: retained.len(),
        totals,
    }
}

fn project_table(schema: &Schema, sorted: &[&Record]) -> TableView {
    let headers = schema
        .table_columns
        .iter()
        .map(|c| c.label.clone())
        .collect();

    let rows = sorted
        .iter()
        .map(|record| TableRow {
            timestamp: record.timestamp,
            cells: schema
                .table_columns
                .iter()
                .map(|column| format_cell(record, &column.column, column.format))
                .collect(),
        })
        .collect();

    TableView { headers, rows }
}

fn format_cell(record: &Record, column: &str, format: ColumnFormat) -> String {
    match format {
        ColumnFormat::Date => format_date(record.timestamp),
        ColumnFormat::Category => record.category.clone().unwrap_or_default(),
        ColumnFormat::Round(decimals) => {
            format!(
                "{:.*}",
                decimals,
                round_half_even(record.metric(column), decimals)
            )
        }
        ColumnFormat::Duration => format_duration_clock(record.metric(column)),
    }
}

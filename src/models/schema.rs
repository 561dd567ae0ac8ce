// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Column mapping and chart configuration for a dashboard.
//!
//! A [`Schema`] names which columns of the fetched table hold the category,
//! the timestamp and the numeric values, and how each output region (charts,
//! summary, table) projects them. The two built-in [`Profile`]s cover the
//! activity log and the generic date/value table.

use serde::Serialize;
use std::str::FromStr;

/// Built-in dashboard profiles, selected with `DASHBOARD_PROFILE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Training activities: `type`, `start_date`, distance, duration, elevation.
    Activities,
    /// Generic two-column table: `dato`, `verdi`.
    Series,
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "activities" => Ok(Profile::Activities),
            "series" => Ok(Profile::Series),
            other => Err(format!("unknown dashboard profile: {}", other)),
        }
    }
}

impl Profile {
    /// The column mapping for this profile.
    pub fn schema(self) -> Schema {
        match self {
            Profile::Activities => Schema::activities(),
            Profile::Series => Schema::series(),
        }
    }
}

/// How a chart draws its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One chart: a numeric column plotted against the timestamp.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Heading shown above the chart panel
    pub heading: String,
    /// Title inside the figure
    pub title: String,
    /// Column plotted on the y axis
    pub value_column: String,
    pub kind: ChartKind,
}

/// One summed total in the summary card.
#[derive(Debug, Clone)]
pub struct SummarySpec {
    pub label: String,
    pub column: String,
    /// Decimals shown when rendering the sum
    pub decimals: usize,
    /// Unit appended after the value (may be empty)
    pub unit: String,
}

/// How a table cell is derived from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    /// The record timestamp as `YYYY-MM-DD`
    Date,
    /// The record category as-is
    Category,
    /// A numeric column rounded half-to-even to the given decimals
    Round(usize),
    /// A seconds column rendered as `HH:MM:SS`
    Duration,
}

/// One displayed table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Source column in the fetched rows
    pub column: String,
    /// Display label
    pub label: String,
    pub format: ColumnFormat,
}

/// Complete column mapping for one dashboard.
#[derive(Debug, Clone)]
pub struct Schema {
    pub title: String,
    /// Column used for filtering and chart grouping; `None` disables both.
    pub category_column: Option<String>,
    pub timestamp_column: String,
    pub filter_label: String,
    pub filter_placeholder: String,
    pub charts: Vec<ChartSpec>,
    pub summary_heading: String,
    pub count_label: String,
    pub summary: Vec<SummarySpec>,
    pub table_heading: String,
    pub table_columns: Vec<TableColumn>,
}

impl Schema {
    /// Training activity log.
    pub fn activities() -> Self {
        Self {
            title: "Treningsdata Dashboard".to_string(),
            category_column: Some("type".to_string()),
            timestamp_column: "start_date".to_string(),
            filter_label: "Velg aktivitetstype:".to_string(),
            filter_placeholder: "Alle typer".to_string(),
            charts: vec![
                ChartSpec {
                    heading: "Distanse over tid".to_string(),
                    title: "Distanse per aktivitet".to_string(),
                    value_column: "distance_in_k".to_string(),
                    kind: ChartKind::Line,
                },
                ChartSpec {
                    heading: "Høydemeter".to_string(),
                    title: "Høydemeter per aktivitet".to_string(),
                    value_column: "total_elevation_gain".to_string(),
                    kind: ChartKind::Bar,
                },
            ],
            summary_heading: "Oppsummering".to_string(),
            count_label: "Totalt antall aktiviteter".to_string(),
            summary: vec![
                SummarySpec {
                    label: "Total distanse".to_string(),
                    column: "distance_in_k".to_string(),
                    decimals: 1,
                    unit: "km".to_string(),
                },
                SummarySpec {
                    label: "Totale høydemeter".to_string(),
                    column: "total_elevation_gain".to_string(),
                    decimals: 0,
                    unit: "m".to_string(),
                },
            ],
            table_heading: "Aktivitetslogg".to_string(),
            table_columns: vec![
                TableColumn {
                    column: "start_date".to_string(),
                    label: "Dato".to_string(),
                    format: ColumnFormat::Date,
                },
                TableColumn {
                    column: "type".to_string(),
                    label: "Type".to_string(),
                    format: ColumnFormat::Category,
                },
                TableColumn {
                    column: "distance_in_k".to_string(),
                    label: "Distanse (km)".to_string(),
                    format: ColumnFormat::Round(1),
                },
                TableColumn {
                    column: "moving_time".to_string(),
                    label: "Tid".to_string(),
                    format: ColumnFormat::Duration,
                },
                TableColumn {
                    column: "total_elevation_gain".to_string(),
                    label: "Høydemeter".to_string(),
                    format: ColumnFormat::Round(0),
                },
            ],
        }
    }

    /// Generic date/value table.
    pub fn series() -> Self {
        Self {
            title: "Dataoversikt".to_string(),
            category_column: None,
            timestamp_column: "dato".to_string(),
            filter_label: String::new(),
            filter_placeholder: String::new(),
            charts: vec![ChartSpec {
                heading: "Verdi over tid".to_string(),
                title: "Verdi per dato".to_string(),
                value_column: "verdi".to_string(),
                kind: ChartKind::Line,
            }],
            summary_heading: "Oppsummering".to_string(),
            count_label: "Totalt antall rader".to_string(),
            summary: vec![SummarySpec {
                label: "Sum verdi".to_string(),
                column: "verdi".to_string(),
                decimals: 1,
                unit: String::new(),
            }],
            table_heading: "Datalogg".to_string(),
            table_columns: vec![
                TableColumn {
                    column: "dato".to_string(),
                    label: "Dato".to_string(),
                    format: ColumnFormat::Date,
                },
                TableColumn {
                    column: "verdi".to_string(),
                    label: "Verdi".to_string(),
                    format: ColumnFormat::Round(1),
                },
            ],
        }
    }

    /// Numeric columns every record must carry, in first-use order.
    pub fn metric_columns(&self) -> Vec<&str> {
        let charts = self.charts.iter().map(|c| c.value_column.as_str());
        let totals = self.summary.iter().map(|s| s.column.as_str());
        let table = self
            .table_columns
            .iter()
            .filter(|c| matches!(c.format, ColumnFormat::Round(_) | ColumnFormat::Duration))
            .map(|c| c.column.as_str());

        let mut columns: Vec<&str> = Vec::new();
        for column in charts.chain(totals).chain(table) {
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
        columns
    }
}

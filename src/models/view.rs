// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chart-, summary- and table-ready projections of the filtered records.

use crate::models::ChartKind;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Everything one dashboard update renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub charts: Vec<Chart>,
    pub summary: Summary,
    pub table: TableView,
}

/// One chart: a series per category, points ascending by timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub title: String,
    pub kind: ChartKind,
    /// Column plotted on the y axis
    pub value_column: String,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub timestamp: DateTime<FixedOffset>,
    pub value: f64,
}

/// Aggregates over the filtered set.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub heading: String,
    pub count_label: String,
    pub count: usize,
    pub totals: Vec<Total>,
}

/// A summed column with its display precision.
#[derive(Debug, Clone, Serialize)]
pub struct Total {
    pub label: String,
    pub value: f64,
    pub decimals: usize,
    pub unit: String,
}

impl Total {
    /// The sum at display precision, e.g. `25.2`.
    pub fn display_value(&self) -> String {
        format!("{:.*}", self.decimals, self.value)
    }
}

/// Formatted, relabeled rows, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub headers: Vec<String>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    /// Source timestamp, kept for ordering checks
    #[serde(skip)]
    pub timestamp: DateTime<FixedOffset>,
    pub cells: Vec<String>,
}

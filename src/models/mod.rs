// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod record;
pub mod schema;
pub mod view;

pub use record::{Record, RecordError, Row};
pub use schema::{ChartKind, ChartSpec, ColumnFormat, Profile, Schema, SummarySpec, TableColumn};
pub use view::{Chart, DashboardView, Point, Series, Summary, TableRow, TableView, Total};

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML and chart rendering for the dashboard.

pub mod figure;
pub mod page;
pub mod table;

pub use figure::{chart_figure, chart_figure_json};
pub use page::dashboard_page;
pub use table::{data_table, summary_card};

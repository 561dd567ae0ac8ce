// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Training dashboard: charts and a table over a hosted activity log
//!
//! This crate serves a single page that reads every row of a Supabase
//! table, filters it by category and renders two charts, a summary and
//! a table.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod time_utils;

use services::DashboardService;

/// Shared application state.
pub struct AppState {
    pub dashboard: DashboardService,
    /// Dropdown options, fixed by the fetch made at startup
    pub categories: Vec<String>,
}

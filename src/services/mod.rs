// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - data access and view pipeline.

pub mod dashboard;
pub mod pipeline;
pub mod supabase;

pub use dashboard::{distinct_categories, DashboardService};
pub use pipeline::build_view;
pub use supabase::SupabaseClient;

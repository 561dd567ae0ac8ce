// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Training Dashboard Server
//!
//! Serves a single-page dashboard over a Supabase table of training
//! activities, filterable by activity type.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use training_dashboard::{
    config::Config,
    services::{distinct_categories, DashboardService, SupabaseClient},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        table = %config.table,
        profile = ?config.profile,
        "Starting training dashboard"
    );

    // One client for the process lifetime
    let client = SupabaseClient::new(&config.supabase_url, &config.supabase_key);
    let dashboard = DashboardService::new(client, config.table.clone(), config.profile.schema());

    // Dropdown options come from the data present at startup
    let records = match dashboard.fetch_records().await {
        Ok(records) => records,
        Err(e) => {
            if e.is_data_source_auth_error() {
                tracing::error!(error = %e, "Initial fetch rejected; check SUPABASE_KEY");
            } else {
                tracing::error!(error = %e, "Initial fetch failed");
            }
            return Err(e.into());
        }
    };
    let categories = distinct_categories(&records);
    tracing::info!(
        records = records.len(),
        categories = categories.len(),
        "Initial data loaded"
    );

    let state = Arc::new(AppState {
        dashboard,
        categories,
    });

    // Build router
    let app = training_dashboard::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("training_dashboard=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}

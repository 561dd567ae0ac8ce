// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard data service.
//!
//! Handles the data side of a render:
//! 1. Read every row of the configured table
//! 2. Materialize rows into records using the schema
//! 3. Hand records to the view pipeline

use crate::error::{AppError, Result};
use crate::models::{DashboardView, Record, Schema};
use crate::services::pipeline::build_view;
use crate::services::SupabaseClient;

/// Fetches and prepares records for one table and schema.
#[derive(Clone)]
pub struct DashboardService {
    client: SupabaseClient,
    table: String,
    schema: Schema,
}

impl DashboardService {
    pub fn new(client: SupabaseClient, table: String, schema: Schema) -> Self {
        Self {
            client,
            table,
            schema,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fetch the whole table and materialize every row.
    ///
    /// One bad row fails the whole call.
    pub async fn fetch_records(&self) -> Result<Vec<Record>> {
        let rows = self.client.fetch_all(&self.table).await?;

        rows.iter()
            .enumerate()
            .map(|(i, row)| {
                Record::from_row(row, &self.schema).map_err(|e| {
                    AppError::MalformedData(format!("{} row {}: {}", self.table, i, e))
                })
            })
            .collect()
    }

    /// Re-fetch and build the view for a filter selection.
    pub async fn render(&self, selection: &[String]) -> Result<DashboardView> {
        let records = self.fetch_records().await?;
        let view = build_view(&self.schema, &records, selection);

        tracing::info!(
            table = %self.table,
            fetched = records.len(),
            retained = view.summary.count,
            selected = selection.len(),
            "Dashboard view built"
        );

        Ok(view)
    }
}

/// Distinct category values in first-appearance order.
pub fn distinct_categories(records: &[Record]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in records.iter().filter_map(|r| r.category.as_ref()) {
        if !categories.contains(category) {
            categories.push(category.clone());
        }
    }
    categories
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetched table rows materialized against a [`Schema`].

use crate::models::Schema;
use crate::time_utils::parse_timestamp;
use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One raw row as returned by the data store.
pub type Row = Map<String, Value>;

/// One activity (or data point) ready for the view pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Category label (`type`), absent when the schema has no category column
    pub category: Option<String>,
    /// Parsed timestamp column
    pub timestamp: DateTime<FixedOffset>,
    /// Numeric columns named by the schema
    pub metrics: HashMap<String, f64>,
}

/// Reasons a row cannot be materialized.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RecordError {
    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}' is not a timestamp: {value}")]
    InvalidTimestamp { column: String, value: String },

    #[error("column '{column}' is not numeric: {value}")]
    InvalidNumber { column: String, value: String },

    #[error("column '{column}' has no category value: {value}")]
    InvalidCategory { column: String, value: String },
}

impl Record {
    /// Materialize a row, parsing the timestamp and every metric column.
    pub fn from_row(row: &Row, schema: &Schema) -> Result<Self, RecordError> {
        let category = schema
            .category_column
            .as_deref()
            .map(|column| category_value(row, column))
            .transpose()?;

        let timestamp = {
            let column = schema.timestamp_column.as_str();
            let value = field(row, column)?;
            value
                .as_str()
                .and_then(parse_timestamp)
                .ok_or_else(|| RecordError::InvalidTimestamp {
                    column: column.to_string(),
                    value: value.to_string(),
                })?
        };

        let metrics = schema
            .metric_columns()
            .into_iter()
            .map(|column| Ok((column.to_string(), numeric_value(row, column)?)))
            .collect::<Result<HashMap<_, _>, RecordError>>()?;

        Ok(Self {
            category,
            timestamp,
            metrics,
        })
    }

    /// Value of a numeric column; columns outside the schema read as zero.
    pub fn metric(&self, column: &str) -> f64 {
        self.metrics.get(column).copied().unwrap_or(0.0)
    }
}

fn field<'a>(row: &'a Row, column: &str) -> Result<&'a Value, RecordError> {
    row.get(column)
        .ok_or_else(|| RecordError::MissingColumn(column.to_string()))
}

fn category_value(row: &Row, column: &str) -> Result<String, RecordError> {
    match field(row, column)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(RecordError::InvalidCategory {
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Numbers arrive either as JSON numbers or, for Postgres `numeric`, as strings.
fn numeric_value(row: &Row, column: &str) -> Result<f64, RecordError> {
    let value = field(row, column)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| RecordError::InvalidNumber {
        column: column.to_string(),
        value: value.to_string(),
    })
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase (PostgREST) client for reading whole tables.
//!
//! One unconditional `select=*` per call: no pagination, no retry and no
//! timeout. A slow store blocks the request that triggered the read.

use crate::error::AppError;
use crate::models::Row;
use serde_json::Value;

/// Supabase REST client, configured once at startup.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseClient {
    /// Create a client for a project URL and access key.
    pub fn new(project_url: &str, api_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/rest/v1", project_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
        }
    }

    /// Read every row of `table`.
    pub async fn fetch_all(&self, table: &str) -> Result<Vec<Row>, AppError> {
        let url = format!("{}/{}", self.base_url, table);

        tracing::debug!(table, "Fetching all rows");

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|e| AppError::DataSource(format!("Request to {} failed: {}", table, e)))?;

        let body: Value = self.check_response_json(response).await?;
        let rows = into_rows(body)?;

        tracing::debug!(table, rows = rows.len(), "Fetched rows");
        Ok(rows)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json(&self, response: reqwest::Response) -> Result<Value, AppError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 401 || status.as_u16() == 403 {
                tracing::warn!(status = status.as_u16(), "Supabase rejected access key");
                return Err(AppError::DataSource(format!(
                    "{} (HTTP {})",
                    AppError::DATA_SOURCE_AUTH_ERROR,
                    status
                )));
            }

            return Err(AppError::DataSource(format!("HTTP {}: {}", status, body)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::MalformedData(format!("Response is not JSON: {}", e)))
    }
}

/// A PostgREST read returns a JSON array of flat objects.
fn into_rows(body: Value) -> Result<Vec<Row>, AppError> {
    let Value::Array(items) = body else {
        return Err(AppError::MalformedData(
            "Expected a JSON array of rows".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(row) => Ok(row),
            other => Err(AppError::MalformedData(format!(
                "Row {} is not an object: {}",
                i, other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_rows_accepts_objects() {
        let rows = into_rows(json!([{"a": 1}, {"a": 2}])).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["a"], json!(2));
    }

    #[test]
    fn test_into_rows_empty_array() {
        assert!(into_rows(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_into_rows_rejects_non_array() {
        let err = into_rows(json!({"message": "oops"})).unwrap_err();
        assert!(matches!(err, AppError::MalformedData(_)));
    }

    #[test]
    fn test_into_rows_rejects_scalar_row() {
        let err = into_rows(json!([{"a": 1}, 5])).unwrap_err();
        assert!(matches!(err, AppError::MalformedData(msg) if msg.contains("Row 1")));
    }

    #[test]
    fn test_base_url_normalized() {
        let client = SupabaseClient::new("https://xyz.supabase.co/", "key");
        assert_eq!(client.base_url, "https://xyz.supabase.co/rest/v1");
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data store client tests against an in-process PostgREST fake.

use axum::http::StatusCode;
use serde_json::json;
use training_dashboard::error::AppError;
use training_dashboard::models::Schema;
use training_dashboard::services::{DashboardService, SupabaseClient};

mod common;

#[tokio::test]
async fn test_fetch_all_returns_rows() {
    let store = common::spawn_rows(common::sample_activities()).await;
    let client = SupabaseClient::new(&store.url, common::TEST_KEY);

    let rows = client.fetch_all(common::TEST_TABLE).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["type"], "Run");
    assert_eq!(rows[1]["distance_in_k"], json!(20.0));
    assert_eq!(store.hits(), 1);
}

#[tokio::test]
async fn test_trailing_slash_in_project_url() {
    let store = common::spawn_rows(json!([])).await;
    let client = SupabaseClient::new(&format!("{}/", store.url), common::TEST_KEY);

    assert!(client.fetch_all(common::TEST_TABLE).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_wrong_key_is_auth_error() {
    let store = common::spawn_rows(common::sample_activities()).await;
    let client = SupabaseClient::new(&store.url, "wrong_key");

    let err = client.fetch_all(common::TEST_TABLE).await.unwrap_err();

    assert!(err.is_data_source_auth_error(), "unexpected error: {}", err);
    assert_eq!(store.hits(), 0);
}

#[tokio::test]
async fn test_unknown_table_is_data_source_error() {
    let store = common::spawn_rows(common::sample_activities()).await;
    let client = SupabaseClient::new(&store.url, common::TEST_KEY);

    let err = client.fetch_all("Nope").await.unwrap_err();

    assert!(matches!(&err, AppError::DataSource(msg) if msg.contains("404")));
    assert!(!err.is_data_source_auth_error());
}

#[tokio::test]
async fn test_server_error_carries_body() {
    let store = common::spawn_store(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"message": "boom"}),
    )
    .await;
    let client = SupabaseClient::new(&store.url, common::TEST_KEY);

    let err = client.fetch_all(common::TEST_TABLE).await.unwrap_err();

    assert!(matches!(&err, AppError::DataSource(msg) if msg.contains("boom")));
}

#[tokio::test]
async fn test_non_array_body_is_malformed() {
    let store = common::spawn_rows(json!({"rows": []})).await;
    let client = SupabaseClient::new(&store.url, common::TEST_KEY);

    let err = client.fetch_all(common::TEST_TABLE).await.unwrap_err();

    assert!(matches!(err, AppError::MalformedData(_)));
}

#[tokio::test]
async fn test_unreachable_store() {
    // Bind and drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SupabaseClient::new(&format!("http://{}", addr), common::TEST_KEY);
    let err = client.fetch_all(common::TEST_TABLE).await.unwrap_err();

    assert!(matches!(err, AppError::DataSource(_)));
}

#[tokio::test]
async fn test_dashboard_service_materializes_records() {
    let store = common::spawn_rows(common::sample_activities()).await;
    let client = SupabaseClient::new(&store.url, common::TEST_KEY);
    let service = DashboardService::new(
        client,
        common::TEST_TABLE.to_string(),
        Schema::activities(),
    );

    let records = service.fetch_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].category.as_deref(), Some("Ride"));
    assert_eq!(records[1].metric("moving_time"), 3600.0);

    let view = service.render(&["Ride".to_string()]).await.unwrap();
    assert_eq!(view.summary.count, 1);
    assert_eq!(store.hits(), 2);
}

#[tokio::test]
async fn test_series_profile_over_activity_rows_fails() {
    let store = common::spawn_rows(common::sample_activities()).await;
    let client = SupabaseClient::new(&store.url, common::TEST_KEY);
    let service =
        DashboardService::new(client, common::TEST_TABLE.to_string(), Schema::series());

    let err = service.fetch_records().await.unwrap_err();
    assert!(matches!(&err, AppError::MalformedData(msg) if msg.contains("'dato'")));
}

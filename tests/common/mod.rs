// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use training_dashboard::config::Config;
use training_dashboard::models::Profile;
use training_dashboard::routes::create_router;
use training_dashboard::services::{distinct_categories, DashboardService, SupabaseClient};
use training_dashboard::AppState;

#[allow(dead_code)]
pub const TEST_KEY: &str = "test_key";
#[allow(dead_code)]
pub const TEST_TABLE: &str = "Zapier";

/// In-process stand-in for a Supabase PostgREST endpoint.
#[allow(dead_code)]
pub struct FakeStore {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FakeStore {
    /// Number of table reads served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

struct FakeState {
    status: StatusCode,
    body: Value,
    hits: Arc<AtomicUsize>,
}

async fn serve_table(
    State(fake): State<Arc<FakeState>>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let authorized = headers.get("apikey").is_some_and(|v| v == TEST_KEY)
        && headers
            .get("authorization")
            .is_some_and(|v| v == format!("Bearer {}", TEST_KEY).as_str());
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid API key"})),
        )
            .into_response();
    }

    if table != TEST_TABLE || query.get("select").map(String::as_str) != Some("*") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"message": format!("relation {} does not exist", table)})),
        )
            .into_response();
    }

    fake.hits.fetch_add(1, Ordering::SeqCst);
    (fake.status, Json(fake.body.clone())).into_response()
}

/// Start a fake store answering every table read with `status` and `body`.
#[allow(dead_code)]
pub async fn spawn_store(status: StatusCode, body: Value) -> FakeStore {
    let hits = Arc::new(AtomicUsize::new(0));
    let state = Arc::new(FakeState {
        status,
        body,
        hits: hits.clone(),
    });

    let app = Router::new()
        .route("/rest/v1/{table}", get(serve_table))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake store");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake store failed");
    });

    FakeStore {
        url: format!("http://{}", addr),
        hits,
    }
}

/// Start a fake store serving `rows`.
#[allow(dead_code)]
pub async fn spawn_rows(rows: Value) -> FakeStore {
    spawn_store(StatusCode::OK, rows).await
}

/// The two-activity table used throughout the dashboard tests.
#[allow(dead_code)]
pub fn sample_activities() -> Value {
    json!([
        {
            "id": 1,
            "type": "Run",
            "start_date": "2024-01-01T07:30:00+00:00",
            "distance_in_k": 5.23,
            "moving_time": 1800,
            "total_elevation_gain": 42.7
        },
        {
            "id": 2,
            "type": "Ride",
            "start_date": "2024-01-02T16:00:00+00:00",
            "distance_in_k": 20.0,
            "moving_time": 3600,
            "total_elevation_gain": 150.4
        }
    ])
}

/// A small `dato`/`verdi` table for the series profile.
#[allow(dead_code)]
pub fn sample_series() -> Value {
    json!([
        {"id": 1, "dato": "2024-03-01", "verdi": 2.5},
        {"id": 2, "dato": "2024-03-03", "verdi": "4.0"},
        {"id": 3, "dato": "2024-03-02", "verdi": 1.5}
    ])
}

/// Config pointing at a fake store.
#[allow(dead_code)]
pub fn test_config(store_url: &str) -> Config {
    Config {
        supabase_url: store_url.to_string(),
        supabase_key: TEST_KEY.to_string(),
        ..Config::test_default()
    }
}

/// Create a test app reading from a fake store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app(store: &FakeStore) -> (Router, Arc<AppState>) {
    create_test_app_with_profile(store, Profile::Activities).await
}

/// Create a test app for the given dashboard profile.
#[allow(dead_code)]
pub async fn create_test_app_with_profile(
    store: &FakeStore,
    profile: Profile,
) -> (Router, Arc<AppState>) {
    let config = Config {
        profile,
        ..test_config(&store.url)
    };
    let client = SupabaseClient::new(&config.supabase_url, &config.supabase_key);
    let dashboard = DashboardService::new(client, config.table.clone(), config.profile.schema());

    let records = dashboard
        .fetch_records()
        .await
        .expect("Failed to load initial records");
    let categories = distinct_categories(&records);

    let state = Arc::new(AppState {
        dashboard,
        categories,
    });

    (create_router(state.clone()), state)
}

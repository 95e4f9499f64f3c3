//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use freezo_api::AppState;
use freezo_core::config::AppConfig;
use freezo_database::migration::run_migrations;
use freezo_database::{DatabasePool, MemoryRecordStore, RecordStore, SqliteRecordStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router, for direct setup and assertions
    pub store: Arc<dyn RecordStore>,
}

impl TestApp {
    /// Create a test application over a migrated in-memory SQLite database
    pub async fn new() -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open in-memory database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        Self::with_store(Arc::new(SqliteRecordStore::new(&db)))
    }

    /// Create a test application over the in-process memory store
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryRecordStore::new()))
    }

    fn with_store(store: Arc<dyn RecordStore>) -> Self {
        let state = AppState::new(AppConfig::default(), Arc::clone(&store));
        Self {
            router: freezo_api::build_app(state),
            store,
        }
    }

    /// Create a freezer through the API and return its id
    pub async fn create_freezer(&self, name: &str) -> i64 {
        let response = self
            .request("POST", "/api/freezers", Some(json!({ "name": name })))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"]
            .as_i64()
            .expect("freezer id in response")
    }

    /// Add `quantity` records through the intake endpoint and return their ids
    pub async fn intake(
        &self,
        name: &str,
        freezer_id: i64,
        frozen_date: Option<&str>,
        weights: Value,
        quantity: usize,
    ) -> Vec<i64> {
        let response = self
            .request(
                "POST",
                "/api/items/intake",
                Some(json!({
                    "name": name,
                    "quantity": quantity,
                    "freezer_id": freezer_id,
                    "frozen_date": frozen_date,
                    "weights": weights,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.ids()
    }

    /// Make a request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Ids of the records in a `data` array
    pub fn ids(&self) -> Vec<i64> {
        self.body["data"]
            .as_array()
            .map(|items| items.iter().filter_map(|i| i["id"].as_i64()).collect())
            .unwrap_or_default()
    }

    /// Machine-readable error code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or("")
    }

    /// Human-readable message of an error body
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or("")
    }
}

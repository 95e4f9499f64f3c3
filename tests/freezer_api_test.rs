//! Integration tests for freezer and category endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_health_reports_connected_store() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}

#[tokio::test]
async fn test_create_and_list_freezers() {
    let app = helpers::TestApp::new().await;
    let garage = app.create_freezer("Garage").await;
    let kitchen = app.create_freezer("  Kitchen ").await;

    let response = app.request("GET", "/api/freezers", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Garage", "Kitchen"]);
    assert!(garage < kitchen);
}

#[tokio::test]
async fn test_create_freezer_rejects_blank_name() {
    let app = helpers::TestApp::new().await;

    let empty = app
        .request("POST", "/api/freezers", Some(json!({ "name": "" })))
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.error_code(), "VALIDATION_ERROR");
    assert_eq!(empty.message(), "Freezer name is required");

    let blank = app
        .request("POST", "/api/freezers", Some(json!({ "name": "   " })))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
    assert_eq!(blank.message(), "Freezer name must not be empty");
}

#[tokio::test]
async fn test_malformed_json_is_a_validation_error() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/freezers", Some(json!({ "title": "Garage" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_freezer_with_items_conflicts() {
    let app = helpers::TestApp::new().await;
    let chest = app.create_freezer("Chest").await;
    let spare = app.create_freezer("Spare").await;
    app.intake("Peas", chest, None, json!({ "mode": "none" }), 2)
        .await;

    let guarded = app
        .request("DELETE", &format!("/api/freezers/{chest}"), None)
        .await;
    assert_eq!(guarded.status, StatusCode::CONFLICT);
    assert_eq!(guarded.error_code(), "CONFLICT");
    assert_eq!(guarded.message(), "Cannot delete freezer with items");

    let removed = app
        .request("DELETE", &format!("/api/freezers/{spare}"), None)
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT);

    let missing = app
        .request("DELETE", &format!("/api/freezers/{spare}"), None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let freezers = app.store.list_freezers().await.unwrap();
    assert_eq!(freezers.len(), 1);
    assert_eq!(freezers[0].id, chest);
}

#[tokio::test]
async fn test_freezer_summary_counts_items() {
    let app = helpers::TestApp::in_memory();
    let chest = app.create_freezer("Chest").await;
    let upright = app.create_freezer("Upright").await;
    app.intake("Peas", chest, None, json!({ "mode": "none" }), 3)
        .await;

    let response = app.request("GET", "/api/freezers/summary", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let counts: Vec<(i64, i64)> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["id"].as_i64().unwrap(), s["item_count"].as_i64().unwrap()))
        .collect();
    assert_eq!(counts, vec![(chest, 3), (upright, 0)]);
}

#[tokio::test]
async fn test_categories_seeded_and_unique() {
    let app = helpers::TestApp::new().await;

    let listed = app.request("GET", "/api/categories", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["data"][0]["id"], 1);
    assert_eq!(listed.body["data"][0]["name"], "Uncategorized");

    let created = app
        .request("POST", "/api/categories", Some(json!({ "name": "Meat" })))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["data"]["name"], "Meat");

    let duplicate = app
        .request("POST", "/api/categories", Some(json!({ "name": "Meat" })))
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
}

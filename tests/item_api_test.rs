//! Integration tests for item intake and batch mutations.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_intake_assigns_individual_weights_in_order() {
    let app = helpers::TestApp::new().await;
    let chest = app.create_freezer("Chest").await;

    let ids = app
        .intake(
            "Pork",
            chest,
            Some("2024-01-10"),
            json!({ "mode": "individual", "weights": ["1kg", "1kg", "2kg"] }),
            3,
        )
        .await;
    assert_eq!(ids.len(), 3);

    let items = app.store.list_items().await.unwrap();
    let weights: Vec<Option<&str>> = items.iter().map(|i| i.weight.as_deref()).collect();
    assert_eq!(weights, vec![Some("1kg"), Some("1kg"), Some("2kg")]);
    assert!(items.iter().all(|i| i.category_id == 1));
    assert!(items.iter().all(|i| i.frozen_date.as_deref() == Some("2024-01-10")));
}

#[tokio::test]
async fn test_intake_validation_messages() {
    let app = helpers::TestApp::new().await;
    let chest = app.create_freezer("Chest").await;

    let mismatched = app
        .request(
            "POST",
            "/api/items/intake",
            Some(json!({
                "name": "Pork",
                "quantity": 3,
                "freezer_id": chest,
                "weights": { "mode": "individual", "weights": ["1kg", "2kg"] },
            })),
        )
        .await;
    assert_eq!(mismatched.status, StatusCode::BAD_REQUEST);
    assert_eq!(mismatched.message(), "Expected 3 weights but got 2");

    let no_freezer = app
        .request(
            "POST",
            "/api/items/intake",
            Some(json!({ "name": "Pork", "quantity": 1 })),
        )
        .await;
    assert_eq!(no_freezer.status, StatusCode::BAD_REQUEST);
    assert_eq!(no_freezer.message(), "Select a freezer");

    let unknown_freezer = app
        .request(
            "POST",
            "/api/items/intake",
            Some(json!({ "name": "Pork", "quantity": 1, "freezer_id": 999 })),
        )
        .await;
    assert_eq!(unknown_freezer.status, StatusCode::NOT_FOUND);

    let oversized = app
        .request(
            "POST",
            "/api/items/intake",
            Some(json!({ "name": "Pork", "quantity": u64::MAX, "freezer_id": chest })),
        )
        .await;
    assert_eq!(oversized.status, StatusCode::BAD_REQUEST);
    assert_eq!(oversized.message(), "Cannot add more than 500 items at once");
    assert!(app.store.list_items().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_consume_is_all_or_nothing() {
    let app = helpers::TestApp::new().await;
    let chest = app.create_freezer("Chest").await;
    let ids = app
        .intake("Peas", chest, None, json!({ "mode": "none" }), 3)
        .await;

    let consumed = app
        .request(
            "POST",
            "/api/items/consume",
            Some(json!({ "delete_ids": [ids[0]] })),
        )
        .await;
    assert_eq!(consumed.status, StatusCode::OK);
    assert_eq!(consumed.body["data"]["message"], "batch consumed");
    assert_eq!(consumed.body["data"]["count"], 1);

    let stale = app
        .request(
            "POST",
            "/api/items/consume",
            Some(json!({ "delete_ids": [ids[0], ids[1]] })),
        )
        .await;
    assert_eq!(stale.status, StatusCode::CONFLICT);
    assert_eq!(stale.error_code(), "INSUFFICIENT_QUANTITY");
    assert_eq!(stale.message(), "Requested 2 items but only 1 available");

    let remaining: Vec<i64> = app
        .store
        .list_items()
        .await
        .unwrap()
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(remaining, vec![ids[1], ids[2]]);
}

#[tokio::test]
async fn test_consume_rejects_empty_list() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/items/consume", Some(json!({ "delete_ids": [] })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.message(), "No items to consume");
}

#[tokio::test]
async fn test_move_changes_only_freezer() {
    let app = helpers::TestApp::new().await;
    let chest = app.create_freezer("Chest").await;
    let upright = app.create_freezer("Upright").await;
    let ids = app
        .intake(
            "Beef",
            chest,
            Some("2024-02-01"),
            json!({ "mode": "same", "weight": "500g" }),
            2,
        )
        .await;

    let moved = app
        .request(
            "POST",
            "/api/items/move",
            Some(json!({ "item_ids": ids, "new_freezer_id": upright })),
        )
        .await;
    assert_eq!(moved.status, StatusCode::OK);
    assert_eq!(moved.body["data"]["message"], "items moved");
    assert_eq!(moved.body["data"]["count"], 2);

    let items = app.store.list_items().await.unwrap();
    assert!(items.iter().all(|i| i.freezer_id == upright));
    assert!(items.iter().all(|i| i.weight.as_deref() == Some("500g")));
    assert!(items.iter().all(|i| i.frozen_date.as_deref() == Some("2024-02-01")));
}

#[tokio::test]
async fn test_move_validation() {
    let app = helpers::TestApp::new().await;
    let chest = app.create_freezer("Chest").await;
    let ids = app
        .intake("Beef", chest, None, json!({ "mode": "none" }), 1)
        .await;

    let empty = app
        .request(
            "POST",
            "/api/items/move",
            Some(json!({ "item_ids": [], "new_freezer_id": chest })),
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.message(), "No items to move");

    let unknown = app
        .request(
            "POST",
            "/api/items/move",
            Some(json!({ "item_ids": ids, "new_freezer_id": 404 })),
        )
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_and_delete_item() {
    let app = helpers::TestApp::new().await;
    let chest = app.create_freezer("Chest").await;
    let ids = app
        .intake(
            "Beef",
            chest,
            None,
            json!({ "mode": "same", "weight": "1kg" }),
            1,
        )
        .await;

    let updated = app
        .request(
            "PUT",
            &format!("/api/items/{}", ids[0]),
            Some(json!({ "name": "Brisket", "weight": null })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["name"], "Brisket");
    assert!(updated.body["data"]["weight"].is_null());

    let deleted = app
        .request("DELETE", &format!("/api/items/{}", ids[0]), None)
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let again = app
        .request("DELETE", &format!("/api/items/{}", ids[0]), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_name_suggestions() {
    let app = helpers::TestApp::in_memory();
    let chest = app.create_freezer("Chest").await;
    for name in ["Pork Chops", "Pulled Pork", "Pork", "Peas"] {
        app.intake(name, chest, None, json!({ "mode": "none" }), 1)
            .await;
    }

    let response = app
        .request("GET", "/api/items/suggestions?q=Pork", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!(["Pork Chops", "Pulled Pork"]));
}

//! End-to-end tests for the admin users API.
//!
//! Each test drives the router with oneshot requests. The store is seeded
//! with three demo users (ids 1..=3).

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use roster_api::views::{MEDIA_TYPE_V1, MEDIA_TYPE_V2};
use roster_integration_tests::test_app;

/// Read a response body as JSON.
async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

/// Keys of a JSON object in document order.
fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[tokio::test]
async fn list_users_returns_admin_summary_in_insertion_order() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/admin/users")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().expect("expected an array");
    assert_eq!(users.len(), 3);

    let ids: Vec<i64> = users
        .iter()
        .map(|u| u["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);

    for user in users {
        assert_eq!(keys(user), vec!["id", "name", "joinDate", "ssn"]);
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn get_user_v1_shape() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/admin/users/1")
                .header(header::ACCEPT, MEDIA_TYPE_V1)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some(MEDIA_TYPE_V1)
    );

    let body = body_json(response).await;
    assert_eq!(keys(&body), vec!["id", "name", "password", "ssn"]);
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Kenneth"));
    assert!(body.get("joinDate").is_none());
}

#[tokio::test]
async fn get_user_v2_shape_has_grade() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/admin/users/1")
                .header(header::ACCEPT, MEDIA_TYPE_V2)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some(MEDIA_TYPE_V2)
    );

    let body = body_json(response).await;
    assert_eq!(keys(&body), vec!["id", "name", "joinDate", "grade"]);
    assert_eq!(body["grade"], json!("VIP"));
    assert!(body.get("password").is_none());
    assert!(body.get("ssn").is_none());
}

#[tokio::test]
async fn get_user_without_accept_defaults_to_v1() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/admin/users/2")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(keys(&body), vec!["id", "name", "password", "ssn"]);
    assert_eq!(body["name"], json!("Alice"));
}

#[tokio::test]
async fn get_user_with_unknown_accept_is_not_acceptable() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/admin/users/1")
                .header(header::ACCEPT, "application/vnd.company.appv3+json")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn get_missing_user_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::get("/admin/users/99")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let text = String::from_utf8(bytes.to_vec()).expect("utf8 body");
    assert!(text.contains("ID[99] not found"));
}

#[tokio::test]
async fn update_user_changes_only_the_name() {
    let app = test_app();

    // Capture the record before the update.
    let before = body_json(
        app.clone()
            .oneshot(
                Request::get("/admin/users/1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response"),
    )
    .await;

    let response = app
        .clone()
        .oneshot(
            Request::put("/admin/users/1")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({"name": "Renamed"})).expect("encode"),
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    assert!(bytes.is_empty());

    let after = body_json(
        app.oneshot(
            Request::get("/admin/users/1")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response"),
    )
    .await;

    assert_eq!(after["name"], json!("Renamed"));
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["password"], before["password"]);
    assert_eq!(after["ssn"], before["ssn"]);
}

#[tokio::test]
async fn update_missing_user_is_not_found() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::put("/admin/users/42")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({"name": "Nobody"})).expect("encode"),
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_user_returns_created_with_location() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(
            Request::post("/admin/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "name": "Dana",
                        "password": "pass4",
                        "ssn": "951010-4444444",
                    }))
                    .expect("encode"),
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/admin/users/4")
    );

    let body = body_json(response).await;
    assert_eq!(keys(&body), vec!["id", "name", "password", "ssn"]);
    assert_eq!(body["id"], json!(4));
    assert_eq!(body["name"], json!("Dana"));

    // The new user shows up at the end of the listing.
    let listing = body_json(
        app.oneshot(
            Request::get("/admin/users")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response"),
    )
    .await;
    let users = listing.as_array().expect("array");
    assert_eq!(users.len(), 4);
    assert_eq!(users[3]["name"], json!("Dana"));
}

#[tokio::test]
async fn create_user_with_blank_name_is_bad_request() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::post("/admin/users")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "name": "   ",
                        "password": "x",
                        "ssn": "y",
                    }))
                    .expect("encode"),
                ))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

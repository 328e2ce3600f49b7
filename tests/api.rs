//! End-to-end API tests.
//!
//! Serves the router on an ephemeral port and talks to it over real HTTP,
//! replaying the client flow: register, read, list, reschedule, cancel.

use gym_membership::membership::registry::MembershipRegistry;
use gym_membership::server::build_router;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(Arc::new(MembershipRegistry::new()));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_membership_api_flow() {
    let addr = spawn_server().await;
    let base = format!("http://{}", addr);
    let client = reqwest::Client::new();
    let email = "testuser@example.com";
    let expected_member = json!({
        "name": "Test User",
        "email": email,
        "startDate": "2024-11-25",
        "isActive": true
    });

    // Register
    let response = client
        .post(format!("{}/register", base))
        .json(&json!({ "name": "Test User", "email": email, "startDate": "2024-11-25" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Membership registered successfully.");
    assert_eq!(body["member"], expected_member);

    // View details
    let response = client
        .get(format!("{}/members/{}", base, email))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, expected_member);

    // View all active members
    let response = client.get(format!("{}/members", base)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert!(body.as_array().unwrap().contains(&expected_member));

    // Modify start date
    let response = client
        .put(format!("{}/members/{}", base, email))
        .json(&json!({ "newStartDate": "2024-12-01" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Membership start date updated successfully.");
    assert_eq!(body["member"]["startDate"], "2024-12-01");

    // Cancel
    let response = client
        .delete(format!("{}/members/{}", base, email))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Membership canceled successfully.");
    assert_eq!(body["member"]["isActive"], false);

    // Re-registering a cancelled email is still a duplicate
    let response = client
        .post(format!("{}/register", base))
        .json(&json!({ "name": "Another User", "email": email, "startDate": "2024-11-25" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Membership already exists for this email.");
}

#[tokio::test]
async fn test_membership_api_errors() {
    let addr = spawn_server().await;
    let base = format!("http://{}", addr);
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/members/nonexistent@example.com", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "No membership found for this email." }));

    let response = client
        .post(format!("{}/register", base))
        .json(&json!({ "name": "Test User", "email": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Name, email, and start date are required." }));
}

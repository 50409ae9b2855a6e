//! Live API tests against a running server with a migrated, seeded database.
//!
//! Run with: HIRO_TEST_URL=http://localhost:5000 cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

fn base_url() -> String {
    std::env::var("HIRO_TEST_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// Log in as the seeded administrator
async fn admin_token(client: &Client) -> String {
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@hiro.co.ke".to_string());
    let password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "change-this-admin-password".to_string());

    let response = client
        .post(format!("{}/api/users/login", base_url()))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await
        .expect("Failed to send login request");

    let body: Value = response.json().await.expect("Failed to parse login response");
    body["token"].as_str().expect("No token in response").to_string()
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let response = Client::new()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
#[ignore]
async fn test_register_login_and_profile() {
    let client = Client::new();
    let email = format!("user-{}@example.com", Uuid::new_v4().simple());

    let response = client
        .post(format!("{}/api/users/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email,
            "password": "secret123",
            "phoneNumber": "0712345678"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["role"], "user");

    // Duplicate registration
    let response = client
        .post(format!("{}/api/users/register", base_url()))
        .json(&json!({
            "name": "Test User",
            "email": email.to_uppercase(),
            "password": "secret123",
            "phoneNumber": "0712345678"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 409);

    let response = client
        .post(format!("{}/api/users/login", base_url()))
        .json(&json!({ "email": email, "password": "secret123" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let token = response.json::<Value>().await.unwrap()["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = client
        .put(format!("{}/api/users/me", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "address": "Nyali, Mombasa" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["user"]["address"], "Nyali, Mombasa");

    // Nothing changed the second time
    let response = client
        .put(format!("{}/api/users/me", base_url()))
        .bearer_auth(&token)
        .json(&json!({ "address": "Nyali, Mombasa" }))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "No changes detected.");
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let response = Client::new()
        .post(format!("{}/api/users/login", base_url()))
        .json(&json!({ "email": "nobody@example.com", "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_quote_lifecycle() {
    let client = Client::new();
    let token = admin_token(&client).await;

    let response = client
        .post(format!("{}/api/quotes", base_url()))
        .json(&json!({
            "fullName": "Jane Doe",
            "email": "jane@example.com",
            "phoneNumber": "0712345678",
            "quoteType": "Event",
            "eventType": "Wedding",
            "eventDate": "2026-12-24",
            "guests": "150",
            "location": "Mombasa"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let quote = response.json::<Value>().await.unwrap()["data"].clone();
    let id = quote["id"].as_str().unwrap().to_string();
    assert_eq!(quote["guests"], 150);
    assert_eq!(quote["isRead"], false);

    let response = client
        .patch(format!("{}/api/quotes/{}/read", base_url(), id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["isRead"], true);

    let response = client
        .patch(format!("{}/api/quotes/{}/status", base_url(), id))
        .bearer_auth(&token)
        .json(&json!({ "status": "Contacted" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/api/quotes/{}", base_url(), id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.json::<Value>().await.unwrap()["id"], id.as_str());
}

#[tokio::test]
#[ignore]
async fn test_staff_booking_conflict_and_release() {
    let client = Client::new();
    let token = admin_token(&client).await;

    let staff: Vec<Value> = client
        .get(format!("{}/api/staff", base_url()))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let staff_id = staff[0]["id"].as_str().expect("seeded staff").to_string();
    let date = "2031-06-15";

    let book = || {
        client
            .post(format!("{}/api/bookings", base_url()))
            .bearer_auth(&token)
            .json(&json!({ "staffId": staff_id, "date": date }))
            .send()
    };

    let response = book().await.unwrap();
    assert_eq!(response.status(), 201);
    let booking_id = response.json::<Value>().await.unwrap()["booking"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = book().await.unwrap();
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Unavailable");

    // Cancelling frees the date again
    let response = client
        .patch(format!("{}/api/bookings/{}/status", base_url(), booking_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let response = book().await.unwrap();
    assert_eq!(response.status(), 201);
    let booking_id = response.json::<Value>().await.unwrap()["booking"]["id"]
        .as_str()
        .unwrap()
        .to_string();
    client
        .patch(format!("{}/api/bookings/{}/status", base_url(), booking_id))
        .bearer_auth(&token)
        .json(&json!({ "status": "cancelled" }))
        .send()
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn test_equipment_booking_and_usage_report() {
    let client = Client::new();
    let token = admin_token(&client).await;

    let response = client
        .post(format!("{}/api/equipment-bookings", base_url()))
        .json(&json!({
            "fullName": "Jane Doe",
            "phone": "0712345678",
            "location": "Mombasa",
            "date": "2026-12-24",
            "selectedEquipments": [{ "name": "Tent", "quantity": 2 }]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    let id = response.json::<Value>().await.unwrap()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let usage: Vec<Value> = client
        .get(format!("{}/api/reports/equipment-usage", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(usage.iter().any(|u| u["equipment"] == "Tent"));

    let response = client
        .delete(format!("{}/api/equipment-bookings/{}", base_url(), id))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
}

#[tokio::test]
#[ignore]
async fn test_notification_counts() {
    let client = Client::new();
    let token = admin_token(&client).await;

    let response = client
        .get(format!("{}/api/notifications/counts", base_url()))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert!(body["unreadQuotes"].is_number());
    assert!(body["pendingBookings"].is_number());
}

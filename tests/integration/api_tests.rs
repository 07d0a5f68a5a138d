//! API integration tests
//!
//! These run against a live server. Start one with `cargo run`, then:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Open the admin session before hitting guarded endpoints
async fn admin_login(client: &Client) {
    let response = client
        .post(format!("{}/admin/login", BASE_URL))
        .send()
        .await
        .expect("Failed to send login request");
    assert!(response.status().is_success());
}

/// Create a booking at the first museum's first slot, returning its JSON
async fn create_test_booking(client: &Client, date: &str) -> Value {
    let museums: Value = client
        .get(format!("{}/museums", BASE_URL))
        .send()
        .await
        .expect("Failed to list museums")
        .json()
        .await
        .expect("Failed to parse museums");
    let museum = &museums[0];
    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "name": "Integration Test",
            "email": "it@example.com",
            "museumId": museum["id"],
            "date": date,
            "time": museum["timeSlots"][0],
            "visitors": { "adult": 2, "child": 1, "senior": 0, "tourist": 0 }
        }))
        .send()
        .await
        .expect("Failed to create booking");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse booking")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_reports_backend() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert!(body["storeBackend"].is_string());
}

#[tokio::test]
#[ignore]
async fn test_list_museums() {
    let client = Client::new();

    let response = client
        .get(format!("{}/museums", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let museums = body.as_array().expect("Museums should be a list");
    assert!(!museums.is_empty());
    assert!(museums[0]["timeSlots"].is_array());
    assert!(museums[0]["pricing"]["adult"].is_number());
}

#[tokio::test]
#[ignore]
async fn test_list_museums_by_state() {
    let client = Client::new();

    let response = client
        .get(format!("{}/museums?state=Delhi", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    for museum in body.as_array().expect("Museums should be a list") {
        assert_eq!(museum["state"], "Delhi");
    }
}

#[tokio::test]
#[ignore]
async fn test_unknown_museum_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/museums/no-such-museum", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_availability() {
    let client = Client::new();

    let museums: Value = client
        .get(format!("{}/museums", BASE_URL))
        .send()
        .await
        .expect("Failed to list museums")
        .json()
        .await
        .expect("Failed to parse museums");
    let id = museums[0]["id"].as_str().expect("Museum id");

    let response = client
        .get(format!(
            "{}/museums/{}/availability?date=2030-01-15",
            BASE_URL, id
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let slots = body["slots"].as_array().expect("Slots should be a list");
    assert!(!slots.is_empty());
    for slot in slots {
        assert!(slot["available"].as_i64().expect("available") <= 100);
        assert!(slot["total"].as_i64().expect("total") <= 100);
    }
}

#[tokio::test]
#[ignore]
async fn test_booking_round_trip() {
    let client = Client::new();
    admin_login(&client).await;

    let booking = create_test_booking(&client, "2030-02-01").await;
    assert!(booking["ticketNumber"].as_str().expect("ticket").starts_with("TKT"));
    assert_eq!(booking["paymentStatus"], "completed");

    let response = client
        .get(format!("{}/bookings?date=2030-02-01", BASE_URL))
        .send()
        .await
        .expect("Failed to list bookings");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let listed = body["bookings"].as_array().expect("Bookings list");
    assert!(listed.iter().any(|b| b["id"] == booking["id"]));
    assert_eq!(body["degraded"], false);
}

#[tokio::test]
#[ignore]
async fn test_booking_reduces_availability() {
    let client = Client::new();

    let booking = create_test_booking(&client, "2030-03-01").await;
    let museum_id = booking["museum"]["id"].as_str().expect("Museum id");
    let time = booking["time"].as_str().expect("Time");

    let response = client
        .get(format!(
            "{}/museums/{}/availability?date=2030-03-01",
            BASE_URL, museum_id
        ))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    let slot = body["slots"]
        .as_array()
        .expect("Slots")
        .iter()
        .find(|s| s["time"] == time)
        .expect("Booked slot should be listed")
        .clone();
    assert!(slot["available"].as_i64().expect("available") <= slot["total"].as_i64().expect("total") - 3);
}

#[tokio::test]
#[ignore]
async fn test_zero_visitors_rejected() {
    let client = Client::new();

    let museums: Value = client
        .get(format!("{}/museums", BASE_URL))
        .send()
        .await
        .expect("Failed to list museums")
        .json()
        .await
        .expect("Failed to parse museums");
    let museum = &museums[0];

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .json(&json!({
            "name": "Nobody",
            "museumId": museum["id"],
            "date": "2030-02-01",
            "time": museum["timeSlots"][0],
            "visitors": { "adult": 0, "child": 0, "senior": 0, "tourist": 0 }
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_admin_endpoints_require_session() {
    let client = Client::new();

    // Make sure no admin session is open
    client
        .post(format!("{}/admin/logout", BASE_URL))
        .send()
        .await
        .expect("Failed to send logout");

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    let response = client
        .get(format!("{}/bookings", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_stats() {
    let client = Client::new();
    admin_login(&client).await;
    create_test_booking(&client, "2030-04-01").await;

    let response = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["totalBookings"].as_i64().expect("totalBookings") >= 1);
    assert!(body["totalRevenue"].as_i64().expect("totalRevenue") > 0);
    assert!(body["peakTimes"].is_array());
    assert!(body["popularMuseums"].is_array());
}

#[tokio::test]
#[ignore]
async fn test_csv_export() {
    let client = Client::new();
    admin_login(&client).await;
    create_test_booking(&client, "2030-05-01").await;

    let response = client
        .get(format!("{}/bookings/export?date=2030-05-01", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .expect("Content type")
        .to_string();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response
        .headers()
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .expect("Content disposition")
        .to_string();
    assert!(disposition.contains("bookings-"));

    let body = response.text().await.expect("Failed to read body");
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("Ticket Number,Name,Email,Museum,Date,Time,Amount,Status")
    );
    assert!(lines.next().is_some());
}

#[tokio::test]
#[ignore]
async fn test_chat_wizard_flow() {
    let client = Client::new();

    let response = client
        .post(format!("{}/chat/sessions", BASE_URL))
        .json(&json!({ "language": "en" }))
        .send()
        .await
        .expect("Failed to open session");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let session_id = body["sessionId"].as_str().expect("Session id").to_string();
    assert_eq!(body["reply"]["stage"], "name");

    let messages_url = format!("{}/chat/sessions/{}/messages", BASE_URL, session_id);
    let send = |input: Value| {
        let client = client.clone();
        let url = messages_url.clone();
        async move {
            let response = client
                .post(url)
                .json(&input)
                .send()
                .await
                .expect("Failed to send message");
            assert!(response.status().is_success());
            response.json::<Value>().await.expect("Failed to parse reply")
        }
    };

    let reply = send(json!({ "type": "text", "text": "Asha" })).await;
    assert_eq!(reply["stage"], "museum");

    let museums: Value = client
        .get(format!("{}/museums", BASE_URL))
        .send()
        .await
        .expect("Failed to list museums")
        .json()
        .await
        .expect("Failed to parse museums");
    let museum = &museums[0];

    let reply = send(json!({ "type": "selectMuseum", "museumId": museum["id"] })).await;
    assert_eq!(reply["stage"], "date");

    let reply = send(json!({ "type": "selectDate", "date": "2030-06-01" })).await;
    assert_eq!(reply["stage"], "time");
    assert!(reply["slots"].is_array());

    let reply = send(json!({ "type": "selectTime", "time": museum["timeSlots"][0] })).await;
    assert_eq!(reply["stage"], "visitors");

    // Confirming with nobody in the party must not advance
    let reply = send(json!({ "type": "confirmVisitors" })).await;
    assert_eq!(reply["stage"], "visitors");

    send(json!({
        "type": "setVisitors",
        "visitors": { "adult": 2, "child": 0, "senior": 0, "tourist": 0 }
    }))
    .await;
    let reply = send(json!({ "type": "confirmVisitors" })).await;
    assert_eq!(reply["stage"], "payment");
    assert!(reply["totalAmount"].as_i64().expect("totalAmount") > 0);

    let reply = send(json!({ "type": "confirmPayment" })).await;
    assert_eq!(reply["stage"], "complete");
    assert!(reply["booking"]["ticketNumber"]
        .as_str()
        .expect("ticket")
        .starts_with("TKT"));
}

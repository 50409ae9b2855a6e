//! Router-level tests: auth gates and request validation that answer before
//! any database round-trip. The pool connects lazily and is never used.

use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use hiro_server::{
    api,
    config::AppConfig,
    models::{enums::UserRole, user::UserClaims},
    repository::Repository,
    services::Services,
    AppState,
};

fn app() -> Router {
    let config = AppConfig::default();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool");
    let services = Services::new(Repository::new(pool), &config);
    api::create_router(AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    })
}

fn token(role: UserRole) -> String {
    let config = AppConfig::default();
    UserClaims::new(Uuid::new_v4(), role, 1)
        .create_token(&config.auth.jwt_secret)
        .expect("token")
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_health_reports_ok() {
    let (status, body) = send(get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["uptime"].is_number());
}

#[tokio::test]
async fn test_admin_routes_require_token() {
    for uri in [
        "/api/quotes",
        "/api/messages",
        "/api/bookings",
        "/api/equipment-bookings",
        "/api/staff/admin",
        "/api/reports/bookings",
        "/api/notifications/counts",
        "/api/users/admin",
    ] {
        let (status, body) = send(get(uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No token provided", "{}", uri);
    }
}

#[tokio::test]
async fn test_invalid_token_rejected() {
    let (status, body) = send(get("/api/quotes", Some("not-a-jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_admin_routes_forbid_regular_users() {
    let user = token(UserRole::User);
    for uri in ["/api/quotes", "/api/messages", "/api/reports/quotes", "/api/users/admin"] {
        let (status, body) = send(get(uri, Some(&user))).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{}", uri);
        assert_eq!(body["error"], "Forbidden");
    }
}

#[tokio::test]
async fn test_admin_check_welcomes_admin() {
    let admin = token(UserRole::Admin);
    let (status, body) = send(get("/api/users/admin", Some(&admin))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome admin");
}

#[tokio::test]
async fn test_report_rejects_inverted_range() {
    let admin = token(UserRole::Admin);
    let (status, _) = send(get(
        "/api/reports/bookings?start=2026-05-01&end=2026-04-01",
        Some(&admin),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_realtime_requires_admin() {
    let (status, _) = send(get("/ws", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let user = token(UserRole::User);
    let (status, _) = send(get(&format!("/api/notifications/stream?token={}", user), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let (status, body) = send(post_json(
        "/api/users/register",
        json!({ "name": "Jane", "email": "jane@example.com" }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let (status, body) = send(post_json("/api/auth/login", json!({ "email": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_quote_validation() {
    let (status, body) = send(post_json("/api/quotes", json!({ "fullName": "Jane" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields.");

    let (status, _) = send(post_json(
        "/api/quotes",
        json!({
            "fullName": "Jane",
            "email": "jane@example.com",
            "phoneNumber": "0712345678",
            "quoteType": "Event"
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_message_validation() {
    let (status, body) = send(post_json(
        "/api/messages",
        json!({
            "fullName": "Jane",
            "email": "not-an-email",
            "subject": "Wedding",
            "message": "Hello"
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email address.");
}

#[tokio::test]
async fn test_equipment_booking_requires_items() {
    let (status, _) = send(post_json(
        "/api/equipment-bookings",
        json!({
            "fullName": "Jane Doe",
            "phone": "0712345678",
            "location": "Mombasa",
            "date": "2026-12-24",
            "items": []
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_staff_booking_requires_login() {
    let (status, _) = send(post_json(
        "/api/bookings",
        json!({ "staffId": Uuid::new_v4(), "date": "2026-12-24" }),
    ))
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

fn web_form_quote(overrides: Value) -> Value {
    let mut body = json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "phoneNumber": "0712345678",
        "quoteType": "Staff",
        "staffType": "Waiter",
        "eventType": "",
        "eventDate": "",
        "guests": "",
        "location": "Mombasa",
        "details": "",
        "equipmentType": "",
        "equipmentQuantity": "",
        "rentalDate": ""
    });
    if let (Some(body), Some(overrides)) = (body.as_object_mut(), overrides.as_object()) {
        for (k, v) in overrides {
            body.insert(k.clone(), v.clone());
        }
    }
    body
}

#[tokio::test]
async fn test_web_form_quote_reaches_validation() {
    // Blank numeric fields parse; the service answers about the blank staff type
    let (status, body) = send(post_json("/api/quotes", web_form_quote(json!({ "staffType": "" })))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Staff type is required for staff quotes.");

    let (status, body) = send(post_json(
        "/api/quotes",
        web_form_quote(json!({ "phoneNumber": "" })),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing required fields.");
}

#[tokio::test]
async fn test_malformed_json_uses_error_envelope() {
    let (status, body) = send(post_json("/api/quotes", json!({ "guests": "many" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "BadRequest");

    let (status, body) = send(post_json("/api/messages", json!({ "fullName": 42 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadRequest");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/users/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_equipment_item_without_name() {
    let (status, body) = send(post_json(
        "/api/equipment-bookings",
        json!({
            "fullName": "Jane Doe",
            "phone": "0712345678",
            "location": "Mombasa",
            "date": "2026-12-24",
            "items": [{ "quantity": 2 }]
        }),
    ))
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Each equipment item needs a name.");
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_request_logs_omit_query_tokens() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let (status, _) = send(get("/api/notifications/stream?token=leaky-admin-token", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let output = String::from_utf8(logs.0.lock().expect("log buffer").clone()).expect("utf8");
    assert!(output.contains("/api/notifications/stream"), "{}", output);
    assert!(!output.contains("leaky-admin-token"), "{}", output);
}

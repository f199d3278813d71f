//! Integration tests for the admin HTTP surface.
//!
//! The admin router is driven in-process with `oneshot` while its backend
//! client talks to a mock backend over real HTTP.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use chrono::{Duration, Utc};
use foodcourt_integration_tests::{MockBackend, Reply, admin_app, order_json, user_json};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// The `name=value` part of the session cookie set by `response`.
fn session_cookie(response: &Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("No session cookie set")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_owned()
}

fn populated_backend() -> MockBackend {
    let now = Utc::now();
    MockBackend::new()
        .with_users(Reply::json(&json!([
            user_json("1", "Asha Rao", "asha@example.com", "Admin"),
            user_json("2", "Ravi Kumar", "ravi@example.com", "Customer"),
        ])))
        .with_orders(Reply::json(&json!([
            order_json("o-new", "p1", &json!("150.00"), &json!(2), "Pending", now - Duration::hours(2)),
            order_json("o-mid", "p2", &json!(80), &json!(1), "Delivered", now - Duration::days(3)),
            order_json("o-old", "p3", &json!(40), &json!(5), "Delivered", now - Duration::days(9)),
        ])))
        .with_category_stats(Reply::json(&json!({
            "labels": ["Drinks", "Desserts"],
            "data": [7, 3],
        })))
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health() {
    let origin = MockBackend::new().spawn().await;
    let app = admin_app(&origin);

    let response = get(&app, "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let origin = MockBackend::new().spawn().await;
    let app = admin_app(&origin);

    let response = get(&app, "/nope", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "Not found: /nope");
}

// ============================================================================
// Dashboard page
// ============================================================================

#[tokio::test]
async fn test_dashboard_renders_metrics_and_users() {
    let origin = populated_backend().spawn().await;
    let app = admin_app(&origin);

    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("₹580.00"), "earnings card missing");
    assert!(body.contains("Ravi Kumar"));
    assert!(body.contains("asha@example.com"));
    assert!(body.contains("Category on Platform"));
    assert!(body.contains("Monthly Sales"));
}

#[tokio::test]
async fn test_dashboard_shows_only_error_when_users_fail() {
    let origin = populated_backend()
        .with_users(Reply::raw(StatusCode::INTERNAL_SERVER_ERROR, ""))
        .spawn()
        .await;
    let app = admin_app(&origin);

    let response = get(&app, "/", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Failed to fetch users: HTTP error 500"));
    assert!(!body.contains("Ravi Kumar"));
}

// ============================================================================
// User deletion
// ============================================================================

#[tokio::test]
async fn test_deleting_admin_is_refused_without_backend_call() {
    let mock = populated_backend();
    let origin = mock.spawn().await;
    let app = admin_app(&origin);

    let response = post_form(&app, "/users/delete", "email=asha%40example.com&role=Admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert!(mock.deleted().is_empty());

    let cookie = session_cookie(&response);
    let body = body_text(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("Admin cannot be deleted!"));
    assert!(body.contains(r#"class="toast toast-warning""#));
}

#[tokio::test]
async fn test_deleting_user_notifies_success() {
    let mock = populated_backend();
    let origin = mock.spawn().await;
    let app = admin_app(&origin);

    let response =
        post_form(&app, "/users/delete", "email=ravi%40example.com&role=Customer").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(mock.deleted(), vec!["ravi@example.com".to_string()]);

    let cookie = session_cookie(&response);
    let body = body_text(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("User deleted"));
    assert!(body.contains(r#"class="toast toast-success""#));

    // Notifications are shown once
    let body = body_text(get(&app, "/", Some(&cookie)).await).await;
    assert!(!body.contains(r#"class="toast toast-success""#));
}

#[tokio::test]
async fn test_failed_deletion_notifies_server_error() {
    let mock = populated_backend().with_delete_user(Reply::raw(
        StatusCode::NOT_FOUND,
        r#"{"error": "User not found"}"#,
    ));
    let origin = mock.spawn().await;
    let app = admin_app(&origin);

    let response =
        post_form(&app, "/users/delete", "email=ghost%40example.com&role=Customer").await;

    let cookie = session_cookie(&response);
    let body = body_text(get(&app, "/", Some(&cookie)).await).await;
    assert!(body.contains("User not found"));
    assert!(body.contains(r#"class="toast toast-error""#));
}

#[tokio::test]
async fn test_delete_without_email_is_bad_request() {
    let origin = MockBackend::new().spawn().await;
    let app = admin_app(&origin);

    let response = post_form(&app, "/users/delete", "email=&role=Customer").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Recent orders
// ============================================================================

#[tokio::test]
async fn test_recent_orders_excludes_old_and_sorts_newest_first() {
    let origin = populated_backend().spawn().await;
    let app = admin_app(&origin);

    let response = get(&app, "/orders/recent", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    let newest = body.find("o-new").expect("recent order missing");
    let middle = body.find("o-mid").expect("three-day-old order missing");
    assert!(newest < middle);
    assert!(!body.contains("o-old"));
    assert!(body.contains("http://localhost:3000/tracking/o-new"));
}

#[tokio::test]
async fn test_recent_orders_custom_window() {
    let origin = populated_backend().spawn().await;
    let app = admin_app(&origin);

    let body = body_text(get(&app, "/orders/recent?days=1", None).await).await;
    assert!(body.contains("o-new"));
    assert!(!body.contains("o-mid"));

    let response = get(&app, "/orders/recent?days=0", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recent_orders_huge_window_lists_everything() {
    let origin = populated_backend().spawn().await;
    let app = admin_app(&origin);

    let response = get(&app, "/orders/recent?days=100000000", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("o-new"));
    assert!(body.contains("o-old"));
}

#[tokio::test]
async fn test_recent_orders_backend_failure_is_bad_gateway() {
    let origin = MockBackend::new()
        .with_orders(Reply::raw(StatusCode::INTERNAL_SERVER_ERROR, ""))
        .spawn()
        .await;
    let app = admin_app(&origin);

    let response = get(&app, "/orders/recent", None).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn test_api_dashboard_json() {
    let origin = populated_backend().spawn().await;
    let app = admin_app(&origin);

    let response = get(&app, "/api/dashboard", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["phase"], "ready");
    assert_eq!(json["metrics"]["total_orders"], 3);
    assert_eq!(json["metrics"]["pending_orders"], 1);
    assert_eq!(json["metrics"]["total_reviews"], 150);
    assert_eq!(json["charts"]["items"]["labels"], json!(["Drinks", "Desserts"]));
    assert_eq!(json["charts"]["user_roles"]["labels"], json!(["Admin", "Customer"]));
}

#[tokio::test]
async fn test_api_dashboard_survives_overflowing_prices() {
    let origin = populated_backend()
        .with_orders(Reply::json(&json!([
            order_json("o-big", "p1", &json!("70000000000000000000000000000"), &json!(2), "Pending", Utc::now()),
            order_json("o-small", "p2", &json!(10), &json!(1), "Delivered", Utc::now()),
        ])))
        .spawn()
        .await;
    let app = admin_app(&origin);

    let response = get(&app, "/api/dashboard", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["metrics"]["total_earnings"], "79228162514264337593543950335");
    assert_eq!(json["metrics"]["total_orders"], 2);
}

#[tokio::test]
async fn test_api_dashboard_uses_fallback_stats() {
    let origin = populated_backend()
        .with_category_stats(Reply::raw(StatusCode::INTERNAL_SERVER_ERROR, ""))
        .spawn()
        .await;
    let app = admin_app(&origin);

    let response = get(&app, "/api/dashboard", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(
        json["charts"]["items"]["labels"],
        json!(["Combo", "All-in-1", "Main Course", "Sandwiches", "Drinks", "Desserts", "Ice Creams", "Biryani"])
    );
    assert_eq!(
        json["charts"]["items"]["datasets"][0]["data"],
        json!([30.0, 20.0, 50.0, 10.0, 70.0, 40.0, 30.0, 40.0])
    );
}

#[tokio::test]
async fn test_api_dashboard_error_is_bad_gateway() {
    let origin = populated_backend()
        .with_orders(Reply::raw(StatusCode::SERVICE_UNAVAILABLE, ""))
        .spawn()
        .await;
    let app = admin_app(&origin);

    let response = get(&app, "/api/dashboard", None).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json: Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["error"], "Failed to fetch orders: HTTP error 503");
}

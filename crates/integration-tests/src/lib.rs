//! Integration tests for Foodcourt.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodcourt-integration-tests
//! ```
//!
//! No external services are needed: [`MockBackend`] serves the four backend
//! endpoints on an ephemeral local port and records deletions, and the admin
//! router is driven in-process.
//!
//! # Test Categories
//!
//! - `api_client` - The reqwest-based fetcher against the mock backend
//! - `admin_routes` - Admin pages and the JSON API end to end

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
};
use chrono::{DateTime, Utc};
use foodcourt_admin::{
    config::{AdminConfig, ApiConfig},
    state::AppState,
};
use serde_json::{Value, json};
use url::Url;

/// A canned backend response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    body: String,
}

impl Reply {
    /// `200 OK` with a JSON body.
    #[must_use]
    pub fn json(value: &Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: value.to_string(),
        }
    }

    /// Any status with a raw body.
    #[must_use]
    pub fn raw(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

#[derive(Debug)]
struct Replies {
    users: Reply,
    orders: Reply,
    category_stats: Reply,
    delete_user: Reply,
    deleted: Vec<String>,
}

/// In-process stand-in for the food-ordering backend.
#[derive(Debug, Clone)]
pub struct MockBackend {
    replies: Arc<Mutex<Replies>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Empty collections, fallback-free category stats, successful deletes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Replies {
                users: Reply::json(&json!([])),
                orders: Reply::json(&json!([])),
                category_stats: Reply::json(&json!({"labels": [], "data": []})),
                delete_user: Reply::json(&json!({"message": "User deleted"})),
                deleted: Vec::new(),
            })),
        }
    }

    #[must_use]
    pub fn with_users(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().users = reply;
        self
    }

    #[must_use]
    pub fn with_orders(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().orders = reply;
        self
    }

    #[must_use]
    pub fn with_category_stats(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().category_stats = reply;
        self
    }

    #[must_use]
    pub fn with_delete_user(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().delete_user = reply;
        self
    }

    /// Emails received by `DELETE /api/user`, in arrival order.
    #[must_use]
    pub fn deleted(&self) -> Vec<String> {
        self.replies.lock().unwrap().deleted.clone()
    }

    /// Serve the backend on an ephemeral port and return its origin.
    pub async fn spawn(&self) -> Url {
        let app = Router::new()
            .route("/api/users", get(users))
            .route("/api/orders", get(orders))
            .route("/api/add-new/category-stats", get(category_stats))
            .route("/api/user", delete(delete_user))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend failed");
        });

        Url::parse(&format!("http://{addr}")).expect("Invalid mock backend origin")
    }
}

async fn users(State(mock): State<MockBackend>) -> Reply {
    mock.replies.lock().unwrap().users.clone()
}

async fn orders(State(mock): State<MockBackend>) -> Reply {
    mock.replies.lock().unwrap().orders.clone()
}

async fn category_stats(State(mock): State<MockBackend>) -> Reply {
    mock.replies.lock().unwrap().category_stats.clone()
}

async fn delete_user(State(mock): State<MockBackend>, Json(body): Json<Value>) -> Reply {
    let mut replies = mock.replies.lock().unwrap();
    if let Some(email) = body.get("email").and_then(Value::as_str) {
        replies.deleted.push(email.to_owned());
    }
    replies.delete_user.clone()
}

/// Admin configuration pointing at `origin`, everything else default.
#[must_use]
pub fn admin_config(origin: &Url) -> AdminConfig {
    AdminConfig {
        api: ApiConfig {
            origin: origin.clone(),
        },
        host: [127, 0, 0, 1].into(),
        port: 0,
        tracking_base_url: Url::parse("http://localhost:3000/tracking").unwrap(),
        recent_orders_days: 7,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 1.0,
    }
}

/// Admin router backed by `origin`.
#[must_use]
pub fn admin_app(origin: &Url) -> Router {
    let state = AppState::new(admin_config(origin)).expect("Failed to build admin state");
    foodcourt_admin::app(state)
}

/// A user document as the backend lists it.
#[must_use]
pub fn user_json(id: &str, name: &str, email: &str, role: &str) -> Value {
    json!({"_id": id, "fullName": name, "email": email, "role": role})
}

/// An order document as the backend lists it.
#[must_use]
pub fn order_json(
    id: &str,
    product_id: &str,
    price: &Value,
    quantity: &Value,
    status: &str,
    created_at: DateTime<Utc>,
) -> Value {
    json!({
        "_id": id,
        "productId": product_id,
        "name": format!("Item {product_id}"),
        "price": price,
        "quantity": quantity,
        "status": status,
        "payment_method": "Cash",
        "createdAt": created_at.to_rfc3339(),
    })
}

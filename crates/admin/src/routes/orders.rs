//! Recent orders route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use foodcourt_core::{Order, recent_orders, recent_orders_window};
use serde::Deserialize;
use tracing::instrument;

use crate::{config::AdminConfig, error::AppError, filters, state::AppState};

/// Query parameters for the recent orders view.
#[derive(Debug, Deserialize)]
pub struct RecentOrdersQuery {
    pub days: Option<u32>,
}

/// Order row for the recent orders table.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub id: String,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub status: String,
    pub payment_method: String,
    pub placed_at: String,
    pub tracking_url: Option<String>,
}

impl OrderRow {
    fn new(order: &Order, config: &AdminConfig) -> Self {
        let id = order
            .id
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        Self {
            tracking_url: (!id.is_empty()).then(|| config.tracking_url(&id)),
            id,
            name: order.name.clone().unwrap_or_default(),
            price: order.price.unwrap_or_default().to_string(),
            quantity: order.quantity.unwrap_or_default(),
            status: order.status.as_str().to_string(),
            payment_method: order.payment_method.clone().unwrap_or_default(),
            placed_at: order
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Recent orders template.
#[derive(Template, WebTemplate)]
#[template(path = "recent_orders.html")]
pub struct RecentOrdersTemplate {
    pub current_path: String,
    pub days: u32,
    pub orders: Vec<OrderRow>,
}

/// Recent orders page handler.
///
/// Lists orders placed within the last `days` days (configured default when
/// absent), newest first.
#[instrument(skip(state))]
pub async fn recent(
    State(state): State<AppState>,
    Query(query): Query<RecentOrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let config = state.config();
    let days = query.days.unwrap_or(config.recent_orders_days);
    if days == 0 {
        return Err(AppError::BadRequest("days must be at least 1".to_string()));
    }

    let orders = state.api().get_orders().await?;
    let rows = recent_orders(&orders, Utc::now(), recent_orders_window(days))
        .into_iter()
        .map(|order| OrderRow::new(order, config))
        .collect();

    Ok(RecentOrdersTemplate {
        current_path: "/orders/recent".to_string(),
        days,
        orders: rows,
    })
}

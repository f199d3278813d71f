//! Dashboard read commands.
//!
//! # Usage
//!
//! ```bash
//! fc-cli summary
//! fc-cli recent-orders --days 3
//! ```
//!
//! # Environment Variables
//!
//! - `FOODCOURT_API_ORIGIN` - Backend origin (default: <http://localhost:5000>)
//! - `RECENT_ORDERS_DAYS` - Default window of `recent-orders` (default: 7)

use chrono::Utc;
use foodcourt_admin::config::parse_days;
use foodcourt_admin::dashboard::{DashboardState, DashboardView, LoadStatus, Resource};
use foodcourt_core::{RECENT_ORDERS_WINDOW_DAYS, recent_orders_window};

use super::{CommandError, api_client};

/// Load the dashboard and print its metrics.
pub async fn summary() -> Result<(), CommandError> {
    let api = api_client()?;
    let state = DashboardState::load(&api).await;

    if let Some(error) = state.error() {
        return Err(error.clone().into());
    }

    let view = DashboardView::from_state(&state);
    let metrics = &view.metrics;

    tracing::info!("Total earnings: {}", metrics.total_earnings);
    tracing::info!("Total orders:   {}", metrics.total_orders);
    tracing::info!("Total users:    {}", metrics.total_users);
    tracing::info!("Pending orders: {}", metrics.pending_orders);
    tracing::info!("Total reviews:  {}", metrics.total_reviews);
    tracing::info!("Total products: {}", metrics.total_products);

    tracing::info!("");
    tracing::info!("Users by role:");
    for bucket in metrics.user_roles.iter() {
        tracing::info!("  {}: {}", bucket.role, bucket.count);
    }

    tracing::info!("");
    if state.status(Resource::CategoryStats) != LoadStatus::Ready {
        tracing::warn!("Category statistics unavailable, showing fallback data");
    }
    tracing::info!("Items by category:");
    let items = &view.charts.items;
    if let Some(dataset) = items.datasets.first() {
        for (label, value) in items.labels.iter().zip(&dataset.data) {
            tracing::info!("  {label}: {value}");
        }
    }

    Ok(())
}

/// Print orders placed within the last `days` days, newest first.
pub async fn recent_orders(days: Option<u32>) -> Result<(), CommandError> {
    let days = match days {
        Some(0) => return Err(CommandError::InvalidDays),
        Some(days) => days,
        None => match std::env::var("RECENT_ORDERS_DAYS") {
            Ok(value) => parse_days(&value)?,
            Err(_) => u32::try_from(RECENT_ORDERS_WINDOW_DAYS).unwrap_or(7),
        },
    };
    let api = api_client()?;

    let orders = api.get_orders().await?;
    let recent = foodcourt_core::recent_orders(&orders, Utc::now(), recent_orders_window(days));

    tracing::info!("{} order(s) in the last {} day(s)", recent.len(), days);
    for order in recent {
        tracing::info!(
            "  {} | {} | {} x {} | {} | {}",
            order.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            order.name.as_deref().unwrap_or("-"),
            order.quantity.unwrap_or_default(),
            order.price.unwrap_or_default(),
            order.status.as_str(),
            order
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_days_is_rejected_before_fetching() {
        let err = recent_orders(Some(0)).await.unwrap_err();
        assert!(matches!(err, CommandError::InvalidDays));
        assert_eq!(err.to_string(), "--days must be at least 1");
    }
}

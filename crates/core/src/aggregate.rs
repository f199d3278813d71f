//! Dashboard aggregation over fetched collections.
//!
//! Every function here is pure: the same snapshot always produces the same
//! output, and nothing performs I/O.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{Order, ProductId, User};

/// Window of the recent orders view.
pub const RECENT_ORDERS_WINDOW_DAYS: i64 = 7;

/// Placeholder shown on the reviews card; the backend has no reviews endpoint.
pub const PLACEHOLDER_REVIEW_COUNT: usize = 150;

/// Total earnings: the sum of `price × quantity` over all orders.
///
/// Orders with a missing or non-numeric price or quantity contribute zero.
/// The total saturates at the bounds of [`Decimal`].
#[must_use]
pub fn earnings(orders: &[Order]) -> Decimal {
    orders
        .iter()
        .map(Order::line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Number of orders whose status is exactly `"Pending"`.
#[must_use]
pub fn pending_count(orders: &[Order]) -> usize {
    orders.iter().filter(|o| o.status.is_pending()).count()
}

/// Number of distinct products ordered.
///
/// Orders without a product ID are counted together as one unknown product.
#[must_use]
pub fn distinct_product_count(orders: &[Order]) -> usize {
    orders
        .iter()
        .map(|o| o.product_id.as_ref())
        .collect::<HashSet<Option<&ProductId>>>()
        .len()
}

/// Number of users per role, keyed in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleHistogram {
    entries: Vec<RoleCount>,
}

/// A single role bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleCount {
    pub role: String,
    pub count: usize,
}

impl RoleHistogram {
    fn increment(&mut self, role: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.role == role) {
            entry.count += 1;
        } else {
            self.entries.push(RoleCount {
                role: role.to_owned(),
                count: 1,
            });
        }
    }

    /// Count for `role`, zero if no user has it.
    #[must_use]
    pub fn count(&self, role: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map_or(0, |e| e.count)
    }

    /// Buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &RoleCount> {
        self.entries.iter()
    }

    /// Role names in first-seen order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.role.as_str())
    }

    /// Number of distinct roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Count users per role.
#[must_use]
pub fn role_histogram(users: &[User]) -> RoleHistogram {
    let mut histogram = RoleHistogram::default();
    for user in users {
        histogram.increment(user.role.as_str());
    }
    histogram
}

/// Window covering the last `days` days.
#[must_use]
pub fn recent_orders_window(days: u32) -> Duration {
    Duration::days(i64::from(days))
}

/// Orders created within `window` before `now`, newest first.
///
/// The cutoff is inclusive and clamps to the earliest representable time
/// for windows reaching past it. Orders without a creation time are excluded.
#[must_use]
pub fn recent_orders(orders: &[Order], now: DateTime<Utc>, window: Duration) -> Vec<&Order> {
    let cutoff = now
        .checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let mut recent: Vec<&Order> = orders
        .iter()
        .filter(|o| o.created_at.is_some_and(|at| at >= cutoff))
        .collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent
}

/// Headline numbers shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub total_earnings: Decimal,
    pub total_orders: usize,
    pub total_users: usize,
    pub pending_orders: usize,
    pub total_reviews: usize,
    pub total_products: usize,
    pub user_roles: RoleHistogram,
}

impl DashboardMetrics {
    /// Derive all metrics from a snapshot of users and orders.
    #[must_use]
    pub fn compute(users: &[User], orders: &[Order]) -> Self {
        Self {
            total_earnings: earnings(orders),
            total_orders: orders.len(),
            total_users: users.len(),
            pending_orders: pending_count(orders),
            total_reviews: PLACEHOLDER_REVIEW_COUNT,
            total_products: distinct_product_count(orders),
            user_roles: role_histogram(users),
        }
    }
}

impl Default for DashboardMetrics {
    fn default() -> Self {
        Self::compute(&[], &[])
    }
}

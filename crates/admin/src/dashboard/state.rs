//! Dashboard state for one activation.
//!
//! Holds the latest fetched collections, the first fatal fetch error, and the
//! metrics derived from them. Fetch outcomes are applied one at a time in
//! completion order; every applied success recomputes the metrics.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use foodcourt_core::{CategoryStats, DashboardMetrics, Order, User, recent_orders};
use futures::FutureExt;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::mutation::DeleteOutcome;
use super::source::{DashboardSource, FailurePolicy, Resolution, Resource};
use crate::api::FetchError;

/// Load status of a single resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

/// Overall dashboard phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Loading,
    Error,
    Ready,
}

/// A fatal fetch failure, tagged with the resource it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardError {
    pub resource: Resource,
    pub source: FetchError,
}

impl fmt::Display for DashboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to fetch {}: {}", self.resource, self.source)
    }
}

impl std::error::Error for DashboardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Collections, statuses and derived metrics of one dashboard activation.
#[derive(Debug, Clone)]
pub struct DashboardState {
    users: Vec<User>,
    orders: Vec<Order>,
    category_stats: CategoryStats,
    users_status: LoadStatus,
    orders_status: LoadStatus,
    category_stats_status: LoadStatus,
    error: Option<DashboardError>,
    metrics: DashboardMetrics,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Empty collections, fallback category stats, everything loading.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            orders: Vec::new(),
            category_stats: CategoryStats::fallback(),
            users_status: LoadStatus::Loading,
            orders_status: LoadStatus::Loading,
            category_stats_status: LoadStatus::Loading,
            error: None,
            metrics: DashboardMetrics::default(),
        }
    }

    /// Issue all fetches concurrently and apply them as they complete.
    #[instrument(skip(source))]
    pub async fn load<S: DashboardSource>(source: &S) -> Self {
        let mut state = Self::new();

        let mut pending: FuturesUnordered<BoxFuture<'_, Resolution>> = FuturesUnordered::new();
        pending.push(source.users().map(Resolution::Users).boxed());
        pending.push(source.orders().map(Resolution::Orders).boxed());
        pending.push(
            source
                .category_stats()
                .map(Resolution::CategoryStats)
                .boxed(),
        );

        while let Some(resolution) = pending.next().await {
            state.apply(resolution);
        }

        debug!(phase = ?state.phase(), "Dashboard loaded");
        state
    }

    /// Apply one fetch outcome.
    ///
    /// Successes replace their own slice. A failure of a fatal resource is
    /// recorded unless an earlier one already was; a failure of a fallback
    /// resource keeps the current data in place.
    pub fn apply(&mut self, resolution: Resolution) {
        let resource = resolution.resource();
        let outcome = match resolution {
            Resolution::Users(Ok(users)) => {
                self.users = users;
                Ok(())
            }
            Resolution::Orders(Ok(orders)) => {
                self.orders = orders;
                Ok(())
            }
            Resolution::CategoryStats(Ok(stats)) => {
                self.category_stats = stats;
                Ok(())
            }
            Resolution::Users(Err(e))
            | Resolution::Orders(Err(e))
            | Resolution::CategoryStats(Err(e)) => Err(e),
        };

        match outcome {
            Ok(()) => {
                self.set_status(resource, LoadStatus::Ready);
                self.recompute();
            }
            Err(source) => {
                self.set_status(resource, LoadStatus::Failed);
                match resource.failure_policy() {
                    FailurePolicy::Fatal => {
                        warn!(%resource, reason = source.reason(), error = %source, "Dashboard fetch failed");
                        if self.error.is_none() {
                            self.error = Some(DashboardError { resource, source });
                        }
                    }
                    FailurePolicy::Fallback => {
                        warn!(%resource, reason = source.reason(), error = %source, "Using fallback data");
                    }
                }
            }
        }
    }

    /// Drop every user with `email` and recompute the metrics.
    pub fn remove_user(&mut self, email: &str) {
        let before = self.users.len();
        self.users.retain(|u| u.email() != email);
        if self.users.len() != before {
            self.recompute();
        }
    }

    /// Reflect the outcome of a delete action.
    pub fn apply_delete(&mut self, outcome: &DeleteOutcome) {
        if let DeleteOutcome::Deleted { email } = outcome {
            self.remove_user(email);
        }
    }

    /// `Error` once a fatal fetch failed, `Ready` once everything resolved.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if Resource::ALL
            .iter()
            .any(|r| self.status(*r) == LoadStatus::Loading)
        {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }

    #[must_use]
    pub const fn status(&self, resource: Resource) -> LoadStatus {
        match resource {
            Resource::Users => self.users_status,
            Resource::Orders => self.orders_status,
            Resource::CategoryStats => self.category_stats_status,
        }
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub const fn category_stats(&self) -> &CategoryStats {
        &self.category_stats
    }

    /// The first fatal fetch error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&DashboardError> {
        self.error.as_ref()
    }

    #[must_use]
    pub const fn metrics(&self) -> &DashboardMetrics {
        &self.metrics
    }

    /// Orders created within `window` before `now`, newest first.
    #[must_use]
    pub fn recent_orders(&self, now: DateTime<Utc>, window: Duration) -> Vec<&Order> {
        recent_orders(&self.orders, now, window)
    }

    fn set_status(&mut self, resource: Resource, status: LoadStatus) {
        match resource {
            Resource::Users => self.users_status = status,
            Resource::Orders => self.orders_status = status,
            Resource::CategoryStats => self.category_stats_status = status,
        }
    }

    fn recompute(&mut self) {
        self.metrics = DashboardMetrics::compute(&self.users, &self.orders);
    }
}

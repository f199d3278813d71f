//! The data source seam between dashboard state and the backend transport.

use std::fmt;
use std::future::Future;

use foodcourt_core::{CategoryStats, Order, User};
use serde::Serialize;

use crate::api::{ApiClient, ApiMessage, FetchError};

/// Where the dashboard gets its collections from.
///
/// [`ApiClient`] is the production implementation; tests substitute
/// in-memory sources.
pub trait DashboardSource: Sync {
    fn users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send;

    fn orders(&self) -> impl Future<Output = Result<Vec<Order>, FetchError>> + Send;

    fn category_stats(&self) -> impl Future<Output = Result<CategoryStats, FetchError>> + Send;

    fn delete_user(&self, email: &str)
    -> impl Future<Output = Result<ApiMessage, FetchError>> + Send;
}

impl DashboardSource for ApiClient {
    fn users(&self) -> impl Future<Output = Result<Vec<User>, FetchError>> + Send {
        self.get_users()
    }

    fn orders(&self) -> impl Future<Output = Result<Vec<Order>, FetchError>> + Send {
        self.get_orders()
    }

    fn category_stats(&self) -> impl Future<Output = Result<CategoryStats, FetchError>> + Send {
        self.get_category_stats()
    }

    fn delete_user(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<ApiMessage, FetchError>> + Send {
        Self::delete_user(self, email)
    }
}

/// A collection the dashboard loads on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Users,
    Orders,
    CategoryStats,
}

/// What a failed fetch does to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// The dashboard enters its error state and shows only the error.
    Fatal,
    /// The failure is logged and a fallback dataset stays in place.
    Fallback,
}

impl Resource {
    /// All resources, in the order their fetches are issued.
    pub const ALL: [Self; 3] = [Self::Users, Self::Orders, Self::CategoryStats];

    /// Users and orders carry the dashboard; category stats are decorative.
    #[must_use]
    pub const fn failure_policy(self) -> FailurePolicy {
        match self {
            Self::Users | Self::Orders => FailurePolicy::Fatal,
            Self::CategoryStats => FailurePolicy::Fallback,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Users => write!(f, "users"),
            Self::Orders => write!(f, "orders"),
            Self::CategoryStats => write!(f, "category statistics"),
        }
    }
}

/// The outcome of one dashboard fetch.
#[derive(Debug, Clone)]
pub enum Resolution {
    Users(Result<Vec<User>, FetchError>),
    Orders(Result<Vec<Order>, FetchError>),
    CategoryStats(Result<CategoryStats, FetchError>),
}

impl Resolution {
    /// The resource this outcome belongs to.
    #[must_use]
    pub const fn resource(&self) -> Resource {
        match self {
            Self::Users(_) => Resource::Users,
            Self::Orders(_) => Resource::Orders,
            Self::CategoryStats(_) => Resource::CategoryStats,
        }
    }
}

//! Dashboard state, aggregation into charts, and the delete-user action.
//!
//! [`DashboardState::load`] runs one activation against a
//! [`DashboardSource`]; [`DashboardView`] is the read-only projection the
//! page, the JSON endpoint and the CLI render from.

pub mod charts;
pub mod mutation;
pub mod source;
pub mod state;

pub use charts::{ChartData, ChartDataset, Color, DashboardCharts};
pub use mutation::{DeleteOutcome, delete_user};
pub use source::{DashboardSource, FailurePolicy, Resolution, Resource};
pub use state::{DashboardError, DashboardState, LoadStatus, Phase};

use foodcourt_core::{DashboardMetrics, User};
use serde::Serialize;

/// Everything the dashboard renders, derived from one [`DashboardState`].
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub metrics: DashboardMetrics,
    pub charts: DashboardCharts,
    pub users: Vec<User>,
}

impl DashboardView {
    #[must_use]
    pub fn from_state(state: &DashboardState) -> Self {
        let metrics = state.metrics().clone();
        let charts = DashboardCharts::build(state.category_stats(), &metrics.user_roles);
        Self {
            phase: state.phase(),
            error: state.error().map(ToString::to_string),
            metrics,
            charts,
            users: state.users().to_vec(),
        }
    }
}

//! Chart.js datasets derived from dashboard state.

use foodcourt_core::{CategoryStats, RoleHistogram};
use serde::Serialize;

/// Colors cycled over item categories.
pub const ITEMS_PALETTE: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#AFEEEE", "#FF6384", "#C9CBCF", "#32CD32",
];

/// Colors cycled over user roles.
pub const ROLES_PALETTE: [&str; 4] = ["#F3C65C", "#F7B733", "#FF6B6B", "#6B8E23"];

/// Month labels of the sales chart.
pub const MONTHLY_SALES_LABELS: [&str; 5] = ["January", "February", "March", "April", "May"];

/// Sales figures of the sales chart.
pub const MONTHLY_SALES_DATA: [f64; 5] = [5000.0, 7000.0, 6000.0, 8000.0, 9000.0];

/// Labels plus one or more series, in the shape Chart.js expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// A single Chart.js series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
}

/// One color for the whole series, or one per data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Color {
    Single(String),
    PerPoint(Vec<String>),
}

fn cycle(palette: &[&str], len: usize) -> Vec<String> {
    palette
        .iter()
        .cycle()
        .take(len)
        .map(|c| (*c).to_owned())
        .collect()
}

/// Doughnut of item counts per category.
#[must_use]
pub fn items_chart(stats: &CategoryStats) -> ChartData {
    ChartData {
        labels: stats.labels().to_vec(),
        datasets: vec![ChartDataset {
            label: "Category on Platform".to_owned(),
            data: stats.data().to_vec(),
            background_color: Color::PerPoint(cycle(&ITEMS_PALETTE, stats.len())),
            border_color: Some(Color::Single("#fff".to_owned())),
            border_width: 2,
            fill: None,
            tension: None,
        }],
    }
}

/// Bar chart of users per role.
#[must_use]
pub fn user_roles_chart(histogram: &RoleHistogram) -> ChartData {
    #[allow(clippy::cast_precision_loss)]
    let data = histogram.iter().map(|e| e.count as f64).collect();

    ChartData {
        labels: histogram.roles().map(str::to_owned).collect(),
        datasets: vec![ChartDataset {
            label: "User Roles".to_owned(),
            data,
            background_color: Color::PerPoint(cycle(&ROLES_PALETTE, histogram.len())),
            border_color: None,
            border_width: 1,
            fill: None,
            tension: None,
        }],
    }
}

/// Line chart of monthly sales. The figures are static.
#[must_use]
pub fn monthly_sales_chart() -> ChartData {
    ChartData {
        labels: MONTHLY_SALES_LABELS.iter().map(|l| (*l).to_owned()).collect(),
        datasets: vec![ChartDataset {
            label: "Monthly Sales".to_owned(),
            data: MONTHLY_SALES_DATA.to_vec(),
            background_color: Color::Single("rgba(75, 192, 192, 0.2)".to_owned()),
            border_color: Some(Color::Single("rgba(75, 192, 192, 1)".to_owned())),
            border_width: 2,
            fill: Some(true),
            tension: Some(0.1),
        }],
    }
}

/// Every chart on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardCharts {
    pub items: ChartData,
    pub monthly_sales: ChartData,
    pub user_roles: ChartData,
}

impl DashboardCharts {
    #[must_use]
    pub fn build(stats: &CategoryStats, histogram: &RoleHistogram) -> Self {
        Self {
            items: items_chart(stats),
            monthly_sales: monthly_sales_chart(),
            user_roles: user_roles_chart(histogram),
        }
    }
}

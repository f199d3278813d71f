//! Per-category item statistics.

use serde::{Deserialize, Serialize};

/// Errors that can occur when building [`CategoryStats`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryStatsError {
    /// `labels` and `data` are not parallel arrays.
    #[error("category stats have {labels} labels but {data} data points")]
    LengthMismatch {
        /// Number of labels received.
        labels: usize,
        /// Number of data points received.
        data: usize,
    },
}

/// Category labels with their magnitudes.
///
/// `labels[i]` names the category whose magnitude is `data[i]`. The two
/// vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCategoryStats")]
pub struct CategoryStats {
    labels: Vec<String>,
    data: Vec<f64>,
}

#[derive(Deserialize)]
struct RawCategoryStats {
    labels: Vec<String>,
    data: Vec<f64>,
}

impl TryFrom<RawCategoryStats> for CategoryStats {
    type Error = CategoryStatsError;

    fn try_from(raw: RawCategoryStats) -> Result<Self, Self::Error> {
        Self::new(raw.labels, raw.data)
    }
}

/// Categories shown when live statistics are unavailable.
pub const FALLBACK_LABELS: [&str; 8] = [
    "Combo",
    "All-in-1",
    "Main Course",
    "Sandwiches",
    "Drinks",
    "Desserts",
    "Ice Creams",
    "Biryani",
];

/// Magnitudes paired with [`FALLBACK_LABELS`].
pub const FALLBACK_DATA: [f64; 8] = [30.0, 20.0, 50.0, 10.0, 70.0, 40.0, 30.0, 40.0];

impl CategoryStats {
    /// Build category stats from parallel arrays.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryStatsError::LengthMismatch`] if the arrays differ in
    /// length.
    pub fn new(labels: Vec<String>, data: Vec<f64>) -> Result<Self, CategoryStatsError> {
        if labels.len() != data.len() {
            return Err(CategoryStatsError::LengthMismatch {
                labels: labels.len(),
                data: data.len(),
            });
        }
        Ok(Self { labels, data })
    }

    /// The fixed 8-category dataset used until (or instead of) live data.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            labels: FALLBACK_LABELS.iter().map(|l| (*l).to_owned()).collect(),
            data: FALLBACK_DATA.to_vec(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for CategoryStats {
    fn default() -> Self {
        Self::fallback()
    }
}

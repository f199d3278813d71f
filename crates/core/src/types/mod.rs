//! Core types for Foodcourt.
//!
//! These mirror the JSON documents returned by the food-ordering backend.

pub mod category;
pub mod id;
pub mod lenient;
pub mod order;
pub mod user;

pub use category::{CategoryStats, CategoryStatsError, FALLBACK_DATA, FALLBACK_LABELS};
pub use id::*;
pub use order::{Order, OrderStatus};
pub use user::{Role, User};

//! Foodcourt Core - Shared types and dashboard aggregation.
//!
//! This crate provides the types used across all Foodcourt admin components:
//! - `admin` - Server-rendered administration dashboard
//! - `cli` - Command-line access to the same dashboard data
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Everything in [`aggregate`] is referentially transparent: the same
//! snapshot in always yields the same metrics out.
//!
//! # Modules
//!
//! - [`types`] - Users, orders, category statistics and their lenient decoding
//! - [`aggregate`] - Earnings, counts, role histogram and recent-order filtering

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod aggregate;
pub mod types;

pub use aggregate::*;
pub use types::*;

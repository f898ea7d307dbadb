//! Aggregation over task and goal snapshots.
//!
//! # Responsibility
//! - Compute completion rate, category breakdown and the 7-day completion
//!   trend.
//! - Build dashboard counters for presentation callers.
//!
//! # Invariants
//! - Aggregates never fail; malformed dates simply do not count.

pub mod aggregate;
pub mod summary;

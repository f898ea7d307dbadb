//! Task query engine.
//!
//! # Responsibility
//! - Classify tasks into temporal buckets relative to a reference date.
//! - Filter, sort and group task views for presentation callers.
//! - Derive the 7-day upcoming deadline list.
//!
//! # Invariants
//! - All functions are pure over a borrowed snapshot; none mutate records.
//! - A malformed date or time on one record never aborts a query; the
//!   record gets a documented substitute value and processing continues.

pub mod deadline;
pub mod filter;
pub mod group;
pub mod sort;
pub mod temporal;

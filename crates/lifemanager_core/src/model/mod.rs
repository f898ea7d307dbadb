//! Task and goal domain model.
//!
//! # Responsibility
//! - Define the canonical Task and Goal records owned by the record store.
//! - Validate creation candidates before they become records.
//!
//! # Invariants
//! - Every record is identified by a stable `Uuid` assigned at creation
//!   (or on first load for files written without ids).
//! - Tasks and goals never reference each other.

pub mod goal;
pub mod task;
pub mod validation;

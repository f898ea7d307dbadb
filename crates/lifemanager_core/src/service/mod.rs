//! Core use-case services.
//!
//! # Responsibility
//! - Own mutable record state behind validated mutation APIs.
//! - Keep callers decoupled from persistence details.

pub mod record_store;

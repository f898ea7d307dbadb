//! Persistence gateway contracts and implementations.
//!
//! # Responsibility
//! - Define the load/save contract the record store depends on.
//! - Keep file-format details (JSON layout, backups) inside this boundary.
//!
//! # Invariants
//! - The persisted layout is one JSON object with `tasks` and `goals` arrays.
//! - Absent fields decode to their documented defaults.

pub mod gateway;
pub mod json_file;
pub mod memory;

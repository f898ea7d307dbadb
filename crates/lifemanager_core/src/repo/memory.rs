//! In-memory record gateway.
//!
//! Used by callers that need a store without a backing file (previews,
//! tests). Saved state is kept as a cloned `RecordSet`.

use crate::model::goal::Goal;
use crate::model::task::Task;
use crate::repo::gateway::{GatewayResult, RecordGateway, RecordSet};

#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    records: RecordSet,
    save_count: usize,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the gateway so the next `load` returns `records`.
    pub fn with_records(records: RecordSet) -> Self {
        Self {
            records,
            save_count: 0,
        }
    }

    /// Last saved (or seeded) collections.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Number of successful saves since construction.
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl RecordGateway for MemoryGateway {
    fn load(&self) -> GatewayResult<RecordSet> {
        Ok(self.records.clone())
    }

    fn save(&mut self, tasks: &[Task], goals: &[Goal]) -> GatewayResult<()> {
        self.records = RecordSet {
            tasks: tasks.to_vec(),
            goals: goals.to_vec(),
        };
        self.save_count += 1;
        Ok(())
    }
}

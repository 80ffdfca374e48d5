// In memory implementation of the ChangeLog port.
//
// Purpose
// - Keep an inspectable journal of calendar mutations for tests and local development.
//
// Responsibilities
// - Number recorded changes from 1 in arrival order and stamp them with the recording time.
// - Export the journal as JSON.

use crate::core::changes::{CalendarChange, RecordedChange};
use crate::core::ports::ChangeLog;
use anyhow::Context;
use chrono::Utc;
use tracing::trace;

#[derive(Debug, Default)]
pub struct InMemoryChangeLog {
    rows: Vec<RecordedChange>,
}

impl InMemoryChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json(&self) -> anyhow::Result<serde_json::Value> {
        serde_json::to_value(&self.rows).context("failed to serialize the change log")
    }
}

impl ChangeLog for InMemoryChangeLog {
    fn record(&mut self, change: CalendarChange) {
        let sequence = self.rows.len() as u64 + 1;
        trace!(sequence, event_id = %change.event_id(), "change recorded");
        self.rows.push(RecordedChange {
            sequence,
            recorded_at: Utc::now(),
            change,
        });
    }

    fn changes(&self) -> &[RecordedChange] {
        &self.rows
    }
}

//! Fabric state snapshot
//!
//! The session-scoped application state holds one mutable binding to a
//! `FabricSnapshot`; every engine operation consumes the snapshot by
//! reference and hands back a fresh one. Nothing here is shared or
//! locked, so a failed operation cannot leave torn state behind.

use chrono::{DateTime, Utc};

use crate::engine::metrics::{self, InstitutionStats, StudentStats};
use crate::engine::transitions;
use crate::models::event::Event;
use crate::models::participation::ParticipationRecord;
use crate::utils::errors::Result;

/// Immutable snapshot of the event catalog and participation records
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FabricSnapshot {
    pub events: Vec<Event>,
    pub records: Vec<ParticipationRecord>,
}

impl FabricSnapshot {
    pub fn new(events: Vec<Event>, records: Vec<ParticipationRecord>) -> Self {
        Self { events, records }
    }

    /// Bootstrap a snapshot from the seeded collections
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_events(), crate::seed::seed_records())
    }

    /// Register a student for an event, yielding the successor snapshot
    pub fn register(&self, student_id: &str, event_id: &str) -> Result<FabricSnapshot> {
        let records = transitions::register(student_id, event_id, &self.records)?;
        Ok(self.with_records(records))
    }

    /// Check a student in to an event, yielding the successor snapshot
    pub fn check_in(
        &self,
        student_id: &str,
        event_id: &str,
        now: DateTime<Utc>,
    ) -> Result<FabricSnapshot> {
        let records = transitions::check_in(student_id, event_id, &self.records, now)?;
        Ok(self.with_records(records))
    }

    /// Certify a student's participation, yielding the successor snapshot
    pub fn certify(&self, student_id: &str, event_id: &str, hash: &str) -> Result<FabricSnapshot> {
        let records = transitions::certify(student_id, event_id, &self.records, hash)?;
        Ok(self.with_records(records))
    }

    /// Look up the event with the given id
    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    /// Whether the student already holds a record for the event
    pub fn is_registered(&self, student_id: &str, event_id: &str) -> bool {
        transitions::is_registered(student_id, event_id, &self.records)
    }

    pub fn per_student_stats(&self, student_id: &str) -> StudentStats {
        metrics::per_student_stats(student_id, &self.records)
    }

    pub fn institution_stats(&self) -> InstitutionStats {
        metrics::institution_stats(&self.events, &self.records)
    }

    fn with_records(&self, records: Vec<ParticipationRecord>) -> FabricSnapshot {
        FabricSnapshot {
            events: self.events.clone(),
            records,
        }
    }
}

//! Derived participation metrics
//!
//! Aggregates computed from a snapshot of events and records. All
//! functions here are total: unknown students and empty collections
//! produce zeros rather than errors.

use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::models::participation::{ParticipationRecord, ParticipationStatus};

/// Per-student participation counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentStats {
    /// Every record the student holds
    pub registered: usize,
    /// Records at Attended or beyond; a certified record was attended
    pub attended: usize,
    /// Records in the terminal Certified state
    pub certificates: usize,
}

/// Institution-wide oversight counters
///
/// These feed the reporting view only; nothing alerts or enforces based
/// on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionStats {
    /// Size of the whole event catalog, the figure the oversight view reports
    pub active_event_count: usize,
    /// Stricter count of events currently in Live status
    pub live_event_count: usize,
    /// Size of the participation record collection
    pub verified_log_count: usize,
    /// Share of records at Attended or beyond, in percent. 0.0 when there
    /// are no records.
    pub engagement_rate: f64,
}

/// Compute the participation counters for one student
pub fn per_student_stats(student_id: &str, records: &[ParticipationRecord]) -> StudentStats {
    let mine: Vec<_> = records
        .iter()
        .filter(|r| r.student_id == student_id)
        .collect();

    StudentStats {
        registered: mine.len(),
        attended: mine.iter().filter(|r| r.status.is_attended()).count(),
        certificates: mine
            .iter()
            .filter(|r| r.status == ParticipationStatus::Certified)
            .count(),
    }
}

/// Compute the institution-wide counters for the oversight view
pub fn institution_stats(events: &[Event], records: &[ParticipationRecord]) -> InstitutionStats {
    let attended = records.iter().filter(|r| r.status.is_attended()).count();
    let engagement_rate = if records.is_empty() {
        0.0
    } else {
        attended as f64 / records.len() as f64 * 100.0
    };

    InstitutionStats {
        active_event_count: events.len(),
        live_event_count: events.iter().filter(|e| e.is_live()).count(),
        verified_log_count: records.len(),
        engagement_rate,
    }
}

//! Participation record model
//!
//! The join entity capturing one student's relationship to one event. At
//! most one record exists per (student, event) pair, and its status only
//! ever moves forward: Registered -> Attended -> Certified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a participation record
///
/// The derived ordering mirrors the state machine: a record never moves to
/// a lower status, so monotonicity checks are plain comparisons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ParticipationStatus {
    Registered,
    Attended,
    Certified,
}

impl ParticipationStatus {
    /// Whether this status counts as having attended the event. Certified
    /// implies having attended.
    pub fn is_attended(&self) -> bool {
        *self >= ParticipationStatus::Attended
    }
}

impl std::fmt::Display for ParticipationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipationStatus::Registered => write!(f, "Registered"),
            ParticipationStatus::Attended => write!(f, "Attended"),
            ParticipationStatus::Certified => write!(f, "Certified"),
        }
    }
}

/// One student's participation in one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationRecord {
    pub id: String,
    pub student_id: String,
    pub event_id: String,
    pub status: ParticipationStatus,
    /// Set exactly when the record reaches Attended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<DateTime<Utc>>,
    /// Opaque verification token, set exactly when the record reaches
    /// Certified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_hash: Option<String>,
}

impl ParticipationRecord {
    /// Create a fresh registration for a (student, event) pair
    pub fn new_registration(id: String, student_id: String, event_id: String) -> Self {
        Self {
            id,
            student_id,
            event_id,
            status: ParticipationStatus::Registered,
            check_in_time: None,
            certificate_hash: None,
        }
    }

    /// Whether this record belongs to the given (student, event) pair
    pub fn matches(&self, student_id: &str, event_id: &str) -> bool {
        self.student_id == student_id && self.event_id == event_id
    }
}

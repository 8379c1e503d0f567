//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a campus event
///
/// Status follows the event's real-world timeline (Created -> Live ->
/// Completed) and is set externally; the engine never advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Created,
    Live,
    Completed,
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventStatus::Created => write!(f, "Created"),
            EventStatus::Live => write!(f, "Live"),
            EventStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Precedence tier of an event, lower numeral wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum EventPriority {
    Academic = 1,
    Club = 2,
    StudentRun = 3,
}

impl From<EventPriority> for u8 {
    fn from(priority: EventPriority) -> u8 {
        priority as u8
    }
}

impl TryFrom<u8> for EventPriority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(EventPriority::Academic),
            2 => Ok(EventPriority::Club),
            3 => Ok(EventPriority::StudentRun),
            other => Err(format!("Invalid event priority: {}", other)),
        }
    }
}

impl std::fmt::Display for EventPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventPriority::Academic => write!(f, "Academic"),
            EventPriority::Club => write!(f, "Club"),
            EventPriority::StudentRun => write!(f, "Student"),
        }
    }
}

/// A schedulable campus activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub venue: String,
    pub organizer_id: String,
    pub status: EventStatus,
    pub priority: EventPriority,
    /// Maximum registrations. Informational only, never enforced against
    /// the actual registration count.
    pub capacity: u32,
}

impl Event {
    pub fn is_live(&self) -> bool {
        self.status == EventStatus::Live
    }
}

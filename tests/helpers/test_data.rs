//! Test data helpers for creating test objects
//!
//! This module provides helper functions for creating test users, events,
//! participation records, and settings pointed at a mock backend.

use chrono::{DateTime, Utc};
use CampusFabric::config::Settings;
use CampusFabric::models::event::{Event, EventPriority, EventStatus};
use CampusFabric::models::participation::{ParticipationRecord, ParticipationStatus};
use CampusFabric::models::user::{User, UserRole};

/// Parse an RFC 3339 timestamp literal
pub fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("test timestamps are valid RFC 3339")
}

/// Helper function to create a test student
pub fn create_test_student(id: &str, name: &str, department: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@pccoe.edu", id),
        role: UserRole::Student,
        department: department.to_string(),
        year: Some(2),
    }
}

/// Helper function to create a test event
pub fn create_test_event(id: &str, title: &str, status: EventStatus) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: "A test engagement".to_string(),
        date: ts("2024-05-15T10:00:00Z"),
        venue: "Auditorium A".to_string(),
        organizer_id: "u2".to_string(),
        status,
        priority: EventPriority::Academic,
        capacity: 100,
    }
}

/// Helper function to create a test participation record with stamps
/// consistent with its status
pub fn create_test_record(
    id: &str,
    student_id: &str,
    event_id: &str,
    status: ParticipationStatus,
) -> ParticipationRecord {
    let mut record = ParticipationRecord::new_registration(
        id.to_string(),
        student_id.to_string(),
        event_id.to_string(),
    );
    record.status = status;
    if status.is_attended() {
        record.check_in_time = Some(ts("2024-04-10T14:05:00Z"));
    }
    if status == ParticipationStatus::Certified {
        record.certificate_hash = Some(format!("sha256-{}", id));
    }
    record
}

/// Settings pointed at a mock summarizer backend
pub fn settings_for_backend(api_url: &str, api_key: Option<&str>) -> Settings {
    let mut settings = Settings::default();
    settings.gemini.api_url = api_url.to_string();
    settings.gemini.api_key = api_key.map(|k| k.to_string());
    settings.gemini.timeout_seconds = 2;
    settings
}

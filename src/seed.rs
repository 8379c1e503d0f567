//! Bootstrap data
//!
//! The in-memory collections the session starts from. This is the only
//! "persisted state" the system has; it is lost on restart.

use chrono::{DateTime, Utc};

use crate::models::event::{Event, EventPriority, EventStatus};
use crate::models::participation::{ParticipationRecord, ParticipationStatus};
use crate::models::user::{User, UserRole};

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("seed timestamps are valid RFC 3339")
}

/// The fixed login roster
pub fn seed_roster() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Alex Rivera".to_string(),
            email: "alex@pccoe.edu".to_string(),
            role: UserRole::Student,
            department: "Comp Sci".to_string(),
            year: Some(3),
        },
        User {
            id: "u2".to_string(),
            name: "Sarah Chen".to_string(),
            email: "sarah@pccoe.edu".to_string(),
            role: UserRole::Organizer,
            department: "Robotics Club".to_string(),
            year: None,
        },
        User {
            id: "u3".to_string(),
            name: "Dr. James Wilson".to_string(),
            email: "wilson@pccoe.edu".to_string(),
            role: UserRole::Admin,
            department: "Dean Academics".to_string(),
            year: None,
        },
        User {
            id: "u4".to_string(),
            name: "Mia Wong".to_string(),
            email: "mia@pccoe.edu".to_string(),
            role: UserRole::Student,
            department: "Electronics".to_string(),
            year: Some(2),
        },
    ]
}

/// The seeded event catalog
pub fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "e1".to_string(),
            title: "Advanced AI Workshop".to_string(),
            description: "A hands-on deep dive into generative models and neural networks."
                .to_string(),
            date: ts("2024-05-15T10:00:00Z"),
            venue: "Auditorium A".to_string(),
            organizer_id: "u2".to_string(),
            status: EventStatus::Live,
            priority: EventPriority::Academic,
            capacity: 100,
        },
        Event {
            id: "e2".to_string(),
            title: "Hackathon 2024".to_string(),
            description: "48 hours of building solutions for local campus challenges.".to_string(),
            date: ts("2024-06-01T09:00:00Z"),
            venue: "Innovation Hub".to_string(),
            organizer_id: "u2".to_string(),
            status: EventStatus::Created,
            priority: EventPriority::Club,
            capacity: 250,
        },
        Event {
            id: "e3".to_string(),
            title: "Soft Skills Seminar".to_string(),
            description: "Improving communication and leadership for young engineers.".to_string(),
            date: ts("2024-04-10T14:00:00Z"),
            venue: "Room 302".to_string(),
            organizer_id: "u2".to_string(),
            status: EventStatus::Completed,
            priority: EventPriority::StudentRun,
            capacity: 50,
        },
    ]
}

/// The seeded participation records
///
/// Certified records exist only here; no engine caller certifies in the
/// current system.
pub fn seed_records() -> Vec<ParticipationRecord> {
    vec![
        ParticipationRecord {
            id: "r1".to_string(),
            student_id: "u1".to_string(),
            event_id: "e3".to_string(),
            status: ParticipationStatus::Certified,
            check_in_time: Some(ts("2024-04-10T14:05:00Z")),
            certificate_hash: Some("sha256-abcdef123456".to_string()),
        },
        ParticipationRecord {
            id: "r2".to_string(),
            student_id: "u1".to_string(),
            event_id: "e1".to_string(),
            status: ParticipationStatus::Registered,
            check_in_time: None,
            certificate_hash: None,
        },
        ParticipationRecord {
            id: "r3".to_string(),
            student_id: "u4".to_string(),
            event_id: "e3".to_string(),
            status: ParticipationStatus::Attended,
            check_in_time: Some(ts("2024-04-10T14:15:00Z")),
            certificate_hash: None,
        },
    ]
}

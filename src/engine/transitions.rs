//! Participation state transitions
//!
//! Pure functions that validate and apply the per-record state machine:
//! Registered -> Attended -> Certified. Every function takes the current
//! record collection as a read-only snapshot and returns a new collection;
//! the input is never mutated, so a rejected call leaves the caller's
//! state exactly as it was.

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::models::participation::{ParticipationRecord, ParticipationStatus};
use crate::utils::errors::{FabricError, Result};
use crate::utils::logging::log_participation_action;

/// Find the record for a (student, event) pair, if any
///
/// The collection invariant is at most one record per pair, so the first
/// match is the only match.
pub fn find_record<'a>(
    student_id: &str,
    event_id: &str,
    records: &'a [ParticipationRecord],
) -> Option<&'a ParticipationRecord> {
    records.iter().find(|r| r.matches(student_id, event_id))
}

/// Whether the student already holds a record for the event
pub fn is_registered(student_id: &str, event_id: &str, records: &[ParticipationRecord]) -> bool {
    find_record(student_id, event_id, records).is_some()
}

/// Register a student for an event
///
/// Appends a fresh record with status Registered and no stamps. Fails with
/// `DuplicateRegistration` if the pair already has a record; the second
/// call must neither add a record nor overwrite the existing one.
pub fn register(
    student_id: &str,
    event_id: &str,
    records: &[ParticipationRecord],
) -> Result<Vec<ParticipationRecord>> {
    debug!(student_id = %student_id, event_id = %event_id, "Registering student for event");

    if is_registered(student_id, event_id, records) {
        return Err(FabricError::DuplicateRegistration {
            student_id: student_id.to_string(),
            event_id: event_id.to_string(),
        });
    }

    let record = ParticipationRecord::new_registration(
        next_record_id(),
        student_id.to_string(),
        event_id.to_string(),
    );

    let mut next = records.to_vec();
    next.push(record);

    log_participation_action(student_id, event_id, "register", None);
    Ok(next)
}

/// Check a registered student in to an event
///
/// Moves the pair's record from Registered to Attended and stamps the
/// check-in time. Whether the event is currently live is gated by the
/// caller, not here.
pub fn check_in(
    student_id: &str,
    event_id: &str,
    records: &[ParticipationRecord],
    now: DateTime<Utc>,
) -> Result<Vec<ParticipationRecord>> {
    debug!(student_id = %student_id, event_id = %event_id, "Checking student in");

    let current = find_record(student_id, event_id, records).ok_or_else(|| {
        FabricError::RecordNotFound {
            student_id: student_id.to_string(),
            event_id: event_id.to_string(),
        }
    })?;

    if current.status != ParticipationStatus::Registered {
        return Err(FabricError::InvalidTransition {
            from: current.status,
            to: ParticipationStatus::Attended,
        });
    }

    let next = records
        .iter()
        .map(|r| {
            if r.matches(student_id, event_id) {
                let mut updated = r.clone();
                updated.status = ParticipationStatus::Attended;
                updated.check_in_time = Some(now);
                updated
            } else {
                r.clone()
            }
        })
        .collect();

    log_participation_action(student_id, event_id, "check_in", Some(&now.to_rfc3339()));
    Ok(next)
}

/// Certify an attended student's participation
///
/// Moves the pair's record from Attended to the terminal Certified state
/// and stores the verification token. Attendance is required first;
/// certifying a merely registered or already certified record is rejected.
pub fn certify(
    student_id: &str,
    event_id: &str,
    records: &[ParticipationRecord],
    hash: &str,
) -> Result<Vec<ParticipationRecord>> {
    debug!(student_id = %student_id, event_id = %event_id, "Certifying participation");

    let current = find_record(student_id, event_id, records).ok_or_else(|| {
        FabricError::RecordNotFound {
            student_id: student_id.to_string(),
            event_id: event_id.to_string(),
        }
    })?;

    if current.status != ParticipationStatus::Attended {
        return Err(FabricError::InvalidTransition {
            from: current.status,
            to: ParticipationStatus::Certified,
        });
    }

    let next = records
        .iter()
        .map(|r| {
            if r.matches(student_id, event_id) {
                let mut updated = r.clone();
                updated.status = ParticipationStatus::Certified;
                updated.certificate_hash = Some(hash.to_string());
                updated
            } else {
                r.clone()
            }
        })
        .collect();

    log_participation_action(student_id, event_id, "certify", None);
    Ok(next)
}

fn next_record_id() -> String {
    format!("r-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn ts(value: &str) -> DateTime<Utc> {
        value.parse().unwrap()
    }

    #[test]
    fn test_register_creates_fresh_record() {
        let records = register("u1", "e1", &[]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, ParticipationStatus::Registered);
        assert!(records[0].check_in_time.is_none());
        assert!(records[0].certificate_hash.is_none());
        assert!(records[0].id.starts_with("r-"));
    }

    #[test]
    fn test_register_twice_is_rejected_without_applying() {
        let records = register("u1", "e1", &[]).unwrap();
        let result = register("u1", "e1", &records);
        assert_matches!(
            result,
            Err(FabricError::DuplicateRegistration { ref student_id, ref event_id })
                if student_id == "u1" && event_id == "e1"
        );
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_check_in_stamps_provided_time() {
        let records = register("u1", "e1", &[]).unwrap();
        let now = ts("2024-05-15T10:05:00Z");
        let records = check_in("u1", "e1", &records, now).unwrap();
        assert_eq!(records[0].status, ParticipationStatus::Attended);
        assert_eq!(records[0].check_in_time, Some(now));
    }

    #[test]
    fn test_check_in_without_registration_fails() {
        let result = check_in("u1", "e1", &[], ts("2024-05-15T10:05:00Z"));
        assert_matches!(result, Err(FabricError::RecordNotFound { .. }));
    }

    #[test]
    fn test_check_in_is_not_idempotent() {
        let records = register("u1", "e1", &[]).unwrap();
        let now = ts("2024-05-15T10:05:00Z");
        let records = check_in("u1", "e1", &records, now).unwrap();

        let result = check_in("u1", "e1", &records, ts("2024-05-15T11:00:00Z"));
        assert_matches!(
            result,
            Err(FabricError::InvalidTransition {
                from: ParticipationStatus::Attended,
                to: ParticipationStatus::Attended,
            })
        );
        // The rejected call left the snapshot untouched
        assert_eq!(records[0].check_in_time, Some(now));
    }

    #[test]
    fn test_certify_requires_attendance() {
        let records = register("u1", "e1", &[]).unwrap();
        let result = certify("u1", "e1", &records, "sha256-xyz");
        assert_matches!(
            result,
            Err(FabricError::InvalidTransition {
                from: ParticipationStatus::Registered,
                to: ParticipationStatus::Certified,
            })
        );
    }

    #[test]
    fn test_certify_is_terminal() {
        let records = register("u1", "e1", &[]).unwrap();
        let records = check_in("u1", "e1", &records, ts("2024-05-15T10:05:00Z")).unwrap();
        let records = certify("u1", "e1", &records, "sha256-xyz").unwrap();

        let result = certify("u1", "e1", &records, "sha256-other");
        assert_matches!(
            result,
            Err(FabricError::InvalidTransition {
                from: ParticipationStatus::Certified,
                to: ParticipationStatus::Certified,
            })
        );
        assert_eq!(records[0].certificate_hash.as_deref(), Some("sha256-xyz"));
    }

    #[test]
    fn test_full_lifecycle_round_trip() {
        let records = register("u1", "e1", &[]).unwrap();
        assert_eq!(records[0].status, ParticipationStatus::Registered);

        let now = ts("2024-05-15T10:05:00Z");
        let records = check_in("u1", "e1", &records, now).unwrap();
        assert_eq!(records[0].status, ParticipationStatus::Attended);
        assert_eq!(records[0].check_in_time, Some(now));

        let records = certify("u1", "e1", &records, "sha256-xyz").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, ParticipationStatus::Certified);
        assert_eq!(records[0].check_in_time, Some(now));
        assert_eq!(records[0].certificate_hash.as_deref(), Some("sha256-xyz"));
    }

    #[test]
    fn test_transitions_only_touch_the_matching_pair() {
        let records = register("u1", "e1", &[]).unwrap();
        let records = register("u1", "e2", &records).unwrap();
        let records = register("u4", "e1", &records).unwrap();

        let records = check_in("u1", "e1", &records, ts("2024-05-15T10:05:00Z")).unwrap();

        let untouched: Vec<_> = records
            .iter()
            .filter(|r| !r.matches("u1", "e1"))
            .collect();
        assert_eq!(untouched.len(), 2);
        assert!(untouched
            .iter()
            .all(|r| r.status == ParticipationStatus::Registered));
    }
}

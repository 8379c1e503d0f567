//! Participation state engine
//!
//! Pure transformation layer over the session's event and record
//! collections. The engine owns no state: transitions and metrics operate
//! on snapshots passed in by the caller and return new values.

pub mod metrics;
pub mod snapshot;
pub mod transitions;

pub use metrics::{institution_stats, per_student_stats, InstitutionStats, StudentStats};
pub use snapshot::FabricSnapshot;
pub use transitions::{certify, check_in, find_record, is_registered, register};

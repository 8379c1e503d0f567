//! User model

use serde::{Deserialize, Serialize};

/// Role a user holds within the fabric
///
/// The role decides which operations a user is offered (students register
/// and check in, organizers own events, admins observe aggregates). The
/// engine itself does not enforce this; routing does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Student,
    Organizer,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "Student"),
            UserRole::Organizer => write!(f, "Organizer"),
            UserRole::Admin => write!(f, "Admin"),
        }
    }
}

/// An identity participating in the fabric
///
/// Users are created at login, either picked from the seeded roster or
/// self-declared through the portal form, and stay immutable for the
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub department: String,
    /// Academic year, meaningful only for students
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u8>,
}

impl User {
    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}

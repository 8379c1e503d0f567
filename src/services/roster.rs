//! Roster service implementation
//!
//! Session login against the fixed roster plus the self-declared portal
//! form. Identity is self-asserted by design: nothing here verifies names
//! or emails, it only shapes them into a `User` for the session.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::user::{User, UserRole};
use crate::utils::errors::{FabricError, Result};
use crate::utils::logging::log_login;

const DEFAULT_DEPARTMENT: &str = "General Engineering";

/// Roster service for resolving session identities
#[derive(Debug, Clone)]
pub struct RosterService {
    roster: Vec<User>,
}

impl RosterService {
    /// Create a new RosterService over the given roster
    pub fn new(roster: Vec<User>) -> Self {
        Self { roster }
    }

    /// Create a RosterService over the seeded roster
    pub fn seeded() -> Self {
        Self::new(crate::seed::seed_roster())
    }

    /// The users offered on the login screen
    pub fn roster(&self) -> &[User] {
        &self.roster
    }

    /// Log in as an existing roster member
    pub fn login(&self, user_id: &str) -> Result<User> {
        debug!(user_id = %user_id, "Resolving roster login");

        let user = self
            .roster
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| FabricError::UserNotFound {
                user_id: user_id.to_string(),
            })?;

        log_login(&user.id, &user.role.to_string());
        Ok(user)
    }

    /// Log in with a self-declared identity from the portal form
    ///
    /// Both name and email are required; students start at year 1.
    pub fn self_declared_login(&self, name: &str, email: &str, role: UserRole) -> Result<User> {
        let name = name.trim();
        let email = email.trim();

        if name.is_empty() || email.is_empty() {
            warn!("Self-declared login rejected: missing name or email");
            return Err(FabricError::InvalidInput(
                "Official identification requires both name and email".to_string(),
            ));
        }

        let user = User {
            id: format!("u-custom-{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            email: email.to_string(),
            role,
            department: DEFAULT_DEPARTMENT.to_string(),
            year: if role == UserRole::Student { Some(1) } else { None },
        };

        info!(user_id = %user.id, role = %user.role, "Self-declared session login");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_roster_login_finds_member() {
        let service = RosterService::seeded();
        let user = service.login("u2").unwrap();
        assert_eq!(user.name, "Sarah Chen");
        assert_eq!(user.role, UserRole::Organizer);
    }

    #[test]
    fn test_roster_login_unknown_user() {
        let service = RosterService::seeded();
        let result = service.login("u99");
        assert_matches!(result, Err(FabricError::UserNotFound { ref user_id }) if user_id == "u99");
    }

    #[test]
    fn test_self_declared_student_starts_at_year_one() {
        let service = RosterService::seeded();
        let user = service
            .self_declared_login("Priya Nair", "priya@pccoe.edu", UserRole::Student)
            .unwrap();
        assert!(user.id.starts_with("u-custom-"));
        assert_eq!(user.department, DEFAULT_DEPARTMENT);
        assert_eq!(user.year, Some(1));
    }

    #[test]
    fn test_self_declared_organizer_has_no_year() {
        let service = RosterService::seeded();
        let user = service
            .self_declared_login("Sam Okafor", "sam@pccoe.edu", UserRole::Organizer)
            .unwrap();
        assert_eq!(user.year, None);
    }

    #[test]
    fn test_self_declared_login_requires_name_and_email() {
        let service = RosterService::seeded();
        assert_matches!(
            service.self_declared_login("", "a@pccoe.edu", UserRole::Student),
            Err(FabricError::InvalidInput(_))
        );
        assert_matches!(
            service.self_declared_login("Ana", "   ", UserRole::Student),
            Err(FabricError::InvalidInput(_))
        );
    }
}

//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check constraint in
//! `20250101000002_create_users.sql`.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PM: &str = "pm";
pub const ROLE_USER: &str = "user";

/// Role assigned to self-registered users.
pub const DEFAULT_ROLE: &str = ROLE_USER;

/// All valid role names.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_PM, ROLE_USER];

/// Validate that a role name is one of [`VALID_ROLES`].
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        for role in VALID_ROLES {
            assert!(validate_role(role).is_ok());
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(validate_role("owner").is_err());
        assert!(validate_role("Admin").is_err());
    }
}

//! User model for authentication
//!
//! Stores login accounts with argon2 password hashes. Session/cookie
//! transport is the presentation tier's concern; this crate only provides the
//! identity and role contract.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Access role for a login account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Employee,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Employee => write!(f, "employee"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "employee" => Ok(UserRole::Employee),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// A login account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Login username (unique)
    pub username: String,
    /// Argon2 PHC-format password hash
    pub password_hash: String,
    /// Access role
    pub role: UserRole,
    /// Display name
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_parse() {
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("Employee").unwrap(), UserRole::Employee);
        assert!(UserRole::from_str("manager").is_err());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
    }
}

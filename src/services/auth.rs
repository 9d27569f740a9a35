//! Authentication service
//!
//! Login accounts with argon2 password hashing. This crate provides only the
//! identity/role contract; session transport (cookies, tokens) belongs to the
//! presentation tier.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};

use crate::error::{GarageError, GarageResult};
use crate::models::{User, UserId, UserRole};
use crate::storage::Storage;

/// Identity of a successfully authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    pub role: UserRole,
}

/// Hash a password into PHC string format
pub fn hash_password(password: &str) -> GarageResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| GarageError::Auth(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC hash
pub fn verify_password(password: &str, stored_hash: &str) -> GarageResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| GarageError::Auth(format!("Invalid stored hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Service for login accounts
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a login account with a unique username
    pub fn create_user(
        &self,
        username: impl Into<String>,
        password: &str,
        role: UserRole,
        name: impl Into<String>,
    ) -> GarageResult<User> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(GarageError::Validation("Username cannot be empty".to_string()));
        }
        if password.len() < 6 {
            return Err(GarageError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        if self.storage.users.find_by_username(&username)?.is_some() {
            return Err(GarageError::Duplicate {
                entity_type: "User",
                identifier: username,
            });
        }

        let user = User {
            id: UserId::new(),
            username,
            password_hash: hash_password(password)?,
            role,
            name: name.into(),
        };

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;
        Ok(user)
    }

    /// Authenticate a user for the expected role
    ///
    /// Wrong username and wrong password produce the same error message so
    /// usernames cannot be probed.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        expected_role: UserRole,
    ) -> GarageResult<Session> {
        let invalid = || GarageError::Auth("Invalid username or password".to_string());

        let user = self
            .storage
            .users
            .find_by_username(username)?
            .ok_or_else(invalid)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(invalid());
        }

        if user.role != expected_role {
            return Err(GarageError::Auth(format!(
                "This account is not authorized for {} login",
                expected_role
            )));
        }

        Ok(Session {
            user_id: user.id,
            username: user.username,
            name: user.name,
            role: user.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GaragePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GaragePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("admin123").unwrap();
        assert!(verify_password("admin123", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_create_and_login() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.create_user("admin", "admin123", UserRole::Admin, "Admin User")
            .unwrap();

        let session = auth.login("admin", "admin123", UserRole::Admin).unwrap();
        assert_eq!(session.username, "admin");
        assert_eq!(session.role, UserRole::Admin);
    }

    #[test]
    fn test_login_wrong_password() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.create_user("admin", "admin123", UserRole::Admin, "Admin User")
            .unwrap();

        let err = auth.login("admin", "nope", UserRole::Admin).unwrap_err();
        assert!(matches!(err, GarageError::Auth(_)));
    }

    #[test]
    fn test_login_role_mismatch() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.create_user("employee", "emp123", UserRole::Employee, "Employee User")
            .unwrap();

        let err = auth.login("employee", "emp123", UserRole::Admin).unwrap_err();
        assert!(matches!(err, GarageError::Auth(_)));
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        auth.create_user("admin", "admin123", UserRole::Admin, "Admin User")
            .unwrap();
        let err = auth
            .create_user("admin", "other66", UserRole::Employee, "Other")
            .unwrap_err();
        assert!(matches!(err, GarageError::Duplicate { .. }));
    }

    #[test]
    fn test_short_password_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let auth = AuthService::new(&storage);

        let err = auth
            .create_user("admin", "abc", UserRole::Admin, "Admin User")
            .unwrap_err();
        assert!(err.is_validation());
    }
}

//! User repository for JSON storage
//!
//! Holds login accounts in users.json. Usernames are unique.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GarageError;
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UserData {
    pub users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), GarageError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for user in file_data.users {
            data.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));

        let file_data = UserData { users };
        write_json_atomic(&self.path, &file_data)
    }

    /// Find a user by username
    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.values().find(|u| u.username == username).cloned())
    }

    /// Get all users sorted by username
    pub fn get_all(&self) -> Result<Vec<User>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> Result<(), GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(user.id, user);
        Ok(())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

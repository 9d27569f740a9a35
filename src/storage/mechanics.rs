//! Mechanic repository for JSON storage
//!
//! Holds the workshop's staff roster in mechanics.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GarageError;
use crate::models::{Mechanic, MechanicId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable mechanic data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct MechanicData {
    pub mechanics: Vec<Mechanic>,
}

/// Repository for mechanic persistence
pub struct MechanicRepository {
    path: PathBuf,
    data: RwLock<HashMap<MechanicId, Mechanic>>,
}

impl MechanicRepository {
    /// Create a new mechanic repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load mechanics from disk
    pub fn load(&self) -> Result<(), GarageError> {
        let file_data: MechanicData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for mechanic in file_data.mechanics {
            data.insert(mechanic.id, mechanic);
        }

        Ok(())
    }

    /// Save mechanics to disk
    pub fn save(&self) -> Result<(), GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut mechanics: Vec<_> = data.values().cloned().collect();
        mechanics.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = MechanicData { mechanics };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get all mechanics, sorted by name
    pub fn get_all(&self) -> Result<Vec<Mechanic>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut mechanics: Vec<_> = data.values().cloned().collect();
        mechanics.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(mechanics)
    }

    /// Insert or update a mechanic
    pub fn upsert(&self, mechanic: Mechanic) -> Result<(), GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(mechanic.id, mechanic);
        Ok(())
    }

    /// Count mechanics
    pub fn count(&self) -> Result<usize, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MechanicRole, MechanicStatus};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_save_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mechanics.json");

        let repo = MechanicRepository::new(path.clone());
        repo.load().unwrap();

        repo.upsert(Mechanic {
            id: MechanicId::new(),
            name: "Vikram Singh".to_string(),
            phone: "9876543003".to_string(),
            role: MechanicRole::Specialist,
            specialization: "Brake & Suspension".to_string(),
            join_date: NaiveDate::from_ymd_opt(2023, 1, 20).unwrap(),
            status: MechanicStatus::Active,
            daily_wage: 900.0,
        })
        .unwrap();
        repo.save().unwrap();

        let repo2 = MechanicRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 1);
        assert_eq!(repo2.get_all().unwrap()[0].name, "Vikram Singh");
    }
}

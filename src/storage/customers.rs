//! Customer repository for JSON storage
//!
//! Manages the Customer -> Vehicle -> ServiceRecord hierarchy in
//! customers.json. Service records are appended to a vehicle's history and
//! never rewritten; the on-disk history stays an insertion-order ledger.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GarageError;
use crate::models::{Customer, CustomerId, ServiceRecord, Vehicle, VehicleId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable customer data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CustomerData {
    pub customers: Vec<Customer>,
}

/// Repository for customer persistence
pub struct CustomerRepository {
    path: PathBuf,
    data: RwLock<HashMap<CustomerId, Customer>>,
}

impl CustomerRepository {
    /// Create a new customer repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load customers from disk
    pub fn load(&self) -> Result<(), GarageError> {
        let file_data: CustomerData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for customer in file_data.customers {
            data.insert(customer.id, customer);
        }

        Ok(())
    }

    /// Save customers to disk
    pub fn save(&self) -> Result<(), GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut customers: Vec<_> = data.values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = CustomerData { customers };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a customer by ID
    pub fn get(&self, id: CustomerId) -> Result<Option<Customer>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all customers, sorted by name
    pub fn get_all(&self) -> Result<Vec<Customer>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut customers: Vec<_> = data.values().cloned().collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }

    /// Find a customer by exact name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<Customer>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Insert or update a customer
    pub fn upsert(&self, customer: Customer) -> Result<(), GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(customer.id, customer);
        Ok(())
    }

    /// Delete a customer
    pub fn delete(&self, id: CustomerId) -> Result<bool, GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count customers
    pub fn count(&self) -> Result<usize, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Register an additional vehicle for a customer
    pub fn add_vehicle(&self, customer_id: CustomerId, vehicle: Vehicle) -> Result<(), GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let customer = data
            .get_mut(&customer_id)
            .ok_or_else(|| GarageError::customer_not_found(customer_id.to_string()))?;

        customer.vehicles.push(vehicle);
        Ok(())
    }

    /// Append a service record to a vehicle's history (ledger append)
    pub fn append_service_record(
        &self,
        customer_id: CustomerId,
        vehicle_id: VehicleId,
        record: ServiceRecord,
    ) -> Result<(), GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let customer = data
            .get_mut(&customer_id)
            .ok_or_else(|| GarageError::customer_not_found(customer_id.to_string()))?;

        let vehicle = customer
            .find_vehicle_mut(vehicle_id)
            .ok_or_else(|| GarageError::vehicle_not_found(vehicle_id.to_string()))?;

        vehicle.service_history.push(record);
        Ok(())
    }
}

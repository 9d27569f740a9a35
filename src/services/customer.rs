//! Customer service
//!
//! Registration and maintenance of customers and their vehicles. Service
//! history is written only by the service job coordinator, never here.

use chrono::{DateTime, Utc};

use crate::error::{GarageError, GarageResult};
use crate::models::{Customer, CustomerId, Vehicle, VehicleId};
use crate::storage::Storage;

/// Details for registering a vehicle
#[derive(Debug, Clone)]
pub struct VehicleDetails {
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub model_name: String,
}

/// Service for customer management
pub struct CustomerService<'a> {
    storage: &'a Storage,
}

impl<'a> CustomerService<'a> {
    /// Create a new customer service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new customer with their first vehicle
    pub fn register_customer(
        &self,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: Option<String>,
        vehicle: VehicleDetails,
        now: DateTime<Utc>,
    ) -> GarageResult<Customer> {
        let mut customer = Customer::new(name, phone, email);
        customer.validate().map_err(GarageError::Validation)?;

        customer.vehicles.push(Vehicle::new(
            vehicle.vehicle_number,
            vehicle.vehicle_type,
            vehicle.model_name,
            now,
        ));

        self.storage.customers.upsert(customer.clone())?;
        self.storage.customers.save()?;
        Ok(customer)
    }

    /// Register an additional vehicle for an existing customer
    pub fn add_vehicle(
        &self,
        customer_id: CustomerId,
        details: VehicleDetails,
        now: DateTime<Utc>,
    ) -> GarageResult<VehicleId> {
        let vehicle = Vehicle::new(
            details.vehicle_number,
            details.vehicle_type,
            details.model_name,
            now,
        );
        let vehicle_id = vehicle.id;

        self.storage.customers.add_vehicle(customer_id, vehicle)?;
        self.storage.customers.save()?;
        Ok(vehicle_id)
    }

    /// Update a customer's contact details (vehicles and history untouched)
    pub fn update_customer(
        &self,
        customer_id: CustomerId,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> GarageResult<Customer> {
        let mut customer = self
            .storage
            .customers
            .get(customer_id)?
            .ok_or_else(|| GarageError::customer_not_found(customer_id.to_string()))?;

        if let Some(name) = name {
            customer.name = name;
        }
        if let Some(phone) = phone {
            customer.phone = phone;
        }
        if let Some(email) = email {
            customer.email = Some(email);
        }

        customer.validate().map_err(GarageError::Validation)?;

        self.storage.customers.upsert(customer.clone())?;
        self.storage.customers.save()?;
        Ok(customer)
    }

    /// Delete a customer and all their vehicles/history
    pub fn delete_customer(&self, customer_id: CustomerId) -> GarageResult<()> {
        if !self.storage.customers.delete(customer_id)? {
            return Err(GarageError::customer_not_found(customer_id.to_string()));
        }
        self.storage.customers.save()?;
        Ok(())
    }

    /// Get a customer by id
    pub fn get(&self, customer_id: CustomerId) -> GarageResult<Customer> {
        self.storage
            .customers
            .get(customer_id)?
            .ok_or_else(|| GarageError::customer_not_found(customer_id.to_string()))
    }

    /// List all customers
    pub fn list(&self) -> GarageResult<Vec<Customer>> {
        self.storage.customers.get_all()
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

    fn verna() -> VehicleDetails {
        VehicleDetails {
            vehicle_number: "KA-01-AB-1234".to_string(),
            vehicle_type: "Car - Sedan".to_string(),
            model_name: "Hyundai Verna".to_string(),
        }
    }

    #[test]
    fn test_register_customer_with_first_vehicle() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        let customer = service
            .register_customer("Rahul Sharma", "9876543210", None, verna(), Utc::now())
            .unwrap();

        assert_eq!(customer.vehicles.len(), 1);
        assert!(customer.vehicles[0].service_history.is_empty());

        let fetched = service.get(customer.id).unwrap();
        assert_eq!(fetched.vehicles[0].vehicle_number, "KA-01-AB-1234");
    }

    #[test]
    fn test_register_rejects_blank_name() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        let err = service
            .register_customer("  ", "9876543210", None, verna(), Utc::now())
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_vehicle() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        let customer = service
            .register_customer("Rahul Sharma", "9876543210", None, verna(), Utc::now())
            .unwrap();

        let second = VehicleDetails {
            vehicle_number: "KA-05-XY-9999".to_string(),
            vehicle_type: "Motorcycle".to_string(),
            model_name: "Honda CB350".to_string(),
        };
        service.add_vehicle(customer.id, second, Utc::now()).unwrap();

        assert_eq!(service.get(customer.id).unwrap().vehicles.len(), 2);
    }

    #[test]
    fn test_update_customer_contact_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        let customer = service
            .register_customer("Rahul Sharma", "9876543210", None, verna(), Utc::now())
            .unwrap();

        let updated = service
            .update_customer(customer.id, None, Some("9000000000".to_string()), None)
            .unwrap();

        assert_eq!(updated.name, "Rahul Sharma");
        assert_eq!(updated.phone, "9000000000");
        assert_eq!(updated.vehicles.len(), 1);
    }

    #[test]
    fn test_delete_customer() {
        let (_temp_dir, storage) = create_test_storage();
        let service = CustomerService::new(&storage);

        let customer = service
            .register_customer("Rahul Sharma", "9876543210", None, verna(), Utc::now())
            .unwrap();
        service.delete_customer(customer.id).unwrap();

        assert!(service.get(customer.id).unwrap_err().is_not_found());
        assert!(service.delete_customer(customer.id).unwrap_err().is_not_found());
    }
}

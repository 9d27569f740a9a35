//! Customer model
//!
//! Customers own their vehicles exclusively; vehicle order is registration
//! order.

use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, VehicleId};
use super::vehicle::Vehicle;

/// A workshop customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    /// Customer name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Optional email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Vehicles in registration order
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
}

impl Customer {
    /// Create a new customer with a fresh id and no vehicles
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            phone: phone.into(),
            email,
            vehicles: Vec::new(),
        }
    }

    /// Find a vehicle by id
    pub fn find_vehicle(&self, vehicle_id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == vehicle_id)
    }

    /// Find a vehicle by id, mutably
    pub fn find_vehicle_mut(&mut self, vehicle_id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == vehicle_id)
    }

    /// Total number of recorded services across all vehicles
    pub fn service_count(&self) -> usize {
        self.vehicles.iter().map(|v| v.service_history.len()).sum()
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Customer name cannot be empty".to_string());
        }
        if self.phone.trim().is_empty() {
            return Err("Customer phone cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_find_vehicle() {
        let mut customer = Customer::new("Rahul Sharma", "9876543210", None);
        let vehicle = Vehicle::new("KA-01-AB-1234", "Car - Sedan", "Hyundai Verna", Utc::now());
        let vehicle_id = vehicle.id;
        customer.vehicles.push(vehicle);

        assert!(customer.find_vehicle(vehicle_id).is_some());
        assert!(customer.find_vehicle(VehicleId::new()).is_none());
    }

    #[test]
    fn test_validate() {
        let customer = Customer::new("", "9876543210", None);
        assert!(customer.validate().is_err());

        let customer = Customer::new("Rahul Sharma", "9876543210", Some("rahul@example.com".into()));
        assert!(customer.validate().is_ok());
    }
}

//! Vehicle model
//!
//! Vehicles are owned exclusively by a customer and carry the service history
//! ledger. The history vector preserves insertion order on disk; consumers
//! that need "most recent service" use [`Vehicle::last_service`], which picks
//! the record with the latest date so backdated entries cannot mislead the
//! due-for-service projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::VehicleId;
use super::service_record::ServiceRecord;

/// A customer's vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Unique identifier
    pub id: VehicleId,
    /// License plate (customer-scoped identity, not globally unique)
    pub vehicle_number: String,
    /// Vehicle type ("Car - Sedan", "Motorcycle", ...)
    pub vehicle_type: String,
    /// Model name
    pub model_name: String,
    /// When the vehicle was registered with the workshop
    pub registration_date: DateTime<Utc>,
    /// Append-only service ledger
    #[serde(default)]
    pub service_history: Vec<ServiceRecord>,
}

impl Vehicle {
    /// Create a new vehicle with a fresh id and empty history
    pub fn new(
        vehicle_number: impl Into<String>,
        vehicle_type: impl Into<String>,
        model_name: impl Into<String>,
        registration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            vehicle_number: vehicle_number.into(),
            vehicle_type: vehicle_type.into(),
            model_name: model_name.into(),
            registration_date,
            service_history: Vec::new(),
        }
    }

    /// The most recent service by date, if any
    pub fn last_service(&self) -> Option<&ServiceRecord> {
        self.service_history.iter().max_by_key(|r| r.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::ServiceRecordId;
    use chrono::TimeZone;

    fn record_on(date: DateTime<Utc>, charge: f64) -> ServiceRecord {
        ServiceRecord {
            id: ServiceRecordId::new(),
            date,
            service_type: "General Service".to_string(),
            mechanic: String::new(),
            parts_used: Vec::new(),
            service_charge: charge,
            gst_amount: charge * 0.18,
            total_cost: charge * 1.18,
            notes: String::new(),
        }
    }

    #[test]
    fn test_last_service_empty_history() {
        let vehicle = Vehicle::new("KA-01-AB-1234", "Car - Sedan", "Hyundai Verna", Utc::now());
        assert!(vehicle.last_service().is_none());
    }

    #[test]
    fn test_last_service_picks_latest_date_not_last_element() {
        let mut vehicle = Vehicle::new("KA-01-AB-1234", "Car - Sedan", "Hyundai Verna", Utc::now());
        let newer = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();

        vehicle.service_history.push(record_on(newer, 1000.0));
        // Backdated record appended after the newer one
        vehicle.service_history.push(record_on(older, 500.0));

        let last = vehicle.last_service().unwrap();
        assert_eq!(last.date, newer);
    }
}

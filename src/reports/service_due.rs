//! Service Due Report
//!
//! Flags vehicles that are overdue for maintenance or coming due within the
//! alert window. A vehicle with no service history is never flagged.

use chrono::{DateTime, Utc};

use crate::error::GarageResult;
use crate::models::{CustomerId, VehicleId};
use crate::storage::Storage;

/// Fixed maintenance interval in days
pub const SERVICE_CYCLE_DAYS: i64 = 150;

/// Vehicles within this many days of their due date are flagged as due soon
pub const DUE_SOON_WINDOW_DAYS: i64 = 10;

/// Due classification for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Past the service cycle; 0 means due exactly today
    Overdue { days_overdue: i64 },
    /// Within the alert window before the due date
    DueSoon { days_left: i64 },
}

/// One flagged vehicle
#[derive(Debug, Clone)]
pub struct VehicleDueEntry {
    /// Owning customer
    pub customer_id: CustomerId,
    /// Customer name
    pub customer_name: String,
    /// Flagged vehicle
    pub vehicle_id: VehicleId,
    /// License plate
    pub vehicle_number: String,
    /// Model name
    pub model_name: String,
    /// Date of the most recent service
    pub last_service_date: DateTime<Utc>,
    /// Whole days since the most recent service
    pub days_since_last: i64,
    /// Classification
    pub status: DueStatus,
}

/// Classify a vehicle from whole days since its last service
pub fn classify(days_since_last: i64) -> Option<DueStatus> {
    let days_left = SERVICE_CYCLE_DAYS - days_since_last;
    if days_left <= 0 {
        Some(DueStatus::Overdue {
            days_overdue: -days_left,
        })
    } else if days_left <= DUE_SOON_WINDOW_DAYS {
        Some(DueStatus::DueSoon { days_left })
    } else {
        None
    }
}

/// Service Due Report
#[derive(Debug, Clone)]
pub struct ServiceDueReport {
    /// Flagged vehicles, most overdue first
    pub entries: Vec<VehicleDueEntry>,
}

impl ServiceDueReport {
    /// Generate the report against a reference instant
    pub fn generate(storage: &Storage, now: DateTime<Utc>) -> GarageResult<Self> {
        let mut entries = Vec::new();

        for customer in storage.customers.get_all()? {
            for vehicle in &customer.vehicles {
                let last = match vehicle.last_service() {
                    Some(record) => record,
                    None => continue,
                };

                let days_since_last = (now - last.date).num_days();
                if let Some(status) = classify(days_since_last) {
                    entries.push(VehicleDueEntry {
                        customer_id: customer.id,
                        customer_name: customer.name.clone(),
                        vehicle_id: vehicle.id,
                        vehicle_number: vehicle.vehicle_number.clone(),
                        model_name: vehicle.model_name.clone(),
                        last_service_date: last.date,
                        days_since_last,
                        status,
                    });
                }
            }
        }

        // Most overdue first, then soonest-due
        entries.sort_by(|a, b| b.days_since_last.cmp(&a.days_since_last));

        Ok(Self { entries })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Service Due Report\n");
        output.push_str(&"=".repeat(78));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No vehicles due for service.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:<16} {:<18} {:<12} {}\n",
            "Customer", "Vehicle No.", "Model", "Last Service", "Status"
        ));
        output.push_str(&"-".repeat(78));
        output.push('\n');

        for entry in &self.entries {
            let status = match entry.status {
                DueStatus::Overdue { days_overdue } => {
                    format!("OVERDUE by {} days", days_overdue)
                }
                DueStatus::DueSoon { days_left } => format!("Due in {} days", days_left),
            };
            output.push_str(&format!(
                "{:<20} {:<16} {:<18} {:<12} {}\n",
                entry.customer_name,
                entry.vehicle_number,
                entry.model_name,
                entry.last_service_date.format("%Y-%m-%d"),
                status
            ));
        }

        output
    }
}

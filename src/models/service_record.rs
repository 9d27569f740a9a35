//! Service record model
//!
//! A service record is one completed workshop visit. Records are an
//! append-only ledger on the owning vehicle: once written they are never
//! updated or deleted. Part lines snapshot the unit price at service time so
//! later price edits do not rewrite history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ProductId, ServiceRecordId};

/// A part line consumed by a service, with the price frozen at service time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartUsed {
    /// Product that was consumed
    pub product_id: ProductId,
    /// Units consumed
    pub quantity: u32,
    /// Unit price at the time of service
    pub cost_at_service: f64,
    /// Product name at the time of service
    pub name: String,
}

impl PartUsed {
    /// Cost of this line (snapshot price x quantity)
    pub fn line_cost(&self) -> f64 {
        self.cost_at_service * self.quantity as f64
    }
}

/// One completed workshop visit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Unique identifier
    pub id: ServiceRecordId,
    /// When the service was performed
    pub date: DateTime<Utc>,
    /// Free-text service category ("General Service", "Brake Work", ...)
    #[serde(rename = "type")]
    pub service_type: String,
    /// Mechanic who performed the work
    pub mechanic: String,
    /// Parts consumed, with snapshot prices
    pub parts_used: Vec<PartUsed>,
    /// Labor amount
    pub service_charge: f64,
    /// Total GST across labor and parts
    pub gst_amount: f64,
    /// service_charge + parts cost + gst_amount
    pub total_cost: f64,
    /// Optional free-text notes
    #[serde(default)]
    pub notes: String,
}

impl ServiceRecord {
    /// Total cost of all part lines (excluding GST)
    pub fn parts_cost(&self) -> f64 {
        self.parts_used.iter().map(|p| p.line_cost()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> ServiceRecord {
        ServiceRecord {
            id: ServiceRecordId::new(),
            date: Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap(),
            service_type: "General Service".to_string(),
            mechanic: "Raju Kumar".to_string(),
            parts_used: vec![PartUsed {
                product_id: ProductId::new(),
                quantity: 1,
                cost_at_service: 850.0,
                name: "Engine Oil 5W-40".to_string(),
            }],
            service_charge: 2000.0,
            gst_amount: 513.0,
            total_cost: 3363.0,
            notes: String::new(),
        }
    }

    #[test]
    fn test_parts_cost() {
        let record = sample_record();
        assert_eq!(record.parts_cost(), 850.0);
    }

    #[test]
    fn test_line_cost_multiplies_quantity() {
        let part = PartUsed {
            product_id: ProductId::new(),
            quantity: 3,
            cost_at_service: 1200.0,
            name: "Brake Pads (Front)".to_string(),
        };
        assert_eq!(part.line_cost(), 3600.0);
    }

    #[test]
    fn test_serialization_field_names() {
        let record = sample_record();
        let json = serde_json::to_value(&record).unwrap();
        // Wire names match the stored document shape
        assert!(json.get("type").is_some());
        assert!(json.get("partsUsed").is_some());
        assert!(json.get("serviceCharge").is_some());
        assert!(json["partsUsed"][0].get("costAtService").is_some());
    }
}

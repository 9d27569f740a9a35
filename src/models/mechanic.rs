//! Mechanic model
//!
//! The workshop's staff roster. Mechanics are referenced by name from service
//! records (free text, so history survives roster changes).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MechanicId;

/// Mechanic seniority / specialty role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MechanicRole {
    #[serde(rename = "Senior Mechanic")]
    SeniorMechanic,
    #[serde(rename = "Junior Mechanic")]
    JuniorMechanic,
    Specialist,
    Trainee,
}

impl fmt::Display for MechanicRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanicRole::SeniorMechanic => write!(f, "Senior Mechanic"),
            MechanicRole::JuniorMechanic => write!(f, "Junior Mechanic"),
            MechanicRole::Specialist => write!(f, "Specialist"),
            MechanicRole::Trainee => write!(f, "Trainee"),
        }
    }
}

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MechanicStatus {
    Active,
    #[serde(rename = "On Leave")]
    OnLeave,
    Inactive,
}

impl fmt::Display for MechanicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanicStatus::Active => write!(f, "Active"),
            MechanicStatus::OnLeave => write!(f, "On Leave"),
            MechanicStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

/// A workshop employee
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mechanic {
    /// Unique identifier
    pub id: MechanicId,
    /// Full name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Role
    pub role: MechanicRole,
    /// Area of expertise
    pub specialization: String,
    /// Date of joining
    pub join_date: NaiveDate,
    /// Employment status
    pub status: MechanicStatus,
    /// Daily wage
    pub daily_wage: f64,
}

impl Mechanic {
    /// Whether this mechanic can currently be assigned work
    pub fn is_available(&self) -> bool {
        self.status == MechanicStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability() {
        let mut mechanic = Mechanic {
            id: MechanicId::new(),
            name: "Raju Kumar".to_string(),
            phone: "9876543001".to_string(),
            role: MechanicRole::SeniorMechanic,
            specialization: "Engine & Transmission".to_string(),
            join_date: NaiveDate::from_ymd_opt(2022, 3, 15).unwrap(),
            status: MechanicStatus::Active,
            daily_wage: 800.0,
        };
        assert!(mechanic.is_available());

        mechanic.status = MechanicStatus::OnLeave;
        assert!(!mechanic.is_available());
    }

    #[test]
    fn test_role_wire_names() {
        let json = serde_json::to_string(&MechanicRole::SeniorMechanic).unwrap();
        assert_eq!(json, "\"Senior Mechanic\"");
        let json = serde_json::to_string(&MechanicStatus::OnLeave).unwrap();
        assert_eq!(json, "\"On Leave\"");
    }
}

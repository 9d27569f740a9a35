//! Storage initialization
//!
//! Handles first-run setup and seed data creation so a fresh install has a
//! small working inventory, one example customer, the mechanic roster, and
//! default login accounts.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::config::paths::GaragePaths;
use crate::error::GarageError;
use crate::models::{
    Customer, Mechanic, MechanicId, MechanicRole, MechanicStatus, PartUsed, Product,
    ProductCategory, ServiceRecord, ServiceRecordId, User, UserId, UserRole, Vehicle,
};
use crate::services::auth::hash_password;

use super::customers::CustomerData;
use super::file_io::write_json_atomic;
use super::mechanics::MechanicData;
use super::products::ProductData;
use super::users::UserData;

/// Initialize storage for a fresh installation
///
/// Seeds each data file that doesn't exist yet; files with data are left alone.
pub fn initialize_storage(paths: &GaragePaths) -> Result<(), GarageError> {
    paths.ensure_directories()?;

    if !paths.products_file().exists() || !paths.customers_file().exists() {
        seed_catalog_and_customers(paths)?;
    }
    if !paths.mechanics_file().exists() {
        seed_mechanics(paths)?;
    }
    if !paths.users_file().exists() {
        seed_users(paths)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &GaragePaths) -> bool {
    !paths.products_file().exists()
}

/// Seed the starter inventory and one example customer with service history
fn seed_catalog_and_customers(paths: &GaragePaths) -> Result<(), GarageError> {
    let wrench = Product::new("Wrench Set (Pro)", ProductCategory::Tool, "Snap-on", 1500.0, 18.0, 5, 2);
    let oil = Product::new("Engine Oil 5W-40", ProductCategory::SparePart, "Castrol", 850.0, 18.0, 20, 5);
    let pads = Product::new("Brake Pads (Front)", ProductCategory::SparePart, "Bosch", 1200.0, 18.0, 8, 3);

    // Example history: 2000 labor + one unit of oil at 850 with 18% GST
    // on both parts and labor -> 513 GST, 3363 total.
    let record = ServiceRecord {
        id: ServiceRecordId::new(),
        date: Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap(),
        service_type: "General Service".to_string(),
        mechanic: "Raju Kumar".to_string(),
        parts_used: vec![PartUsed {
            product_id: oil.id,
            quantity: 1,
            cost_at_service: 850.0,
            name: oil.name.clone(),
        }],
        service_charge: 2000.0,
        gst_amount: 513.0,
        total_cost: 3363.0,
        notes: String::new(),
    };

    let mut vehicle = Vehicle::new(
        "KA-01-AB-1234",
        "Car - Sedan",
        "Hyundai Verna",
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    );
    vehicle.service_history.push(record);

    let mut customer = Customer::new("Rahul Sharma", "9876543210", Some("rahul@example.com".to_string()));
    customer.vehicles.push(vehicle);

    if !paths.products_file().exists() {
        write_json_atomic(
            paths.products_file(),
            &ProductData {
                products: vec![wrench, oil, pads],
            },
        )?;
    }
    if !paths.customers_file().exists() {
        write_json_atomic(
            paths.customers_file(),
            &CustomerData {
                customers: vec![customer],
            },
        )?;
    }

    Ok(())
}

/// Seed the workshop's mechanic roster
fn seed_mechanics(paths: &GaragePaths) -> Result<(), GarageError> {
    let roster: &[(&str, &str, MechanicRole, &str, (i32, u32, u32), MechanicStatus, f64)] = &[
        ("Raju Kumar", "9876543001", MechanicRole::SeniorMechanic, "Engine & Transmission", (2022, 3, 15), MechanicStatus::Active, 800.0),
        ("Suresh Patel", "9876543002", MechanicRole::SeniorMechanic, "Electrical & AC", (2021, 6, 10), MechanicStatus::Active, 850.0),
        ("Vikram Singh", "9876543003", MechanicRole::Specialist, "Brake & Suspension", (2023, 1, 20), MechanicStatus::Active, 900.0),
        ("Arjun Sharma", "9876543004", MechanicRole::JuniorMechanic, "General Service", (2024, 5, 8), MechanicStatus::Active, 550.0),
        ("Manoj Yadav", "9876543005", MechanicRole::JuniorMechanic, "Oil & Fluid Services", (2024, 8, 12), MechanicStatus::OnLeave, 500.0),
        ("Deepak Verma", "9876543006", MechanicRole::Specialist, "Body Work & Paint", (2022, 11, 1), MechanicStatus::Active, 950.0),
        ("Sanjay Gupta", "9876543007", MechanicRole::SeniorMechanic, "Diesel Engines", (2020, 9, 25), MechanicStatus::Active, 900.0),
        ("Amit Chauhan", "9876543008", MechanicRole::Trainee, "General Service", (2025, 1, 10), MechanicStatus::Active, 350.0),
    ];

    let mechanics = roster
        .iter()
        .map(|(name, phone, role, spec, (y, m, d), status, wage)| Mechanic {
            id: MechanicId::new(),
            name: name.to_string(),
            phone: phone.to_string(),
            role: *role,
            specialization: spec.to_string(),
            join_date: NaiveDate::from_ymd_opt(*y, *m, *d).unwrap_or_default(),
            status: *status,
            daily_wage: *wage,
        })
        .collect();

    write_json_atomic(paths.mechanics_file(), &MechanicData { mechanics })
}

/// Seed default login accounts (admin/admin123, employee/emp123)
fn seed_users(paths: &GaragePaths) -> Result<(), GarageError> {
    let users = vec![
        User {
            id: UserId::new(),
            username: "admin".to_string(),
            password_hash: hash_password("admin123")?,
            role: UserRole::Admin,
            name: "Admin User".to_string(),
        },
        User {
            id: UserId::new(),
            username: "employee".to_string(),
            password_hash: hash_password("emp123")?,
            role: UserRole::Employee,
            name: "Employee User".to_string(),
        },
    ];

    write_json_atomic(paths.users_file(), &UserData { users })
}

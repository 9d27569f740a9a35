//! Core data models for garage-cli
//!
//! This module contains all the data structures that represent the workshop
//! domain: products, customers, vehicles, service records, mechanics, users.

pub mod customer;
pub mod ids;
pub mod mechanic;
pub mod product;
pub mod service_record;
pub mod user;
pub mod vehicle;

pub use customer::Customer;
pub use ids::{CustomerId, MechanicId, ProductId, ServiceRecordId, UserId, VehicleId};
pub use mechanic::{Mechanic, MechanicRole, MechanicStatus};
pub use product::{Product, ProductCategory};
pub use service_record::{PartUsed, ServiceRecord};
pub use user::{User, UserRole};
pub use vehicle::Vehicle;

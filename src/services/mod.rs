//! Service layer for garage-cli
//!
//! The service layer provides business logic on top of the storage layer:
//! pricing, the service transaction coordinator, inventory and customer
//! management, and authentication.

pub mod auth;
pub mod customer;
pub mod inventory;
pub mod pricing;
pub mod service_job;

pub use auth::{AuthService, Session};
pub use customer::{CustomerService, VehicleDetails};
pub use inventory::{InventoryService, ProductUpdate};
pub use pricing::{price_service, PartLine, PriceBreakdown, LABOR_GST_RATE};
pub use service_job::{PartRequest, ServiceJobInput, ServiceJobService, UnresolvedPartPolicy};

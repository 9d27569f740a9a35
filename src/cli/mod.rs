//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod customer;
pub mod inventory;
pub mod mechanic;
pub mod report;
pub mod service;
pub mod user;

pub use customer::{handle_customer_command, CustomerCommands};
pub use inventory::{handle_inventory_command, InventoryCommands};
pub use mechanic::{handle_mechanic_command, MechanicCommands};
pub use report::{handle_dashboard_command, handle_report_command, ReportCommands};
pub use service::{handle_service_command, ServiceCommands};
pub use user::{handle_user_command, UserCommands};

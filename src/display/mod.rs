//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables and status indicators.

pub mod customer;
pub mod mechanic;
pub mod product;

pub use customer::{format_customer_details, format_customer_list};
pub use mechanic::format_mechanic_list;
pub use product::{format_product_details, format_product_list};

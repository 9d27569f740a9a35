//! garage-cli: vehicle repair shop management from the terminal
//!
//! Tracks the parts catalog, customers and their vehicles, records completed
//! service jobs with atomic stock deduction and GST pricing, and derives
//! due-for-service and stock depletion projections for the dashboard.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{GarageError, GarageResult};

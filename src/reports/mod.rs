//! Reports module for garage-cli
//!
//! Read-only projections and rollups: due-for-service status, stock
//! depletion forecasts, financial summaries, and the dashboard.

pub mod dashboard;
pub mod financial;
pub mod service_due;
pub mod stock_forecast;

pub use dashboard::DashboardSummary;
pub use financial::{parse_report_range, FinancialReport};
pub use service_due::{DueStatus, ServiceDueReport, VehicleDueEntry};
pub use stock_forecast::{StockForecast, StockForecastReport};

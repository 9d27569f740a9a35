//! Dashboard Summary
//!
//! One-shot overview combining entity counts, all-time revenue, low-stock
//! alerts, due-for-service vehicles, and the depletion forecast.

use chrono::{DateTime, Utc};

use crate::error::GarageResult;
use crate::models::Product;
use crate::reports::{ServiceDueReport, StockForecastReport};
use crate::storage::Storage;

/// Dashboard Summary report
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// Number of catalog products
    pub total_products: usize,
    /// Number of registered customers
    pub total_customers: usize,
    /// Number of registered vehicles
    pub total_vehicles: usize,
    /// Number of service records across all vehicles
    pub total_services: usize,
    /// All-time revenue (sum of stored record totals)
    pub all_time_revenue: f64,
    /// Products at or below their alert threshold
    pub low_stock: Vec<Product>,
    /// Due-for-service projection
    pub service_due: ServiceDueReport,
    /// Depletion forecast
    pub stock_forecast: StockForecastReport,
}

impl DashboardSummary {
    /// Generate the summary against a reference instant
    pub fn generate(storage: &Storage, now: DateTime<Utc>) -> GarageResult<Self> {
        let products = storage.products.get_all()?;
        let customers = storage.customers.get_all()?;

        let total_vehicles = customers.iter().map(|c| c.vehicles.len()).sum();
        let mut total_services = 0;
        let mut all_time_revenue = 0.0;
        for customer in &customers {
            for vehicle in &customer.vehicles {
                total_services += vehicle.service_history.len();
                all_time_revenue += vehicle
                    .service_history
                    .iter()
                    .map(|r| r.total_cost)
                    .sum::<f64>();
            }
        }

        let low_stock = products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect();

        Ok(Self {
            total_products: products.len(),
            total_customers: customers.len(),
            total_vehicles,
            total_services,
            all_time_revenue,
            low_stock,
            service_due: ServiceDueReport::generate(storage, now)?,
            stock_forecast: StockForecastReport::generate(storage, now)?,
        })
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Workshop Dashboard\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "Products: {}   Customers: {}   Vehicles: {}   Services: {}\n",
            self.total_products, self.total_customers, self.total_vehicles, self.total_services
        ));
        output.push_str(&format!(
            "All-Time Revenue: {} {:.2}\n\n",
            currency_symbol, self.all_time_revenue
        ));

        if self.low_stock.is_empty() {
            output.push_str("Low Stock: none\n");
        } else {
            output.push_str("Low Stock:\n");
            for product in &self.low_stock {
                output.push_str(&format!(
                    "  {:<30} {:>4} in stock (alert at {})\n",
                    product.name, product.quantity, product.min_stock_alert
                ));
            }
        }
        output.push('\n');

        output.push_str(&self.service_due.format_terminal());
        output.push('\n');
        output.push_str(&self.stock_forecast.format_terminal());

        output
    }
}

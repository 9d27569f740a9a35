//! Stock Depletion Forecast
//!
//! Predicts when each product will run out based on its historical consumption
//! rate across all service records. Products with no consumption history never
//! get a forecast, no matter how low their stock; the simple threshold alert
//! covers those.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::error::GarageResult;
use crate::models::ProductId;
use crate::storage::Storage;

/// Only products projected to run out within this many days are reported
pub const FORECAST_HORIZON_DAYS: f64 = 30.0;

/// Depletion forecast for one product
#[derive(Debug, Clone)]
pub struct StockForecast {
    /// Product being forecast
    pub product_id: ProductId,
    /// Product name
    pub product_name: String,
    /// Current stock level
    pub quantity: u32,
    /// Whole days until projected empty (rounded up)
    pub days_left: i64,
    /// Average units consumed per day
    pub daily_rate: f64,
}

#[derive(Debug)]
struct UsageStats {
    total_consumed: u32,
    first_usage: DateTime<Utc>,
}

/// Stock Depletion Forecast report
#[derive(Debug, Clone)]
pub struct StockForecastReport {
    /// Products projected to run out soon, soonest first
    pub forecasts: Vec<StockForecast>,
}

impl StockForecastReport {
    /// Generate the report against a reference instant
    pub fn generate(storage: &Storage, now: DateTime<Utc>) -> GarageResult<Self> {
        let mut usage: HashMap<ProductId, UsageStats> = HashMap::new();

        for customer in storage.customers.get_all()? {
            for vehicle in &customer.vehicles {
                for record in &vehicle.service_history {
                    for part in &record.parts_used {
                        usage
                            .entry(part.product_id)
                            .and_modify(|stats| {
                                stats.total_consumed += part.quantity;
                                if record.date < stats.first_usage {
                                    stats.first_usage = record.date;
                                }
                            })
                            .or_insert(UsageStats {
                                total_consumed: part.quantity,
                                first_usage: record.date,
                            });
                    }
                }
            }
        }

        let mut forecasts = Vec::new();

        for product in storage.products.get_all()? {
            let stats = match usage.get(&product.id) {
                Some(stats) if stats.total_consumed > 0 => stats,
                _ => continue,
            };

            let spanned_days = ((now - stats.first_usage).num_seconds() as f64 / 86_400.0)
                .ceil()
                .max(1.0);
            let daily_rate = stats.total_consumed as f64 / spanned_days;
            if daily_rate <= 0.0 {
                continue;
            }

            let days_to_empty = product.quantity as f64 / daily_rate;
            if days_to_empty < FORECAST_HORIZON_DAYS {
                forecasts.push(StockForecast {
                    product_id: product.id,
                    product_name: product.name.clone(),
                    quantity: product.quantity,
                    days_left: days_to_empty.ceil() as i64,
                    daily_rate,
                });
            }
        }

        forecasts.sort_by_key(|f| f.days_left);

        Ok(Self { forecasts })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Stock Depletion Forecast\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.forecasts.is_empty() {
            output.push_str("No products projected to run out within 30 days.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<30} {:>8} {:>10} {:>12}\n",
            "Product", "Stock", "Days Left", "Rate/Day"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for forecast in &self.forecasts {
            output.push_str(&format!(
                "{:<30} {:>8} {:>10} {:>12.2}\n",
                forecast.product_name, forecast.quantity, forecast.days_left, forecast.daily_rate
            ));
        }

        output
    }
}

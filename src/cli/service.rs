//! Service job CLI commands
//!
//! Implements CLI commands for recording completed service jobs and browsing
//! a vehicle's history.

use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

use crate::cli::customer::find_customer;
use crate::cli::inventory::find_product;
use crate::config::Settings;
use crate::error::{GarageError, GarageResult};
use crate::models::Vehicle;
use crate::services::{PartRequest, ServiceJobInput, ServiceJobService, UnresolvedPartPolicy};
use crate::storage::Storage;

/// Service job subcommands
#[derive(Subcommand)]
pub enum ServiceCommands {
    /// Record a completed service job
    Record {
        /// Customer name, phone, or ID
        customer: String,
        /// Vehicle license plate
        vehicle: String,
        /// Service type
        #[arg(short = 't', long, default_value = "General Service")]
        service_type: String,
        /// Mechanic name
        #[arg(short, long)]
        mechanic: String,
        /// Labor charge
        #[arg(short, long)]
        charge: f64,
        /// Part line as "product name:quantity" (repeatable)
        #[arg(short, long = "part")]
        parts: Vec<String>,
        /// Service date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
        /// Fail the job instead of skipping unresolvable part lines
        #[arg(long)]
        strict: bool,
    },
    /// Show a vehicle's service history
    History {
        /// Customer name, phone, or ID
        customer: String,
        /// Vehicle license plate (defaults to all vehicles)
        vehicle: Option<String>,
    },
}

fn parse_service_date(input: Option<&str>) -> GarageResult<DateTime<Utc>> {
    match input {
        None => Ok(Utc::now()),
        Some(s) => {
            let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                GarageError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
            })?;
            let naive = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
                GarageError::Validation(format!("Invalid date: {}", s))
            })?;
            Ok(naive.and_utc())
        }
    }
}

fn parse_part_lines(
    storage: &Storage,
    parts: &[String],
    policy: UnresolvedPartPolicy,
) -> GarageResult<Vec<PartRequest>> {
    let mut requests = Vec::with_capacity(parts.len());

    for part in parts {
        let (name, quantity) = match part.rsplit_once(':') {
            Some((name, qty)) => {
                let quantity: u32 = qty.trim().parse().map_err(|_| {
                    GarageError::Validation(format!(
                        "Invalid part quantity in '{}', expected 'name:quantity'",
                        part
                    ))
                })?;
                (name.trim(), quantity)
            }
            None => (part.trim(), 1),
        };

        match find_product(storage, name) {
            Ok(product) => requests.push(PartRequest {
                product_id: Some(product.id),
                quantity,
            }),
            Err(err) if err.is_not_found() => match policy {
                UnresolvedPartPolicy::Reject => return Err(err),
                UnresolvedPartPolicy::Skip => {
                    println!("Warning: skipping unknown part '{}'", name);
                }
            },
            Err(err) => return Err(err),
        }
    }

    Ok(requests)
}

fn print_history(vehicle: &Vehicle, currency: &str) {
    println!(
        "Vehicle: {} ({} - {})",
        vehicle.vehicle_number, vehicle.model_name, vehicle.vehicle_type
    );
    if vehicle.service_history.is_empty() {
        println!("  No service history.");
        return;
    }
    for record in &vehicle.service_history {
        println!(
            "  {} {} by {} - {} {:.2}",
            record.date.format("%Y-%m-%d"),
            record.service_type,
            record.mechanic,
            currency,
            record.total_cost
        );
        for part in &record.parts_used {
            println!(
                "      {} x{} @ {} {:.2}",
                part.name, part.quantity, currency, part.cost_at_service
            );
        }
        if !record.notes.is_empty() {
            println!("      Notes: {}", record.notes);
        }
    }
}

/// Handle a service command
pub fn handle_service_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ServiceCommands,
) -> GarageResult<()> {
    match cmd {
        ServiceCommands::Record {
            customer,
            vehicle,
            service_type,
            mechanic,
            charge,
            parts,
            date,
            notes,
            strict,
        } => {
            let policy = if strict {
                UnresolvedPartPolicy::Reject
            } else {
                UnresolvedPartPolicy::Skip
            };

            let found = find_customer(storage, &customer)?;
            let found_vehicle = found
                .vehicles
                .iter()
                .find(|v| v.vehicle_number.eq_ignore_ascii_case(&vehicle))
                .ok_or_else(|| GarageError::vehicle_not_found(&vehicle))?;

            let input = ServiceJobInput {
                date: parse_service_date(date.as_deref())?,
                service_type,
                mechanic,
                service_charge: charge,
                parts: parse_part_lines(storage, &parts, policy)?,
                notes,
            };

            let service = ServiceJobService::new(storage);
            let record_id = service.record_service(found.id, found_vehicle.id, input, policy)?;

            // Re-read for the stored totals
            let refreshed = find_customer(storage, &found.name)?;
            let record = refreshed
                .vehicles
                .iter()
                .flat_map(|v| &v.service_history)
                .find(|r| r.id == record_id)
                .ok_or_else(|| GarageError::Storage("Recorded service not found".to_string()))?;

            let currency = &settings.currency_symbol;
            println!("Recorded service for {} ({})", found.name, vehicle);
            println!("  Labor:      {} {:.2}", currency, record.service_charge);
            println!("  Parts:      {} {:.2}", currency, record.parts_cost());
            println!("  GST:        {} {:.2}", currency, record.gst_amount);
            println!("  Total:      {} {:.2}", currency, record.total_cost);
        }

        ServiceCommands::History { customer, vehicle } => {
            let found = find_customer(storage, &customer)?;
            let currency = &settings.currency_symbol;

            match vehicle {
                Some(number) => {
                    let found_vehicle = found
                        .vehicles
                        .iter()
                        .find(|v| v.vehicle_number.eq_ignore_ascii_case(&number))
                        .ok_or_else(|| GarageError::vehicle_not_found(&number))?;
                    print_history(found_vehicle, currency);
                }
                None => {
                    for found_vehicle in &found.vehicles {
                        print_history(found_vehicle, currency);
                    }
                }
            }
        }
    }

    Ok(())
}

//! Customer CLI commands
//!
//! Implements CLI commands for customer and vehicle management.

use clap::Subcommand;
use chrono::Utc;

use crate::config::Settings;
use crate::display::customer::{format_customer_details, format_customer_list};
use crate::error::{GarageError, GarageResult};
use crate::models::Customer;
use crate::services::{CustomerService, VehicleDetails};
use crate::storage::Storage;

/// Customer subcommands
#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Register a new customer with their first vehicle
    Register {
        /// Customer name
        name: String,
        /// Contact phone number
        #[arg(short, long)]
        phone: String,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Vehicle license plate
        #[arg(long)]
        vehicle_number: String,
        /// Vehicle type
        #[arg(long, default_value = "Car - Sedan")]
        vehicle_type: String,
        /// Vehicle model name
        #[arg(long)]
        model: String,
    },
    /// Register an additional vehicle for an existing customer
    AddVehicle {
        /// Customer name, phone, or ID
        customer: String,
        /// Vehicle license plate
        #[arg(long)]
        vehicle_number: String,
        /// Vehicle type
        #[arg(long, default_value = "Car - Sedan")]
        vehicle_type: String,
        /// Vehicle model name
        #[arg(long)]
        model: String,
    },
    /// List all customers
    List,
    /// Show customer details with vehicles and service history
    Show {
        /// Customer name, phone, or ID
        customer: String,
    },
    /// Edit a customer's contact details
    Edit {
        /// Customer name, phone, or ID
        customer: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete a customer and all their vehicles
    Delete {
        /// Customer name, phone, or ID
        customer: String,
    },
}

/// Resolve a customer by name (case-insensitive), phone, or short display id
pub fn find_customer(storage: &Storage, query: &str) -> GarageResult<Customer> {
    storage
        .customers
        .get_all()?
        .into_iter()
        .find(|c| {
            c.name.eq_ignore_ascii_case(query)
                || c.phone == query
                || c.id.to_string() == query
        })
        .ok_or_else(|| GarageError::customer_not_found(query))
}

/// Handle a customer command
pub fn handle_customer_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CustomerCommands,
) -> GarageResult<()> {
    let service = CustomerService::new(storage);

    match cmd {
        CustomerCommands::Register {
            name,
            phone,
            email,
            vehicle_number,
            vehicle_type,
            model,
        } => {
            let customer = service.register_customer(
                name,
                phone,
                email,
                VehicleDetails {
                    vehicle_number,
                    vehicle_type,
                    model_name: model,
                },
                Utc::now(),
            )?;

            println!("Registered customer: {}", customer.name);
            println!("  ID:      {}", customer.id);
            println!("  Phone:   {}", customer.phone);
            println!(
                "  Vehicle: {} ({})",
                customer.vehicles[0].vehicle_number, customer.vehicles[0].model_name
            );
        }

        CustomerCommands::AddVehicle {
            customer,
            vehicle_number,
            vehicle_type,
            model,
        } => {
            let found = find_customer(storage, &customer)?;
            service.add_vehicle(
                found.id,
                VehicleDetails {
                    vehicle_number: vehicle_number.clone(),
                    vehicle_type,
                    model_name: model,
                },
                Utc::now(),
            )?;
            println!("Added vehicle {} for {}", vehicle_number, found.name);
        }

        CustomerCommands::List => {
            let customers = service.list()?;
            print!("{}", format_customer_list(&customers));
        }

        CustomerCommands::Show { customer } => {
            let found = find_customer(storage, &customer)?;
            print!(
                "{}",
                format_customer_details(&found, &settings.currency_symbol)
            );
        }

        CustomerCommands::Edit {
            customer,
            name,
            phone,
            email,
        } => {
            let found = find_customer(storage, &customer)?;
            let updated = service.update_customer(found.id, name, phone, email)?;
            println!("Updated customer: {}", updated.name);
        }

        CustomerCommands::Delete { customer } => {
            let found = find_customer(storage, &customer)?;
            service.delete_customer(found.id)?;
            println!("Deleted customer: {}", found.name);
        }
    }

    Ok(())
}

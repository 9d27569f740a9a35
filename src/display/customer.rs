//! Customer display formatting
//!
//! Formats customers, vehicles, and service history for terminal output.

use crate::models::{Customer, Vehicle};

/// Format a list of customers as a table
pub fn format_customer_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No customers found.".to_string();
    }

    // Calculate column widths
    let name_width = customers
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<12}  {:<24}  {:>8}  {:>8}\n",
        "Name",
        "Phone",
        "Email",
        "Vehicles",
        "Services",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<12}  {:-<24}  {:->8}  {:->8}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for customer in customers {
        output.push_str(&format!(
            "{:<name_width$}  {:<12}  {:<24}  {:>8}  {:>8}\n",
            customer.name,
            customer.phone,
            customer.email.as_deref().unwrap_or("-"),
            customer.vehicles.len(),
            customer.service_count(),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single customer's details, including vehicles and history
pub fn format_customer_details(customer: &Customer, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Customer: {}\n", customer.name));
    output.push_str(&format!("  ID:    {}\n", customer.id));
    output.push_str(&format!("  Phone: {}\n", customer.phone));
    if let Some(email) = &customer.email {
        output.push_str(&format!("  Email: {}\n", email));
    }

    if customer.vehicles.is_empty() {
        output.push_str("\n  No vehicles registered.\n");
        return output;
    }

    for vehicle in &customer.vehicles {
        output.push('\n');
        output.push_str(&format_vehicle(vehicle, currency_symbol));
    }

    output
}

fn format_vehicle(vehicle: &Vehicle, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "  Vehicle: {} ({} - {})\n",
        vehicle.vehicle_number, vehicle.model_name, vehicle.vehicle_type
    ));
    output.push_str(&format!(
        "    Registered: {}\n",
        vehicle.registration_date.format("%Y-%m-%d")
    ));

    if vehicle.service_history.is_empty() {
        output.push_str("    No service history.\n");
        return output;
    }

    output.push_str(&format!(
        "    {:<12} {:<20} {:<16} {:>12}\n",
        "Date", "Type", "Mechanic", "Total"
    ));
    for record in &vehicle.service_history {
        output.push_str(&format!(
            "    {:<12} {:<20} {:<16} {:>3} {:>8.2}\n",
            record.date.format("%Y-%m-%d").to_string(),
            record.service_type,
            record.mechanic,
            currency_symbol,
            record.total_cost,
        ));
    }

    output
}

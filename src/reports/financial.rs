//! Financial Report
//!
//! Time-ranged rollup of revenue, GST, and service counts across every
//! service record in the shop, plus the derived labor/parts revenue split.
//!
//! The split reverse-engineers labor figures from stored totals using the
//! fixed labor GST rate. Stored `gstAmount`/`totalCost` values are never
//! recomputed, so historical records stay valid even if the rate changes, but
//! the split assumes every record in range was created under the current rate.

use chrono::{DateTime, NaiveDate, Utc};
use std::io::Write;

use crate::error::{GarageError, GarageResult};
use crate::services::pricing::LABOR_GST_RATE;
use crate::storage::Storage;

/// Parse a `[start, end]` report range from user-supplied strings
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp. A date-only end is
/// normalized to the end of that day so same-day ranges cover the full day.
pub fn parse_report_range(start: &str, end: &str) -> GarageResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = parse_boundary(start, false)?;
    let end = parse_boundary(end, true)?;

    if start > end {
        return Err(GarageError::Validation(
            "Start date must not be after end date".to_string(),
        ));
    }
    Ok((start, end))
}

fn parse_boundary(input: &str, end_of_day: bool) -> GarageResult<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let time = if end_of_day {
            date.and_hms_milli_opt(23, 59, 59, 999)
        } else {
            date.and_hms_opt(0, 0, 0)
        };
        let naive = time.ok_or_else(|| {
            GarageError::Validation(format!("Invalid date: {}", input))
        })?;
        return Ok(naive.and_utc());
    }

    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            GarageError::Validation(format!(
                "Invalid date '{}', expected YYYY-MM-DD or RFC 3339",
                input
            ))
        })
}

/// Financial Report
#[derive(Debug, Clone)]
pub struct FinancialReport {
    /// Start of the range (inclusive)
    pub start: DateTime<Utc>,
    /// End of the range (inclusive)
    pub end: DateTime<Utc>,
    /// Sum of stored record totals
    pub total_revenue: f64,
    /// Sum of stored GST amounts
    pub total_gst: f64,
    /// Sum of labor charges
    pub total_service_charge: f64,
    /// Number of records in range
    pub service_count: usize,
    /// Derived: GST attributable to labor
    pub labor_gst: f64,
    /// Derived: labor revenue including GST
    pub labor_gross: f64,
    /// Derived: parts revenue including GST
    pub parts_gross: f64,
    /// Derived: GST attributable to parts
    pub parts_gst: f64,
    /// Derived: parts revenue excluding GST
    pub parts_net: f64,
}

impl FinancialReport {
    /// Generate the report for an inclusive date range
    ///
    /// No records in range yields an all-zero report, not an error.
    pub fn generate(
        storage: &Storage,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> GarageResult<Self> {
        let mut total_revenue = 0.0;
        let mut total_gst = 0.0;
        let mut total_service_charge = 0.0;
        let mut service_count = 0;

        for customer in storage.customers.get_all()? {
            for vehicle in &customer.vehicles {
                for record in &vehicle.service_history {
                    if record.date < start || record.date > end {
                        continue;
                    }
                    total_revenue += record.total_cost;
                    total_gst += record.gst_amount;
                    total_service_charge += record.service_charge;
                    service_count += 1;
                }
            }
        }

        let labor_gst = total_service_charge * LABOR_GST_RATE;
        let labor_gross = total_service_charge + labor_gst;
        let parts_gross = total_revenue - labor_gross;
        let parts_gst = total_gst - labor_gst;
        let parts_net = parts_gross - parts_gst;

        Ok(Self {
            start,
            end,
            total_revenue,
            total_gst,
            total_service_charge,
            service_count,
            labor_gst,
            labor_gross,
            parts_gross,
            parts_gst,
            parts_net,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Financial Report: {} to {}\n",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        ));
        output.push_str(&"=".repeat(48));
        output.push('\n');
        output.push_str(&format!("Services Completed: {}\n\n", self.service_count));

        let row = |label: &str, amount: f64| {
            format!("{:<24} {:>10} {:>12.2}\n", label, currency_symbol, amount)
        };

        output.push_str(&row("Total Revenue", self.total_revenue));
        output.push_str(&row("Total GST Collected", self.total_gst));
        output.push_str(&"-".repeat(48));
        output.push('\n');
        output.push_str(&row("Labor (gross)", self.labor_gross));
        output.push_str(&row("  Labor Charges", self.total_service_charge));
        output.push_str(&row("  Labor GST", self.labor_gst));
        output.push_str(&row("Parts (gross)", self.parts_gross));
        output.push_str(&row("  Parts Net", self.parts_net));
        output.push_str(&row("  Parts GST", self.parts_gst));

        output
    }

    /// Export the report to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> GarageResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer
            .write_record(["Field", "Value"])
            .map_err(|e| GarageError::Export(e.to_string()))?;

        let rows: [(&str, String); 11] = [
            ("Start Date", self.start.format("%Y-%m-%d").to_string()),
            ("End Date", self.end.format("%Y-%m-%d").to_string()),
            ("Services Completed", self.service_count.to_string()),
            ("Total Revenue", format!("{:.2}", self.total_revenue)),
            ("Total GST", format!("{:.2}", self.total_gst)),
            ("Labor Charges", format!("{:.2}", self.total_service_charge)),
            ("Labor GST", format!("{:.2}", self.labor_gst)),
            ("Labor Gross", format!("{:.2}", self.labor_gross)),
            ("Parts Gross", format!("{:.2}", self.parts_gross)),
            ("Parts GST", format!("{:.2}", self.parts_gst)),
            ("Parts Net", format!("{:.2}", self.parts_net)),
        ];

        for (field, value) in rows {
            csv_writer
                .write_record([field, value.as_str()])
                .map_err(|e| GarageError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| GarageError::Export(e.to_string()))?;
        Ok(())
    }
}

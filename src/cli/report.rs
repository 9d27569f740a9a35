//! Report CLI commands

use std::fs::File;
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;

use crate::config::Settings;
use crate::error::GarageResult;
use crate::reports::{
    parse_report_range, DashboardSummary, FinancialReport, ServiceDueReport, StockForecastReport,
};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Revenue and GST rollup for a date range
    Financial {
        /// Range start (YYYY-MM-DD)
        start: String,
        /// Range end (YYYY-MM-DD, inclusive)
        end: String,
        /// Also write the report to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Vehicles overdue or due soon for service
    ServiceDue,
    /// Products projected to run out of stock
    StockForecast,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> GarageResult<()> {
    match cmd {
        ReportCommands::Financial { start, end, csv } => {
            let (start, end) = parse_report_range(&start, &end)?;
            let report = FinancialReport::generate(storage, start, end)?;
            print!("{}", report.format_terminal(&settings.currency_symbol));

            if let Some(path) = csv {
                let file = File::create(&path)?;
                report.export_csv(file)?;
                println!("\nExported to {}", path.display());
            }
        }

        ReportCommands::ServiceDue => {
            let report = ServiceDueReport::generate(storage, Utc::now())?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::StockForecast => {
            let report = StockForecastReport::generate(storage, Utc::now())?;
            print!("{}", report.format_terminal());
        }
    }

    Ok(())
}

/// Print the dashboard summary
pub fn handle_dashboard_command(storage: &Storage, settings: &Settings) -> GarageResult<()> {
    let summary = DashboardSummary::generate(storage, Utc::now())?;
    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}

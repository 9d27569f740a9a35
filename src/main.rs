use anyhow::Result;
use clap::{Parser, Subcommand};

use garage_cli::cli::{
    handle_customer_command, handle_dashboard_command, handle_inventory_command,
    handle_mechanic_command, handle_report_command, handle_service_command, handle_user_command,
};
use garage_cli::config::{paths::GaragePaths, settings::Settings};
use garage_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "garage",
    version,
    about = "Terminal-based vehicle repair shop management",
    long_about = "garage-cli manages a vehicle repair shop from the command line: \
                  parts inventory, customers and their vehicles, service job \
                  records with GST billing, and dashboard projections for \
                  due-for-service vehicles and stock depletion."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inventory management commands
    #[command(subcommand, alias = "inv")]
    Inventory(garage_cli::cli::InventoryCommands),

    /// Customer and vehicle management commands
    #[command(subcommand, alias = "cust")]
    Customer(garage_cli::cli::CustomerCommands),

    /// Service job commands
    #[command(subcommand, alias = "svc")]
    Service(garage_cli::cli::ServiceCommands),

    /// Mechanic roster commands
    #[command(subcommand, alias = "mech")]
    Mechanic(garage_cli::cli::MechanicCommands),

    /// Reports and projections
    #[command(subcommand)]
    Report(garage_cli::cli::ReportCommands),

    /// User account commands
    #[command(subcommand)]
    User(garage_cli::cli::UserCommands),

    /// Show the workshop dashboard
    #[command(alias = "dash")]
    Dashboard,

    /// Initialize storage with starter data
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = GaragePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Inventory(cmd)) => {
            handle_inventory_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Customer(cmd)) => {
            handle_customer_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Service(cmd)) => {
            handle_service_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Mechanic(cmd)) => {
            handle_mechanic_command(&storage, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, cmd)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, &settings)?;
        }
        Some(Commands::Init) => {
            println!("Initializing garage-cli at: {}", paths.data_dir().display());
            garage_cli::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Starter data has been created:");
            println!("  - 3 catalog products (oil, brake pads, wrench set)");
            println!("  - 1 sample customer with a serviced vehicle");
            println!("  - 8 mechanics on the roster");
            println!("  - Login accounts: admin/admin123, employee/emp123");
            println!();
            println!("Run 'garage dashboard' for an overview.");
        }
        Some(Commands::Config) => {
            println!("garage-cli Configuration");
            println!("========================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("garage-cli - Terminal-based repair shop management");
            println!();
            println!("Run 'garage --help' for usage information.");
            println!("Run 'garage init' to set up starter data.");
        }
    }

    Ok(())
}

//! Mechanic CLI commands

use clap::Subcommand;

use crate::display::mechanic::format_mechanic_list;
use crate::error::GarageResult;
use crate::storage::Storage;

/// Mechanic subcommands
#[derive(Subcommand)]
pub enum MechanicCommands {
    /// List the full roster
    List,
    /// List mechanics currently available for work
    Available,
}

/// Handle a mechanic command
pub fn handle_mechanic_command(storage: &Storage, cmd: MechanicCommands) -> GarageResult<()> {
    match cmd {
        MechanicCommands::List => {
            let mechanics = storage.mechanics.get_all()?;
            print!("{}", format_mechanic_list(&mechanics));
        }

        MechanicCommands::Available => {
            let mechanics: Vec<_> = storage
                .mechanics
                .get_all()?
                .into_iter()
                .filter(|m| m.is_available())
                .collect();
            if mechanics.is_empty() {
                println!("No mechanics available.");
            } else {
                print!("{}", format_mechanic_list(&mechanics));
            }
        }
    }

    Ok(())
}

//! User CLI commands
//!
//! Account creation and login checks. There is no session persistence; login
//! verifies credentials and role, then exits.

use clap::Subcommand;

use crate::error::{GarageError, GarageResult};
use crate::models::UserRole;
use crate::services::AuthService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a login account
    Create {
        /// Username
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role (admin, employee)
        #[arg(short, long, default_value = "employee")]
        role: String,
        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// Verify credentials for a role
    Login {
        /// Username
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role to log in as (admin, employee)
        #[arg(short, long, default_value = "employee")]
        role: String,
    },
    /// List login accounts
    List,
}

fn parse_role(input: &str) -> GarageResult<UserRole> {
    input.parse().map_err(|_| {
        GarageError::Validation(format!(
            "Invalid role: '{}'. Valid roles: admin, employee",
            input
        ))
    })
}

/// Handle a user command
pub fn handle_user_command(storage: &Storage, cmd: UserCommands) -> GarageResult<()> {
    let auth = AuthService::new(storage);

    match cmd {
        UserCommands::Create {
            username,
            password,
            role,
            name,
        } => {
            let role = parse_role(&role)?;
            let user = auth.create_user(username, &password, role, name)?;
            println!("Created user: {} ({})", user.username, user.role);
        }

        UserCommands::Login {
            username,
            password,
            role,
        } => {
            let role = parse_role(&role)?;
            let session = auth.login(&username, &password, role)?;
            println!("Welcome, {} ({})", session.name, session.role);
        }

        UserCommands::List => {
            let users = storage.users.get_all()?;
            if users.is_empty() {
                println!("No users found.");
            } else {
                for user in users {
                    println!("  {} - {} ({})", user.username, user.name, user.role);
                }
            }
        }
    }

    Ok(())
}

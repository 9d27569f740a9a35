//! Storage layer for garage-cli
//!
//! Provides JSON file storage with atomic writes and RwLock-guarded in-memory
//! repositories.

pub mod customers;
pub mod file_io;
pub mod init;
pub mod mechanics;
pub mod products;
pub mod users;

pub use customers::CustomerRepository;
pub use init::initialize_storage;
pub use mechanics::MechanicRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

use crate::config::paths::GaragePaths;
use crate::error::GarageError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: GaragePaths,
    pub products: ProductRepository,
    pub customers: CustomerRepository,
    pub mechanics: MechanicRepository,
    pub users: UserRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: GaragePaths) -> Result<Self, GarageError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            products: ProductRepository::new(paths.products_file()),
            customers: CustomerRepository::new(paths.customers_file()),
            mechanics: MechanicRepository::new(paths.mechanics_file()),
            users: UserRepository::new(paths.users_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &GaragePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), GarageError> {
        self.products.load()?;
        self.customers.load()?;
        self.mechanics.load()?;
        self.users.load()?;
        Ok(())
    }
}

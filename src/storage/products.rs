//! Product repository for JSON storage
//!
//! Manages loading and saving inventory to products.json. Stock deduction for
//! a service job goes through [`ProductRepository::deduct_stock`], which
//! validates and applies every requested line under a single write lock so a
//! multi-line job either consumes all of its parts or none of them.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::GarageError;
use crate::models::{Product, ProductId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable product data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ProductData {
    pub products: Vec<Product>,
}

/// Repository for product persistence
pub struct ProductRepository {
    path: PathBuf,
    data: RwLock<HashMap<ProductId, Product>>,
}

impl ProductRepository {
    /// Create a new product repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load products from disk
    pub fn load(&self) -> Result<(), GarageError> {
        let file_data: ProductData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for product in file_data.products {
            data.insert(product.id, product);
        }

        Ok(())
    }

    /// Save products to disk
    pub fn save(&self) -> Result<(), GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut products: Vec<_> = data.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));

        let file_data = ProductData { products };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a product by ID
    pub fn get(&self, id: ProductId) -> Result<Option<Product>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all products, sorted by name
    pub fn get_all(&self) -> Result<Vec<Product>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut products: Vec<_> = data.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(products)
    }

    /// Find a product by exact name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<Product>, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Insert or update a product
    pub fn upsert(&self, product: Product) -> Result<(), GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(product.id, product);
        Ok(())
    }

    /// Delete a product (hard delete; history keeps its own snapshots)
    pub fn delete(&self, id: ProductId) -> Result<bool, GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Count products
    pub fn count(&self) -> Result<usize, GarageError> {
        let data = self
            .data
            .read()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Atomically deduct stock for a set of part lines
    ///
    /// Requests are summed per product, then every total is validated against
    /// current stock before any quantity is touched; the whole call happens
    /// under one write lock, so two concurrent jobs cannot both pass the check
    /// and oversell, and a shortfall on any product leaves all quantities
    /// unchanged. Repeated lines for the same product are checked against
    /// their cumulative total, not line by line.
    pub fn deduct_stock(&self, lines: &[(ProductId, u32)]) -> Result<(), GarageError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| GarageError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Phase 1: sum requests per product and validate the totals
        let mut totals: HashMap<ProductId, u32> = HashMap::new();
        for (id, requested) in lines {
            let total = totals.entry(*id).or_insert(0);
            *total = total.checked_add(*requested).ok_or_else(|| {
                GarageError::Validation("Requested quantity overflows".to_string())
            })?;
        }
        for (id, requested) in &totals {
            let product = data
                .get(id)
                .ok_or_else(|| GarageError::product_not_found(id.to_string()))?;
            if product.quantity < *requested {
                return Err(GarageError::InsufficientStock {
                    product: product.name.clone(),
                    requested: *requested,
                    available: product.quantity,
                });
            }
        }

        // Phase 2: apply all decrements
        for (id, requested) in &totals {
            if let Some(product) = data.get_mut(id) {
                product.quantity -= requested;
            }
        }

        Ok(())
    }
}

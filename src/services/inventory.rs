//! Inventory service
//!
//! Admin-facing product management: add, edit, delete, list, and the simple
//! low-stock threshold check (independent of the depletion forecast).

use crate::error::{GarageError, GarageResult};
use crate::models::{Product, ProductCategory, ProductId};
use crate::storage::Storage;

/// Partial update for a product; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<ProductCategory>,
    pub supplier: Option<String>,
    pub price: Option<f64>,
    pub gst_rate: Option<f64>,
    pub quantity: Option<u32>,
    pub min_stock_alert: Option<u32>,
}

/// Service for inventory management
pub struct InventoryService<'a> {
    storage: &'a Storage,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new product to the catalog
    #[allow(clippy::too_many_arguments)]
    pub fn add_product(
        &self,
        name: impl Into<String>,
        category: ProductCategory,
        supplier: impl Into<String>,
        price: f64,
        gst_rate: f64,
        quantity: u32,
        min_stock_alert: u32,
    ) -> GarageResult<Product> {
        let product = Product::new(name, category, supplier, price, gst_rate, quantity, min_stock_alert);
        product.validate().map_err(GarageError::Validation)?;

        self.storage.products.upsert(product.clone())?;
        self.storage.products.save()?;
        Ok(product)
    }

    /// Apply an admin edit to a product
    pub fn update_product(&self, id: ProductId, update: ProductUpdate) -> GarageResult<Product> {
        let mut product = self
            .storage
            .products
            .get(id)?
            .ok_or_else(|| GarageError::product_not_found(id.to_string()))?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(supplier) = update.supplier {
            product.supplier = supplier;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(gst_rate) = update.gst_rate {
            product.gst_rate = gst_rate;
        }
        if let Some(quantity) = update.quantity {
            product.quantity = quantity;
        }
        if let Some(min_stock_alert) = update.min_stock_alert {
            product.min_stock_alert = min_stock_alert;
        }

        product.validate().map_err(GarageError::Validation)?;

        self.storage.products.upsert(product.clone())?;
        self.storage.products.save()?;
        Ok(product)
    }

    /// Hard-delete a product
    ///
    /// Service history is unaffected: part lines carry their own snapshots
    /// rather than foreign keys.
    pub fn delete_product(&self, id: ProductId) -> GarageResult<()> {
        if !self.storage.products.delete(id)? {
            return Err(GarageError::product_not_found(id.to_string()));
        }
        self.storage.products.save()?;
        Ok(())
    }

    /// List all products
    pub fn list(&self) -> GarageResult<Vec<Product>> {
        self.storage.products.get_all()
    }

    /// Products at or below their alert threshold
    pub fn low_stock(&self) -> GarageResult<Vec<Product>> {
        Ok(self
            .storage
            .products
            .get_all()?
            .into_iter()
            .filter(|p| p.is_low_stock())
            .collect())
    }
}

//! Product model
//!
//! Represents inventory items: tools and spare parts. Prices are plain
//! currency units; GST rates are percentages (e.g. 18 for 18%).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ProductId;

/// Inventory category for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    /// Workshop tools (wrenches, jacks, diagnostic gear)
    Tool,
    /// Consumable spare parts (oil, pads, filters)
    #[serde(rename = "Spare Part")]
    SparePart,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::Tool => write!(f, "Tool"),
            ProductCategory::SparePart => write!(f, "Spare Part"),
        }
    }
}

/// An inventory item
///
/// `quantity` is unsigned: stock can never go negative. It is mutated only by
/// the service transaction coordinator (decrement) or an admin edit (set).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Product name
    pub name: String,
    /// Tool or spare part
    pub category: ProductCategory,
    /// Supplier name
    pub supplier: String,
    /// Unit sale price
    pub price: f64,
    /// GST rate as a percentage
    pub gst_rate: f64,
    /// Current stock quantity
    pub quantity: u32,
    /// Low-stock alert threshold
    pub min_stock_alert: u32,
}

impl Product {
    /// Create a new product with a fresh id
    pub fn new(
        name: impl Into<String>,
        category: ProductCategory,
        supplier: impl Into<String>,
        price: f64,
        gst_rate: f64,
        quantity: u32,
        min_stock_alert: u32,
    ) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            category,
            supplier: supplier.into(),
            price,
            gst_rate,
            quantity,
            min_stock_alert,
        }
    }

    /// Whether the product is at or below its alert threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock_alert
    }

    /// Total value of stock on hand
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Validate field constraints
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name cannot be empty".to_string());
        }
        if self.price < 0.0 {
            return Err("Price cannot be negative".to_string());
        }
        if !(0.0..=100.0).contains(&self.gst_rate) {
            return Err("GST rate must be between 0 and 100".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_threshold() {
        let mut product = Product::new(
            "Brake Pads (Front)",
            ProductCategory::SparePart,
            "Bosch",
            1200.0,
            18.0,
            8,
            3,
        );
        assert!(!product.is_low_stock());

        product.quantity = 3;
        assert!(product.is_low_stock());

        product.quantity = 0;
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_stock_value() {
        let product = Product::new(
            "Engine Oil 5W-40",
            ProductCategory::SparePart,
            "Castrol",
            850.0,
            18.0,
            20,
            5,
        );
        assert_eq!(product.stock_value(), 17000.0);
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let mut product = Product::new("Wrench Set", ProductCategory::Tool, "Snap-on", 1500.0, 18.0, 5, 2);
        assert!(product.validate().is_ok());

        product.price = -1.0;
        assert!(product.validate().is_err());

        product.price = 1500.0;
        product.gst_rate = 120.0;
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_category_serialization() {
        // "Spare Part" must round-trip with the space, matching stored data
        let json = serde_json::to_string(&ProductCategory::SparePart).unwrap();
        assert_eq!(json, "\"Spare Part\"");
        let back: ProductCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProductCategory::SparePart);
    }
}

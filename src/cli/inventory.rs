//! Inventory CLI commands
//!
//! Implements CLI commands for catalog/stock management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::product::{format_product_details, format_product_list};
use crate::error::{GarageError, GarageResult};
use crate::models::{Product, ProductCategory};
use crate::services::{InventoryService, ProductUpdate};
use crate::storage::Storage;

/// Inventory subcommands
#[derive(Subcommand)]
pub enum InventoryCommands {
    /// Add a new product
    Add {
        /// Product name
        name: String,
        /// Category (tool, spare-part)
        #[arg(short = 'c', long, default_value = "spare-part")]
        category: String,
        /// Supplier name
        #[arg(short, long)]
        supplier: String,
        /// Unit price
        #[arg(short, long)]
        price: f64,
        /// GST rate as a percentage
        #[arg(long, default_value = "18")]
        gst_rate: f64,
        /// Initial stock quantity
        #[arg(short, long, default_value = "0")]
        quantity: u32,
        /// Low-stock alert threshold
        #[arg(long, default_value = "0")]
        min_stock: u32,
    },
    /// List all products
    List,
    /// Show product details
    Show {
        /// Product name or ID
        product: String,
    },
    /// Edit a product
    Edit {
        /// Product name or ID
        product: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New supplier
        #[arg(long)]
        supplier: Option<String>,
        /// New unit price
        #[arg(long)]
        price: Option<f64>,
        /// New GST rate
        #[arg(long)]
        gst_rate: Option<f64>,
        /// New stock quantity
        #[arg(long)]
        quantity: Option<u32>,
        /// New alert threshold
        #[arg(long)]
        min_stock: Option<u32>,
    },
    /// Delete a product
    Delete {
        /// Product name or ID
        product: String,
    },
    /// List products at or below their alert threshold
    LowStock,
}

fn parse_category(input: &str) -> GarageResult<ProductCategory> {
    match input.to_lowercase().as_str() {
        "tool" => Ok(ProductCategory::Tool),
        "spare-part" | "spare_part" | "spare part" | "part" => Ok(ProductCategory::SparePart),
        _ => Err(GarageError::Validation(format!(
            "Invalid category: '{}'. Valid categories: tool, spare-part",
            input
        ))),
    }
}

/// Resolve a product by name (case-insensitive) or short display id
pub fn find_product(storage: &Storage, query: &str) -> GarageResult<Product> {
    if let Some(product) = storage.products.find_by_name(query)? {
        return Ok(product);
    }
    storage
        .products
        .get_all()?
        .into_iter()
        .find(|p| p.id.to_string() == query)
        .ok_or_else(|| GarageError::product_not_found(query))
}

/// Handle an inventory command
pub fn handle_inventory_command(
    storage: &Storage,
    settings: &Settings,
    cmd: InventoryCommands,
) -> GarageResult<()> {
    let service = InventoryService::new(storage);
    let currency = &settings.currency_symbol;

    match cmd {
        InventoryCommands::Add {
            name,
            category,
            supplier,
            price,
            gst_rate,
            quantity,
            min_stock,
        } => {
            let category = parse_category(&category)?;
            let product =
                service.add_product(name, category, supplier, price, gst_rate, quantity, min_stock)?;

            println!("Added product: {}", product.name);
            println!("  ID:       {}", product.id);
            println!("  Category: {}", product.category);
            println!("  Price:    {} {:.2}", currency, product.price);
            println!("  In Stock: {}", product.quantity);
        }

        InventoryCommands::List => {
            let products = service.list()?;
            print!("{}", format_product_list(&products, currency));
        }

        InventoryCommands::Show { product } => {
            let found = find_product(storage, &product)?;
            print!("{}", format_product_details(&found, currency));
        }

        InventoryCommands::Edit {
            product,
            name,
            supplier,
            price,
            gst_rate,
            quantity,
            min_stock,
        } => {
            let found = find_product(storage, &product)?;
            let updated = service.update_product(
                found.id,
                ProductUpdate {
                    name,
                    supplier,
                    price,
                    gst_rate,
                    quantity,
                    min_stock_alert: min_stock,
                    ..Default::default()
                },
            )?;
            println!("Updated product: {}", updated.name);
        }

        InventoryCommands::Delete { product } => {
            let found = find_product(storage, &product)?;
            service.delete_product(found.id)?;
            println!("Deleted product: {}", found.name);
        }

        InventoryCommands::LowStock => {
            let products = service.low_stock()?;
            if products.is_empty() {
                println!("No products are low on stock.");
            } else {
                print!("{}", format_product_list(&products, currency));
            }
        }
    }

    Ok(())
}

//! Product display formatting
//!
//! Formats catalog products for terminal output in table and detail views.

use crate::models::Product;

/// Format a list of products as a table
pub fn format_product_list(products: &[Product], currency_symbol: &str) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }

    // Calculate column widths
    let name_width = products
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let supplier_width = products
        .iter()
        .map(|p| p.supplier.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<12}  {:<supplier_width$}  {:>12}  {:>6}  {:>6}  {}\n",
        "Name",
        "Category",
        "Supplier",
        "Price",
        "GST%",
        "Stock",
        "Alert",
        name_width = name_width,
        supplier_width = supplier_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<12}  {:-<supplier_width$}  {:->12}  {:->6}  {:->6}  {:-<6}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
        supplier_width = supplier_width,
    ));

    for product in products {
        let alert = if product.is_low_stock() { "LOW" } else { "" };
        output.push_str(&format!(
            "{:<name_width$}  {:<12}  {:<supplier_width$}  {:>3} {:>8.2}  {:>6.1}  {:>6}  {}\n",
            product.name,
            product.category.to_string(),
            product.supplier,
            currency_symbol,
            product.price,
            product.gst_rate,
            product.quantity,
            alert,
            name_width = name_width,
            supplier_width = supplier_width,
        ));
    }

    output
}

/// Format a single product's details
pub fn format_product_details(product: &Product, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Product: {}\n", product.name));
    output.push_str(&format!("  ID:         {}\n", product.id));
    output.push_str(&format!("  Category:   {}\n", product.category));
    output.push_str(&format!("  Supplier:   {}\n", product.supplier));
    output.push_str(&format!(
        "  Price:      {} {:.2}\n",
        currency_symbol, product.price
    ));
    output.push_str(&format!("  GST Rate:   {:.1}%\n", product.gst_rate));
    output.push_str(&format!("  In Stock:   {}\n", product.quantity));
    output.push_str(&format!("  Alert At:   {}\n", product.min_stock_alert));
    output.push_str(&format!(
        "  Stock Value: {} {:.2}\n",
        currency_symbol,
        product.stock_value()
    ));

    if product.is_low_stock() {
        output.push_str("\n  LOW STOCK - reorder recommended\n");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductCategory;

    fn oil() -> Product {
        Product::new(
            "Engine Oil 5W-40",
            ProductCategory::SparePart,
            "Castrol",
            850.0,
            18.0,
            20,
            5,
        )
    }

    #[test]
    fn test_format_product_list() {
        let products = vec![
            oil(),
            Product::new(
                "Wrench Set (Pro)",
                ProductCategory::Tool,
                "Snap-on",
                1500.0,
                18.0,
                1,
                2,
            ),
        ];

        let output = format_product_list(&products, "Rs.");
        assert!(output.contains("Engine Oil 5W-40"));
        assert!(output.contains("Wrench Set (Pro)"));
        // Second product is below its alert threshold
        assert!(output.contains("LOW"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_product_list(&[], "Rs.");
        assert!(output.contains("No products found"));
    }

    #[test]
    fn test_format_product_details() {
        let output = format_product_details(&oil(), "Rs.");
        assert!(output.contains("Engine Oil 5W-40"));
        assert!(output.contains("Castrol"));
        assert!(output.contains("Spare Part"));
        assert!(output.contains("850.00"));
        // 20 x 850
        assert!(output.contains("17000.00"));
        assert!(!output.contains("LOW STOCK"));
    }
}

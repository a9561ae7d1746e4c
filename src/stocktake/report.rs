//! Report and CSV formatting.
//!
//! Everything here is pure string building over a product slice; file
//! writes belong to the store. Human-readable reports prefix monetary
//! values with the configured currency glyph at two fraction digits; the
//! CSV rows carry plain decimals and only the summary row is
//! currency-prefixed.

use crate::config::StockConfig;
use crate::model::{Product, DEFAULT_LOW_STOCK_THRESHOLD};

pub const RULE: &str = "-------------------------------------------------------------";

pub const EMPTY_MESSAGE: &str = "Inventory is empty.";
pub const NONE_LOW_MESSAGE: &str = "No products are low on stock.";

pub const CSV_HEADER: &str = "Product Name,Quantity,Price,Last Updated,Total Value";

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub currency: String,
    pub low_stock_threshold: u32,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency: "₹".to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl ReportOptions {
    pub fn from_config(config: &StockConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            low_stock_threshold: config.low_stock_threshold,
        }
    }
}

/// One formatted report line for a product, with a low-stock marker when
/// the quantity is at or below the threshold.
pub fn product_line(product: &Product, opts: &ReportOptions) -> String {
    let marker = if product.is_low_stock(opts.low_stock_threshold) {
        " [LOW STOCK]"
    } else {
        ""
    };
    format!(
        "Product: {name:<15} | Qty: {qty:<5} | Price: {sym}{price:<8.2} | Total: {sym}{total:<8.2} | Last Updated: {updated}{marker}",
        name = product.name,
        qty = product.quantity,
        price = product.price,
        total = product.total_value(),
        updated = product.last_updated,
        sym = opts.currency,
        marker = marker,
    )
}

pub fn total_inventory_value(products: &[Product]) -> f64 {
    products.iter().map(Product::total_value).sum()
}

/// The full report: rule, one line per product, rule, grand total.
/// Callers handle the empty collection with [`EMPTY_MESSAGE`] instead.
pub fn full_report(products: &[Product], opts: &ReportOptions) -> String {
    let mut out = String::new();
    out.push_str("Inventory Report:\n");
    out.push_str(RULE);
    out.push('\n');
    for product in products {
        out.push_str(&product_line(product, opts));
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "Total Inventory Value: {}{:.2}",
        opts.currency,
        total_inventory_value(products)
    ));
    out
}

fn low_stock_lines(products: &[Product], opts: &ReportOptions) -> Vec<String> {
    products
        .iter()
        .filter(|p| p.is_low_stock(opts.low_stock_threshold))
        .map(|p| product_line(p, opts))
        .collect()
}

/// The console low-stock report.
pub fn low_stock_report(products: &[Product], opts: &ReportOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Low Stock Report (Qty <= {}):\n",
        opts.low_stock_threshold
    ));
    out.push_str(RULE);
    let lines = low_stock_lines(products, opts);
    if lines.is_empty() {
        out.push('\n');
        out.push_str(NONE_LOW_MESSAGE);
    } else {
        for line in lines {
            out.push('\n');
            out.push_str(&line);
        }
    }
    out
}

/// One dated section for the append-only low-stock report file, terminated
/// by a rule and a blank line so successive sections stay separated.
pub fn low_stock_section(products: &[Product], opts: &ReportOptions, timestamp: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("Low Stock Report - {}\n", timestamp));
    out.push_str(RULE);
    out.push('\n');
    let lines = low_stock_lines(products, opts);
    if lines.is_empty() {
        out.push_str(NONE_LOW_MESSAGE);
        out.push('\n');
    } else {
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out.push_str(RULE);
    out.push_str("\n\n");
    out
}

/// The CSV export: header, one row per product, blank line, summary row.
pub fn csv_export(products: &[Product], opts: &ReportOptions) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');
    for product in products {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            product.name,
            product.quantity,
            product.price,
            product.last_updated,
            product.total_value()
        ));
    }
    out.push('\n');
    out.push_str(&format!(
        "Total Inventory Value,,,,{}{:.2}\n",
        opts.currency,
        total_inventory_value(products)
    ));
    out
}

//! # Storage Layer
//!
//! This module defines the storage abstraction for stocktake. The
//! [`StockStore`] trait covers the three persisted surfaces:
//!
//! - the **inventory file**: one encoded product per line, no header,
//!   rewritten wholesale after every mutation
//! - the **low-stock report file**: append-only, one dated section per call
//! - the **CSV export file**: rewritten wholesale on each export
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. File handles are
//!   scoped per call: opened, written, and released before returning.
//! - [`memory::InMemoryStore`]: In-memory text buffers for testing, no
//!   filesystem needed.
//!
//! ## Load behavior
//!
//! A missing inventory file is not an error; it yields an empty collection.
//! Lines that do not decode (wrong field count, non-numeric quantity or
//! price) are skipped and reported in [`LoadReport::skipped`] rather than
//! dropped silently or treated as fatal.

use crate::codec;
use crate::config::StockConfig;
use crate::error::Result;
use crate::model::Product;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// File locations for the three persisted surfaces.
///
/// Passed in at construction instead of being process-wide constants so
/// tests can point a store at a temporary directory.
#[derive(Debug, Clone)]
pub struct StockPaths {
    pub inventory: PathBuf,
    pub low_stock_report: PathBuf,
    pub csv_export: PathBuf,
}

impl StockPaths {
    pub fn from_config(base: &Path, config: &StockConfig) -> Self {
        Self {
            inventory: base.join(&config.inventory_file),
            low_stock_report: base.join(&config.low_stock_file),
            csv_export: base.join(&config.export_file),
        }
    }

    /// The classic file names, rooted at `base`.
    pub fn in_dir(base: &Path) -> Self {
        Self::from_config(base, &StockConfig::default())
    }
}

/// Result of reading the persisted inventory file.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub products: Vec<Product>,
    /// One human-readable note per line that failed to decode.
    pub skipped: Vec<String>,
}

/// Abstract interface for inventory persistence.
pub trait StockStore {
    /// Read the persisted inventory. A missing file yields an empty report.
    fn load(&self) -> Result<LoadReport>;

    /// Rewrite the persisted inventory wholesale, one line per product.
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Append one dated section to the low-stock report file.
    fn append_low_stock(&mut self, section: &str) -> Result<()>;

    /// Overwrite the CSV export file.
    fn write_export(&mut self, csv: &str) -> Result<()>;
}

/// Decode raw inventory file content, skipping lines that do not parse.
pub(crate) fn decode_lines(content: &str) -> LoadReport {
    let mut report = LoadReport::default();
    for (lineno, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match codec::decode(line) {
            Ok(product) => report.products.push(product),
            Err(e) => report.skipped.push(format!("line {}: {}", lineno + 1, e)),
        }
    }
    report
}

/// Serialize the collection to raw inventory file content.
pub(crate) fn encode_lines(products: &[Product]) -> String {
    let mut out = String::new();
    for product in products {
        out.push_str(&codec::encode(product));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_lines_keeps_well_formed_and_skips_malformed() {
        let content = "Widget,10,2.5,2024-06-01 12:30:00\nBroken,3\nGizmo,ten,1.0,2024-06-01 12:30:00\n";
        let report = decode_lines(content);
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.products[0].name, "Widget");
        assert_eq!(report.skipped.len(), 2);
        assert!(report.skipped[0].starts_with("line 2:"));
        assert!(report.skipped[1].starts_with("line 3:"));
    }

    #[test]
    fn encode_then_decode_round_trips_the_collection() {
        let products = vec![
            Product::from_parts("Widget".into(), 10, 2.5, "2024-06-01 12:30:00".into()),
            Product::from_parts("Gizmo".into(), 3, 9.99, "2024-06-02 08:00:00".into()),
        ];
        let report = decode_lines(&encode_lines(&products));
        assert_eq!(report.products, products);
        assert!(report.skipped.is_empty());
    }
}

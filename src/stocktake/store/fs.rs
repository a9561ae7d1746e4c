use super::{decode_lines, encode_lines, LoadReport, StockPaths, StockStore};
use crate::error::Result;
use crate::model::Product;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Production storage: three plain-text files under a base directory.
pub struct FileStore {
    paths: StockPaths,
}

impl FileStore {
    pub fn new(paths: StockPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &StockPaths {
        &self.paths
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl StockStore for FileStore {
    fn load(&self) -> Result<LoadReport> {
        if !self.paths.inventory.exists() {
            return Ok(LoadReport::default());
        }
        let content = fs::read_to_string(&self.paths.inventory)?;
        Ok(decode_lines(&content))
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        Self::ensure_parent(&self.paths.inventory)?;
        fs::write(&self.paths.inventory, encode_lines(products))?;
        Ok(())
    }

    fn append_low_stock(&mut self, section: &str) -> Result<()> {
        Self::ensure_parent(&self.paths.low_stock_report)?;
        // Handle is dropped (and flushed) at the end of the call.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.paths.low_stock_report)?;
        file.write_all(section.as_bytes())?;
        Ok(())
    }

    fn write_export(&mut self, csv: &str) -> Result<()> {
        Self::ensure_parent(&self.paths.csv_export)?;
        fs::write(&self.paths.csv_export, csv)?;
        Ok(())
    }
}

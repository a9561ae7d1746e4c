use super::{decode_lines, encode_lines, LoadReport, StockStore};
use crate::error::{Result, StockError};
use crate::model::Product;

/// In-memory storage for testing. Holds the raw text of the three surfaces
/// so tests can assert on exactly what would land on disk.
#[derive(Default)]
pub struct InMemoryStore {
    inventory: Option<String>,
    low_stock: String,
    export: String,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the inventory surface, as if the file already existed.
    pub fn with_inventory(content: &str) -> Self {
        Self {
            inventory: Some(content.to_string()),
            ..Self::default()
        }
    }

    /// Make every write fail with an IO error; reads keep working.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn inventory_text(&self) -> Option<&str> {
        self.inventory.as_deref()
    }

    pub fn low_stock_text(&self) -> &str {
        &self.low_stock
    }

    pub fn export_text(&self) -> &str {
        &self.export
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(StockError::Io(std::io::Error::other("writes disabled")));
        }
        Ok(())
    }
}

impl StockStore for InMemoryStore {
    fn load(&self) -> Result<LoadReport> {
        match &self.inventory {
            Some(content) => Ok(decode_lines(content)),
            None => Ok(LoadReport::default()),
        }
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.check_writable()?;
        self.inventory = Some(encode_lines(products));
        Ok(())
    }

    fn append_low_stock(&mut self, section: &str) -> Result<()> {
        self.check_writable()?;
        self.low_stock.push_str(section);
        Ok(())
    }

    fn write_export(&mut self, csv: &str) -> Result<()> {
        self.check_writable()?;
        self.export = csv.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        let report = InMemoryStore::new().load().unwrap();
        assert!(report.products.is_empty());
    }

    #[test]
    fn seeded_store_loads_products() {
        let store = InMemoryStore::with_inventory("Widget,10,2.5,2024-06-01 12:30:00\n");
        let report = store.load().unwrap();
        assert_eq!(report.products.len(), 1);
        assert_eq!(report.products[0].name, "Widget");
    }

    #[test]
    fn failing_store_rejects_writes_but_still_loads() {
        let mut store =
            InMemoryStore::with_inventory("Widget,10,2.5,2024-06-01 12:30:00\n").failing_writes();
        assert!(store.load().is_ok());
        assert!(store.save(&[]).is_err());
        assert!(store.append_low_stock("x").is_err());
        assert!(store.write_export("x").is_err());
    }
}

use crate::error::{Result, StockError};
use crate::model::DEFAULT_LOW_STOCK_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";
const DEFAULT_LOW_STOCK_FILE: &str = "low_stock_report.txt";
const DEFAULT_EXPORT_FILE: &str = "inventory_report.csv";
const DEFAULT_CURRENCY: &str = "₹";

/// Configuration for stocktake, stored as config.json next to the data files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockConfig {
    /// Name of the persisted inventory file
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    /// Name of the append-only low-stock report file
    #[serde(default = "default_low_stock_file")]
    pub low_stock_file: String,

    /// Name of the CSV export file
    #[serde(default = "default_export_file")]
    pub export_file: String,

    /// Currency glyph used in human-readable reports
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Quantity at or below which a product counts as low stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

fn default_low_stock_file() -> String {
    DEFAULT_LOW_STOCK_FILE.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            low_stock_file: default_low_stock_file(),
            export_file: default_export_file(),
            currency: default_currency(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn keys() -> [&'static str; 5] {
        [
            "inventory-file",
            "low-stock-file",
            "export-file",
            "currency",
            "low-stock-threshold",
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "inventory-file" => Some(self.inventory_file.clone()),
            "low-stock-file" => Some(self.low_stock_file.clone()),
            "export-file" => Some(self.export_file.clone()),
            "currency" => Some(self.currency.clone()),
            "low-stock-threshold" => Some(self.low_stock_threshold.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "inventory-file" => self.inventory_file = value.to_string(),
            "low-stock-file" => self.low_stock_file = value.to_string(),
            "export-file" => self.export_file = value.to_string(),
            "currency" => self.currency = value.to_string(),
            "low-stock-threshold" => {
                self.low_stock_threshold = value
                    .parse()
                    .map_err(|_| StockError::Input(format!("Invalid threshold: {}", value)))?;
            }
            other => {
                return Err(StockError::Input(format!("Unknown config key: {}", other)));
            }
        }
        Ok(())
    }
}

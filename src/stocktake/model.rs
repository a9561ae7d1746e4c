use chrono::Local;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A product with this many units or fewer counts as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    // Kept as the formatted string so a load/save round-trip is byte-exact.
    pub last_updated: String,
}

impl Product {
    pub fn new(name: String, quantity: u32, price: f64) -> Self {
        Self {
            name,
            quantity,
            price,
            last_updated: timestamp_now(),
        }
    }

    /// Rebuild a product from decoded fields, keeping the stored timestamp.
    pub fn from_parts(name: String, quantity: u32, price: f64, last_updated: String) -> Self {
        Self {
            name,
            quantity,
            price,
            last_updated,
        }
    }

    /// Overwrite quantity and price, refreshing the timestamp.
    pub fn set_stock(&mut self, quantity: u32, price: f64) {
        self.quantity = quantity;
        self.price = price;
        self.last_updated = timestamp_now();
    }

    pub fn total_value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity <= threshold
    }
}

pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

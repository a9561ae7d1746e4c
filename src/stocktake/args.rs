use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stocktake::api::SortKey;

#[derive(Parser, Debug)]
#[command(name = "stocktake")]
#[command(about = "File-backed stock inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the inventory files
    #[arg(short, long, global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Skip the startup low-stock alert (no report file append)
    #[arg(long, global = true)]
    pub no_alert: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a")]
    Add {
        name: String,
        quantity: u32,
        price: f64,
    },

    /// Update quantity and price of an existing product
    #[command(alias = "u")]
    Update {
        name: String,
        quantity: u32,
        price: f64,
    },

    /// Delete a product (removes all case-insensitive name matches)
    #[command(alias = "rm")]
    Delete { name: String },

    /// Find a product by exact name (any case)
    #[command(alias = "s")]
    Search { name: String },

    /// Print the full inventory report
    #[command(alias = "r")]
    Report,

    /// Print the low-stock report
    LowStock {
        /// Also append a dated section to the report file
        #[arg(long)]
        save: bool,
    },

    /// Reorder the inventory (the new order is persisted)
    Sort {
        #[arg(value_enum)]
        key: SortKeyArg,
    },

    /// Export the inventory to CSV with a summary row
    Export,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., currency, low-stock-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SortKeyArg {
    /// Ascending, case-insensitive by name
    Name,
    /// Descending by total value
    Value,
}

impl From<SortKeyArg> for SortKey {
    fn from(key: SortKeyArg) -> Self {
        match key {
            SortKeyArg::Name => SortKey::Name,
            SortKeyArg::Value => SortKey::Value,
        }
    }
}

//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for any
//! UI. It owns the [`Inventory`] lifecycle (open once, then operate) and
//! dispatches to `commands/*.rs`; no business logic, no printing, no exit
//! codes here.
//!
//! `StockApi<S: StockStore>` is generic over the storage backend:
//! `StockApi<FileStore>` in production, `StockApi<InMemoryStore>` in tests.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;
use crate::report::ReportOptions;
use crate::store::StockStore;

pub use crate::commands::sort::SortKey;

pub struct StockApi<S: StockStore> {
    inventory: Inventory<S>,
    options: ReportOptions,
}

impl<S: StockStore> StockApi<S> {
    /// Open the store and load the persisted inventory. Load problems come
    /// back as warnings; the API is usable either way.
    pub fn open(store: S, options: ReportOptions) -> (Self, Vec<CmdMessage>) {
        let (inventory, warnings) = Inventory::open(store);
        (Self { inventory, options }, warnings)
    }

    /// The post-load low-stock check: renders the report and appends a
    /// dated section to the report file. A separate step rather than part
    /// of [`StockApi::open`] so callers and tests can skip the file append.
    pub fn startup_alert(&mut self) -> Result<CmdResult> {
        commands::low_stock::run(&mut self.inventory, &self.options, true)
    }

    pub fn add(&mut self, name: &str, quantity: u32, price: f64) -> Result<CmdResult> {
        commands::add::run(&mut self.inventory, name, quantity, price)
    }

    pub fn update(&mut self, name: &str, quantity: u32, price: f64) -> Result<CmdResult> {
        commands::update::run(&mut self.inventory, name, quantity, price)
    }

    pub fn delete(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.inventory, name)
    }

    pub fn search(&self, name: &str) -> Result<CmdResult> {
        commands::search::run(&self.inventory, name, &self.options)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.inventory, &self.options)
    }

    pub fn low_stock(&mut self, save: bool) -> Result<CmdResult> {
        commands::low_stock::run(&mut self.inventory, &self.options, save)
    }

    pub fn sort(&mut self, key: SortKey) -> Result<CmdResult> {
        commands::sort::run(&mut self.inventory, key)
    }

    pub fn export(&mut self) -> Result<CmdResult> {
        commands::export::run(&mut self.inventory, &self.options)
    }

    pub fn products(&self) -> &[Product] {
        self.inventory.products()
    }
}

//! The owned product collection and its persistence policy.
//!
//! [`Inventory`] loads the persisted file exactly once when opened and
//! rewrites it wholesale after every successful mutation (the command layer
//! calls [`Inventory::persist`] after changing the collection). Once open,
//! the in-memory collection is the source of truth: load and save problems
//! surface as warning messages, never as aborted operations.

use crate::commands::CmdMessage;
use crate::model::Product;
use crate::store::StockStore;

pub struct Inventory<S: StockStore> {
    products: Vec<Product>,
    store: S,
}

impl<S: StockStore> Inventory<S> {
    /// Open the inventory, loading whatever the store holds.
    ///
    /// Never fails: an unreadable file starts the process with an empty
    /// collection and a warning, and each malformed line is skipped with
    /// its own warning. A missing file is simply an empty collection.
    pub fn open(store: S) -> (Self, Vec<CmdMessage>) {
        let mut warnings = Vec::new();
        let products = match store.load() {
            Ok(report) => {
                for note in &report.skipped {
                    warnings.push(CmdMessage::warning(format!("Skipped inventory {}", note)));
                }
                report.products
            }
            Err(e) => {
                warnings.push(CmdMessage::warning(format!("Could not load inventory: {}", e)));
                Vec::new()
            }
        };
        (Self { products, store }, warnings)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut Vec<Product> {
        &mut self.products
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Rewrite the persisted file from the in-memory collection.
    ///
    /// A failed write comes back as a warning message for the caller to
    /// attach to its result; the mutation itself stands.
    pub fn persist(&mut self) -> Option<CmdMessage> {
        match self.store.save(&self.products) {
            Ok(()) => None,
            Err(e) => Some(CmdMessage::warning(format!("Could not save inventory: {}", e))),
        }
    }

    /// First product whose name matches case-insensitively.
    pub fn find(&self, name: &str) -> Option<&Product> {
        let needle = name.to_lowercase();
        self.products.iter().find(|p| p.name.to_lowercase() == needle)
    }

    /// Mutable variant of [`Inventory::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Product> {
        let needle = name.to_lowercase();
        self.products
            .iter_mut()
            .find(|p| p.name.to_lowercase() == needle)
    }
}

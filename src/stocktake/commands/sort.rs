use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StockStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending, case-insensitive by name.
    Name,
    /// Descending by total value (quantity × price).
    Value,
}

/// Reorder the collection in place (stable sort) and persist the new order.
pub fn run<S: StockStore>(inv: &mut Inventory<S>, key: SortKey) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match key {
        SortKey::Name => {
            inv.products_mut()
                .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            result.add_message(CmdMessage::success("Products sorted by name."));
        }
        SortKey::Value => {
            inv.products_mut()
                .sort_by(|a, b| b.total_value().total_cmp(&a.total_value()));
            result.add_message(CmdMessage::success("Products sorted by total value."));
        }
    }
    if let Some(warning) = inv.persist() {
        result.add_message(warning);
    }
    Ok(result)
}

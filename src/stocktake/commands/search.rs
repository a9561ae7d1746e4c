use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::report::{self, ReportOptions};
use crate::store::StockStore;

/// Case-insensitive exact-name lookup. Returns the first match, rendered
/// as a report line; read-only, never persists.
pub fn run<S: StockStore>(
    inv: &Inventory<S>,
    name: &str,
    opts: &ReportOptions,
) -> Result<CmdResult> {
    match inv.find(name) {
        Some(product) => Ok(CmdResult::default()
            .with_products(vec![product.clone()])
            .with_rendered(format!("Found: {}", report::product_line(product, opts)))),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!("Product not found: {}", name)));
            Ok(result)
        }
    }
}

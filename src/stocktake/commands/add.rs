use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::Product;
use crate::store::StockStore;

/// Append a new product, timestamped now, and persist the collection.
/// Always succeeds; duplicate names are tolerated.
pub fn run<S: StockStore>(
    inv: &mut Inventory<S>,
    name: &str,
    quantity: u32,
    price: f64,
) -> Result<CmdResult> {
    let product = Product::new(name.to_string(), quantity, price);
    inv.products_mut().push(product.clone());

    let mut result = CmdResult::default().with_products(vec![product]);
    result.add_message(CmdMessage::success(format!("Product added: {}", name)));
    if let Some(warning) = inv.persist() {
        result.add_message(warning);
    }
    Ok(result)
}

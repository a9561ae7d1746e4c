use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StockStore;

/// Overwrite quantity and price of the *first* case-insensitive name match,
/// refreshing its timestamp, and persist. No match means no write.
pub fn run<S: StockStore>(
    inv: &mut Inventory<S>,
    name: &str,
    quantity: u32,
    price: f64,
) -> Result<CmdResult> {
    let updated = inv.find_mut(name).map(|product| {
        product.set_stock(quantity, price);
        product.clone()
    });

    let mut result = CmdResult::default();
    match updated {
        Some(product) => {
            result.add_message(CmdMessage::success(format!(
                "Stock updated: {}",
                product.name
            )));
            result.products.push(product);
            if let Some(warning) = inv.persist() {
                result.add_message(warning);
            }
        }
        None => {
            result.add_message(CmdMessage::error(format!("Product not found: {}", name)));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    const SEEDED: &str =
        "Widget,10,2.5,2024-06-01 12:30:00\nWIDGET,7,1.0,2024-06-02 08:00:00\n";

    #[test]
    fn update_touches_only_the_first_match() {
        let (mut inv, _) = Inventory::open(InMemoryStore::with_inventory(SEEDED));
        run(&mut inv, "widget", 3, 2.5).unwrap();

        assert_eq!(inv.products()[0].quantity, 3);
        // The duplicate keeps its old stock.
        assert_eq!(inv.products()[1].quantity, 7);
    }

    #[test]
    fn update_refreshes_the_timestamp() {
        let (mut inv, _) = Inventory::open(InMemoryStore::with_inventory(SEEDED));
        run(&mut inv, "Widget", 3, 2.5).unwrap();
        assert_ne!(inv.products()[0].last_updated, "2024-06-01 12:30:00");
    }

    #[test]
    fn not_found_reports_without_writing() {
        let (mut inv, _) = Inventory::open(InMemoryStore::with_inventory(SEEDED));
        let result = run(&mut inv, "Gizmo", 1, 1.0).unwrap();

        assert!(!result.is_clean());
        assert!(result.products.is_empty());
        // The persisted text is untouched.
        assert_eq!(inv.store_mut().inventory_text(), Some(SEEDED));
    }
}

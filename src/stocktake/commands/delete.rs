use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::StockStore;

/// Remove *all* case-insensitive name matches (unlike update/search, which
/// stop at the first) and persist if anything was removed.
pub fn run<S: StockStore>(inv: &mut Inventory<S>, name: &str) -> Result<CmdResult> {
    let needle = name.to_lowercase();
    let before = inv.products().len();
    inv.products_mut().retain(|p| p.name.to_lowercase() != needle);
    let removed = before - inv.products().len();

    let mut result = CmdResult::default();
    if removed == 0 {
        result.add_message(CmdMessage::error(format!("Product not found: {}", name)));
        return Ok(result);
    }

    result.add_message(CmdMessage::success(format!(
        "Product deleted: {} ({} record{})",
        name,
        removed,
        if removed == 1 { "" } else { "s" }
    )));
    if let Some(warning) = inv.persist() {
        result.add_message(warning);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn delete_removes_every_case_insensitive_match() {
        let store = InMemoryStore::with_inventory(
            "Widget,10,2.5,2024-06-01 12:30:00\nGizmo,1,1.0,2024-06-01 12:30:00\nWIDGET,7,1.0,2024-06-02 08:00:00\n",
        );
        let (mut inv, _) = Inventory::open(store);

        run(&mut inv, "widget").unwrap();

        assert_eq!(inv.products().len(), 1);
        assert_eq!(inv.products()[0].name, "Gizmo");
        assert!(inv.find("Widget").is_none());
    }

    #[test]
    fn delete_persists_the_shrunk_collection() {
        let store = InMemoryStore::with_inventory("Widget,10,2.5,2024-06-01 12:30:00\n");
        let (mut inv, _) = Inventory::open(store);

        run(&mut inv, "Widget").unwrap();
        assert_eq!(inv.store_mut().inventory_text(), Some(""));
    }

    #[test]
    fn not_found_reports_without_writing() {
        let store = InMemoryStore::with_inventory("Widget,10,2.5,2024-06-01 12:30:00\n");
        let (mut inv, _) = Inventory::open(store);

        let result = run(&mut inv, "Gizmo").unwrap();
        assert!(!result.is_clean());
        assert_eq!(inv.products().len(), 1);
        assert_eq!(
            inv.store_mut().inventory_text(),
            Some("Widget,10,2.5,2024-06-01 12:30:00\n")
        );
    }
}

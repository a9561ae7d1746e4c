use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::report::{self, ReportOptions};
use crate::store::StockStore;

/// The full inventory report. An empty collection produces a distinct
/// message instead of a report body.
pub fn run<S: StockStore>(inv: &Inventory<S>, opts: &ReportOptions) -> Result<CmdResult> {
    if inv.products().is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(report::EMPTY_MESSAGE));
        return Ok(result);
    }
    Ok(CmdResult::default().with_rendered(report::full_report(inv.products(), opts)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_inventory_yields_message_and_no_body() {
        let (inv, _) = Inventory::open(InMemoryStore::new());
        let result = run(&inv, &Default::default()).unwrap();
        assert!(result.rendered.is_none());
        assert_eq!(result.messages[0].content, report::EMPTY_MESSAGE);
    }

    #[test]
    fn report_body_carries_products_and_total() {
        let store = InMemoryStore::with_inventory(
            "Widget,10,2.5,2024-06-01 12:30:00\nGizmo,3,10.0,2024-06-01 12:30:00\n",
        );
        let (inv, _) = Inventory::open(store);
        let result = run(&inv, &Default::default()).unwrap();
        let body = result.rendered.unwrap();
        assert!(body.contains("Widget"));
        assert!(body.contains("Total Inventory Value: ₹55.00"));
    }
}

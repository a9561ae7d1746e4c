use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::report::{self, ReportOptions};
use crate::store::StockStore;

/// Overwrite the CSV export file: header, one row per product, blank line,
/// then the grand-total summary row.
pub fn run<S: StockStore>(inv: &mut Inventory<S>, opts: &ReportOptions) -> Result<CmdResult> {
    let csv = report::csv_export(inv.products(), opts);
    let mut result = CmdResult::default();
    match inv.store_mut().write_export(&csv) {
        Ok(()) => result.add_message(CmdMessage::success("Inventory exported with summary row.")),
        Err(e) => result.add_message(CmdMessage::warning(format!("Could not export CSV: {}", e))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn export_writes_header_rows_and_summary() {
        let store = InMemoryStore::with_inventory(
            "Widget,10,2.5,2024-06-01 12:30:00\nGizmo,3,10.0,2024-06-01 12:30:00\n",
        );
        let (mut inv, _) = Inventory::open(store);

        run(&mut inv, &Default::default()).unwrap();

        let text = inv.store_mut().export_text();
        assert!(text.starts_with(report::CSV_HEADER));
        assert!(text.ends_with("Total Inventory Value,,,,₹55.00\n"));
    }

    #[test]
    fn failed_export_is_a_warning_not_an_error() {
        let store = InMemoryStore::new().failing_writes();
        let (mut inv, _) = Inventory::open(store);

        let result = run(&mut inv, &Default::default()).unwrap();
        assert!(!result.is_clean());
    }
}

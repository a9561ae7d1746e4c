use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::timestamp_now;
use crate::report::{self, ReportOptions};
use crate::store::StockStore;

/// The low-stock report. With `save`, a dated section is also appended to
/// the report file; prior sections are never touched.
pub fn run<S: StockStore>(
    inv: &mut Inventory<S>,
    opts: &ReportOptions,
    save: bool,
) -> Result<CmdResult> {
    let mut result =
        CmdResult::default().with_rendered(report::low_stock_report(inv.products(), opts));

    if save {
        let section = report::low_stock_section(inv.products(), opts, &timestamp_now());
        match inv.store_mut().append_low_stock(&section) {
            Ok(()) => result.add_message(CmdMessage::success("Low stock report appended.")),
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "Could not write low stock report: {}",
                e
            ))),
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::update;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn report_tracks_the_threshold_across_updates() {
        let store = InMemoryStore::with_inventory("Widget,10,2.5,2024-06-01 12:30:00\n");
        let (mut inv, _) = Inventory::open(store);

        update::run(&mut inv, "Widget", 3, 2.5).unwrap();
        let result = run(&mut inv, &Default::default(), false).unwrap();
        assert!(result.rendered.unwrap().contains("Widget"));

        update::run(&mut inv, "Widget", 6, 2.5).unwrap();
        let result = run(&mut inv, &Default::default(), false).unwrap();
        assert!(!result.rendered.unwrap().contains("Widget"));
    }

    #[test]
    fn no_low_products_yields_the_none_low_message() {
        let store = InMemoryStore::with_inventory("Widget,10,2.5,2024-06-01 12:30:00\n");
        let (mut inv, _) = Inventory::open(store);

        let result = run(&mut inv, &Default::default(), false).unwrap();
        assert!(result.rendered.unwrap().contains(report::NONE_LOW_MESSAGE));
    }

    #[test]
    fn saving_twice_appends_two_distinct_sections() {
        let store = InMemoryStore::with_inventory("Widget,2,2.5,2024-06-01 12:30:00\n");
        let (mut inv, _) = Inventory::open(store);

        run(&mut inv, &Default::default(), true).unwrap();
        run(&mut inv, &Default::default(), true).unwrap();

        let text = inv.store_mut().low_stock_text();
        assert_eq!(text.matches("Low Stock Report - ").count(), 2);
        assert_eq!(text.matches("\n\n").count(), 2);
    }

    #[test]
    fn failed_append_is_a_warning_with_the_report_still_rendered() {
        let store = InMemoryStore::with_inventory("Widget,2,2.5,2024-06-01 12:30:00\n")
            .failing_writes();
        let (mut inv, _) = Inventory::open(store);

        let result = run(&mut inv, &Default::default(), true).unwrap();
        assert!(result.rendered.is_some());
        assert!(!result.is_clean());
    }
}

use ratatui::widgets::{Cell, Row};
use waybill_catalog::ShipmentEvent;

use crate::style::Theme;

/// Build table rows for the event history, in authored order.
///
/// Dates render dimmed next to the narrative text, mirroring the original
/// two-column timeline.
#[must_use]
pub fn build_event_rows<'a>(events: &'a [ShipmentEvent], theme: &Theme) -> Vec<Row<'a>> {
	events
		.iter()
		.map(|event| {
			Row::new([
				Cell::from(event.date.as_str()).style(theme.empty),
				Cell::from(event.description.as_str()),
			])
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use waybill_catalog::Catalog;

	use super::*;

	#[test]
	fn one_row_per_event_in_stored_order() {
		let catalog = Catalog::seeded();
		let record = catalog.lookup("REF456AU").expect("record");
		let rows = build_event_rows(&record.events, &Theme::default());
		assert_eq!(rows.len(), record.events.len());
	}
}

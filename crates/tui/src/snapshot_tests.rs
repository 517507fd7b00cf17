use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use waybill_catalog::{Catalog, ShipmentEvent, ShipmentRecord};

use crate::App;

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn draw(app: &mut App) -> String {
	let backend = TestBackend::new(120, 30);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw(frame))
		.expect("draw test frame");
	buffer_to_string(terminal.backend().buffer())
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		app.handle_key(KeyEvent::from(KeyCode::Char(ch)));
	}
}

fn search(app: &mut App) {
	app.handle_key(KeyEvent::from(KeyCode::Enter));
}

#[test]
fn found_panel_shows_delivered_record_without_eta() {
	let mut app = App::new(Catalog::seeded());
	type_text(&mut app, "ref123au");
	search(&mut app);

	let screen = draw(&mut app);
	assert!(screen.contains("REF123AU"), "normalized reference in field");
	assert!(screen.contains("Consumer Electronics"));
	assert!(screen.contains("Oz Logistics"));
	assert!(screen.contains("45 Warehouse Road, Melbourne VIC 3000"));
	assert!(screen.contains("Delivered"));
	assert!(
		!screen.contains("Est. delivery"),
		"delivered shipments carry no estimated-delivery line"
	);
	assert!(screen.contains("Tracking history"));
	assert!(screen.contains("Out for delivery in Melbourne"));
	assert!(screen.contains("Delivered to 45 Warehouse Road, Melbourne VIC 3000"));
}

#[test]
fn in_transit_record_shows_estimated_delivery() {
	let mut app = App::new(Catalog::seeded());
	type_text(&mut app, "REF456AU");
	search(&mut app);

	let screen = draw(&mut app);
	assert!(screen.contains("In transit"));
	assert!(screen.contains("Est. delivery"));
	assert!(screen.contains("19/10/2024, 08:30 AM"));
	assert!(screen.contains("Pickup failed at ACME Distribution Pty Ltd"));
}

#[test]
fn not_found_notice_quotes_the_reference() {
	let mut app = App::new(Catalog::seeded());
	type_text(&mut app, "zzz000");
	search(&mut app);

	let screen = draw(&mut app);
	assert!(screen.contains("No shipment found with reference number: ZZZ000"));
	assert!(!screen.contains("Shipment details"));
	assert!(!screen.contains("Tracking history"));
}

#[test]
fn empty_search_shows_only_the_search_control() {
	let mut app = App::new(Catalog::seeded());
	search(&mut app);

	let screen = draw(&mut app);
	assert!(!screen.contains("No shipment found"));
	assert!(!screen.contains("Shipment details"));
	assert!(screen.contains("press Enter to track"));
}

#[test]
fn panel_persists_while_editing_until_next_search() {
	let mut app = App::new(Catalog::seeded());
	type_text(&mut app, "REF123AU");
	search(&mut app);
	type_text(&mut app, "x");

	let screen = draw(&mut app);
	assert!(
		screen.contains("Oz Logistics"),
		"edit alone must not clear the displayed record"
	);
	assert!(!screen.contains("No shipment found"));

	search(&mut app);
	let screen = draw(&mut app);
	assert!(screen.contains("No shipment found with reference number: REF123AUX"));
	assert!(!screen.contains("Oz Logistics"));
}

#[test]
fn unrecognized_status_renders_with_default_badge() {
	let entries = [(
		"REF000AU".to_string(),
		ShipmentRecord {
			cargo_type: "Machine Parts".to_string(),
			delivery_address: "2 Border Rd, Darwin NT 0800".to_string(),
			carrier_name: "Top End Haulage".to_string(),
			status: "Customs Hold".to_string(),
			estimated_delivery: Some("22/10/2024, 04:00 PM".to_string()),
			events: vec![ShipmentEvent::new(
				"19/10/2024, 11:00 AM",
				"Held at customs pending inspection",
			)],
		},
	)];
	let mut app = App::new(Catalog::from_entries(entries));
	type_text(&mut app, "REF000AU");
	search(&mut app);

	let screen = draw(&mut app);
	assert!(screen.contains("Customs Hold"));
	assert!(screen.contains("Held at customs pending inspection"));
	assert!(screen.contains("Est. delivery"));
}

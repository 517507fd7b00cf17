use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind,
};

use crate::TrackingOutcome;
use crate::components::point_in_rect;

use super::App;

impl App<'_> {
	/// Process a keyboard event and return an outcome when the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<TrackingOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome());
			}
			KeyCode::Enter => {
				self.execute_search();
			}
			KeyCode::Up => self.move_event_selection(false),
			KeyCode::Down => self.move_event_selection(true),
			KeyCode::PageUp => self.page_event_selection(false, 10),
			KeyCode::PageDown => self.page_event_selection(true, 10),
			_ => {
				if self.reference_input.input(key) {
					self.note_input_edited();
				}
			}
		}
		None
	}

	/// Process a mouse event; the wheel scrolls the history table.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		let over_events = self
			.events_area
			.is_some_and(|area| point_in_rect(mouse.column, mouse.row, area));
		if !over_events {
			return;
		}

		match mouse.kind {
			MouseEventKind::ScrollUp => self.move_event_selection(false),
			MouseEventKind::ScrollDown => self.move_event_selection(true),
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyCode;
	use waybill_catalog::Catalog;

	use super::*;
	use crate::ViewState;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::from(code)
	}

	#[test]
	fn enter_triggers_a_search() {
		let mut app = App::new(Catalog::seeded());
		for ch in "ref789au".chars() {
			assert!(app.handle_key(key(KeyCode::Char(ch))).is_none());
		}
		assert!(app.handle_key(key(KeyCode::Enter)).is_none());
		assert_eq!(app.view_state(), ViewState::Found);
	}

	#[test]
	fn escape_reports_the_outcome() {
		let mut app = App::new(Catalog::seeded());
		for ch in "REF123AU".chars() {
			app.handle_key(key(KeyCode::Char(ch)));
		}
		app.handle_key(key(KeyCode::Enter));

		let outcome = app.handle_key(key(KeyCode::Esc)).expect("outcome on exit");
		assert_eq!(outcome.reference, "REF123AU");
		assert!(outcome.record.is_some());
	}

	#[test]
	fn typing_after_a_hit_does_not_search() {
		let mut app = App::new(Catalog::seeded());
		for ch in "REF123AU".chars() {
			app.handle_key(key(KeyCode::Char(ch)));
		}
		app.handle_key(key(KeyCode::Enter));
		app.handle_key(key(KeyCode::Char('x')));

		// The stale panel stays visible until Enter resolves the edit.
		assert_eq!(app.view_state(), ViewState::Found);
		assert_eq!(app.reference_input.text(), "REF123AUX");
	}
}

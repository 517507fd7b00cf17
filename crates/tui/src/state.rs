//! Core state container for the tracker widget.

use ratatui::layout::Rect;
use ratatui::widgets::{ScrollbarState, TableState};
use waybill_catalog::{Catalog, ShipmentRecord};

use crate::TrackingOutcome;
use crate::config::UiLabels;
use crate::input::ReferenceInput;
use crate::style::{StyleConfig, Theme};

/// The three mutually-exclusive display states of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
	/// No search outcome to show; only the search control renders.
	Idle,
	/// The last search missed and the field is non-empty; a notice renders.
	NotFound,
	/// A record is on display; the details panel and history render.
	Found,
}

/// Aggregate state for the tracker UI.
///
/// The `App` owns the catalog it queries, the search input, and the view
/// flags that drive rendering. `result` is only ever set by an executed
/// search; edits to the input clear `searched` but deliberately leave
/// `result` alone, so the last found record stays on screen while the
/// user types a new reference.
#[derive(Debug)]
pub struct App<'a> {
	pub(crate) catalog: Catalog,
	/// Search field; its buffer is always uppercase.
	pub reference_input: ReferenceInput<'a>,
	pub(crate) searched: bool,
	pub(crate) result: Option<ShipmentRecord>,
	/// Selection state for the event-history table.
	pub(crate) events_state: TableState,
	pub(crate) events_scrollbar: ScrollbarState,
	/// Last known on-screen area of the history table, for mouse hit tests.
	pub(crate) events_area: Option<Rect>,
	pub(crate) labels: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
}

impl App<'_> {
	/// Construct an `App` querying the given catalog.
	#[must_use]
	pub fn new(catalog: Catalog) -> Self {
		let labels = UiLabels::default();
		let style = StyleConfig::default();
		let mut reference_input = ReferenceInput::new("");
		reference_input.apply_theme(&style.theme, &labels.placeholder);

		Self {
			catalog,
			reference_input,
			searched: false,
			result: None,
			events_state: TableState::default(),
			events_scrollbar: ScrollbarState::default(),
			events_area: None,
			labels,
			style,
		}
	}

	/// Replace the UI labels.
	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
		self.reference_input
			.apply_theme(&self.style.theme, &self.labels.placeholder);
	}

	/// Apply a new theme.
	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.reference_input
			.apply_theme(&self.style.theme, &self.labels.placeholder);
	}

	/// Prefill the search field, normalizing the reference.
	pub fn set_reference(&mut self, reference: &str) {
		self.reference_input = ReferenceInput::new(reference);
		self.reference_input
			.apply_theme(&self.style.theme, &self.labels.placeholder);
		self.searched = false;
	}

	/// Compute the current display state. Pure: rendering branches on this
	/// and nothing else.
	#[must_use]
	pub fn view_state(&self) -> ViewState {
		if self.result.is_some() {
			ViewState::Found
		} else if self.searched && !self.reference_input.is_empty() {
			ViewState::NotFound
		} else {
			ViewState::Idle
		}
	}

	/// The record currently on display, if any.
	#[must_use]
	pub fn current_record(&self) -> Option<&ShipmentRecord> {
		self.result.as_ref()
	}

	/// Execute a search for the current field contents.
	///
	/// Synchronous map lookup; a miss is a normal outcome and simply
	/// clears the displayed record.
	pub fn execute_search(&mut self) {
		self.searched = true;
		let reference = self.reference_input.text();
		self.result = self.catalog.lookup(reference).cloned();
		self.events_state = TableState::default();
		self.events_scrollbar = ScrollbarState::default();
	}

	/// Record that the search field was edited.
	///
	/// Clears `searched` so a stale not-found notice does not linger, but
	/// leaves `result` untouched until the next search resolves.
	pub(crate) fn note_input_edited(&mut self) {
		self.searched = false;
	}

	/// Number of events in the displayed record.
	pub(crate) fn event_count(&self) -> usize {
		self.result.as_ref().map_or(0, |record| record.events.len())
	}

	/// Move the history selection by one step, selecting the first row if
	/// nothing is selected yet.
	pub(crate) fn move_event_selection(&mut self, down: bool) {
		let len = self.event_count();
		if len == 0 {
			return;
		}
		let next = match self.events_state.selected() {
			None => 0,
			Some(selected) if down => (selected + 1).min(len - 1),
			Some(selected) => selected.saturating_sub(1),
		};
		self.events_state.select(Some(next));
	}

	/// Move the history selection by a page worth of rows.
	pub(crate) fn page_event_selection(&mut self, down: bool, step: usize) {
		let len = self.event_count();
		if len == 0 {
			return;
		}
		let current = self.events_state.selected().unwrap_or(0);
		let next = if down {
			(current + step).min(len - 1)
		} else {
			current.saturating_sub(step)
		};
		self.events_state.select(Some(next));
	}

	/// Snapshot the state for the exiting process to report.
	pub(crate) fn outcome(&self) -> TrackingOutcome {
		TrackingOutcome {
			reference: self.reference_input.text().to_string(),
			searched: self.searched,
			record: self.result.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyEvent};

	use super::*;

	fn app() -> App<'static> {
		App::new(Catalog::seeded())
	}

	fn type_text(app: &mut App, text: &str) {
		for ch in text.chars() {
			let changed = app.reference_input.input(KeyEvent::from(KeyCode::Char(ch)));
			if changed {
				app.note_input_edited();
			}
		}
	}

	#[test]
	fn starts_idle() {
		let app = app();
		assert_eq!(app.view_state(), ViewState::Idle);
		assert!(app.current_record().is_none());
	}

	#[test]
	fn lowercase_search_finds_seeded_record() {
		let mut app = app();
		type_text(&mut app, "ref123au");
		assert_eq!(app.reference_input.text(), "REF123AU");

		app.execute_search();
		assert_eq!(app.view_state(), ViewState::Found);
		let record = app.current_record().expect("record");
		assert_eq!(record.carrier_name, "Oz Logistics");
		assert_eq!(record.status, "Delivered");
		assert!(record.estimated_delivery.is_none());
		assert_eq!(record.events.len(), 4);
	}

	#[test]
	fn unknown_reference_goes_not_found() {
		let mut app = app();
		type_text(&mut app, "ZZZ000");
		app.execute_search();
		assert_eq!(app.view_state(), ViewState::NotFound);
		assert!(app.current_record().is_none());
	}

	#[test]
	fn empty_search_never_shows_not_found() {
		let mut app = app();
		app.execute_search();
		assert_eq!(app.view_state(), ViewState::Idle);

		// Even straight after a not-found search, clearing the field and
		// searching again suppresses the notice.
		type_text(&mut app, "X");
		app.execute_search();
		assert_eq!(app.view_state(), ViewState::NotFound);
		app.reference_input.input(KeyEvent::from(KeyCode::Backspace));
		app.note_input_edited();
		app.execute_search();
		assert_eq!(app.view_state(), ViewState::Idle);
	}

	#[test]
	fn editing_keeps_result_but_clears_searched() {
		let mut app = app();
		type_text(&mut app, "REF123AU");
		app.execute_search();
		assert_eq!(app.view_state(), ViewState::Found);

		// Typing after a hit: the panel must stay (result retained) while
		// the searched flag resets.
		type_text(&mut app, "X");
		assert!(!app.searched);
		assert_eq!(app.view_state(), ViewState::Found);
		assert!(app.current_record().is_some());

		// The next search resolves the edit: REF123AUX misses.
		app.execute_search();
		assert_eq!(app.view_state(), ViewState::NotFound);
		assert!(app.current_record().is_none());
	}

	#[test]
	fn editing_after_miss_hides_notice() {
		let mut app = app();
		type_text(&mut app, "NOPE");
		app.execute_search();
		assert_eq!(app.view_state(), ViewState::NotFound);

		type_text(&mut app, "X");
		assert_eq!(app.view_state(), ViewState::Idle);
	}

	#[test]
	fn search_resets_history_selection() {
		let mut app = app();
		type_text(&mut app, "REF456AU");
		app.execute_search();
		app.move_event_selection(true);
		app.move_event_selection(true);
		assert_eq!(app.events_state.selected(), Some(1));

		app.execute_search();
		assert_eq!(app.events_state.selected(), None);
	}

	#[test]
	fn event_selection_clamps_to_history() {
		let mut app = app();
		type_text(&mut app, "REF789AU");
		app.execute_search();

		for _ in 0..10 {
			app.move_event_selection(true);
		}
		assert_eq!(app.events_state.selected(), Some(3));

		app.page_event_selection(false, 10);
		assert_eq!(app.events_state.selected(), Some(0));
	}

	#[test]
	fn outcome_snapshots_current_state() {
		let mut app = app();
		type_text(&mut app, "REF456AU");
		app.execute_search();

		let outcome = app.outcome();
		assert_eq!(outcome.reference, "REF456AU");
		assert!(outcome.searched);
		assert_eq!(
			outcome.record.expect("record").status,
			"In transit"
		);
	}
}

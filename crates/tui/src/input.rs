//! Single-line reference-number input built on `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// The search field of the tracker widget.
///
/// Every typed character is uppercased before insertion so the buffer is
/// always a normalized lookup key. Editing keys (backspace, delete, arrow
/// movement, ctrl combinations) are delegated to the underlying textarea.
#[derive(Debug)]
pub struct ReferenceInput<'a> {
	textarea: TextArea<'a>,
}

impl ReferenceInput<'_> {
	/// Construct the input, normalizing any initial text.
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let mut textarea = TextArea::from([initial.to_uppercase()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current buffer contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map_or("", String::as_str)
	}

	/// Whether the buffer is empty.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.text().is_empty()
	}

	/// Feed a key event into the input.
	///
	/// Returns `true` when the buffer changed. Enter is not an edit; the
	/// caller treats it as the search trigger.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		match key.code {
			KeyCode::Enter => false,
			KeyCode::Char(ch)
				if !key
					.modifiers
					.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
			{
				for upper in ch.to_uppercase() {
					self.textarea.insert_char(upper);
				}
				true
			}
			_ => self.textarea.input(key),
		}
	}

	/// Apply theme styles to the placeholder and text.
	pub fn apply_theme(&mut self, theme: &Theme, placeholder: &str) {
		self.textarea.set_placeholder_text(placeholder);
		self.textarea.set_placeholder_style(theme.empty);
		self.textarea.set_style(Style::default());
	}

	/// Borrow the underlying widget for rendering.
	#[must_use]
	pub fn widget(&self) -> &TextArea<'_> {
		&self.textarea
	}
}

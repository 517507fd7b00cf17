use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::input::ReferenceInput;
use crate::style::Theme;

pub(crate) const PROMPT_SYMBOL: &str = "❯ ";

/// Everything needed to draw the search row.
pub struct InputContext<'a> {
	/// The reference-number input widget.
	pub input: &'a ReferenceInput<'a>,
	/// The single-line area to draw into.
	pub area: Rect,
	/// Active theme.
	pub theme: &'a Theme,
}

/// Render the prompt symbol followed by the search field.
pub fn render_input(frame: &mut Frame, ctx: InputContext<'_>) {
	let [symbol_area, field_area] = Layout::horizontal([
		Constraint::Length(PROMPT_SYMBOL.width() as u16),
		Constraint::Min(1),
	])
	.areas(ctx.area);

	let symbol = Paragraph::new(Span::styled(PROMPT_SYMBOL, ctx.theme.prompt));
	frame.render_widget(symbol, symbol_area);
	frame.render_widget(ctx.input.widget(), field_area);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Render the inline not-found notice for a searched reference.
///
/// The notice always carries the literal reference the user searched for;
/// rendering it is suppressed entirely for empty input, so callers only
/// reach this with a non-empty reference.
pub fn render_notice(frame: &mut Frame, area: Rect, reference: &str, theme: &Theme) {
	let line = Line::from(vec![
		Span::styled("No shipment found with reference number: ", theme.notice),
		Span::styled(reference.to_string(), theme.notice),
	]);
	frame.render_widget(Paragraph::new(line), area);
}

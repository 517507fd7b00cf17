//! Shared scrollbar rendering component.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollMetrics {
	/// Total number of items in the content.
	pub content_length: usize,
	/// Number of items visible in the viewport.
	pub viewport_len: usize,
	/// Whether content overflows and needs a scrollbar.
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Compute scroll metrics from content length and viewport height.
	///
	/// Returns default (empty) metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		let needs_scrollbar = content_length > viewport_len;

		Self {
			content_length,
			viewport_len,
			needs_scrollbar,
		}
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a themed vertical scrollbar on the right side of the given area.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
) {
	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset)));

	let sb_area = Rect {
		x: area.x + area.width.saturating_sub(1),
		y: area.y,
		width: 1,
		height: area.height,
	};

	frame.render_stateful_widget(scrollbar, sb_area, scrollbar_state);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn metrics_flag_overflowing_content() {
		let metrics = ScrollMetrics::compute(10, 4);
		assert!(metrics.needs_scrollbar);
		assert_eq!(metrics.viewport_len, 4);

		let metrics = ScrollMetrics::compute(3, 10);
		assert!(!metrics.needs_scrollbar);
		assert_eq!(metrics.viewport_len, 3);

		assert!(!ScrollMetrics::compute(0, 10).needs_scrollbar);
	}

	#[test]
	fn point_in_rect_excludes_edges_past_bounds() {
		let area = Rect::new(2, 2, 4, 3);
		assert!(point_in_rect(2, 2, area));
		assert!(point_in_rect(5, 4, area));
		assert!(!point_in_rect(6, 2, area));
		assert!(!point_in_rect(2, 5, area));
		assert!(!point_in_rect(0, 0, Rect::new(0, 0, 0, 0)));
	}
}

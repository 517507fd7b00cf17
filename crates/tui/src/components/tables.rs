use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Row, ScrollbarState, Table, TableState,
};

use crate::components::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: usize = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
}

/// Render the table inside a rounded border, with a scrollbar when the
/// rows overflow the viewport.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset)));

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	render_configured_table(frame, inner, table_state, scrollbar_state, theme, spec);
}

fn render_configured_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	theme: &Theme,
	spec: TableSpec<'_>,
) {
	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header_style = Style::default().fg(theme.header.fg.unwrap_or(ratatui::style::Color::Reset));
	let header = Row::new(header_cells)
		.style(header_style)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let available_rows = (area.height as usize).saturating_sub(TABLE_HEADER_ROWS);
	let metrics = ScrollMetrics::compute(spec.rows.len(), available_rows);

	let table_area = if metrics.needs_scrollbar {
		Rect {
			x: area.x,
			y: area.y,
			width: area.width.saturating_sub(1),
			height: area.height,
		}
	} else {
		area
	};

	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	if metrics.needs_scrollbar {
		let position = table_state.offset().min(metrics.content_length.saturating_sub(1));
		*scrollbar_state = scrollbar_state
			.content_length(metrics.content_length)
			.viewport_content_length(metrics.viewport_len)
			.position(position);
		render_scrollbar(frame, area, scrollbar_state, theme);
	}
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;
use waybill_catalog::ShipmentRecord;

use crate::style::Theme;

const CARGO_LABEL: &str = "Cargo type";
const CARRIER_LABEL: &str = "Carrier";
const ADDRESS_LABEL: &str = "Delivery address";
const STATUS_LABEL: &str = "Status";
const ETA_LABEL: &str = "Est. delivery";

/// Panel height for a record: bordered block around one line per field,
/// with the estimated-delivery line only when the record carries one.
#[must_use]
pub fn details_height(record: &ShipmentRecord) -> u16 {
	let mut lines = 4u16;
	if record.estimated_delivery.is_some() {
		lines += 1;
	}
	lines + 2
}

/// Render the labeled details panel for the displayed record.
pub fn render_details(
	frame: &mut Frame,
	area: Rect,
	record: &ShipmentRecord,
	title: &str,
	theme: &Theme,
) {
	let label_width = [CARGO_LABEL, CARRIER_LABEL, ADDRESS_LABEL, STATUS_LABEL, ETA_LABEL]
		.iter()
		.map(|label| label.width())
		.max()
		.unwrap_or(0);

	let mut lines = vec![
		field_line(CARGO_LABEL, &record.cargo_type, label_width, theme),
		field_line(CARRIER_LABEL, &record.carrier_name, label_width, theme),
		field_line(ADDRESS_LABEL, &record.delivery_address, label_width, theme),
		badge_line(&record.status, label_width, theme),
	];
	if let Some(estimated) = &record.estimated_delivery {
		lines.push(field_line(ETA_LABEL, estimated, label_width, theme));
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(style_from_fg(theme.header))
		.title(title.to_string());

	frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line<'a>(label: &str, value: &'a str, label_width: usize, theme: &Theme) -> Line<'a> {
	Line::from(vec![
		Span::styled(format!("{label:<label_width$}  "), theme.header),
		Span::raw(value),
	])
}

fn badge_line<'a>(status: &'a str, label_width: usize, theme: &Theme) -> Line<'a> {
	Line::from(vec![
		Span::styled(format!("{STATUS_LABEL:<label_width$}  "), theme.header),
		Span::styled(format!(" {status} "), theme.status_badge_style(status)),
	])
}

fn style_from_fg(style: Style) -> Style {
	Style::default().fg(style.fg.unwrap_or(ratatui::style::Color::Reset))
}

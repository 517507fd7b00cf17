use ratatui::style::Style;

/// A theme containing styles for the tracker's UI elements.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
	/// Style for header text and borders.
	pub header: Style,
	/// Style for the search prompt symbol.
	pub prompt: Style,
	/// Style for the highlighted history row.
	pub row_highlight: Style,
	/// Style for hints, placeholders, and dimmed text.
	pub empty: Style,
	/// Style for the not-found notice.
	pub notice: Style,
	/// Badge style for delivered shipments.
	pub badge_delivered: Style,
	/// Badge style for shipments in transit.
	pub badge_in_transit: Style,
	/// Badge style for any other status value.
	pub badge_default: Style,
}

impl Theme {
	/// Resolve the badge style for a status string.
	///
	/// Total over all inputs: statuses outside the two known values fall
	/// through to the neutral default treatment.
	#[must_use]
	pub fn status_badge_style(&self, status: &str) -> Style {
		match status {
			"Delivered" => self.badge_delivered,
			"In transit" => self.badge_in_transit,
			_ => self.badge_default,
		}
	}
}

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn badge_style_is_total() {
		let theme = Theme::default();
		assert_eq!(theme.status_badge_style("Delivered"), theme.badge_delivered);
		assert_eq!(
			theme.status_badge_style("In transit"),
			theme.badge_in_transit
		);
		// Unseen statuses take the neutral default rather than panicking.
		assert_eq!(
			theme.status_badge_style("Customs Hold"),
			theme.badge_default
		);
		assert_eq!(theme.status_badge_style(""), theme.badge_default);
	}
}

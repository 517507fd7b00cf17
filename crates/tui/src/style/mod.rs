//! Visual styling utilities.
//!
//! Themes are the color schemes applied to the tracker UI, including the
//! status badge treatments. Built-in themes are TOML documents embedded in
//! the binary and parsed at first use.

pub mod theme;

pub use theme::{Theme, ThemeRegistration, by_name, default_theme, theme_names};

/// Aggregate container for styling knobs. Additional visual tweaks can be
/// surfaced here over time while keeping themes focused on color schemes.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}

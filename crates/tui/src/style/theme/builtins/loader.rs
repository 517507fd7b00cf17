use anyhow::{Context, Result, bail};
use include_dir::{Dir, File};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
struct ThemeConfig {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: ThemeStylesConfig,
}

impl ThemeConfig {
	fn into_document(self, context: &str) -> Result<ThemeDocument> {
		let theme = self.styles.into_theme(&format!("{context}.styles"))?;

		let registration = self
			.aliases
			.into_iter()
			.map(|alias| alias.trim().to_string())
			.filter(|alias| !alias.is_empty())
			.fold(ThemeRegistration::new(self.name, theme), |registration, alias| {
				registration.alias(alias)
			});

		Ok(ThemeDocument {
			registration,
			is_default: self.default,
		})
	}
}

#[derive(Debug, Deserialize)]
struct ThemeStylesConfig {
	header: StyleConfig,
	prompt: StyleConfig,
	row_highlight: StyleConfig,
	empty: StyleConfig,
	notice: StyleConfig,
	badge_delivered: StyleConfig,
	badge_in_transit: StyleConfig,
	badge_default: StyleConfig,
}

impl ThemeStylesConfig {
	fn into_theme(self, context: &str) -> Result<Theme> {
		Ok(Theme {
			header: self.header.to_style(&format!("{context}.header"))?,
			prompt: self.prompt.to_style(&format!("{context}.prompt"))?,
			row_highlight: self
				.row_highlight
				.to_style(&format!("{context}.row_highlight"))?,
			empty: self.empty.to_style(&format!("{context}.empty"))?,
			notice: self.notice.to_style(&format!("{context}.notice"))?,
			badge_delivered: self
				.badge_delivered
				.to_style(&format!("{context}.badge_delivered"))?,
			badge_in_transit: self
				.badge_in_transit
				.to_style(&format!("{context}.badge_in_transit"))?,
			badge_default: self
				.badge_default
				.to_style(&format!("{context}.badge_default"))?,
		})
	}
}

struct ThemeDocument {
	registration: ThemeRegistration,
	is_default: bool,
}

#[derive(Debug, Deserialize)]
struct StyleConfig {
	#[serde(default)]
	fg: Option<String>,
	#[serde(default)]
	bg: Option<String>,
	#[serde(default)]
	modifiers: Vec<String>,
}

impl StyleConfig {
	fn to_style(&self, context: &str) -> Result<Style> {
		let mut style = Style::new();

		if let Some(fg) = &self.fg {
			let color = parse_color(fg)
				.with_context(|| format!("{context}: invalid foreground colour `{fg}`"))?;
			style = style.fg(color);
		}

		if let Some(bg) = &self.bg {
			let color = parse_color(bg)
				.with_context(|| format!("{context}: invalid background colour `{bg}`"))?;
			style = style.bg(color);
		}

		for modifier in &self.modifiers {
			let modifier_value = parse_modifier(modifier)
				.with_context(|| format!("{context}: invalid modifier `{modifier}`"))?;
			style = style.add_modifier(modifier_value);
		}

		Ok(style)
	}
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut registrations = Vec::new();
	let mut default_theme: Option<(Theme, String)> = None;

	let mut files: Vec<_> = dir.files().collect();
	files.sort_by(|a, b| a.path().cmp(b.path()));

	for file in files {
		let document = parse_theme_document(file)?;
		let theme = document.registration.theme;

		if document.is_default {
			if let Some((_, existing_name)) = &default_theme {
				bail!(
					"multiple built-in themes are marked as default (`{existing_name}` and `{}`)",
					document.registration.name
				);
			}

			default_theme = Some((theme, document.registration.name.clone()));
		}

		registrations.push(document.registration);
	}

	if registrations.is_empty() {
		bail!("no built-in theme definitions were found");
	}

	let default_theme = default_theme
		.map(|(theme, _)| theme)
		.or_else(|| registrations.first().map(|registration| registration.theme))
		.expect("at least one registration exists");

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

fn parse_theme_document(file: &File) -> Result<ThemeDocument> {
	let path = file.path();
	let contents = file
		.contents_utf8()
		.with_context(|| format!("built-in theme `{}` is not valid UTF-8", path.display()))?;

	let config: ThemeConfig = toml::from_str(contents)
		.with_context(|| format!("failed to parse built-in theme `{}`", path.display()))?;

	config.into_document(&path.display().to_string())
}

fn parse_color(value: &str) -> Result<Color> {
	let trimmed = value.trim();

	if let Some(hex) = trimmed.strip_prefix('#') {
		if hex.len() != 6 {
			bail!("hex colours must be in `#rrggbb` form");
		}
		let r = u8::from_str_radix(&hex[0..2], 16)?;
		let g = u8::from_str_radix(&hex[2..4], 16)?;
		let b = u8::from_str_radix(&hex[4..6], 16)?;
		return Ok(Color::Rgb(r, g, b));
	}

	let color = match trimmed.to_ascii_lowercase().as_str() {
		"black" => Color::Black,
		"red" => Color::Red,
		"green" => Color::Green,
		"yellow" => Color::Yellow,
		"blue" => Color::Blue,
		"magenta" => Color::Magenta,
		"cyan" => Color::Cyan,
		"gray" | "grey" => Color::Gray,
		"darkgray" | "darkgrey" => Color::DarkGray,
		"lightred" => Color::LightRed,
		"lightgreen" => Color::LightGreen,
		"lightyellow" => Color::LightYellow,
		"lightblue" => Color::LightBlue,
		"lightmagenta" => Color::LightMagenta,
		"lightcyan" => Color::LightCyan,
		"white" => Color::White,
		"reset" => Color::Reset,
		other => bail!("unknown colour name `{other}`"),
	};

	Ok(color)
}

fn parse_modifier(value: &str) -> Result<Modifier> {
	let modifier = match value.trim().to_ascii_lowercase().as_str() {
		"bold" => Modifier::BOLD,
		"dim" => Modifier::DIM,
		"italic" => Modifier::ITALIC,
		"underlined" => Modifier::UNDERLINED,
		"reversed" => Modifier::REVERSED,
		"crossed_out" => Modifier::CROSSED_OUT,
		other => bail!("unknown modifier `{other}`"),
	};

	Ok(modifier)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colours_parse_names_and_hex() {
		assert_eq!(parse_color("cyan").expect("named"), Color::Cyan);
		assert_eq!(parse_color("Grey").expect("alias"), Color::Gray);
		assert_eq!(
			parse_color("#1e2a3b").expect("hex"),
			Color::Rgb(0x1e, 0x2a, 0x3b)
		);
		assert!(parse_color("#12345").is_err());
		assert!(parse_color("chartreuse").is_err());
	}

	#[test]
	fn modifiers_parse_case_insensitively() {
		assert_eq!(parse_modifier("BOLD").expect("bold"), Modifier::BOLD);
		assert!(parse_modifier("blinking").is_err());
	}
}

use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

use crate::app_dirs;

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("waybill {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "waybill",
	version,
	long_version = long_version(),
	about = "Terminal shipment-tracking lookup",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `waybill` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "WAYBILL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'k',
		long,
		value_name = "FILE",
		env = "WAYBILL_CATALOG",
		help = "TOML catalog file to load instead of the seeded shipments"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 'r',
		long,
		value_name = "REF",
		help = "Reference number to prefill in the search field"
	)]
	pub(crate) reference: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "NAME",
		help = "UI theme name (see --list-themes)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-references",
		help = "List catalog reference numbers and exit"
	)]
	pub(crate) list_references: bool,
	#[arg(
		long = "print-config",
		help = "Print the effective configuration before launching"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Output format for the final result"
	)]
	pub(crate) output: OutputFormat,
}

/// How the final tracking outcome is printed on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// Human-readable summary lines.
	Plain,
	/// Pretty-printed JSON document.
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn output_format_defaults_to_plain() {
		let args = CliArgs::parse_from(["waybill"]);
		assert_eq!(args.output, OutputFormat::Plain);
		assert!(!args.no_config);
		assert!(args.catalog.is_none());
	}

	#[test]
	fn flags_parse() {
		let args = CliArgs::parse_from([
			"waybill",
			"--reference",
			"ref123au",
			"--theme",
			"paper",
			"-o",
			"json",
		]);
		assert_eq!(args.reference.as_deref(), Some("ref123au"));
		assert_eq!(args.theme.as_deref(), Some("paper"));
		assert_eq!(args.output, OutputFormat::Json);
	}
}

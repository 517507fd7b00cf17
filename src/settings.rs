use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use serde::Deserialize;
use waybill_catalog::normalize_reference;
use waybill_tui::UiLabels;

use crate::app_dirs;
use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	catalog: CatalogSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	reference: Option<String>,
	placeholder: Option<String>,
	hint: Option<String>,
	details_title: Option<String>,
	history_title: Option<String>,
}

/// Fully resolved configuration after merging files, environment, and CLI.
pub(crate) struct ResolvedConfig {
	pub(crate) catalog_path: Option<PathBuf>,
	pub(crate) theme: Option<String>,
	pub(crate) initial_reference: String,
	pub(crate) labels: UiLabels,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.catalog_path {
			Some(path) => println!("  Catalog: {}", path.display()),
			None => println!("  Catalog: (seeded fixtures)"),
		}
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		if !self.initial_reference.is_empty() {
			println!("  Initial reference: {}", self.initial_reference);
		}
		println!("  Placeholder: {}", self.labels.placeholder);
		println!("  Details title: {}", self.labels.details_title);
		println!("  History title: {}", self.labels.history_title);
	}
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve())
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("waybill")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".waybill.toml"));
		files.push(current_dir.join("waybill.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		if let Some(reference) = cli.reference.clone() {
			self.ui.reference = Some(reference);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
	}

	fn resolve(self) -> ResolvedConfig {
		let mut labels = UiLabels::default();
		if let Some(placeholder) = self.ui.placeholder {
			labels.placeholder = placeholder;
		}
		if let Some(hint) = self.ui.hint {
			labels.hint = hint;
		}
		if let Some(title) = self.ui.details_title {
			labels.details_title = title;
		}
		if let Some(title) = self.ui.history_title {
			labels.history_title = title;
		}

		ResolvedConfig {
			catalog_path: self.catalog.path,
			theme: self.ui.theme,
			initial_reference: self
				.ui
				.reference
				.as_deref()
				.map(normalize_reference)
				.unwrap_or_default(),
			labels,
		}
	}
}

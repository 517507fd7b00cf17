use anyhow::{Result, anyhow};
use waybill_catalog::{Catalog, load_catalog};
use waybill_tui::{App, TrackingOutcome, by_name};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive tracker.
#[derive(Debug)]
pub(crate) struct TrackingWorkflow {
	app: App<'static>,
}

impl TrackingWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let catalog = build_catalog(&config)?;

		let mut app = App::new(catalog);
		app.set_labels(config.labels);
		if let Some(name) = &config.theme {
			let theme =
				by_name(name).ok_or_else(|| anyhow!("unknown theme `{name}` (see --list-themes)"))?;
			app.set_theme(theme);
		}
		if !config.initial_reference.is_empty() {
			app.set_reference(&config.initial_reference);
		}

		Ok(Self { app })
	}

	pub(crate) fn run(mut self) -> Result<TrackingOutcome> {
		self.app.run()
	}
}

/// Build the catalog the tracker queries: a user-supplied TOML file when
/// configured, otherwise the compiled-in fixtures.
pub(crate) fn build_catalog(config: &ResolvedConfig) -> Result<Catalog> {
	match &config.catalog_path {
		Some(path) => Ok(load_catalog(path)?),
		None => Ok(Catalog::seeded()),
	}
}

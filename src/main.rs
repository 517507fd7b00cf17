mod app_dirs;
mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::TrackingWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in waybill_tui::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.list_references {
		let catalog = workflow::build_catalog(&resolved)?;
		for reference in catalog.references() {
			println!("{reference}");
		}
		return Ok(());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	run_tracker(cli.output, resolved)
}

/// Run the tracker UI and print the outcome in the chosen format.
fn run_tracker(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = TrackingWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

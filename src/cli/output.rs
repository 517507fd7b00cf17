use anyhow::Result;
use serde_json::json;
use waybill_tui::TrackingOutcome;

/// Print a plain-text representation of the tracking outcome.
pub(crate) fn print_plain(outcome: &TrackingOutcome) {
	match &outcome.record {
		Some(record) => {
			println!(
				"{}: {} via {} ({})",
				outcome.reference, record.cargo_type, record.carrier_name, record.status
			);
			println!("  Deliver to: {}", record.delivery_address);
			if let Some(estimated) = &record.estimated_delivery {
				println!("  Est. delivery: {estimated}");
			}
			for event in &record.events {
				println!("  {}  {}", event.date, event.description);
			}
		}
		None if outcome.reference.is_empty() => println!("No reference searched"),
		None if outcome.searched => {
			println!("No shipment found for '{}'", outcome.reference);
		}
		None => println!("Search not run (reference: '{}')", outcome.reference),
	}
}

/// Format the tracking outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &TrackingOutcome) -> Result<String> {
	let record = match &outcome.record {
		Some(record) => serde_json::to_value(record)?,
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"reference": outcome.reference,
		"searched": outcome.searched,
		"record": record,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the tracking outcome.
pub(crate) fn print_json(outcome: &TrackingOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use waybill_catalog::Catalog;

	use super::*;

	#[test]
	fn json_format_includes_the_record() {
		let catalog = Catalog::seeded();
		let outcome = TrackingOutcome {
			reference: "REF456AU".into(),
			searched: true,
			record: catalog.lookup("REF456AU").cloned(),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["reference"], "REF456AU");
		assert_eq!(value["searched"], true);
		assert_eq!(value["record"]["carrier_name"], "DG Trans");
		assert_eq!(value["record"]["estimated_delivery"], "19/10/2024, 08:30 AM");
		assert_eq!(
			value["record"]["events"]
				.as_array()
				.expect("events array")
				.len(),
			4
		);
	}

	#[test]
	fn json_format_represents_a_miss_as_null() {
		let outcome = TrackingOutcome {
			reference: "ZZZ000".into(),
			searched: true,
			record: None,
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["record"], Value::Null);
	}
}

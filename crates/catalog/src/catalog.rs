use indexmap::IndexMap;

use crate::record::ShipmentRecord;
use crate::seed;

/// Uppercase a reference number for use as a lookup key.
///
/// The catalog itself matches exactly; callers (the tracker widget, the
/// CLI) are expected to normalize before looking up.
#[must_use]
pub fn normalize_reference(input: &str) -> String {
	input.to_uppercase()
}

/// Read-only mapping from reference number to [`ShipmentRecord`].
///
/// Entries keep their insertion order so listings are deterministic. The
/// map is populated once at construction and never mutated afterwards; a
/// missed lookup is a normal outcome, not an error.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	entries: IndexMap<String, ShipmentRecord>,
}

impl Catalog {
	/// Build a catalog from already-normalized entries.
	#[must_use]
	pub fn new(entries: IndexMap<String, ShipmentRecord>) -> Self {
		Self { entries }
	}

	/// Collect entries into a catalog, keeping first-insertion order. Later
	/// duplicates of a reference replace earlier ones.
	pub fn from_entries<I>(entries: I) -> Self
	where
		I: IntoIterator<Item = (String, ShipmentRecord)>,
	{
		Self::new(entries.into_iter().collect())
	}

	/// The compiled-in fixture catalog: three shipments, four events each.
	#[must_use]
	pub fn seeded() -> Self {
		Self::new(seed::entries())
	}

	/// Look up a shipment by exact reference number.
	#[must_use]
	pub fn lookup(&self, reference: &str) -> Option<&ShipmentRecord> {
		self.entries.get(reference)
	}

	/// Iterate reference numbers in insertion order.
	pub fn references(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	/// Number of shipments in the catalog.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the catalog holds no shipments.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn normalize_uppercases_input() {
		assert_eq!(normalize_reference("ref123au"), "REF123AU");
		assert_eq!(normalize_reference("REF123AU"), "REF123AU");
		assert_eq!(normalize_reference(""), "");
	}

	#[test]
	fn lookup_is_exact_after_normalization() {
		let catalog = Catalog::seeded();
		assert!(catalog.lookup("ref123au").is_none());
		assert!(catalog.lookup(&normalize_reference("ref123au")).is_some());
	}

	#[test]
	fn missed_lookup_is_none() {
		let catalog = Catalog::seeded();
		assert!(catalog.lookup("ZZZ000").is_none());
		assert!(catalog.lookup("").is_none());
	}

	#[test]
	fn seeded_catalog_matches_fixture_contract() {
		let catalog = Catalog::seeded();
		assert_eq!(catalog.len(), 3);

		for reference in ["REF789AU", "REF456AU", "REF123AU"] {
			let record = catalog.lookup(reference).expect("seeded record");
			assert_eq!(record.events.len(), 4, "{reference} event count");
			// Estimated delivery is present exactly while not yet delivered.
			assert_eq!(
				record.estimated_delivery.is_some(),
				record.status != "Delivered",
				"{reference} estimated delivery presence"
			);
		}
	}

	#[test]
	fn seeded_events_keep_authored_order() {
		let catalog = Catalog::seeded();
		let record = catalog.lookup("REF123AU").expect("seeded record");
		assert_eq!(record.carrier_name, "Oz Logistics");
		assert_eq!(record.status, "Delivered");
		let last = record.events.last().expect("events");
		assert!(
			last.description
				.ends_with("Delivered to 45 Warehouse Road, Melbourne VIC 3000")
		);
	}

	#[test]
	fn in_transit_record_includes_failed_pickup() {
		let catalog = Catalog::seeded();
		let record = catalog.lookup("REF456AU").expect("seeded record");
		assert_eq!(record.status, "In transit");
		assert_eq!(
			record.estimated_delivery.as_deref(),
			Some("19/10/2024, 08:30 AM")
		);
		assert!(
			record
				.events
				.iter()
				.any(|event| event.description.contains("Pickup failed"))
		);
	}
}

use serde::{Deserialize, Serialize};

/// A single dated entry in a shipment's tracking history.
///
/// Both fields are display strings. Dates are never parsed; the order of
/// events within a record is the order they were authored in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentEvent {
	/// Display timestamp, e.g. `16/10/2024, 08:00 AM`.
	pub date: String,
	/// Free-form narrative text for the event.
	pub description: String,
}

impl ShipmentEvent {
	/// Construct an event from its display timestamp and description.
	pub fn new(date: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			date: date.into(),
			description: description.into(),
		}
	}
}

/// A shipment known to the catalog.
///
/// `status` is an open string set: "Delivered" and "In transit" are the
/// values the seeded data uses, but any other value is valid and renders
/// with a neutral treatment. `estimated_delivery` is present only while a
/// shipment has not yet arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
	/// What the shipment contains.
	pub cargo_type: String,
	/// Destination address.
	pub delivery_address: String,
	/// Carrier handling the shipment.
	pub carrier_name: String,
	/// Current status, open-ended.
	pub status: String,
	/// Estimated delivery timestamp, absent once delivered.
	#[serde(default)]
	pub estimated_delivery: Option<String>,
	/// Tracking history in authored order.
	#[serde(default)]
	pub events: Vec<ShipmentEvent>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn record_serializes_with_stable_field_names() {
		let record = ShipmentRecord {
			cargo_type: "Books".to_string(),
			delivery_address: "1 Example St".to_string(),
			carrier_name: "Post".to_string(),
			status: "Delivered".to_string(),
			estimated_delivery: None,
			events: vec![ShipmentEvent::new("16/10/2024, 07:30 AM", "Picked up")],
		};

		let value = serde_json::to_value(&record).expect("serialize");
		assert_eq!(value["cargo_type"], "Books");
		assert_eq!(value["carrier_name"], "Post");
		assert!(value["estimated_delivery"].is_null());
		assert_eq!(value["events"][0]["date"], "16/10/2024, 07:30 AM");
	}
}

//! Compiled-in fixture shipments.

use indexmap::IndexMap;

use crate::record::{ShipmentEvent, ShipmentRecord};

pub(crate) fn entries() -> IndexMap<String, ShipmentRecord> {
	let mut entries = IndexMap::new();

	entries.insert(
		"REF789AU".to_string(),
		ShipmentRecord {
			cargo_type: "Automotive Accessories".to_string(),
			delivery_address: "1 Logistics Lane, Sydney NSW 2000".to_string(),
			carrier_name: "TransExpress".to_string(),
			status: "Delivered".to_string(),
			estimated_delivery: None,
			events: vec![
				ShipmentEvent::new(
					"16/10/2024, 08:00 AM",
					"Shipment picked up from ACME Distribution Pty Ltd, Brisbane QLD 4000",
				),
				ShipmentEvent::new("16/10/2024, 08:00 PM", "Arrived at TransExpress Sydney Depot"),
				ShipmentEvent::new(
					"17/10/2024, 06:00 AM",
					"Departed TransExpress Sydney Depot for final delivery",
				),
				ShipmentEvent::new(
					"17/10/2024, 09:00 AM",
					"Delivered to Sydney Distribution Centre, 1 Logistics Lane, Sydney NSW 2000",
				),
			],
		},
	);

	entries.insert(
		"REF456AU".to_string(),
		ShipmentRecord {
			cargo_type: "Avgas IBC".to_string(),
			delivery_address: "45 Learjet Lane, Melbourne VIC 3000".to_string(),
			carrier_name: "DG Trans".to_string(),
			status: "In transit".to_string(),
			estimated_delivery: Some("19/10/2024, 08:30 AM".to_string()),
			events: vec![
				ShipmentEvent::new(
					"16/10/2024, 09:00 AM",
					"Pickup failed at ACME Distribution Pty Ltd due to load restraint issue",
				),
				ShipmentEvent::new("16/10/2024, 10:30 AM", "Pickup rescheduled for 17/10/2024"),
				ShipmentEvent::new(
					"17/10/2024, 10:15 AM",
					"Shipment picked up from ACME Distribution Pty Ltd, Brisbane QLD 4000",
				),
				ShipmentEvent::new("17/10/2024, 07:00 PM", "Departed DG Trans Brisbane Depot"),
			],
		},
	);

	entries.insert(
		"REF123AU".to_string(),
		ShipmentRecord {
			cargo_type: "Consumer Electronics".to_string(),
			delivery_address: "45 Warehouse Road, Melbourne VIC 3000".to_string(),
			carrier_name: "Oz Logistics".to_string(),
			status: "Delivered".to_string(),
			estimated_delivery: None,
			events: vec![
				ShipmentEvent::new(
					"16/10/2024, 07:30 AM",
					"Shipment picked up from ACME Distribution Pty Ltd, Brisbane QLD 4000",
				),
				ShipmentEvent::new("18/10/2024, 07:30 AM", "Arrived at Oz Logistics Melbourne Depot"),
				ShipmentEvent::new("18/10/2024, 10:00 AM", "Out for delivery in Melbourne"),
				ShipmentEvent::new(
					"18/10/2024, 01:00 PM",
					"Delivered to 45 Warehouse Road, Melbourne VIC 3000",
				),
			],
		},
	);

	entries
}

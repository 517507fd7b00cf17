//! Load a catalog from a user-supplied TOML file.
//!
//! The file format mirrors the record fields directly:
//!
//! ```toml
//! [shipments.REF900AU]
//! cargo_type = "Pallet of widgets"
//! delivery_address = "10 Example St, Hobart TAS 7000"
//! carrier_name = "Island Freight"
//! status = "In transit"
//! estimated_delivery = "20/10/2024, 02:00 PM"
//!
//! [[shipments.REF900AU.events]]
//! date = "18/10/2024, 09:00 AM"
//! description = "Shipment picked up"
//! ```
//!
//! Keys are normalized to uppercase on load so that a file authored with
//! lowercase references still matches normalized widget input.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Catalog, normalize_reference};
use crate::record::ShipmentRecord;

/// Failures while reading or parsing a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("failed to read catalog file `{path}`")]
	Read {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse catalog file `{path}`")]
	Parse {
		path: String,
		#[source]
		source: toml::de::Error,
	},
	#[error("catalog file `{path}` defines no shipments")]
	Empty { path: String },
	#[error("catalog file `{path}` defines reference `{reference}` more than once")]
	DuplicateReference { path: String, reference: String },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
	#[serde(default)]
	shipments: IndexMap<String, ShipmentRecord>,
}

/// Read and parse a TOML catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
	let display = path.display().to_string();
	let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
		path: display.clone(),
		source,
	})?;

	let file: CatalogFile = toml::from_str(&contents).map_err(|source| CatalogError::Parse {
		path: display.clone(),
		source,
	})?;

	if file.shipments.is_empty() {
		return Err(CatalogError::Empty { path: display });
	}

	let mut entries = IndexMap::with_capacity(file.shipments.len());
	for (reference, record) in file.shipments {
		let normalized = normalize_reference(&reference);
		if entries.insert(normalized.clone(), record).is_some() {
			// Two keys differing only in case collapse to one normalized
			// reference; reject rather than silently dropping a record.
			return Err(CatalogError::DuplicateReference {
				path: display,
				reference: normalized,
			});
		}
	}

	Ok(Catalog::new(entries))
}

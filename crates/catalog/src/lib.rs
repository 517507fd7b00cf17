//! Shipment records and the reference-number catalog backing `waybill`.
//!
//! The catalog is a read-only, insertion-ordered mapping from reference
//! number to [`ShipmentRecord`]. It is seeded once at startup (either from
//! the compiled-in fixtures or from a user-supplied TOML file) and never
//! mutated afterwards.

mod catalog;
mod loader;
mod record;
mod seed;

pub use catalog::{Catalog, normalize_reference};
pub use loader::{CatalogError, load_catalog};
pub use record::{ShipmentEvent, ShipmentRecord};

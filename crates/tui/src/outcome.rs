use waybill_catalog::ShipmentRecord;

/// What the tracker reports back to the binary when the user exits.
#[derive(Debug, Clone)]
pub struct TrackingOutcome {
	/// The normalized reference in the search field at exit.
	pub reference: String,
	/// Whether a search had been executed for that reference.
	pub searched: bool,
	/// The record displayed at exit, if the last search matched.
	pub record: Option<ShipmentRecord>,
}

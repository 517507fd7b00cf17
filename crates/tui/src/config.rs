/// Textual labels rendered around the tracker widget.
///
/// Everything here is presentation copy; the defaults match the original
/// tracker wording and can be overridden from configuration.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Placeholder shown in the empty search field.
	pub placeholder: String,
	/// Hint line shown while no search has run.
	pub hint: String,
	/// Title of the details panel.
	pub details_title: String,
	/// Title of the event-history table.
	pub history_title: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			placeholder: "Enter reference number (e.g. REF123AU)".to_string(),
			hint: "Type a reference number and press Enter to track.".to_string(),
			details_title: "Shipment details".to_string(),
			history_title: "Tracking history".to_string(),
		}
	}
}

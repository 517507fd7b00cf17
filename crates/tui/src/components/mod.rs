//! UI building blocks shared across rendering and state modules.

/// Shipment details panel.
pub mod details;
/// Inline not-found notice.
pub mod notice;
/// Search prompt rendering.
pub mod prompt;
/// Table row construction for the event history.
pub mod rows;
/// Scrollbar for viewports.
pub mod scrollbar;
/// Table rendering and configuration.
pub mod tables;

pub use details::{details_height, render_details};
pub use notice::render_notice;
pub use prompt::{InputContext, render_input};
pub use rows::build_event_rows;
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use tables::{TableSpec, render_table};

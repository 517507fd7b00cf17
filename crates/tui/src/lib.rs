//! Interactive terminal tracker widget for `waybill`.
//!
//! This crate contains the full TUI application: the input widget, state
//! management, key/mouse handling, the rendering pipeline, and the theme
//! definitions that style it.

mod actions;
pub mod components;
mod config;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use config::UiLabels;
pub use input::ReferenceInput;
pub use outcome::TrackingOutcome;
pub use runtime::run;
pub use state::{App, ViewState};
pub use style::{StyleConfig, Theme, by_name, default_theme, theme_names};
